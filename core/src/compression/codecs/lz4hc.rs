//! codecs/lz4hc.rs
//! LZ4 high-compression codec. Compresses at the codec's current level.
use crate::addressing::{DestinationRef, SourceRef};
use crate::codec::{self, OperationDescriptor};
use crate::compression::codecs::CodecState;
use crate::compression::config::CodecConfig;
use crate::compression::types::{Codec, CompressionCodec, CompressionError};
use crate::dispatch;
use crate::telemetry::CodecStats;

#[derive(Debug)]
pub struct Lz4HcCodec {
    state: CodecState,
}

impl Lz4HcCodec {
    pub fn new() -> Self {
        Self::with_config(&CodecConfig::default())
    }

    pub fn with_config(config: &CodecConfig) -> Self {
        Self { state: CodecState::new("lz4hc", config) }
    }
}

impl Default for Lz4HcCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for Lz4HcCodec {
    fn codec_type(&self) -> CompressionCodec {
        CompressionCodec::Lz4Hc
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CompressionError> {
        let capacity = dst.len();
        let op = OperationDescriptor::new(
            SourceRef::direct(src, 0),
            src.len(),
            DestinationRef::direct(dst, 0),
            capacity,
        )
        .with_level(self.state.level());
        self.state.finish_compress(src.len(), codec::compress_hc(op))
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CompressionError> {
        let capacity = dst.len();
        let op = OperationDescriptor::new(
            SourceRef::direct(src, 0),
            src.len(),
            DestinationRef::direct(dst, 0),
            capacity,
        );
        self.state.finish_decompress(codec::decompress_hc(op))
    }

    unsafe fn compress_raw(&self, src: usize, src_len: usize, dst: usize, dst_capacity: usize) -> i32 {
        // SAFETY: forwarded caller contract.
        let code = unsafe { dispatch::compress_address_hc(src, src_len, dst, dst_capacity, self.state.level()) };
        self.state.record_compress_code(src_len, code)
    }

    unsafe fn decompress_raw(&self, src: usize, compressed_size: usize, dst: usize, dst_capacity: usize) -> i32 {
        // SAFETY: forwarded caller contract.
        let code = unsafe { dispatch::decompress_address_hc(src, compressed_size, dst, dst_capacity) };
        self.state.record_decompress_code(code)
    }

    fn compression_threshold(&self) -> usize {
        self.state.threshold()
    }

    fn set_compression_threshold(&self, threshold: usize) {
        self.state.set_threshold(threshold);
    }

    fn level(&self) -> i32 {
        self.state.level()
    }

    fn set_level(&self, level: i32) {
        self.state.set_level(level);
    }

    fn avg_compression_ratio(&self) -> f64 {
        self.state.avg_compression_ratio()
    }

    fn total_processed(&self) -> u64 {
        self.state.total_processed()
    }

    fn stats(&self) -> CodecStats {
        self.state.stats()
    }
}
