//! codecs/lz4.rs
//! Standard LZ4 block codec.
use crate::addressing::{DestinationRef, SourceRef};
use crate::codec::{self, OperationDescriptor};
use crate::compression::codecs::CodecState;
use crate::compression::config::CodecConfig;
use crate::compression::constants::DEFAULT_LEVEL_LZ4;
use crate::compression::types::{Codec, CompressionCodec, CompressionError};
use crate::dispatch;
use crate::telemetry::CodecStats;

/// LZ4 fast encoder. The level is stored for parity with the HC codec but not used.
#[derive(Debug)]
pub struct Lz4Codec {
    state: CodecState,
}

impl Lz4Codec {
    pub fn new() -> Self {
        Self::with_config(&CodecConfig {
            level: DEFAULT_LEVEL_LZ4,
            ..CodecConfig::default()
        })
    }

    pub fn with_config(config: &CodecConfig) -> Self {
        Self { state: CodecState::new("lz4", config) }
    }
}

impl Default for Lz4Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for Lz4Codec {
    fn codec_type(&self) -> CompressionCodec {
        CompressionCodec::Lz4
    }

    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CompressionError> {
        let capacity = dst.len();
        let op = OperationDescriptor::new(
            SourceRef::direct(src, 0),
            src.len(),
            DestinationRef::direct(dst, 0),
            capacity,
        );
        self.state.finish_compress(src.len(), codec::compress(op))
    }

    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CompressionError> {
        let capacity = dst.len();
        let op = OperationDescriptor::new(
            SourceRef::direct(src, 0),
            src.len(),
            DestinationRef::direct(dst, 0),
            capacity,
        );
        self.state.finish_decompress(codec::decompress(op))
    }

    unsafe fn compress_raw(&self, src: usize, src_len: usize, dst: usize, dst_capacity: usize) -> i32 {
        // SAFETY: forwarded caller contract.
        let code = unsafe { dispatch::compress_address(src, src_len, dst, dst_capacity) };
        self.state.record_compress_code(src_len, code)
    }

    unsafe fn decompress_raw(&self, src: usize, compressed_size: usize, dst: usize, dst_capacity: usize) -> i32 {
        // SAFETY: forwarded caller contract.
        let code = unsafe { dispatch::decompress_address(src, compressed_size, dst, dst_capacity) };
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
