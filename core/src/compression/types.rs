//! compression/types.rs
//! Stable codec identifiers, the codec trait, and its error type.
use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use crate::codec::CodecError;
use crate::compression::constants::codec_ids;
use crate::telemetry::CodecStats;

/// FFI-safe enum for compression codec identifiers.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
pub enum CompressionCodec {
    None  = codec_ids::NONE,
    Lz4   = codec_ids::LZ4,
    Lz4Hc = codec_ids::LZ4HC,
}

impl CompressionCodec {
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn verify(raw: u8) -> Result<Self, CompressionError> {
        Self::try_from_primitive(raw).map_err(|_| CompressionError::UnsupportedCodec { codec_id: raw })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("unsupported compression codec: 0x{codec_id:02x}")]
    UnsupportedCodec { codec_id: u8 },

    #[error("codec {codec} failed: {source}")]
    Codec {
        codec: &'static str,
        #[source]
        source: CodecError,
    },
}

/// A block codec with per-instance tuning and statistics.
///
/// Implementations are shared between threads; every method takes `&self`.
pub trait Codec: Send + Sync {
    fn codec_type(&self) -> CompressionCodec;

    /// Compress all of `src` into `dst`, returning the compressed length.
    fn compress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CompressionError>;

    /// Decompress all of `src` into `dst`, returning the decompressed length.
    fn decompress(&self, src: &[u8], dst: &mut [u8]) -> Result<usize, CompressionError>;

    /// Address form of [`Codec::compress`], returning the boundary sentinel.
    ///
    /// # Safety
    /// Same contract as [`crate::dispatch::compress_address`].
    unsafe fn compress_raw(&self, src: usize, src_len: usize, dst: usize, dst_capacity: usize) -> i32;

    /// Address form of [`Codec::decompress`], returning the boundary sentinel.
    ///
    /// # Safety
    /// Same contract as [`crate::dispatch::decompress_address`].
    unsafe fn decompress_raw(&self, src: usize, compressed_size: usize, dst: usize, dst_capacity: usize) -> i32;

    /// Inputs shorter than this are stored uncompressed by callers.
    fn compression_threshold(&self) -> usize;
    fn set_compression_threshold(&self, threshold: usize);

    fn level(&self) -> i32;
    fn set_level(&self, level: i32);

    /// Total original bytes / total compressed bytes; 1.0 before the first compression.
    fn avg_compression_ratio(&self) -> f64;

    /// Total original bytes fed to successful compressions.
    fn total_processed(&self) -> u64;

    fn stats(&self) -> CodecStats;

    fn should_compress(&self, len: usize) -> bool {
        len >= self.compression_threshold()
    }
}
