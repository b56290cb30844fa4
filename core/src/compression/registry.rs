//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{Lz4Codec, Lz4HcCodec};
use crate::compression::config::CodecConfig;
use crate::compression::constants::{DEFAULT_LEVEL_LZ4, DEFAULT_LEVEL_LZ4HC};
use crate::compression::types::{Codec, CompressionCodec, CompressionError};

pub struct CodecInfo {
    pub name: &'static str,
    pub default_level: i32,
}

pub fn resolve(codec_id: u8) -> Result<CodecInfo, CompressionError> {
    match CompressionCodec::verify(codec_id)? {
        CompressionCodec::None => Ok(CodecInfo { name: "none", default_level: 0 }),
        CompressionCodec::Lz4 => Ok(CodecInfo { name: "lz4", default_level: DEFAULT_LEVEL_LZ4 }),
        CompressionCodec::Lz4Hc => Ok(CodecInfo { name: "lz4hc", default_level: DEFAULT_LEVEL_LZ4HC }),
    }
}

/// Build a codec for `codec_id`. `None` means "store uncompressed" and yields no codec.
pub fn create_codec(codec_id: u8, config: &CodecConfig) -> Result<Option<Box<dyn Codec>>, CompressionError> {
    match CompressionCodec::verify(codec_id)? {
        CompressionCodec::None => Ok(None),
        CompressionCodec::Lz4 => Ok(Some(Box::new(Lz4Codec::with_config(config)))),
        CompressionCodec::Lz4Hc => Ok(Some(Box::new(Lz4HcCodec::with_config(config)))),
    }
}
