/// Stable codec IDs (u8) as stored alongside compressed blocks.
pub mod codec_ids {
    pub const NONE: u8  = 0x00;
    pub const LZ4: u8   = 0x01;
    pub const LZ4HC: u8 = 0x02;
}

/// Default levels per codec.
pub const DEFAULT_LEVEL_LZ4: i32 = 1; // stored only, the fast encoder has no levels
pub const DEFAULT_LEVEL_LZ4HC: i32 = crate::constants::LZ4HC_CLEVEL_DEFAULT;

/// Environment keys read by `CodecConfig::from_env`.
pub const ENV_COMPRESSION_THRESHOLD: &str = "DIRECTLZ4_COMPRESSION_THRESHOLD";
pub const ENV_LEVEL: &str = "DIRECTLZ4_LEVEL";
