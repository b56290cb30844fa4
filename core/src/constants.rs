//! constants.rs
//! liblz4 limits and sentinels shared by every layer.

/// Largest source length liblz4 accepts for a single block (`LZ4_MAX_INPUT_SIZE`).
pub const LZ4_MAX_INPUT_SIZE: usize = 0x7E00_0000;

/// HC level range as documented by liblz4 (`lz4hc.h`).
/// Levels below the minimum fall back to the default, levels above the max are clamped.
pub const LZ4HC_CLEVEL_MIN: i32 = 3;
pub const LZ4HC_CLEVEL_DEFAULT: i32 = 9;
pub const LZ4HC_CLEVEL_OPT_MIN: i32 = 10;
pub const LZ4HC_CLEVEL_MAX: i32 = 12;

/// Sentinel returned when the binding rejects a request before reaching the codec
/// (region outside its buffer, length not representable as `c_int`, unusable handle).
pub const REJECTED_SENTINEL: i32 = -1;

/// Size of the little-endian original-length prefix used by the array entry points.
pub const SIZE_PREFIX_LEN: usize = 4;

/// Upper bound on decoded/encoded size for one LZ4 block: a match can grow by at most
/// 255 bytes per input byte.
pub const LZ4_MAX_EXPANSION: usize = 255;

/// Inputs smaller than this are not worth compressing (stateful codec layer default).
pub const DEFAULT_COMPRESSION_THRESHOLD: usize = 100;
