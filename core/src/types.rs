//! types.rs
//! Conversion from the tagged internal result to the boundary integer.
use crate::codec::CodecResult;
use crate::constants::REJECTED_SENTINEL;

/// Collapse a tagged result into the single integer a sentinel-style caller receives.
///
/// - `Ok(n)` becomes `n` (always representable: liblz4 never reports more than `c_int::MAX`).
/// - `Err(e)` becomes `e.sentinel()`: liblz4's own code, or `REJECTED_SENTINEL`.
pub trait IntoSentinel {
    fn into_sentinel(self) -> i32;
}

impl IntoSentinel for CodecResult {
    #[inline]
    fn into_sentinel(self) -> i32 {
        match self {
            Ok(written) => i32::try_from(written).unwrap_or(REJECTED_SENTINEL),
            Err(e) => e.sentinel(),
        }
    }
}
