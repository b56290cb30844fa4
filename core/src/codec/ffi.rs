//! codec/ffi.rs
//! Thin calls into liblz4. No policy lives here.
use libc::c_int;
use lz4::liblz4::{
    LZ4_compressBound, LZ4_compress_HC, LZ4_compress_default, LZ4_decompress_safe, LZ4_versionNumber,
};

/// # Safety
/// `src` must be readable for `src_size` bytes and `dst` writable for `dst_capacity` bytes.
#[inline]
pub(crate) unsafe fn compress_default(
    src: *const u8,
    dst: *mut u8,
    src_size: c_int,
    dst_capacity: c_int,
) -> c_int {
    // SAFETY: forwarded caller contract.
    unsafe { LZ4_compress_default(src.cast(), dst.cast(), src_size, dst_capacity) }
}

/// # Safety
/// Same contract as [`compress_default`].
#[inline]
pub(crate) unsafe fn compress_hc(
    src: *const u8,
    dst: *mut u8,
    src_size: c_int,
    dst_capacity: c_int,
    level: c_int,
) -> c_int {
    // SAFETY: forwarded caller contract.
    unsafe { LZ4_compress_HC(src.cast(), dst.cast(), src_size, dst_capacity, level) }
}

/// # Safety
/// `src` must be readable for `compressed_size` bytes and `dst` writable for `dst_capacity` bytes.
#[inline]
pub(crate) unsafe fn decompress_safe(
    src: *const u8,
    dst: *mut u8,
    compressed_size: c_int,
    dst_capacity: c_int,
) -> c_int {
    // SAFETY: forwarded caller contract.
    unsafe { LZ4_decompress_safe(src.cast(), dst.cast(), compressed_size, dst_capacity) }
}

#[inline]
pub(crate) fn compress_bound(src_size: c_int) -> c_int {
    // SAFETY: pure arithmetic in liblz4, no memory access.
    unsafe { LZ4_compressBound(src_size) }
}

#[inline]
pub(crate) fn version_number() -> c_int {
    // SAFETY: returns a compile-time constant.
    unsafe { LZ4_versionNumber() }
}
