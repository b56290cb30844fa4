//! dispatch/address.rs
//! Raw-address entry points for zero-copy integration with foreign allocators.
//!
//! Nothing is validated. These functions are `unsafe` and each call site is an audit point.
use crate::addressing::{DestinationRef, RawAddress, SourceRef};
use crate::codec::{self, OperationDescriptor};
use crate::types::IntoSentinel;

/// Raw-address form of [`compress_direct`](super::compress_direct).
///
/// # Safety
/// `src` must be readable for `src_len` bytes and `dst` writable for `dst_capacity` bytes
/// for the duration of the call, the two regions must not overlap, and no other thread
/// may mutate them meanwhile.
pub unsafe fn compress_address(src: usize, src_len: usize, dst: usize, dst_capacity: usize) -> i32 {
    // SAFETY: forwarded caller contract.
    let (src, dst) = unsafe { (RawAddress::new(src), RawAddress::new(dst)) };
    let op = OperationDescriptor::new(SourceRef::raw(src), src_len, DestinationRef::raw(dst), dst_capacity);
    codec::compress(op).into_sentinel()
}

/// Raw-address form of [`compress_direct_hc`](super::compress_direct_hc).
///
/// # Safety
/// Same contract as [`compress_address`].
pub unsafe fn compress_address_hc(
    src: usize,
    src_len: usize,
    dst: usize,
    dst_capacity: usize,
    level: i32,
) -> i32 {
    // SAFETY: forwarded caller contract.
    let (src, dst) = unsafe { (RawAddress::new(src), RawAddress::new(dst)) };
    let op = OperationDescriptor::new(SourceRef::raw(src), src_len, DestinationRef::raw(dst), dst_capacity)
        .with_level(level);
    codec::compress_hc(op).into_sentinel()
}

/// Raw-address form of [`decompress_direct`](super::decompress_direct).
///
/// # Safety
/// `src` must be readable for `compressed_size` bytes and `dst` writable for
/// `dst_capacity` bytes, under the same conditions as [`compress_address`].
pub unsafe fn decompress_address(src: usize, compressed_size: usize, dst: usize, dst_capacity: usize) -> i32 {
    // SAFETY: forwarded caller contract.
    let (src, dst) = unsafe { (RawAddress::new(src), RawAddress::new(dst)) };
    let op = OperationDescriptor::new(SourceRef::raw(src), compressed_size, DestinationRef::raw(dst), dst_capacity);
    codec::decompress(op).into_sentinel()
}

/// Forwards to [`decompress_address`] with the same arguments.
///
/// # Safety
/// Same contract as [`decompress_address`].
#[inline]
pub unsafe fn decompress_address_hc(src: usize, compressed_size: usize, dst: usize, dst_capacity: usize) -> i32 {
    // SAFETY: forwarded caller contract.
    unsafe { decompress_address(src, compressed_size, dst, dst_capacity) }
}
