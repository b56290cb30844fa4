//! dispatch/direct.rs
//! Buffer + offset entry points. Regions are bounds-checked against the buffer;
//! an out-of-range request returns `REJECTED_SENTINEL` without touching either side.
use crate::addressing::{DestinationRef, DirectBuffer, DirectBufferMut, SourceRef};
use crate::codec::{self, OperationDescriptor};
use crate::types::IntoSentinel;

/// Compress `src[src_offset..src_offset + src_len]` into at most `dst_capacity` bytes
/// starting at `dst[dst_offset]`.
pub fn compress_direct<S, D>(
    src: &S,
    src_offset: usize,
    src_len: usize,
    dst: &mut D,
    dst_offset: usize,
    dst_capacity: usize,
) -> i32
where
    S: DirectBuffer + ?Sized,
    D: DirectBufferMut + ?Sized,
{
    let op = OperationDescriptor::new(
        SourceRef::direct(src, src_offset),
        src_len,
        DestinationRef::direct(dst, dst_offset),
        dst_capacity,
    );
    codec::compress(op).into_sentinel()
}

/// Same as [`compress_direct`] with the HC encoder at `level`.
pub fn compress_direct_hc<S, D>(
    src: &S,
    src_offset: usize,
    src_len: usize,
    dst: &mut D,
    dst_offset: usize,
    dst_capacity: usize,
    level: i32,
) -> i32
where
    S: DirectBuffer + ?Sized,
    D: DirectBufferMut + ?Sized,
{
    let op = OperationDescriptor::new(
        SourceRef::direct(src, src_offset),
        src_len,
        DestinationRef::direct(dst, dst_offset),
        dst_capacity,
    )
    .with_level(level);
    codec::compress_hc(op).into_sentinel()
}

/// Decompress `compressed_size` bytes at `src[src_offset]` into at most `dst_capacity`
/// bytes starting at `dst[dst_offset]`.
pub fn decompress_direct<S, D>(
    src: &S,
    src_offset: usize,
    compressed_size: usize,
    dst: &mut D,
    dst_offset: usize,
    dst_capacity: usize,
) -> i32
where
    S: DirectBuffer + ?Sized,
    D: DirectBufferMut + ?Sized,
{
    let op = OperationDescriptor::new(
        SourceRef::direct(src, src_offset),
        compressed_size,
        DestinationRef::direct(dst, dst_offset),
        dst_capacity,
    );
    codec::decompress(op).into_sentinel()
}

/// Forwards to [`decompress_direct`] with the same arguments.
#[inline]
pub fn decompress_direct_hc<S, D>(
    src: &S,
    src_offset: usize,
    compressed_size: usize,
    dst: &mut D,
    dst_offset: usize,
    dst_capacity: usize,
) -> i32
where
    S: DirectBuffer + ?Sized,
    D: DirectBufferMut + ?Sized,
{
    decompress_direct(src, src_offset, compressed_size, dst, dst_offset, dst_capacity)
}
