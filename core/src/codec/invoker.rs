//! codec/invoker.rs
//! Resolve both sides of a descriptor, call liblz4, tag the result.
//!
//! Capacity is never checked here beyond resolution: liblz4 bounds every write by the
//! capacity it is given and reports overflow through its return code.
use libc::c_int;
use tracing::debug;

use crate::addressing::{resolve_destination, resolve_source, DestinationRef, Region, RegionMut, SourceRef};
use crate::codec::ffi;
use crate::codec::types::{CodecError, CodecResult, OperationDescriptor};
use crate::constants::{LZ4HC_CLEVEL_DEFAULT, LZ4_MAX_INPUT_SIZE};

const C_INT_LIMIT: usize = c_int::MAX as usize;

#[inline]
fn source_len(length: usize) -> Result<c_int, CodecError> {
    c_int::try_from(length).map_err(|_| CodecError::LengthOutOfRange {
        length,
        limit: C_INT_LIMIT,
    })
}

// A capacity above c_int::MAX is still honored: writing less than promised is always safe.
#[inline]
fn capacity(capacity: usize) -> c_int {
    c_int::try_from(capacity).unwrap_or(c_int::MAX)
}

#[inline]
fn compress_outcome(code: c_int, capacity: usize) -> CodecResult {
    if code > 0 {
        Ok(code as usize)
    } else {
        debug!(code, capacity, "lz4 compress failed");
        Err(CodecError::Compress { code, capacity })
    }
}

#[inline]
fn decompress_outcome(code: c_int, capacity: usize) -> CodecResult {
    if code >= 0 {
        Ok(code as usize)
    } else {
        debug!(code, capacity, "lz4 decompress failed");
        Err(CodecError::Decompress { code, capacity })
    }
}

/// Resolve both sides of a descriptor and convert the source length for liblz4.
fn resolve<'b>(
    source: &SourceRef<'b>,
    source_length: usize,
    destination: &'b mut DestinationRef<'_>,
    destination_capacity: usize,
) -> Result<(Region<'b>, RegionMut<'b>, c_int), CodecError> {
    let src = resolve_source(source, source_length)
        .inspect_err(|e| debug!(error = %e, "source region rejected"))?;
    let dst = resolve_destination(destination, destination_capacity)
        .inspect_err(|e| debug!(error = %e, "destination region rejected"))?;
    let src_size = source_len(src.len())?;
    Ok((src, dst, src_size))
}

/// Standard LZ4 block compression.
pub fn compress(op: OperationDescriptor<'_>) -> CodecResult {
    let OperationDescriptor {
        source,
        source_length,
        mut destination,
        destination_capacity,
        ..
    } = op;
    let (src, mut dst, src_size) = resolve(&source, source_length, &mut destination, destination_capacity)?;

    // SAFETY: direct regions were bounds-checked by resolution; raw regions were vouched
    // for by the caller when the `RawAddress` was created.
    let code = unsafe {
        ffi::compress_default(src.as_ptr(), dst.as_mut_ptr(), src_size, capacity(dst.capacity()))
    };
    compress_outcome(code, destination_capacity)
}

/// High-compression LZ4. `level` is handed to liblz4 untouched; a missing level means
/// `LZ4HC_CLEVEL_DEFAULT`.
pub fn compress_hc(op: OperationDescriptor<'_>) -> CodecResult {
    let OperationDescriptor {
        source,
        source_length,
        mut destination,
        destination_capacity,
        level,
    } = op;
    let level = level.unwrap_or(LZ4HC_CLEVEL_DEFAULT);
    let (src, mut dst, src_size) = resolve(&source, source_length, &mut destination, destination_capacity)?;

    // SAFETY: see `compress`.
    let code = unsafe {
        ffi::compress_hc(
            src.as_ptr(),
            dst.as_mut_ptr(),
            src_size,
            capacity(dst.capacity()),
            level,
        )
    };
    compress_outcome(code, destination_capacity)
}

/// Safe LZ4 block decompression.
///
/// A zero-length request (no compressed bytes, no capacity) decodes to nothing. Any other
/// empty block goes to liblz4, which reports it as corrupt.
pub fn decompress(op: OperationDescriptor<'_>) -> CodecResult {
    let OperationDescriptor {
        source,
        source_length,
        mut destination,
        destination_capacity,
        ..
    } = op;
    let (src, mut dst, compressed_size) = resolve(&source, source_length, &mut destination, destination_capacity)?;
    if compressed_size == 0 && destination_capacity == 0 {
        return Ok(0);
    }

    // SAFETY: see `compress`.
    let code = unsafe {
        ffi::decompress_safe(src.as_ptr(), dst.as_mut_ptr(), compressed_size, capacity(dst.capacity()))
    };
    decompress_outcome(code, destination_capacity)
}

/// Decompression has no HC flavor; the effort level only affects the encoder.
#[inline]
pub fn decompress_hc(op: OperationDescriptor<'_>) -> CodecResult {
    decompress(op)
}

/// Worst-case compressed size for `length` input bytes, `None` past `LZ4_MAX_INPUT_SIZE`.
pub fn compress_bound(length: usize) -> Option<usize> {
    if length > LZ4_MAX_INPUT_SIZE {
        return None;
    }
    let bound = ffi::compress_bound(source_len(length).ok()?);
    usize::try_from(bound).ok().filter(|b| *b > 0)
}

/// liblz4 version as `major * 10000 + minor * 100 + release`.
pub fn version_number() -> i32 {
    ffi::version_number()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::AddressError;

    #[test]
    fn bound_covers_incompressible_input() {
        let bound = compress_bound(1000).unwrap();
        assert!(bound > 1000);
        assert!(compress_bound(LZ4_MAX_INPUT_SIZE + 1).is_none());
    }

    #[test]
    fn version_is_at_least_1_9() {
        assert!(version_number() >= 10900);
    }

    #[test]
    fn rejected_source_never_reaches_codec() {
        let src = [0u8; 8];
        let mut dst = [0xAAu8; 64];
        let op = OperationDescriptor::new(
            SourceRef::direct(&src, 4),
            8,
            DestinationRef::direct(&mut dst, 0),
            64,
        );
        let err = compress(op).unwrap_err();
        assert_eq!(
            err,
            CodecError::Region(AddressError::OutOfBounds { offset: 4, length: 8, capacity: 8 })
        );
        assert!(dst.iter().all(|b| *b == 0xAA));
    }

    #[test]
    fn missing_level_uses_default() {
        let src = b"abcabcabcabcabcabcabcabcabcabcabcabc".to_vec();
        let mut a = vec![0u8; 128];
        let mut b = vec![0u8; 128];

        let n1 = compress_hc(OperationDescriptor::new(
            SourceRef::direct(&src, 0),
            src.len(),
            DestinationRef::direct(&mut a, 0),
            128,
        ))
        .unwrap();
        let n2 = compress_hc(
            OperationDescriptor::new(SourceRef::direct(&src, 0), src.len(), DestinationRef::direct(&mut b, 0), 128)
                .with_level(LZ4HC_CLEVEL_DEFAULT),
        )
        .unwrap();
        assert_eq!(a[..n1], b[..n2]);
    }

    #[test]
    fn empty_block_decodes_to_nothing() {
        let src: [u8; 0] = [];
        let mut dst: [u8; 0] = [];
        let op = OperationDescriptor::new(SourceRef::direct(&src, 0), 0, DestinationRef::direct(&mut dst, 0), 0);
        assert_eq!(decompress(op), Ok(0));
    }

    #[test]
    fn empty_block_with_capacity_is_corrupt() {
        let src: [u8; 0] = [];
        let mut dst = [0x5Au8; 16];
        let op = OperationDescriptor::new(SourceRef::direct(&src, 0), 0, DestinationRef::direct(&mut dst, 0), 16);
        assert!(matches!(decompress(op), Err(CodecError::Decompress { code, capacity: 16 }) if code < 0));
        assert!(dst.iter().all(|b| *b == 0x5A));
    }
}
