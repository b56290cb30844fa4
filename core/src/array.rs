//! array.rs
//! Owned-array entry points.
//!
//! A byte array cannot carry the decompressed size on its own, so the output of
//! `compress`/`compress_hc` is `[original_len: u32 LE][lz4 block]`, the same layout as
//! `lz4_flex::block::compress_prepend_size`. Each call goes through a scratch buffer
//! and the same invoker as the direct entry points.
use crate::addressing::{DestinationRef, SourceRef};
use crate::codec::{self, CodecError, CodecResult, OperationDescriptor};
use crate::constants::{LZ4_MAX_EXPANSION, LZ4_MAX_INPUT_SIZE, SIZE_PREFIX_LEN};

fn compress_with<F>(input: &[u8], invoke: F) -> Result<Vec<u8>, CodecError>
where
    F: FnOnce(OperationDescriptor<'_>) -> CodecResult,
{
    let out_of_range = || CodecError::LengthOutOfRange {
        length: input.len(),
        limit: LZ4_MAX_INPUT_SIZE,
    };
    let bound = codec::compress_bound(input.len()).ok_or_else(out_of_range)?;
    let declared = u32::try_from(input.len()).map_err(|_| out_of_range())?;

    let mut scratch = vec![0u8; SIZE_PREFIX_LEN + bound];
    scratch[..SIZE_PREFIX_LEN].copy_from_slice(&declared.to_le_bytes());

    let written = invoke(OperationDescriptor::new(
        SourceRef::direct(input, 0),
        input.len(),
        DestinationRef::direct(&mut scratch, SIZE_PREFIX_LEN),
        bound,
    ))?;

    scratch.truncate(SIZE_PREFIX_LEN + written);
    Ok(scratch)
}

/// Compress a whole array with the standard encoder.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    compress_with(input, codec::compress)
}

/// Compress a whole array with the HC encoder.
pub fn compress_hc(input: &[u8], level: i32) -> Result<Vec<u8>, CodecError> {
    compress_with(input, |op| codec::compress_hc(op.with_level(level)))
}

/// Inverse of [`compress`] / [`compress_hc`].
///
/// The decoded length must match the prefix exactly; a shorter payload is reported as
/// `SizeMismatch` rather than returned truncated. The prefix is untrusted: it is capped
/// by what `block` could possibly expand to before the output is allocated.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let Some((prefix, block)) = input.split_first_chunk::<SIZE_PREFIX_LEN>() else {
        return Err(CodecError::MissingSizePrefix { len: input.len() });
    };
    let declared = u32::from_le_bytes(*prefix) as usize;
    let limit = LZ4_MAX_INPUT_SIZE.min(block.len().saturating_mul(LZ4_MAX_EXPANSION));
    if declared > limit {
        return Err(CodecError::DeclaredSizeTooLarge { declared, limit });
    }

    let mut out = vec![0u8; declared];
    let written = codec::decompress(OperationDescriptor::new(
        SourceRef::direct(block, 0),
        block.len(),
        DestinationRef::direct(&mut out, 0),
        declared,
    ))?;

    if written != declared {
        return Err(CodecError::SizeMismatch { declared, actual: written });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_holds_original_length() {
        let data = vec![7u8; 300];
        let packed = compress(&data).unwrap();
        assert_eq!(&packed[..4], &300u32.to_le_bytes());
        assert!(packed.len() < data.len());
    }

    #[test]
    fn empty_array_round_trips() {
        let packed = compress(&[]).unwrap();
        assert_eq!(&packed[..4], &[0, 0, 0, 0]);
        assert_eq!(decompress(&packed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn hc_array_round_trips() {
        let data: Vec<u8> = b"carrot-carrot-carrot-".iter().cycle().take(2048).copied().collect();
        let packed = compress_hc(&data, 12).unwrap();
        assert_eq!(decompress(&packed).unwrap(), data);
    }

    #[test]
    fn short_input_is_missing_prefix() {
        assert_eq!(decompress(&[1, 2]), Err(CodecError::MissingSizePrefix { len: 2 }));
    }

    #[test]
    fn oversized_prefix_is_rejected_before_allocating() {
        let mut bogus = u32::MAX.to_le_bytes().to_vec();
        bogus.push(0);
        assert!(matches!(decompress(&bogus), Err(CodecError::DeclaredSizeTooLarge { .. })));
    }

    #[test]
    fn implausible_prefix_is_rejected_before_allocating() {
        let mut bogus = 1_000_000u32.to_le_bytes().to_vec();
        bogus.extend_from_slice(&[0x10, b'x', 0, 0]);
        assert_eq!(
            decompress(&bogus),
            Err(CodecError::DeclaredSizeTooLarge { declared: 1_000_000, limit: 4 * 255 })
        );

        let empty_block = 1u32.to_le_bytes();
        assert_eq!(
            decompress(&empty_block),
            Err(CodecError::DeclaredSizeTooLarge { declared: 1, limit: 0 })
        );
    }

    #[test]
    fn highly_repetitive_block_stays_under_expansion_cap() {
        let data = vec![0u8; 1 << 20];
        let packed = compress(&data).unwrap();
        assert!(data.len() <= (packed.len() - SIZE_PREFIX_LEN) * LZ4_MAX_EXPANSION);
        assert_eq!(decompress(&packed).unwrap(), data);
    }

    #[test]
    fn understated_prefix_fails_in_codec() {
        let mut packed = compress(&[42u8; 64]).unwrap();
        packed[..4].copy_from_slice(&10u32.to_le_bytes());
        assert!(matches!(decompress(&packed), Err(CodecError::Decompress { .. })));
    }

    #[test]
    fn overstated_prefix_is_size_mismatch() {
        let mut packed = compress(&[42u8; 64]).unwrap();
        packed[..4].copy_from_slice(&100u32.to_le_bytes());
        assert_eq!(
            decompress(&packed),
            Err(CodecError::SizeMismatch { declared: 100, actual: 64 })
        );
    }
}
