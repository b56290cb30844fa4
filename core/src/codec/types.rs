//! codec/types.rs
//! Operation descriptor and the tagged result used inside the binding.
use crate::addressing::{AddressError, DestinationRef, SourceRef};
use crate::constants::REJECTED_SENTINEL;

/// Everything one codec call needs. Built, used and dropped within a single call.
#[derive(Debug)]
pub struct OperationDescriptor<'a> {
    pub source: SourceRef<'a>,
    pub source_length: usize,
    pub destination: DestinationRef<'a>,
    pub destination_capacity: usize,
    /// HC effort level. Ignored by the standard compressor and by decompression.
    pub level: Option<i32>,
}

impl<'a> OperationDescriptor<'a> {
    pub fn new(
        source: SourceRef<'a>,
        source_length: usize,
        destination: DestinationRef<'a>,
        destination_capacity: usize,
    ) -> Self {
        Self {
            source,
            source_length,
            destination,
            destination_capacity,
            level: None,
        }
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }
}

/// Bytes written to the destination, or why nothing usable was written.
pub type CodecResult = Result<usize, CodecError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// liblz4 could not fit the compressed block into the destination.
    #[error("compressed block does not fit destination capacity {capacity} (code {code})")]
    Compress { code: i32, capacity: usize },

    /// Corrupt input, or the payload is larger than the destination capacity.
    #[error("decompression failed: corrupt input or capacity {capacity} too small (code {code})")]
    Decompress { code: i32, capacity: usize },

    #[error(transparent)]
    Region(#[from] AddressError),

    #[error("length {length} exceeds codec limit {limit}")]
    LengthOutOfRange { length: usize, limit: usize },

    #[error("input of {len} bytes is shorter than the size prefix")]
    MissingSizePrefix { len: usize },

    #[error("declared size {declared} exceeds codec limit {limit}")]
    DeclaredSizeTooLarge { declared: usize, limit: usize },

    #[error("decoded {actual} bytes but size prefix declared {declared}")]
    SizeMismatch { declared: usize, actual: usize },
}

impl CodecError {
    /// The integer a sentinel-style caller sees for this failure.
    /// Codec failures keep liblz4's own code; binding-side rejections use `REJECTED_SENTINEL`.
    pub fn sentinel(&self) -> i32 {
        match self {
            CodecError::Compress { code, .. } | CodecError::Decompress { code, .. } => *code,
            _ => REJECTED_SENTINEL,
        }
    }
}
