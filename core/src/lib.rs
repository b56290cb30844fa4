//! directlz4-core
//!
//! Zero-copy LZ4 block binding over caller-owned memory.
//! Resolves buffers and raw addresses to pointers, hands them to liblz4,
//! and reports the codec's integer result back.

#![deny(unsafe_op_in_unsafe_fn)]

// Shared and top level
pub mod constants;
pub mod types;

// Binding layers, bottom-up
pub mod addressing;
pub mod codec;
pub mod dispatch;
pub mod array;

// Stateful codecs and their telemetry
pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::addressing::{DirectBuffer, DirectBufferMut, RawAddress};
    pub use crate::codec::{CodecError, CodecResult, OperationDescriptor};
    pub use crate::compression::{Codec, CodecConfig, CompressionCodec, CompressionError};
    pub use crate::constants::{LZ4HC_CLEVEL_DEFAULT, LZ4HC_CLEVEL_MAX, LZ4HC_CLEVEL_MIN, REJECTED_SENTINEL};
    pub use crate::dispatch::*;
    pub use crate::types::IntoSentinel;
}
