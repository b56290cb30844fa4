//! codec/mod.rs
//! Block codec invocation over resolved regions.
//!
//! - liblz4 is treated as an opaque primitive; its return codes flow back unmodified.
//! - Results are tagged (`CodecResult`) until the sentinel boundary in `dispatch`.

pub(crate) mod ffi;
pub mod invoker;
pub mod types;

pub use invoker::*;
pub use types::*;
