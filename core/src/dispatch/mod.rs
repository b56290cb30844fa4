//! dispatch/mod.rs
//! The sentinel boundary: eight entry points, two addressing styles.
//!
//! Every function here returns a plain `i32`:
//! - positive: bytes written to the destination
//! - `0` from a decompress entry point: empty payload written
//! - `0` from a compress entry point, or any negative value: failure, destination
//!   contents are unspecified and must not be read
//!
//! For equal resolved regions the `*_direct` and `*_address` forms produce identical
//! return codes and identical destination bytes: both build the same
//! `OperationDescriptor` shape and go through the same invoker.

pub mod address;
pub mod direct;

pub use address::*;
pub use direct::*;
