//! addressing/mod.rs
//! Buffer addressing: turns "this many bytes starting here" into pointers.
//!
//! Two styles are supported and kept syntactically apart:
//! - `Direct`: a caller-owned buffer plus an offset, bounds-checked on resolve.
//! - `Raw`: a bare address wrapped in [`RawAddress`], constructible only in `unsafe`.
//!
//! Resolution is pure pointer arithmetic. Nothing here allocates, copies or frees.

pub mod buffer;
pub mod resolve;
pub mod types;

pub use buffer::*;
pub use resolve::*;
pub use types::*;
