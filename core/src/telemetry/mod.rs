//! telemetry/mod.rs
//! Codec telemetry: live counters and immutable snapshots.
//!
//! Notes:
//! - Counters are atomics so a shared codec can record through `&self`.
//! - Snapshots are plain data and serialize with serde.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
