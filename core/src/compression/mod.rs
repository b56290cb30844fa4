//! compression/mod.rs
//! Stateful codecs built on the block binding.
//!
//! Notes:
//! - Registry resolves stable codec IDs to implementations.
//! - Codecs carry a compression threshold, a level, and telemetry counters.
//! - Tuning comes from `CodecConfig` (defaults or environment).

pub mod codecs;
pub mod config;
pub mod constants;
pub mod registry;
pub mod types;

pub use config::*;
pub use constants::*;
pub use registry::*;
pub use types::*;
