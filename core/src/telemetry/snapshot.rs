//! telemetry/snapshot.rs
//!
//! Immutable statistics snapshot of a codec.
//!
//! Design notes:
//! - `compression_ratio` is original / compressed, so higher is better.
//! - Before anything was compressed the ratio is reported as 1.0.
use serde::{Deserialize, Serialize};

use crate::telemetry::counters::CodecCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodecStats {
    pub codec: String,
    pub compress_calls: u64,
    pub decompress_calls: u64,
    pub failures: u64,
    pub bytes_original: u64,
    pub bytes_compressed: u64,
    pub bytes_decompressed: u64,
    pub compression_ratio: f64,
}

impl CodecStats {
    pub fn from(codec: &str, counters: &CodecCounters) -> Self {
        let bytes_original = counters.bytes_original();
        let bytes_compressed = counters.bytes_compressed();

        Self {
            codec: codec.to_owned(),
            compress_calls: counters.compress_calls(),
            decompress_calls: counters.decompress_calls(),
            failures: counters.failures(),
            bytes_original,
            bytes_compressed,
            bytes_decompressed: counters.bytes_decompressed(),
            compression_ratio: compression_ratio(bytes_original, bytes_compressed),
        }
    }
}

pub fn compression_ratio(original: u64, compressed: u64) -> f64 {
    if compressed == 0 {
        1.0
    } else {
        original as f64 / compressed as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_defaults_to_one() {
        assert_eq!(compression_ratio(0, 0), 1.0);
        assert_eq!(compression_ratio(500, 0), 1.0);
    }

    #[test]
    fn snapshot_reads_counters() {
        let c = CodecCounters::new();
        c.add_compress(400, 100);
        c.add_decompress(400);
        c.add_failure();

        let s = CodecStats::from("lz4", &c);
        assert_eq!(s.compress_calls, 1);
        assert_eq!(s.decompress_calls, 1);
        assert_eq!(s.failures, 1);
        assert_eq!(s.compression_ratio, 4.0);
    }
}
