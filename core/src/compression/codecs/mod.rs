//! compression/codecs/mod.rs
//! Stateful LZ4 codecs over the block binding.
//!
//! Notes:
//! - Both codecs share `CodecState`: tuning knobs plus telemetry counters.
//! - Slice forms report tagged errors; address forms keep the boundary sentinel.

pub mod lz4;
pub mod lz4hc;

pub use lz4::*;
pub use lz4hc::*;

use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

use crate::codec::CodecResult;
use crate::compression::config::CodecConfig;
use crate::compression::types::CompressionError;
use crate::telemetry::{compression_ratio, CodecCounters, CodecStats};

#[derive(Debug)]
pub(crate) struct CodecState {
    name: &'static str,
    threshold: AtomicUsize,
    level: AtomicI32,
    counters: CodecCounters,
}

impl CodecState {
    pub(crate) fn new(name: &'static str, config: &CodecConfig) -> Self {
        Self {
            name,
            threshold: AtomicUsize::new(config.compression_threshold),
            level: AtomicI32::new(config.level),
            counters: CodecCounters::new(),
        }
    }

    pub(crate) fn finish_compress(&self, src_len: usize, result: CodecResult) -> Result<usize, CompressionError> {
        match result {
            Ok(written) => {
                self.counters.add_compress(src_len, written);
                Ok(written)
            }
            Err(source) => {
                self.counters.add_failure();
                Err(CompressionError::Codec { codec: self.name, source })
            }
        }
    }

    pub(crate) fn finish_decompress(&self, result: CodecResult) -> Result<usize, CompressionError> {
        match result {
            Ok(written) => {
                self.counters.add_decompress(written);
                Ok(written)
            }
            Err(source) => {
                self.counters.add_failure();
                Err(CompressionError::Codec { codec: self.name, source })
            }
        }
    }

    pub(crate) fn record_compress_code(&self, src_len: usize, code: i32) -> i32 {
        if code > 0 {
            self.counters.add_compress(src_len, code as usize);
        } else {
            self.counters.add_failure();
        }
        code
    }

    pub(crate) fn record_decompress_code(&self, code: i32) -> i32 {
        if code >= 0 {
            self.counters.add_decompress(code as usize);
        } else {
            self.counters.add_failure();
        }
        code
    }

    pub(crate) fn threshold(&self) -> usize {
        self.threshold.load(Ordering::Relaxed)
    }

    pub(crate) fn set_threshold(&self, threshold: usize) {
        self.threshold.store(threshold, Ordering::Relaxed);
    }

    pub(crate) fn level(&self) -> i32 {
        self.level.load(Ordering::Relaxed)
    }

    pub(crate) fn set_level(&self, level: i32) {
        self.level.store(level, Ordering::Relaxed);
    }

    pub(crate) fn avg_compression_ratio(&self) -> f64 {
        compression_ratio(self.counters.bytes_original(), self.counters.bytes_compressed())
    }

    pub(crate) fn total_processed(&self) -> u64 {
        self.counters.bytes_original()
    }

    pub(crate) fn stats(&self) -> CodecStats {
        CodecStats::from(self.name, &self.counters)
    }
}
