//! telemetry/counters.rs
//! Mutable counters kept by a stateful codec.
//!
//! Summary: Collects call counts and byte counts for compress/decompress.
//! Converted into an immutable `CodecStats` on demand.
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters; a codec is shared across threads and updated through `&self`.
#[derive(Default, Debug)]
pub struct CodecCounters {
    compress_calls: AtomicU64,
    decompress_calls: AtomicU64,
    failures: AtomicU64,
    bytes_original: AtomicU64,
    bytes_compressed: AtomicU64,
    bytes_decompressed: AtomicU64,
}

impl CodecCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful compression.
    ///
    /// - `original_len`: source bytes consumed
    /// - `compressed_len`: bytes written to the destination
    pub fn add_compress(&self, original_len: usize, compressed_len: usize) {
        self.compress_calls.fetch_add(1, Ordering::Relaxed);
        self.bytes_original.fetch_add(original_len as u64, Ordering::Relaxed);
        self.bytes_compressed.fetch_add(compressed_len as u64, Ordering::Relaxed);
    }

    /// Record one successful decompression of `decompressed_len` bytes.
    pub fn add_decompress(&self, decompressed_len: usize) {
        self.decompress_calls.fetch_add(1, Ordering::Relaxed);
        self.bytes_decompressed.fetch_add(decompressed_len as u64, Ordering::Relaxed);
    }

    pub fn add_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn compress_calls(&self) -> u64 {
        self.compress_calls.load(Ordering::Relaxed)
    }

    pub fn decompress_calls(&self) -> u64 {
        self.decompress_calls.load(Ordering::Relaxed)
    }

    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub fn bytes_original(&self) -> u64 {
        self.bytes_original.load(Ordering::Relaxed)
    }

    pub fn bytes_compressed(&self) -> u64 {
        self.bytes_compressed.load(Ordering::Relaxed)
    }

    pub fn bytes_decompressed(&self) -> u64 {
        self.bytes_decompressed.load(Ordering::Relaxed)
    }
}
