//! ffi.rs
//! Python surface of the block binding.
//!
//! - Buffer arguments take any object exporting the buffer protocol with `B` items
//!   (`bytes`, `bytearray`, `memoryview`, numpy `uint8`, mmap).
//! - Integer-returning functions never raise for codec failures: the result is the
//!   boundary sentinel from `directlz4_core::dispatch`.
//! - The GIL is released while liblz4 runs.
use std::slice;

use pyo3::buffer::PyBuffer;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;
use tracing::debug;

use directlz4_core::array;
use directlz4_core::codec::{self, CodecError};
use directlz4_core::constants::{
    LZ4HC_CLEVEL_DEFAULT, LZ4HC_CLEVEL_MAX, LZ4HC_CLEVEL_MIN, LZ4HC_CLEVEL_OPT_MIN, REJECTED_SENTINEL,
};
use directlz4_core::dispatch;

use crate::window::Window;

/// # Safety
/// `w` must lie inside `buf`'s contiguous export and nobody may write to it while the
/// slice lives.
unsafe fn view<'a>(_buf: &'a PyBuffer<u8>, w: Window) -> &'a [u8] {
    if w.len == 0 {
        return &[];
    }
    // SAFETY: the export is held by `buf` and `w` was checked against it.
    unsafe { slice::from_raw_parts(w.start as *const u8, w.len) }
}

/// # Safety
/// As [`view`], plus `buf` must be writable and `w` not aliased by any other live slice.
#[allow(clippy::mut_from_ref)]
unsafe fn view_mut<'a>(_buf: &'a PyBuffer<u8>, w: Window) -> &'a mut [u8] {
    if w.len == 0 {
        return &mut [];
    }
    // SAFETY: see above.
    unsafe { slice::from_raw_parts_mut(w.start as *mut u8, w.len) }
}

fn window(buf: &PyBuffer<u8>, offset: usize, len: usize) -> Option<Window> {
    Window::within(buf.buf_ptr() as usize, buf.len_bytes(), offset, len)
}

/// Carve the requested windows out of two buffer handles and run `f` on them without
/// the GIL. Each window reaches the core as a whole slice at offset 0.
///
/// Rejected with `REJECTED_SENTINEL`: non-contiguous handles, a read-only destination,
/// windows outside their buffer, overlapping windows.
fn with_windows<F>(
    py: Python<'_>,
    src: &PyBuffer<u8>,
    (offset, length): (usize, usize),
    dst: &PyBuffer<u8>,
    (dst_offset, dst_capacity): (usize, usize),
    f: F,
) -> i32
where
    F: FnOnce(&[u8], &mut [u8]) -> i32 + Send,
{
    if !src.is_c_contiguous() || !dst.is_c_contiguous() {
        debug!("buffer is not C-contiguous");
        return REJECTED_SENTINEL;
    }
    if dst.readonly() {
        debug!("destination buffer is read-only");
        return REJECTED_SENTINEL;
    }
    let Some(s) = window(src, offset, length) else {
        debug!(offset, length, capacity = src.len_bytes(), "source window out of bounds");
        return REJECTED_SENTINEL;
    };
    let Some(d) = window(dst, dst_offset, dst_capacity) else {
        debug!(
            offset = dst_offset,
            length = dst_capacity,
            capacity = dst.len_bytes(),
            "destination window out of bounds"
        );
        return REJECTED_SENTINEL;
    };
    if s.overlaps(&d) {
        debug!(src = ?s, dst = ?d, "source and destination windows overlap");
        return REJECTED_SENTINEL;
    }

    // SAFETY: both windows lie inside contiguous exports held until this function returns;
    // the destination is writable and disjoint from the source. Concurrent mutation from
    // other Python threads is the caller's obligation.
    let (src, dst) = unsafe { (view(src, s), view_mut(dst, d)) };
    py.allow_threads(|| f(src, dst))
}

fn codec_err(e: CodecError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// -----------------------------------------------------------------------------
// Buffer + offset
// -----------------------------------------------------------------------------

#[pyfunction]
fn compress_direct(
    py: Python<'_>,
    src: PyBuffer<u8>,
    offset: usize,
    length: usize,
    dst: PyBuffer<u8>,
    dst_offset: usize,
    dst_capacity: usize,
) -> i32 {
    with_windows(py, &src, (offset, length), &dst, (dst_offset, dst_capacity), |s, d| {
        dispatch::compress_direct(s, 0, s.len(), d, 0, d.len())
    })
}

#[pyfunction]
#[allow(clippy::too_many_arguments)]
fn compress_direct_hc(
    py: Python<'_>,
    src: PyBuffer<u8>,
    offset: usize,
    length: usize,
    dst: PyBuffer<u8>,
    dst_offset: usize,
    dst_capacity: usize,
    level: i32,
) -> i32 {
    with_windows(py, &src, (offset, length), &dst, (dst_offset, dst_capacity), |s, d| {
        dispatch::compress_direct_hc(s, 0, s.len(), d, 0, d.len(), level)
    })
}

#[pyfunction]
fn decompress_direct(
    py: Python<'_>,
    src: PyBuffer<u8>,
    offset: usize,
    compressed_size: usize,
    dst: PyBuffer<u8>,
    dst_offset: usize,
    dst_capacity: usize,
) -> i32 {
    with_windows(py, &src, (offset, compressed_size), &dst, (dst_offset, dst_capacity), |s, d| {
        dispatch::decompress_direct(s, 0, s.len(), d, 0, d.len())
    })
}

#[pyfunction]
fn decompress_direct_hc(
    py: Python<'_>,
    src: PyBuffer<u8>,
    offset: usize,
    compressed_size: usize,
    dst: PyBuffer<u8>,
    dst_offset: usize,
    dst_capacity: usize,
) -> i32 {
    decompress_direct(py, src, offset, compressed_size, dst, dst_offset, dst_capacity)
}

// -----------------------------------------------------------------------------
// Raw address
// The Python caller hands over bare addresses (ctypes, mmap, foreign allocators)
// and owns their validity, exactly as with ctypes.memmove.
// -----------------------------------------------------------------------------

#[pyfunction]
fn compress_address(py: Python<'_>, src: usize, length: usize, dst: usize, dst_capacity: usize) -> i32 {
    // SAFETY: caller contract, see section comment.
    py.allow_threads(|| unsafe { dispatch::compress_address(src, length, dst, dst_capacity) })
}

#[pyfunction]
fn compress_address_hc(
    py: Python<'_>,
    src: usize,
    length: usize,
    dst: usize,
    dst_capacity: usize,
    level: i32,
) -> i32 {
    // SAFETY: caller contract, see section comment.
    py.allow_threads(|| unsafe { dispatch::compress_address_hc(src, length, dst, dst_capacity, level) })
}

#[pyfunction]
fn decompress_address(py: Python<'_>, src: usize, compressed_size: usize, dst: usize, dst_capacity: usize) -> i32 {
    // SAFETY: caller contract, see section comment.
    py.allow_threads(|| unsafe { dispatch::decompress_address(src, compressed_size, dst, dst_capacity) })
}

#[pyfunction]
fn decompress_address_hc(py: Python<'_>, src: usize, compressed_size: usize, dst: usize, dst_capacity: usize) -> i32 {
    decompress_address(py, src, compressed_size, dst, dst_capacity)
}

// -----------------------------------------------------------------------------
// Owned arrays (size-prefixed). No sentinel channel here: failures raise ValueError.
// -----------------------------------------------------------------------------

#[pyfunction]
#[pyo3(name = "compress")]
fn compress_array<'py>(py: Python<'py>, data: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
    let packed = py.allow_threads(|| array::compress(data)).map_err(codec_err)?;
    Ok(PyBytes::new_bound(py, &packed))
}

#[pyfunction]
#[pyo3(name = "compress_hc", signature = (data, level = LZ4HC_CLEVEL_DEFAULT))]
fn compress_array_hc<'py>(py: Python<'py>, data: &[u8], level: i32) -> PyResult<Bound<'py, PyBytes>> {
    let packed = py.allow_threads(|| array::compress_hc(data, level)).map_err(codec_err)?;
    Ok(PyBytes::new_bound(py, &packed))
}

#[pyfunction]
#[pyo3(name = "decompress")]
fn decompress_array<'py>(py: Python<'py>, data: &[u8]) -> PyResult<Bound<'py, PyBytes>> {
    let plain = py.allow_threads(|| array::decompress(data)).map_err(codec_err)?;
    Ok(PyBytes::new_bound(py, &plain))
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

/// Worst-case compressed size, `None` when `length` is beyond what liblz4 accepts.
#[pyfunction]
fn compress_bound(length: usize) -> Option<usize> {
    codec::compress_bound(length)
}

#[pyfunction]
fn version() -> i32 {
    codec::version_number()
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compress_direct, m)?)?;
    m.add_function(wrap_pyfunction!(compress_direct_hc, m)?)?;
    m.add_function(wrap_pyfunction!(decompress_direct, m)?)?;
    m.add_function(wrap_pyfunction!(decompress_direct_hc, m)?)?;

    m.add_function(wrap_pyfunction!(compress_address, m)?)?;
    m.add_function(wrap_pyfunction!(compress_address_hc, m)?)?;
    m.add_function(wrap_pyfunction!(decompress_address, m)?)?;
    m.add_function(wrap_pyfunction!(decompress_address_hc, m)?)?;

    m.add_function(wrap_pyfunction!(compress_array, m)?)?;
    m.add_function(wrap_pyfunction!(compress_array_hc, m)?)?;
    m.add_function(wrap_pyfunction!(decompress_array, m)?)?;

    m.add_function(wrap_pyfunction!(compress_bound, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;

    m.add("REJECTED_SENTINEL", REJECTED_SENTINEL)?;
    m.add("LZ4HC_CLEVEL_MIN", LZ4HC_CLEVEL_MIN)?;
    m.add("LZ4HC_CLEVEL_DEFAULT", LZ4HC_CLEVEL_DEFAULT)?;
    m.add("LZ4HC_CLEVEL_OPT_MIN", LZ4HC_CLEVEL_OPT_MIN)?;
    m.add("LZ4HC_CLEVEL_MAX", LZ4HC_CLEVEL_MAX)?;
    Ok(())
}
