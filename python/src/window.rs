//! window.rs
//! Address windows inside exported Python buffers.
//!
//! A call only touches `[offset, offset + len)` of each buffer, so bounds and aliasing
//! are decided per window: one `bytearray` may serve as both source and destination
//! as long as the two windows are disjoint.

/// `[start, start + len)` in process address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Window {
    pub start: usize,
    pub len: usize,
}

impl Window {
    /// Window `offset..offset + len` of a buffer exported at `base` with `buf_len` bytes.
    /// `None` when the window does not fit.
    pub(crate) fn within(base: usize, buf_len: usize, offset: usize, len: usize) -> Option<Self> {
        let end = offset.checked_add(len)?;
        if end > buf_len {
            return None;
        }
        Some(Self { start: base + offset, len })
    }

    #[inline]
    pub(crate) fn end(&self) -> usize {
        self.start + self.len
    }

    /// Empty windows never overlap anything.
    pub(crate) fn overlaps(&self, other: &Window) -> bool {
        self.len != 0 && other.len != 0 && self.start < other.end() && other.start < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_must_fit_buffer() {
        assert_eq!(Window::within(0x1000, 64, 16, 48), Some(Window { start: 0x1010, len: 48 }));
        assert_eq!(Window::within(0x1000, 64, 16, 49), None);
        assert_eq!(Window::within(0x1000, 64, usize::MAX, 2), None);
        assert_eq!(Window::within(0x1000, 0, 0, 0), Some(Window { start: 0x1000, len: 0 }));
    }

    #[test]
    fn disjoint_windows_of_one_buffer_do_not_overlap() {
        let base = 0x8000;
        let src = Window::within(base, 4096, 0, 1000).unwrap();
        let dst = Window::within(base, 4096, 2048, 2048).unwrap();
        assert!(!src.overlaps(&dst));
        assert!(!dst.overlaps(&src));

        let touching = Window::within(base, 4096, 1000, 10).unwrap();
        assert!(!src.overlaps(&touching));
    }

    #[test]
    fn intersecting_windows_overlap() {
        let base = 0x8000;
        let src = Window::within(base, 4096, 0, 1000).unwrap();
        let dst = Window::within(base, 4096, 999, 100).unwrap();
        assert!(src.overlaps(&dst));

        let inner = Window::within(base, 4096, 10, 10).unwrap();
        assert!(src.overlaps(&inner));
    }

    #[test]
    fn empty_window_overlaps_nothing() {
        let src = Window::within(0x8000, 4096, 0, 1000).unwrap();
        let empty = Window::within(0x8000, 4096, 500, 0).unwrap();
        assert!(!src.overlaps(&empty));
    }
}
