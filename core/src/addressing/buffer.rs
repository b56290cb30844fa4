//! addressing/buffer.rs
//! Direct buffers: caller-owned memory that can be viewed without copying.

use bytes::{Bytes, BytesMut};

/// Readable caller-owned memory.
///
/// `direct_bytes().len()` is the buffer's declared capacity; offsets are checked against it.
pub trait DirectBuffer {
    fn direct_bytes(&self) -> &[u8];

    #[inline]
    fn capacity(&self) -> usize {
        self.direct_bytes().len()
    }
}

/// Writable caller-owned memory.
pub trait DirectBufferMut: DirectBuffer {
    fn direct_bytes_mut(&mut self) -> &mut [u8];
}

impl DirectBuffer for [u8] {
    #[inline]
    fn direct_bytes(&self) -> &[u8] {
        self
    }
}

impl DirectBufferMut for [u8] {
    #[inline]
    fn direct_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl<const N: usize> DirectBuffer for [u8; N] {
    #[inline]
    fn direct_bytes(&self) -> &[u8] {
        self
    }
}

impl<const N: usize> DirectBufferMut for [u8; N] {
    #[inline]
    fn direct_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

impl DirectBuffer for Vec<u8> {
    #[inline]
    fn direct_bytes(&self) -> &[u8] {
        self.as_slice()
    }
}

impl DirectBufferMut for Vec<u8> {
    #[inline]
    fn direct_bytes_mut(&mut self) -> &mut [u8] {
        self.as_mut_slice()
    }
}

impl DirectBuffer for Box<[u8]> {
    #[inline]
    fn direct_bytes(&self) -> &[u8] {
        self
    }
}

impl DirectBufferMut for Box<[u8]> {
    #[inline]
    fn direct_bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

// Bytes is shared and immutable: usable as a source only.
impl DirectBuffer for Bytes {
    #[inline]
    fn direct_bytes(&self) -> &[u8] {
        self.as_ref()
    }
}

/// Only the initialized part (`len()`) is addressable; spare capacity is not.
impl DirectBuffer for BytesMut {
    #[inline]
    fn direct_bytes(&self) -> &[u8] {
        self.as_ref()
    }
}

impl DirectBufferMut for BytesMut {
    #[inline]
    fn direct_bytes_mut(&mut self) -> &mut [u8] {
        self.as_mut()
    }
}
