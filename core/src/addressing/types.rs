//! addressing/types.rs
//! Buffer references and resolved regions.
use std::marker::PhantomData;

use crate::addressing::buffer::{DirectBuffer, DirectBufferMut};

/// A bare memory address supplied by the caller.
///
/// Never validated. Every use of this type is an audit point: it is the only way
/// to reach memory that is not borrowed from a Rust-visible buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawAddress(usize);

impl RawAddress {
    /// Wrap a numeric address.
    ///
    /// # Safety
    /// For every call this address is used in, the region `[address, address + length)`
    /// (`length` being the source length or destination capacity of that call) must be
    /// live, readable (source) or writable (destination) memory, not mutated by anyone
    /// else while the call runs, and not overlapping the other side of the call.
    #[inline]
    pub const unsafe fn new(address: usize) -> Self {
        Self(address)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Where the source bytes of an operation live.
#[derive(Debug, Clone, Copy)]
pub enum SourceRef<'a> {
    /// Caller-owned direct buffer plus byte offset. Bounds-checked on resolve.
    Direct { buffer: &'a [u8], offset: usize },
    /// Unchecked raw address.
    Raw(RawAddress),
}

impl<'a> SourceRef<'a> {
    #[inline]
    pub fn direct<B: DirectBuffer + ?Sized>(buffer: &'a B, offset: usize) -> Self {
        SourceRef::Direct { buffer: buffer.direct_bytes(), offset }
    }

    #[inline]
    pub fn raw(address: RawAddress) -> Self {
        SourceRef::Raw(address)
    }
}

/// Where the destination bytes of an operation live.
#[derive(Debug)]
pub enum DestinationRef<'a> {
    Direct { buffer: &'a mut [u8], offset: usize },
    Raw(RawAddress),
}

impl<'a> DestinationRef<'a> {
    #[inline]
    pub fn direct<B: DirectBufferMut + ?Sized>(buffer: &'a mut B, offset: usize) -> Self {
        DestinationRef::Direct { buffer: buffer.direct_bytes_mut(), offset }
    }

    #[inline]
    pub fn raw(address: RawAddress) -> Self {
        DestinationRef::Raw(address)
    }
}

/// A resolved, readable region: pointer to the first byte plus its length.
/// Valid for the lifetime `'a` of the reference it was resolved from.
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    pub(crate) ptr: *const u8,
    pub(crate) len: usize,
    pub(crate) _lifetime: PhantomData<&'a [u8]>,
}

impl Region<'_> {
    #[inline]
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn address(&self) -> usize {
        self.ptr as usize
    }
}

/// A resolved, writable region: pointer to the first byte plus its capacity.
#[derive(Debug)]
pub struct RegionMut<'a> {
    pub(crate) ptr: *mut u8,
    pub(crate) capacity: usize,
    pub(crate) _lifetime: PhantomData<&'a mut [u8]>,
}

impl RegionMut<'_> {
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn address(&self) -> usize {
        self.ptr as usize
    }
}

/// Rejections produced by the checked (`Direct`) addressing path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("region at offset {offset} with length {length} exceeds buffer capacity {capacity}")]
    OutOfBounds { offset: usize, length: usize, capacity: usize },
}
