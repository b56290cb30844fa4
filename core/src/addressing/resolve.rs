//! addressing/resolve.rs
//! Reference + length -> pointer.
use std::marker::PhantomData;

use crate::addressing::types::{AddressError, DestinationRef, Region, RegionMut, SourceRef};

#[inline]
fn window_end(offset: usize, length: usize, capacity: usize) -> Result<usize, AddressError> {
    match offset.checked_add(length) {
        Some(end) if end <= capacity => Ok(end),
        _ => Err(AddressError::OutOfBounds { offset, length, capacity }),
    }
}

/// Resolve the source side of a call.
///
/// - `Direct`: `offset + length` must fit in the buffer.
/// - `Raw`: the address is taken as-is; validity was promised by `RawAddress::new`.
pub fn resolve_source<'a>(source: &SourceRef<'a>, length: usize) -> Result<Region<'a>, AddressError> {
    match *source {
        SourceRef::Direct { buffer, offset } => {
            let end = window_end(offset, length, buffer.len())?;
            Ok(Region {
                ptr: buffer[offset..end].as_ptr(),
                len: length,
                _lifetime: PhantomData,
            })
        }
        SourceRef::Raw(address) => Ok(Region {
            ptr: address.get() as *const u8,
            len: length,
            _lifetime: PhantomData,
        }),
    }
}

/// Resolve the destination side of a call. `capacity` is the most the codec may write.
pub fn resolve_destination<'b>(
    destination: &'b mut DestinationRef<'_>,
    capacity: usize,
) -> Result<RegionMut<'b>, AddressError> {
    match destination {
        DestinationRef::Direct { buffer, offset } => {
            let offset = *offset;
            let end = window_end(offset, capacity, buffer.len())?;
            Ok(RegionMut {
                ptr: buffer[offset..end].as_mut_ptr(),
                capacity,
                _lifetime: PhantomData,
            })
        }
        DestinationRef::Raw(address) => Ok(RegionMut {
            ptr: address.get() as *mut u8,
            capacity,
            _lifetime: PhantomData,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressing::RawAddress;

    #[test]
    fn direct_source_adds_offset_to_base() {
        let buf = [0u8; 32];
        let r = resolve_source(&SourceRef::direct(&buf, 8), 16).unwrap();
        assert_eq!(r.address(), buf.as_ptr() as usize + 8);
        assert_eq!(r.len(), 16);
    }

    #[test]
    fn direct_source_allows_empty_window_at_end() {
        let buf = [0u8; 4];
        let r = resolve_source(&SourceRef::direct(&buf, 4), 0).unwrap();
        assert!(r.is_empty());
    }

    #[test]
    fn direct_source_rejects_window_past_capacity() {
        let buf = [0u8; 8];
        let err = resolve_source(&SourceRef::direct(&buf, 4), 5).unwrap_err();
        assert_eq!(err, AddressError::OutOfBounds { offset: 4, length: 5, capacity: 8 });
    }

    #[test]
    fn direct_source_rejects_overflowing_offset() {
        let buf = [0u8; 8];
        let err = resolve_source(&SourceRef::direct(&buf, usize::MAX), 2).unwrap_err();
        assert!(matches!(err, AddressError::OutOfBounds { .. }));
    }

    #[test]
    fn direct_destination_checks_capacity() {
        let mut buf = vec![0u8; 10];
        let mut dst = DestinationRef::direct(&mut buf, 6);
        assert!(resolve_destination(&mut dst, 4).is_ok());
        assert!(resolve_destination(&mut dst, 5).is_err());
    }

    #[test]
    fn raw_address_passes_through_unchanged() {
        let addr = unsafe { RawAddress::new(0x1000) };
        let r = resolve_source(&SourceRef::raw(addr), 1 << 20).unwrap();
        assert_eq!(r.address(), 0x1000);

        let mut dst = DestinationRef::raw(addr);
        let w = resolve_destination(&mut dst, 7).unwrap();
        assert_eq!(w.address(), 0x1000);
        assert_eq!(w.capacity(), 7);
    }
}
