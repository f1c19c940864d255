//! Scalar byte-swap primitives and the scalar shuffle driver.
//!
//! `swap_bytes()` on the integer types compiles to the hardware byte-reverse
//! instruction (`bswap`/`rev`) where one exists and to the equivalent
//! shift/mask sequence otherwise, so the scalar path needs no hand-rolled
//! bit arithmetic. Floats route through their bit representation; a swapped
//! float is just transported bits, never interpreted as a numeric value.

use zerocopy::{FromBytes, Immutable, IntoBytes};

mod sealed {
    pub trait Sealed {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f64 {}
}

/// A fixed-width element whose byte order can be reversed in place.
///
/// Implemented for the 16/32/64-bit integer and float primitives. Sealed:
/// the vector drivers are only instantiated for these widths.
pub trait SwapElement: sealed::Sealed + Copy + FromBytes + IntoBytes + Immutable {
    /// This element with its byte order reversed.
    fn byte_swapped(self) -> Self;
}

macro_rules! impl_swap_int {
    ($($ty:ty),*) => {$(
        impl SwapElement for $ty {
            #[inline]
            fn byte_swapped(self) -> Self {
                self.swap_bytes()
            }
        }
    )*};
}

impl_swap_int!(i16, u16, i32, u32, i64, u64);

impl SwapElement for f32 {
    #[inline]
    fn byte_swapped(self) -> Self {
        f32::from_bits(self.to_bits().swap_bytes())
    }
}

impl SwapElement for f64 {
    #[inline]
    fn byte_swapped(self) -> Self {
        f64::from_bits(self.to_bits().swap_bytes())
    }
}

/// Reverse the bytes of one element at `addr`.
///
/// Unaligned-safe: the byte-level entry points accept buffers at any
/// address, so element loads and stores never assume alignment.
///
/// # Safety
///
/// `addr` must be valid for reads and writes of `size_of::<T>()` bytes.
#[inline]
pub(crate) unsafe fn swap_element_at<T: SwapElement>(addr: *mut u8) {
    unsafe {
        let p = addr.cast::<T>();
        p.write_unaligned(p.read_unaligned().byte_swapped());
    }
}

/// Number of head bytes to swap one element at a time before the vector
/// phases start, so the bulk of the buffer is processed at `vect`-aligned
/// addresses.
///
/// When the base address is not element-aligned, no number of whole elements
/// reaches a vector boundary; the head is then empty and the vector phases
/// run on unaligned addresses, which the unaligned load/store forms handle.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
#[inline]
pub(crate) fn head_span(base: *const u8, len: usize, width: usize, vect: usize) -> usize {
    let misalign = (vect - (base as usize % vect)) % vect;
    if misalign % width == 0 {
        misalign.min(len)
    } else {
        0
    }
}

/// Scalar shuffle driver: one element at a time, no vector unit.
///
/// This is both the portable fallback and the reference implementation the
/// vector paths are tested against.
pub(crate) fn shuffle_scalar<T: SwapElement>(bytes: &mut [u8]) {
    let width = size_of::<T>();
    debug_assert_eq!(bytes.len() % width, 0);

    let base = bytes.as_mut_ptr();
    let mut i = 0;
    while i < bytes.len() {
        // SAFETY: i + width <= len because len is a multiple of width.
        unsafe { swap_element_at::<T>(base.add(i)) };
        i += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_swapped_values() {
        assert_eq!(0x1234u16.byte_swapped(), 0x3412);
        assert_eq!(0x01020304u32.byte_swapped(), 0x04030201);
        assert_eq!(0x0102030405060708u64.byte_swapped(), 0x0807060504030201);
        assert_eq!((-2i16).byte_swapped(), 0xFEFFu16 as i16);
    }

    #[test]
    fn test_byte_swapped_extremes() {
        // Zero and all-ones are fixed points of byte reversal.
        assert_eq!(0u16.byte_swapped(), 0);
        assert_eq!(u16::MAX.byte_swapped(), u16::MAX);
        assert_eq!(0u64.byte_swapped(), 0);
        assert_eq!(u64::MAX.byte_swapped(), u64::MAX);
    }

    #[test]
    fn test_float_swap_is_bit_transport() {
        let v = 1.5f32;
        let swapped = v.byte_swapped();
        assert_eq!(swapped.to_bits(), v.to_bits().swap_bytes());
        assert_eq!(swapped.byte_swapped().to_bits(), v.to_bits());
    }

    #[test]
    fn test_shuffle_scalar_u16() {
        let mut buf = [0x34u8, 0x12, 0xCD, 0xAB];
        shuffle_scalar::<u16>(&mut buf);
        assert_eq!(buf, [0x12, 0x34, 0xAB, 0xCD]);
    }

    #[test]
    fn test_shuffle_scalar_u32() {
        let mut buf = [0x04u8, 0x03, 0x02, 0x01];
        shuffle_scalar::<u32>(&mut buf);
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_shuffle_scalar_u64() {
        let mut buf: Vec<u8> = (0..16u8).collect();
        shuffle_scalar::<u64>(&mut buf);
        assert_eq!(
            buf,
            [7, 6, 5, 4, 3, 2, 1, 0, 15, 14, 13, 12, 11, 10, 9, 8]
        );
    }

    #[test]
    fn test_shuffle_scalar_empty() {
        let mut buf: [u8; 0] = [];
        shuffle_scalar::<u16>(&mut buf);
        assert_eq!(buf, []);
    }
}
