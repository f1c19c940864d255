//! aarch64 NEON vector swap primitive and shuffle driver.
//!
//! NEON has dedicated reverse-within-lane instructions
//! (`vrev16q`/`vrev32q`/`vrev64q`), so there is no permutation mask table
//! here; the width match below folds away at monomorphization. NEON also
//! has no aligned/unaligned load split, but the driver keeps the same
//! four-phase shape as the x86 paths.

use std::arch::aarch64::*;

use crate::scalar::{SwapElement, head_span, swap_element_at};

/// Reverse element bytes within one 128-bit register at `addr`.
///
/// # Safety
///
/// `addr` must be valid for 16 bytes of reads and writes.
#[inline]
unsafe fn swap_vec_neon(addr: *mut u8, width: usize) {
    unsafe {
        let v = vld1q_u8(addr);
        let v = match width {
            2 => vrev16q_u8(v),
            4 => vrev32q_u8(v),
            8 => vrev64q_u8(v),
            // Unreachable: drivers are only instantiated for widths 2/4/8.
            _ => v,
        };
        vst1q_u8(addr, v);
    }
}

/// 128-bit shuffle driver (NEON).
///
/// # Safety
///
/// `bytes.len()` must be a multiple of `size_of::<T>()`.
pub(crate) unsafe fn shuffle_neon<T: SwapElement>(bytes: &mut [u8]) {
    const VECT: usize = 16;
    const BLOCK: usize = 8 * VECT;
    let width = size_of::<T>();
    debug_assert_eq!(bytes.len() % width, 0);

    let len = bytes.len();
    let base = bytes.as_mut_ptr();
    let mut i = 0;

    // 1. Head: scalar until the cursor is vector-aligned.
    let head = head_span(base, len, width, VECT);
    while i < head {
        unsafe { swap_element_at::<T>(base.add(i)) };
        i += width;
    }

    // 2. Main body: vectors unrolled by 8.
    while i + BLOCK <= len {
        unsafe {
            swap_vec_neon(base.add(i), width);
            swap_vec_neon(base.add(i + VECT), width);
            swap_vec_neon(base.add(i + 2 * VECT), width);
            swap_vec_neon(base.add(i + 3 * VECT), width);
            swap_vec_neon(base.add(i + 4 * VECT), width);
            swap_vec_neon(base.add(i + 5 * VECT), width);
            swap_vec_neon(base.add(i + 6 * VECT), width);
            swap_vec_neon(base.add(i + 7 * VECT), width);
        }
        i += BLOCK;
    }

    // 3. Tail A: vectors without unrolling.
    while i + VECT <= len {
        unsafe { swap_vec_neon(base.add(i), width) };
        i += VECT;
    }

    // 4. Tail B: scalar until end.
    while i < len {
        unsafe { swap_element_at::<T>(base.add(i)) };
        i += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::shuffle_scalar;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn test_neon_matches_scalar() {
        // Element counts straddling the head, unroll, and tail boundaries
        // (128-bit block = 128 bytes).
        for &elems in &[0usize, 1, 2, 3, 7, 8, 15, 16, 63, 64, 65, 1000] {
            for width in [2usize, 4, 8] {
                let mut expected = pattern(elems * width);
                let mut actual = expected.clone();
                match width {
                    2 => {
                        shuffle_scalar::<u16>(&mut expected);
                        unsafe { shuffle_neon::<u16>(&mut actual) };
                    },
                    4 => {
                        shuffle_scalar::<u32>(&mut expected);
                        unsafe { shuffle_neon::<u32>(&mut actual) };
                    },
                    _ => {
                        shuffle_scalar::<u64>(&mut expected);
                        unsafe { shuffle_neon::<u64>(&mut actual) };
                    },
                }
                assert_eq!(actual, expected, "mismatch for {elems} elements of width {width}");
            }
        }
    }

    #[test]
    fn test_unaligned_base_matches_scalar() {
        let mut backing = pattern(1 + 64 * 2);
        let mut expected = backing.clone();
        shuffle_scalar::<u16>(&mut expected[1..]);
        unsafe { shuffle_neon::<u16>(&mut backing[1..]) };
        assert_eq!(backing, expected);
    }
}
