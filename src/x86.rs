//! x86_64 vector swap primitives and shuffle drivers.
//!
//! All three width classes are built on the same byte-shuffle idea: a
//! per-lane permutation mask reverses the bytes of each element, and
//! `pshufb`/`vpshufb` applies it to a whole register at once. The 256- and
//! 512-bit masks are the 128-bit pattern broadcast across lanes, so no lane
//! ever reverses across a 128-bit boundary.
//!
//! Load/store uses the unaligned instruction forms throughout. The head
//! phase of each driver still aligns the cursor when the buffer's base
//! address permits, so the bulk of a typical buffer runs on aligned
//! addresses where unaligned forms cost nothing extra.

use std::arch::x86_64::*;

use crate::scalar::{SwapElement, head_span, swap_element_at};

/// 128-bit permutation mask reversing bytes within each `width`-byte group.
///
/// # Safety
///
/// Caller must ensure SSSE3 is available.
#[target_feature(enable = "ssse3")]
#[inline]
unsafe fn mask_128(width: usize) -> __m128i {
    unsafe {
        match width {
            2 => _mm_setr_epi8(1, 0, 3, 2, 5, 4, 7, 6, 9, 8, 11, 10, 13, 12, 15, 14),
            4 => _mm_setr_epi8(3, 2, 1, 0, 7, 6, 5, 4, 11, 10, 9, 8, 15, 14, 13, 12),
            8 => _mm_setr_epi8(7, 6, 5, 4, 3, 2, 1, 0, 15, 14, 13, 12, 11, 10, 9, 8),
            // Unreachable: drivers are only instantiated for widths 2/4/8.
            _ => _mm_setzero_si128(),
        }
    }
}

/// Reverse element bytes within one 128-bit register at `addr`.
///
/// # Safety
///
/// Caller must ensure SSSE3 is available and that `addr` is valid for
/// 16 bytes of reads and writes.
#[target_feature(enable = "ssse3")]
#[inline]
unsafe fn swap_vec128(addr: *mut u8, mask: __m128i) {
    unsafe {
        let v = _mm_loadu_si128(addr as *const __m128i);
        _mm_storeu_si128(addr as *mut __m128i, _mm_shuffle_epi8(v, mask));
    }
}

/// Reverse element bytes within one 256-bit register at `addr`.
///
/// # Safety
///
/// Caller must ensure AVX2 is available and that `addr` is valid for
/// 32 bytes of reads and writes.
#[target_feature(enable = "avx2")]
#[inline]
unsafe fn swap_vec256(addr: *mut u8, mask: __m256i) {
    unsafe {
        let v = _mm256_loadu_si256(addr as *const __m256i);
        _mm256_storeu_si256(addr as *mut __m256i, _mm256_shuffle_epi8(v, mask));
    }
}

/// Reverse element bytes within one 512-bit register at `addr`.
///
/// # Safety
///
/// Caller must ensure AVX-512BW is available and that `addr` is valid for
/// 64 bytes of reads and writes.
#[target_feature(enable = "avx512bw")]
#[inline]
unsafe fn swap_vec512(addr: *mut u8, mask: __m512i) {
    unsafe {
        let v = _mm512_loadu_si512(addr as *const _);
        _mm512_storeu_si512(addr as *mut _, _mm512_shuffle_epi8(v, mask));
    }
}

/// 128-bit shuffle driver (SSSE3 `pshufb`).
///
/// # Safety
///
/// Caller must ensure SSSE3 is available. `bytes.len()` must be a multiple
/// of `size_of::<T>()`.
#[target_feature(enable = "ssse3")]
pub(crate) unsafe fn shuffle_ssse3<T: SwapElement>(bytes: &mut [u8]) {
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

    let mask = unsafe { mask_128(width) };

    // 2. Main body: vectors unrolled by 8.
    while i + BLOCK <= len {
        unsafe {
            swap_vec128(base.add(i), mask);
            swap_vec128(base.add(i + VECT), mask);
            swap_vec128(base.add(i + 2 * VECT), mask);
            swap_vec128(base.add(i + 3 * VECT), mask);
            swap_vec128(base.add(i + 4 * VECT), mask);
            swap_vec128(base.add(i + 5 * VECT), mask);
            swap_vec128(base.add(i + 6 * VECT), mask);
            swap_vec128(base.add(i + 7 * VECT), mask);
        }
        i += BLOCK;
    }

    // 3. Tail A: vectors without unrolling.
    while i + VECT <= len {
        unsafe { swap_vec128(base.add(i), mask) };
        i += VECT;
    }

    // 4. Tail B: scalar until end.
    while i < len {
        unsafe { swap_element_at::<T>(base.add(i)) };
        i += width;
    }
}

/// 256-bit shuffle driver (AVX2 `vpshufb`).
///
/// # Safety
///
/// Caller must ensure AVX2 is available. `bytes.len()` must be a multiple
/// of `size_of::<T>()`.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn shuffle_avx2<T: SwapElement>(bytes: &mut [u8]) {
    const VECT: usize = 32;
    const BLOCK: usize = 8 * VECT;
    let width = size_of::<T>();
    debug_assert_eq!(bytes.len() % width, 0);

    let len = bytes.len();
    let base = bytes.as_mut_ptr();
    let mut i = 0;

    let head = head_span(base, len, width, VECT);
    while i < head {
        unsafe { swap_element_at::<T>(base.add(i)) };
        i += width;
    }

    let mask = unsafe { _mm256_broadcastsi128_si256(mask_128(width)) };

    while i + BLOCK <= len {
        unsafe {
            swap_vec256(base.add(i), mask);
            swap_vec256(base.add(i + VECT), mask);
            swap_vec256(base.add(i + 2 * VECT), mask);
            swap_vec256(base.add(i + 3 * VECT), mask);
            swap_vec256(base.add(i + 4 * VECT), mask);
            swap_vec256(base.add(i + 5 * VECT), mask);
            swap_vec256(base.add(i + 6 * VECT), mask);
            swap_vec256(base.add(i + 7 * VECT), mask);
        }
        i += BLOCK;
    }

    while i + VECT <= len {
        unsafe { swap_vec256(base.add(i), mask) };
        i += VECT;
    }

    while i < len {
        unsafe { swap_element_at::<T>(base.add(i)) };
        i += width;
    }
}

/// 512-bit shuffle driver (AVX-512BW `vpshufb`).
///
/// # Safety
///
/// Caller must ensure AVX-512BW is available. `bytes.len()` must be a
/// multiple of `size_of::<T>()`.
#[target_feature(enable = "avx512bw")]
pub(crate) unsafe fn shuffle_avx512<T: SwapElement>(bytes: &mut [u8]) {
    const VECT: usize = 64;
    const BLOCK: usize = 8 * VECT;
    let width = size_of::<T>();
    debug_assert_eq!(bytes.len() % width, 0);

    let len = bytes.len();
    let base = bytes.as_mut_ptr();
    let mut i = 0;

    let head = head_span(base, len, width, VECT);
    while i < head {
        unsafe { swap_element_at::<T>(base.add(i)) };
        i += width;
    }

    let mask = unsafe { _mm512_broadcast_i32x4(mask_128(width)) };

    while i + BLOCK <= len {
        unsafe {
            swap_vec512(base.add(i), mask);
            swap_vec512(base.add(i + VECT), mask);
            swap_vec512(base.add(i + 2 * VECT), mask);
            swap_vec512(base.add(i + 3 * VECT), mask);
            swap_vec512(base.add(i + 4 * VECT), mask);
            swap_vec512(base.add(i + 5 * VECT), mask);
            swap_vec512(base.add(i + 6 * VECT), mask);
            swap_vec512(base.add(i + 7 * VECT), mask);
        }
        i += BLOCK;
    }

    while i + VECT <= len {
        unsafe { swap_vec512(base.add(i), mask) };
        i += VECT;
    }

    while i < len {
        unsafe { swap_element_at::<T>(base.add(i)) };
        i += width;
    }
}
