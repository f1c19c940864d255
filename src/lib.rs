//! Byteflip - SIMD-accelerated in-place endianness swap
//!
//! This library reverses the byte order of every fixed-width element (16,
//! 32, or 64 bits) of a binary buffer, in place, using the widest SIMD
//! instruction set the running CPU supports.
//!
//! # Features
//!
//! - **Runtime dispatch**: the CPU is probed once per process and every call
//!   routes through the selected path (AVX-512BW, AVX2, SSSE3, NEON, or
//!   scalar)
//! - **In-place**: no allocation on the hot path; the buffer is mutated
//!   directly
//! - **Self-inverse**: applying the swap twice restores the original buffer
//! - **Any address**: buffers need not be aligned; the kernel aligns its own
//!   cursor where it can and uses unaligned vector accesses where it cannot
//!
//! # Example - Swapping a raw byte buffer
//!
//! ```
//! use byteflip::{ElementKind, swap_in_place};
//!
//! // Two 16-bit values 0x1234 and 0xABCD, little-endian.
//! let mut data = [0x34u8, 0x12, 0xCD, 0xAB];
//! swap_in_place(&mut data, ElementKind::U16)?;
//! assert_eq!(data, [0x12, 0x34, 0xAB, 0xCD]);
//! # Ok::<(), byteflip::Error>(())
//! ```
//!
//! # Example - Swapping a typed slice
//!
//! ```
//! use byteflip::swap_slice;
//!
//! let mut samples = [0x01020304u32; 8];
//! swap_slice(&mut samples);
//! assert_eq!(samples, [0x04030201u32; 8]);
//! ```
//!
//! # Example - Inspecting the selected instruction set
//!
//! ```
//! // One of "AVX512", "AVX2", "SSSE3", "NEON", "SCALAR".
//! println!("swap kernel uses {}", byteflip::ise());
//! ```
//!
//! # Semantics
//!
//! Element kinds of byte width 1 are a no-op: reversing a single byte is
//! the identity. For all other kinds the buffer length must be a whole
//! multiple of the element width; a trailing partial element is rejected
//! with [`Error::InvalidArgument`] before anything is written.
//!
//! The caller owns the buffer and must hold exclusive access for the
//! duration of the call, which the `&mut` receiver already enforces. The
//! operation is synchronous, CPU-bound, and runs to completion in one pass.

/// Unified error types.
pub mod error;
/// CPU capability detection and vector class selection.
pub mod ise;
/// Caller-declared element interpretation of a byte buffer.
pub mod kind;
/// Scalar byte-swap primitives.
pub mod scalar;
/// Dispatch entry points.
pub mod swap;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod x86;

// Re-exports for convenience
pub use error::{Error, Result};
pub use ise::{VectorClass, ise};
pub use kind::ElementKind;
pub use scalar::SwapElement;
pub use swap::{swap_in_place, swap_in_place_with, swap_slice};
