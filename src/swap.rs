//! Public entry points and instruction-set dispatch.
//!
//! The vector class is chosen once per process (see [`VectorClass`]); every
//! call then routes through that class to the matching shuffle driver. The
//! forced-path entry exists for diagnostics and for testing each code path
//! against the scalar reference on the same machine.

use zerocopy::IntoBytes;

use crate::error::{Error, Result};
use crate::ise::VectorClass;
use crate::kind::ElementKind;
use crate::scalar::{SwapElement, shuffle_scalar};

/// Reverse the byte order of every element of `bytes` in place.
///
/// `kind` declares how the buffer is to be interpreted; kinds of byte width
/// 1 return immediately without touching the buffer (reversing one byte is
/// the identity). Applying the swap twice restores the original buffer.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `bytes.len()` is not a multiple of the
/// declared element width. The buffer is not modified in that case.
///
/// # Examples
///
/// ```
/// use byteflip::{ElementKind, swap_in_place};
///
/// let mut data = [0x34u8, 0x12, 0xCD, 0xAB];
/// swap_in_place(&mut data, ElementKind::U16)?;
/// assert_eq!(data, [0x12, 0x34, 0xAB, 0xCD]);
/// # Ok::<(), byteflip::Error>(())
/// ```
#[inline]
pub fn swap_in_place(bytes: &mut [u8], kind: ElementKind) -> Result<()> {
    swap_with_class(bytes, kind, VectorClass::active())
}

/// Like [`swap_in_place`], but through an explicitly chosen vector class
/// instead of the auto-detected one.
///
/// # Errors
///
/// [`Error::Unsupported`] if `class` cannot run on this CPU;
/// [`Error::InvalidArgument`] as for [`swap_in_place`]. The buffer is not
/// modified in either case.
pub fn swap_in_place_with(bytes: &mut [u8], kind: ElementKind, class: VectorClass) -> Result<()> {
    if !class.is_supported() {
        return Err(Error::Unsupported(class));
    }
    swap_with_class(bytes, kind, class)
}

/// Reverse the byte order of every element of a typed slice in place.
///
/// The element width is taken from the type, so no validation is needed and
/// the call cannot fail.
///
/// # Examples
///
/// ```
/// use byteflip::swap_slice;
///
/// let mut data = [0x1234u16, 0xABCD];
/// swap_slice(&mut data);
/// assert_eq!(data, [0x3412, 0xCDAB]);
/// ```
#[inline]
pub fn swap_slice<T: SwapElement>(data: &mut [T]) {
    dispatch::<T>(data.as_mut_bytes(), VectorClass::active());
}

fn swap_with_class(bytes: &mut [u8], kind: ElementKind, class: VectorClass) -> Result<()> {
    let width = kind.byte_width();
    if width == 1 {
        return Ok(());
    }
    if bytes.len() % width != 0 {
        return Err(Error::InvalidArgument(format!(
            "buffer length {} is not a multiple of element width {width}",
            bytes.len()
        )));
    }
    match width {
        2 => dispatch::<u16>(bytes, class),
        4 => dispatch::<u32>(bytes, class),
        _ => dispatch::<u64>(bytes, class),
    }
    Ok(())
}

/// Route to the shuffle driver for `class`.
///
/// `class` must be supported on the running CPU; both callers guarantee it
/// (`active()` only returns supported classes, and the forced path checks
/// before dispatching).
fn dispatch<T: SwapElement>(bytes: &mut [u8], class: VectorClass) {
    debug_assert!(class.is_supported());
    match class {
        #[cfg(target_arch = "x86_64")]
        // SAFETY: is_supported() verified the required CPU feature.
        VectorClass::Vector128 => unsafe { crate::x86::shuffle_ssse3::<T>(bytes) },
        #[cfg(target_arch = "x86_64")]
        // SAFETY: is_supported() verified the required CPU feature.
        VectorClass::Vector256 => unsafe { crate::x86::shuffle_avx2::<T>(bytes) },
        #[cfg(target_arch = "x86_64")]
        // SAFETY: is_supported() verified the required CPU feature.
        VectorClass::Vector512 => unsafe { crate::x86::shuffle_avx512::<T>(bytes) },
        #[cfg(target_arch = "aarch64")]
        // SAFETY: NEON is architecturally guaranteed on aarch64.
        VectorClass::VectorNeon => unsafe { crate::neon::shuffle_neon::<T>(bytes) },
        _ => shuffle_scalar::<T>(bytes),
    }
}
