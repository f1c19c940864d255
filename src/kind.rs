//! Caller-declared element interpretation of a raw byte buffer.
//!
//! A byte buffer has no inherent element width; the caller declares one with
//! [`ElementKind`] and the kernel swaps bytes within each element of that
//! width. Kinds of the same width behave identically — the swap never looks
//! at sign or floating-point structure, only at bytes.

/// Element interpretation of a byte buffer passed to
/// [`swap_in_place`](crate::swap_in_place).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 8-bit signed integer (swap is a no-op).
    I8,
    /// 8-bit unsigned integer (swap is a no-op).
    U8,
    /// 8-bit clamped unsigned integer (swap is a no-op).
    U8Clamped,
    /// 16-bit signed integer.
    I16,
    /// 16-bit unsigned integer.
    U16,
    /// 32-bit signed integer.
    I32,
    /// 32-bit unsigned integer.
    U32,
    /// 32-bit IEEE 754 float.
    F32,
    /// 64-bit signed integer.
    I64,
    /// 64-bit unsigned integer.
    U64,
    /// 64-bit IEEE 754 float.
    F64,
}

impl ElementKind {
    /// Width of one element in bytes: 1, 2, 4, or 8.
    #[inline]
    pub const fn byte_width(self) -> usize {
        match self {
            ElementKind::I8 | ElementKind::U8 | ElementKind::U8Clamped => 1,
            ElementKind::I16 | ElementKind::U16 => 2,
            ElementKind::I32 | ElementKind::U32 | ElementKind::F32 => 4,
            ElementKind::I64 | ElementKind::U64 | ElementKind::F64 => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_widths() {
        assert_eq!(ElementKind::I8.byte_width(), 1);
        assert_eq!(ElementKind::U8.byte_width(), 1);
        assert_eq!(ElementKind::U8Clamped.byte_width(), 1);
        assert_eq!(ElementKind::I16.byte_width(), 2);
        assert_eq!(ElementKind::U16.byte_width(), 2);
        assert_eq!(ElementKind::I32.byte_width(), 4);
        assert_eq!(ElementKind::U32.byte_width(), 4);
        assert_eq!(ElementKind::F32.byte_width(), 4);
        assert_eq!(ElementKind::I64.byte_width(), 8);
        assert_eq!(ElementKind::U64.byte_width(), 8);
        assert_eq!(ElementKind::F64.byte_width(), 8);
    }
}
