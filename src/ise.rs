//! CPU capability detection and vector class selection.
//!
//! The running CPU's instruction-set extensions are probed once per process
//! and the result is cached; the feature set of a CPU does not change while
//! a process runs, so every call dispatches through the same class.
//!
//! # Detection rules
//!
//! - **x86_64**: runtime probes via `is_x86_feature_detected!`, preferring
//!   AVX-512BW (512-bit) over AVX2 (256-bit) over SSSE3 (128-bit). SSSE3 is
//!   present on effectively every x86-64 CPU in service; the scalar arm
//!   exists so detection can never fail.
//! - **aarch64**: static — NEON is architecturally guaranteed, so there is
//!   no runtime probe at all.
//! - Other architectures: scalar only.
//!
//! Detection is deterministic for a given CPU and alters no CPU state.

use once_cell::sync::Lazy;

/// Vector register width class selected for the swap kernel.
///
/// One process-lifetime value is chosen by [`VectorClass::detect`]; the
/// forced-path entry point accepts any variant and rejects ones the running
/// CPU cannot execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorClass {
    /// No vector unit used; hardware byte-swap instructions only.
    Scalar,
    /// 128-bit x86 path (SSSE3 `pshufb`).
    Vector128,
    /// 256-bit x86 path (AVX2 `vpshufb`).
    Vector256,
    /// 512-bit x86 path (AVX-512BW `vpshufb`).
    Vector512,
    /// 128-bit ARM path (NEON `vrev16q`/`vrev32q`/`vrev64q`).
    VectorNeon,
}

static ACTIVE: Lazy<VectorClass> = Lazy::new(VectorClass::detect);

impl VectorClass {
    /// Probe the host CPU and return the widest usable class.
    ///
    /// Never fails; the worst case is [`VectorClass::Scalar`].
    pub fn detect() -> Self {
        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("avx512bw") {
                VectorClass::Vector512
            } else if is_x86_feature_detected!("avx2") {
                VectorClass::Vector256
            } else if is_x86_feature_detected!("ssse3") {
                VectorClass::Vector128
            } else {
                VectorClass::Scalar
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            VectorClass::VectorNeon
        }

        #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
        {
            VectorClass::Scalar
        }
    }

    /// The class selected for this process, computed once and cached.
    #[inline]
    pub fn active() -> Self {
        *ACTIVE
    }

    /// Whether this class can execute on the running CPU.
    pub fn is_supported(self) -> bool {
        match self {
            VectorClass::Scalar => true,
            #[cfg(target_arch = "x86_64")]
            VectorClass::Vector128 => is_x86_feature_detected!("ssse3"),
            #[cfg(target_arch = "x86_64")]
            VectorClass::Vector256 => is_x86_feature_detected!("avx2"),
            #[cfg(target_arch = "x86_64")]
            VectorClass::Vector512 => is_x86_feature_detected!("avx512bw"),
            #[cfg(target_arch = "aarch64")]
            VectorClass::VectorNeon => true,
            _ => false,
        }
    }

    /// Diagnostic name of the instruction-set extension behind this class.
    pub const fn name(self) -> &'static str {
        match self {
            VectorClass::Scalar => "SCALAR",
            VectorClass::Vector128 => "SSSE3",
            VectorClass::Vector256 => "AVX2",
            VectorClass::Vector512 => "AVX512",
            VectorClass::VectorNeon => "NEON",
        }
    }
}

/// Name of the instruction-set extension the crate selected at startup.
///
/// One of `"AVX512"`, `"AVX2"`, `"SSSE3"`, `"NEON"`, or `"SCALAR"`.
#[inline]
pub fn ise() -> &'static str {
    VectorClass::active().name()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_is_stable() {
        // Two probes of the same CPU must agree, and the cached value must
        // match a fresh probe.
        assert_eq!(VectorClass::detect(), VectorClass::detect());
        assert_eq!(VectorClass::active(), VectorClass::detect());
    }

    #[test]
    fn test_active_class_is_supported() {
        assert!(VectorClass::active().is_supported());
        assert!(VectorClass::Scalar.is_supported());
    }

    #[test]
    fn test_ise_names() {
        assert_eq!(VectorClass::Scalar.name(), "SCALAR");
        assert_eq!(VectorClass::Vector128.name(), "SSSE3");
        assert_eq!(VectorClass::Vector256.name(), "AVX2");
        assert_eq!(VectorClass::Vector512.name(), "AVX512");
        assert_eq!(VectorClass::VectorNeon.name(), "NEON");
        assert_eq!(ise(), VectorClass::active().name());
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn test_aarch64_selects_neon() {
        assert_eq!(VectorClass::detect(), VectorClass::VectorNeon);
    }
}
