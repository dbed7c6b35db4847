//! Denormal control for the audio thread.
//!
//! Decaying followers spend a long time approaching zero, which lands their
//! state in the subnormal range on x86. With flush-to-zero and
//! denormals-are-zero set, those values snap to `0.0` instead.
//! Elsewhere these helpers do nothing.

#[cfg(target_arch = "x86_64")]
const FTZ_DAZ: u32 = 0x8040;

/// Sets FTZ/DAZ and returns the previous control word.
#[inline]
fn enable_ftz_daz() -> Option<u32> {
    #[cfg(target_arch = "x86_64")]
    #[allow(deprecated)]
    // SAFETY: reading and writing MXCSR only changes float rounding modes of
    // the calling thread.
    unsafe {
        use core::arch::x86_64::{_mm_getcsr, _mm_setcsr};
        let prev = _mm_getcsr();
        _mm_setcsr(prev | FTZ_DAZ);
        return Some(prev);
    }
    #[cfg(not(target_arch = "x86_64"))]
    {
        None
    }
}

#[inline]
fn restore_control_word(prev: u32) {
    #[cfg(target_arch = "x86_64")]
    #[allow(deprecated)]
    // SAFETY: see `enable_ftz_daz`.
    unsafe {
        core::arch::x86_64::_mm_setcsr(prev);
    }
    #[cfg(not(target_arch = "x86_64"))]
    let _ = prev;
}

/// Turns on flush-to-zero for the rest of the current thread's life.
///
/// Call once at the top of an audio callback thread.
#[inline]
pub fn flush_denormals() {
    let _ = enable_ftz_daz();
}

/// Scoped flush-to-zero.
///
/// With the `no-denormals` feature the guard sets FTZ/DAZ and puts the old
/// mode back when dropped. Without it, constructing the guard is a no-op.
/// [`EnvelopeFollower::process_block`](crate::envelope::EnvelopeFollower::process_block)
/// holds one for the length of the block.
#[derive(Debug)]
pub struct NoDenormalsGuard {
    prev: Option<u32>,
}

impl NoDenormalsGuard {
    #[inline]
    pub fn new() -> Self {
        let prev = if cfg!(feature = "no-denormals") {
            enable_ftz_daz()
        } else {
            None
        };
        Self { prev }
    }

    /// Whether this guard actually changed the float mode.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.prev.is_some()
    }
}

impl Default for NoDenormalsGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NoDenormalsGuard {
    #[inline]
    fn drop(&mut self) {
        if let Some(prev) = self.prev.take() {
            restore_control_word(prev);
        }
    }
}
