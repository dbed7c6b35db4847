//! Envelope trackers.
//!
//! * [`ExponentialEnvelopeFollower`]: attack/release one-pole smoother.
//! * [`PeakEnvelopeFollower`]: instant attack, exponential release.
//! * [`StaircaseEnvelopeFollower`]: round-robin windowed maxima, no smoothing.
//! * [`SmoothedStaircaseEnvelopeFollower`]: the staircase fed through a
//!   moving average of the same length.
//! * [`RmsEnvelopeFollower`] / [`RmsEnvelopeFollowerDb`]: the smoothed
//!   staircase tracking squared input, reported linearly or in decibels.

mod exponential;
mod peak;
mod rms;
mod smoothed;
mod staircase;

pub use exponential::ExponentialEnvelopeFollower;
pub use peak::PeakEnvelopeFollower;
pub use rms::{RmsEnvelopeFollower, RmsEnvelopeFollowerDb, RMS_FLOOR};
pub use smoothed::{SmoothedFastEnvelopeFollower, SmoothedStaircaseEnvelopeFollower};
pub use staircase::{FastEnvelopeFollower, StaircaseEnvelopeFollower};

use crate::fast_math;
use crate::utils::NoDenormalsGuard;

/// Per-sample decay coefficient for a time constant of `seconds`.
///
/// Computes `exp(-2 / (sample_rate * seconds))`: a step input is ~86%
/// reached after `seconds`. `seconds` and `sample_rate` must be positive.
/// A zero time constant yields `exp(-inf) = 0`; the peak follower
/// special-cases instant attack instead of relying on that.
#[inline]
pub fn coefficient(seconds: f32, sample_rate: f32) -> f32 {
    fast_math::exp(-2.0 / (sample_rate * seconds))
}

/// Common per-sample interface shared by every tracker.
pub trait EnvelopeFollower {
    /// Advances by one sample and returns the new envelope value.
    fn process(&mut self, s: f32) -> f32;

    /// Current envelope value without advancing.
    fn peek(&self) -> f32;

    /// Runs [`process`](Self::process) over `input`, writing into `output`.
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        assert_eq!(input.len(), output.len());
        let _guard = NoDenormalsGuard::new();
        for (dst, &src) in output.iter_mut().zip(input) {
            *dst = self.process(src);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficient_matches_definition() {
        let c = coefficient(0.01, 48_000.0);
        let expected = (-2.0f32 / 480.0).exp();
        assert!((c - expected).abs() < 1e-6);
        assert!(c > 0.0 && c < 1.0);
    }

    #[test]
    fn longer_time_constants_decay_slower() {
        let fast = coefficient(0.001, 48_000.0);
        let slow = coefficient(0.1, 48_000.0);
        assert!(fast < slow);
    }

    #[test]
    fn step_reaches_86_percent_after_time_constant() {
        let sps = 10_000.0;
        let c = coefficient(0.05, sps);
        let mut y = 0.0f32;
        for _ in 0..500 {
            y = 1.0 + c * (y - 1.0);
        }
        assert!((y - (1.0 - (-2.0f32).exp())).abs() < 1e-3);
    }

    #[test]
    fn process_block_matches_per_sample() {
        let input: Vec<f32> = (0..64).map(|i| ((i as f32) * 0.3).sin()).collect();
        let mut a = ExponentialEnvelopeFollower::new(0.001, 0.01, 8_000.0);
        let mut b = a;
        let mut output = vec![0.0; input.len()];
        a.process_block(&input, &mut output);
        for (&x, &y) in input.iter().zip(&output) {
            assert_eq!(b.process(x), y);
        }
    }
}
