//! Moving RMS detection built on the smoothed staircase follower.
//!
//! Signal path: square, track with [`SmoothedFastEnvelopeFollower`], then take
//! the root. The decibel flavour replaces the root with a halving in the log
//! domain, which suits dynamics processors that already work in decibels.

use contour_utils::{gain_to_db, Decibels};

use super::{EnvelopeFollower, SmoothedFastEnvelopeFollower};
use crate::fast_math;

/// Tracked energy below this (-120 dB) is treated as exact silence.
pub const RMS_FLOOR: f32 = 1e-6;

#[derive(Clone, Debug)]
pub struct RmsEnvelopeFollower {
    follower: SmoothedFastEnvelopeFollower,
}

impl RmsEnvelopeFollower {
    pub fn new(hold: f32, sample_rate: f32) -> Self {
        Self {
            follower: SmoothedFastEnvelopeFollower::new(hold, sample_rate),
        }
    }

    pub fn with_hold_samples(hold: usize) -> Self {
        Self {
            follower: SmoothedFastEnvelopeFollower::with_hold_samples(hold),
        }
    }

    /// Tracks `s²` and applies the silence floor.
    #[inline]
    fn energy(&mut self, s: f32) -> f32 {
        floor(self.follower.process(s * s))
    }

    #[inline]
    pub fn process(&mut self, s: f32) -> f32 {
        fast_math::sqrt(self.energy(s))
    }

    #[inline]
    pub fn peek(&self) -> f32 {
        fast_math::sqrt(floor(self.follower.peek()))
    }

    #[inline]
    pub fn hold_samples(&self) -> usize {
        self.follower.hold_samples()
    }
}

#[inline]
fn floor(e: f32) -> f32 {
    if e < RMS_FLOOR {
        0.0
    } else {
        e
    }
}

/// [`RmsEnvelopeFollower`] reporting decibels.
///
/// Silence is reported as [`contour_utils::SILENCE_DB`] (negative infinity).
#[derive(Clone, Debug)]
pub struct RmsEnvelopeFollowerDb {
    inner: RmsEnvelopeFollower,
}

impl RmsEnvelopeFollowerDb {
    pub fn new(hold: f32, sample_rate: f32) -> Self {
        Self {
            inner: RmsEnvelopeFollower::new(hold, sample_rate),
        }
    }

    pub fn with_hold_samples(hold: usize) -> Self {
        Self {
            inner: RmsEnvelopeFollower::with_hold_samples(hold),
        }
    }

    #[inline]
    pub fn process(&mut self, s: f32) -> Decibels {
        // sqrt in the dB domain
        gain_to_db(self.inner.energy(s)) * 0.5
    }

    #[inline]
    pub fn peek(&self) -> Decibels {
        gain_to_db(floor(self.inner.follower.peek())) * 0.5
    }

    #[inline]
    pub fn hold_samples(&self) -> usize {
        self.inner.hold_samples()
    }
}

impl EnvelopeFollower for RmsEnvelopeFollower {
    #[inline]
    fn process(&mut self, s: f32) -> f32 {
        RmsEnvelopeFollower::process(self, s)
    }

    #[inline]
    fn peek(&self) -> f32 {
        RmsEnvelopeFollower::peek(self)
    }
}

impl EnvelopeFollower for RmsEnvelopeFollowerDb {
    #[inline]
    fn process(&mut self, s: f32) -> f32 {
        RmsEnvelopeFollowerDb::process(self, s)
    }

    #[inline]
    fn peek(&self) -> f32 {
        RmsEnvelopeFollowerDb::peek(self)
    }
}
