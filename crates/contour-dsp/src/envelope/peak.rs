use super::{coefficient, EnvelopeFollower};
use crate::error::ConfigError;

/// Peak detector: instant attack, exponential release.
#[derive(Clone, Copy, Debug)]
pub struct PeakEnvelopeFollower {
    y: f32,
    release: f32,
}

impl PeakEnvelopeFollower {
    #[inline]
    pub fn new(release: f32, sample_rate: f32) -> Self {
        Self {
            y: 0.0,
            release: coefficient(release, sample_rate),
        }
    }

    pub fn try_new(release: f32, sample_rate: f32) -> Result<Self, ConfigError> {
        ConfigError::check_sample_rate(sample_rate)?;
        ConfigError::check_time("release", release)?;
        Ok(Self::new(release, sample_rate))
    }

    #[inline]
    pub fn process(&mut self, s: f32) -> f32 {
        if s > self.y {
            self.y = s;
        } else {
            self.y = s + self.release * (self.y - s);
        }
        self.y
    }

    #[inline]
    pub fn peek(&self) -> f32 {
        self.y
    }

    /// Overwrites the tracked value without smoothing.
    #[inline]
    pub fn reset_to(&mut self, value: f32) -> &mut Self {
        self.y = value;
        self
    }

    #[inline]
    pub fn set_release(&mut self, release: f32, sample_rate: f32) {
        tracing::trace!(release, sample_rate, "set peak follower release");
        self.release = coefficient(release, sample_rate);
    }

    #[inline]
    pub fn release_coefficient(&self) -> f32 {
        self.release
    }
}

impl EnvelopeFollower for PeakEnvelopeFollower {
    #[inline]
    fn process(&mut self, s: f32) -> f32 {
        PeakEnvelopeFollower::process(self, s)
    }

    #[inline]
    fn peek(&self) -> f32 {
        PeakEnvelopeFollower::peek(self)
    }
}
