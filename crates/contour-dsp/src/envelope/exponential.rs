use super::{coefficient, EnvelopeFollower};
use crate::error::ConfigError;

/// Asymmetric one-pole envelope follower.
///
/// Rising input is approached with the attack coefficient, falling input
/// with the release coefficient. Reconfiguring either time constant leaves
/// the tracked value untouched.
#[derive(Clone, Copy, Debug)]
pub struct ExponentialEnvelopeFollower {
    y: f32,
    attack: f32,
    release: f32,
}

impl ExponentialEnvelopeFollower {
    /// Creates a follower with attack and release times in seconds.
    ///
    /// Times and sample rate must be positive; see [`Self::try_new`] for a
    /// checked variant.
    #[inline]
    pub fn new(attack: f32, release: f32, sample_rate: f32) -> Self {
        Self {
            y: 0.0,
            attack: coefficient(attack, sample_rate),
            release: coefficient(release, sample_rate),
        }
    }

    pub fn try_new(attack: f32, release: f32, sample_rate: f32) -> Result<Self, ConfigError> {
        ConfigError::check_sample_rate(sample_rate)?;
        ConfigError::check_time("attack", attack)?;
        ConfigError::check_time("release", release)?;
        Ok(Self::new(attack, release, sample_rate))
    }

    #[inline]
    pub fn process(&mut self, s: f32) -> f32 {
        let c = if s > self.y { self.attack } else { self.release };
        self.y = s + c * (self.y - s);
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

    /// Recomputes both coefficients.
    pub fn configure(&mut self, attack: f32, release: f32, sample_rate: f32) {
        tracing::trace!(attack, release, sample_rate, "reconfigure exponential follower");
        self.attack = coefficient(attack, sample_rate);
        self.release = coefficient(release, sample_rate);
    }

    #[inline]
    pub fn set_attack(&mut self, attack: f32, sample_rate: f32) {
        tracing::trace!(attack, sample_rate, "set exponential follower attack");
        self.attack = coefficient(attack, sample_rate);
    }

    #[inline]
    pub fn set_release(&mut self, release: f32, sample_rate: f32) {
        tracing::trace!(release, sample_rate, "set exponential follower release");
        self.release = coefficient(release, sample_rate);
    }

    #[inline]
    pub fn attack_coefficient(&self) -> f32 {
        self.attack
    }

    #[inline]
    pub fn release_coefficient(&self) -> f32 {
        self.release
    }
}

impl EnvelopeFollower for ExponentialEnvelopeFollower {
    #[inline]
    fn process(&mut self, s: f32) -> f32 {
        ExponentialEnvelopeFollower::process(self, s)
    }

    #[inline]
    fn peek(&self) -> f32 {
        ExponentialEnvelopeFollower::peek(self)
    }
}
