//! Validated construction of trackers from plain settings.

use crate::envelope::{
    EnvelopeFollower, ExponentialEnvelopeFollower, FastEnvelopeFollower, PeakEnvelopeFollower,
    RmsEnvelopeFollower, RmsEnvelopeFollowerDb, SmoothedFastEnvelopeFollower,
};
use crate::error::ConfigError;

/// Which tracker a [`FollowerConfig`] builds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FollowerKind {
    #[default]
    Exponential,
    Peak,
    Staircase,
    Smoothed,
    Rms,
    RmsDb,
}

/// Tracker settings. Times are in seconds.
///
/// Only the fields relevant to `kind` are validated and used: attack and
/// release for [`FollowerKind::Exponential`], release for
/// [`FollowerKind::Peak`], hold for the staircase-based kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FollowerConfig {
    pub kind: FollowerKind,
    pub attack: f32,
    pub release: f32,
    pub hold: f32,
    pub sample_rate: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            kind: FollowerKind::Exponential,
            attack: 0.01,
            release: 0.1,
            hold: 0.01,
            sample_rate: 48_000.0,
        }
    }
}

impl FollowerConfig {
    pub fn new(kind: FollowerKind, sample_rate: f32) -> Self {
        Self {
            kind,
            sample_rate,
            ..Self::default()
        }
    }

    pub fn with_attack(mut self, attack: f32) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_release(mut self, release: f32) -> Self {
        self.release = release;
        self
    }

    pub fn with_hold(mut self, hold: f32) -> Self {
        self.hold = hold;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_sample_rate(self.sample_rate)?;
        match self.kind {
            FollowerKind::Exponential => {
                ConfigError::check_time("attack", self.attack)?;
                ConfigError::check_time("release", self.release)
            }
            FollowerKind::Peak => ConfigError::check_time("release", self.release),
            FollowerKind::Staircase
            | FollowerKind::Smoothed
            | FollowerKind::Rms
            | FollowerKind::RmsDb => ConfigError::check_hold(self.hold, self.sample_rate),
        }
    }

    /// Validates the settings and builds the tracker.
    pub fn build(&self) -> Result<Box<dyn EnvelopeFollower + Send>, ConfigError> {
        if let Err(err) = self.validate() {
            tracing::warn!(?err, kind = ?self.kind, "rejected envelope follower config");
            return Err(err);
        }
        let sps = self.sample_rate;
        let follower: Box<dyn EnvelopeFollower + Send> = match self.kind {
            FollowerKind::Exponential => Box::new(ExponentialEnvelopeFollower::new(
                self.attack,
                self.release,
                sps,
            )),
            FollowerKind::Peak => Box::new(PeakEnvelopeFollower::new(self.release, sps)),
            FollowerKind::Staircase => Box::new(FastEnvelopeFollower::new(self.hold, sps)),
            FollowerKind::Smoothed => Box::new(SmoothedFastEnvelopeFollower::new(self.hold, sps)),
            FollowerKind::Rms => Box::new(RmsEnvelopeFollower::new(self.hold, sps)),
            FollowerKind::RmsDb => Box::new(RmsEnvelopeFollowerDb::new(self.hold, sps)),
        };
        tracing::debug!(
            kind = ?self.kind,
            attack = self.attack,
            release = self.release,
            hold = self.hold,
            sample_rate = sps,
            "built envelope follower"
        );
        Ok(follower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MAX_HOLD_SAMPLES;

    #[test]
    fn default_builds_an_exponential_follower() {
        let config = FollowerConfig::default();
        let mut follower = config.build().unwrap();
        let mut reference = ExponentialEnvelopeFollower::new(0.01, 0.1, 48_000.0);
        for i in 0..100 {
            let s = (i % 7) as f32 * 0.1;
            assert_eq!(follower.process(s), reference.process(s));
        }
    }

    #[test]
    fn every_kind_builds() {
        for kind in [
            FollowerKind::Exponential,
            FollowerKind::Peak,
            FollowerKind::Staircase,
            FollowerKind::Smoothed,
            FollowerKind::Rms,
            FollowerKind::RmsDb,
        ] {
            let mut follower = FollowerConfig::new(kind, 44_100.0).build().unwrap();
            let y = follower.process(0.5);
            assert!(y.is_finite(), "{kind:?}");
            assert_eq!(follower.peek(), y);
        }
    }

    #[test]
    fn rejects_invalid_settings() {
        let err = FollowerConfig::new(FollowerKind::Peak, -1.0).validate();
        assert_eq!(err, Err(ConfigError::InvalidSampleRate(-1.0)));

        let err = FollowerConfig::new(FollowerKind::Exponential, 48_000.0)
            .with_release(0.0)
            .validate();
        assert_eq!(
            err,
            Err(ConfigError::InvalidTime {
                name: "release",
                value: 0.0
            })
        );

        let err = FollowerConfig::new(FollowerKind::Rms, 48_000.0)
            .with_hold(-0.01)
            .build();
        assert!(matches!(err, Err(ConfigError::InvalidHold(_))));
    }

    #[test]
    fn rejects_holds_too_long_to_allocate() {
        let config = FollowerConfig::new(FollowerKind::Smoothed, 48_000.0).with_hold(1e6);
        assert_eq!(config.build().err(), Some(ConfigError::InvalidHold(1e6)));

        let longest = MAX_HOLD_SAMPLES as f32 / 48_000.0;
        assert!(config.with_hold(longest).validate().is_ok());
        assert!(config.with_hold(longest * 1.01).validate().is_err());
    }

    #[test]
    fn zero_hold_is_accepted_for_staircase_kinds() {
        let config = FollowerConfig::new(FollowerKind::Staircase, 48_000.0).with_hold(0.0);
        assert!(config.validate().is_ok());
        // Attack is irrelevant to a staircase.
        assert!(config.with_attack(0.0).validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let config: FollowerConfig =
            serde_json::from_str(r#"{ "kind": "rms_db", "hold": 0.02 }"#).unwrap();
        assert_eq!(config.kind, FollowerKind::RmsDb);
        assert_eq!(config.hold, 0.02);
        assert_eq!(config.sample_rate, 48_000.0);

        let json = serde_json::to_string(&config).unwrap();
        let back: FollowerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
