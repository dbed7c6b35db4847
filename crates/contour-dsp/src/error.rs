use contour_utils::seconds_to_samples;
use thiserror::Error;

/// Longest hold a configuration may ask for, in samples.
pub const MAX_HOLD_SAMPLES: usize = 1 << 20;

/// Errors reported when validating tracker configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("sample rate must be finite and positive, got {0}")]
    InvalidSampleRate(f32),
    #[error("{name} time must be finite and positive, got {value}")]
    InvalidTime { name: &'static str, value: f32 },
    #[error("hold time must be finite, non-negative and at most {} samples, got {0}", MAX_HOLD_SAMPLES)]
    InvalidHold(f32),
}

impl ConfigError {
    pub(crate) fn check_sample_rate(sample_rate: f32) -> Result<(), Self> {
        if sample_rate.is_finite() && sample_rate > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidSampleRate(sample_rate))
        }
    }

    pub(crate) fn check_time(name: &'static str, value: f32) -> Result<(), Self> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidTime { name, value })
        }
    }

    pub(crate) fn check_hold(value: f32, sample_rate: f32) -> Result<(), Self> {
        if value.is_finite()
            && value >= 0.0
            && seconds_to_samples(value, sample_rate) <= MAX_HOLD_SAMPLES
        {
            Ok(())
        } else {
            Err(ConfigError::InvalidHold(value))
        }
    }
}
