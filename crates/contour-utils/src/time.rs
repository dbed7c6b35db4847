//! Helpers for converting durations to sample counts.
//!
//! Every conversion rounds to the nearest sample (ties away from zero).
//! Negative and NaN products saturate to zero samples.

use std::time::Duration;

/// Converts a time in seconds to a whole number of samples.
#[inline]
pub fn seconds_to_samples(seconds: f32, sample_rate: f32) -> usize {
    // `as` saturates: NaN and negatives become 0.
    (seconds * sample_rate).round() as usize
}

/// Converts a [`Duration`] to a whole number of samples.
#[inline]
pub fn duration_to_samples(duration: Duration, sample_rate: f32) -> usize {
    (duration.as_secs_f64() * sample_rate as f64).round() as usize
}

/// Converts a sample count back to seconds.
#[inline]
pub fn samples_to_seconds(samples: usize, sample_rate: f32) -> f32 {
    samples as f32 / sample_rate
}
