//! Conversions between linear gain and decibels.

use std::f32::consts::LN_10;

use crate::Decibels;

/// Minimum linear value treated as silence to avoid numerical issues.
const MIN_LINEAR: f32 = 1e-7;

/// Decibel value used to encode silence.
pub const SILENCE_DB: Decibels = f32::NEG_INFINITY;

/// Converts a linear gain factor to decibels.
///
/// Magnitudes at or below `1e-7` (including zero and negative values) are
/// reported as [`SILENCE_DB`]. NaN propagates.
#[inline]
pub fn gain_to_db(gain: f32) -> Decibels {
    if gain <= MIN_LINEAR {
        SILENCE_DB
    } else {
        20.0 * gain.ln() / LN_10
    }
}

/// Converts decibels to a linear gain factor.
#[inline]
pub fn db_to_gain(db: Decibels) -> f32 {
    if db <= SILENCE_DB {
        0.0
    } else {
        (db * LN_10 / 20.0).exp()
    }
}
