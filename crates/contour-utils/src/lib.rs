//! Shared conversions for the Contour workspace.

pub mod db;
pub mod time;

pub use db::{db_to_gain, gain_to_db, SILENCE_DB};
pub use time::{duration_to_samples, samples_to_seconds, seconds_to_samples};

/// Convenience type alias for values expressed in decibels.
pub type Decibels = f32;
