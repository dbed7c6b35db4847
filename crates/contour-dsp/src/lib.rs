#![deny(unsafe_op_in_unsafe_fn)]

//! Envelope trackers for real-time audio.
//!
//! Every tracker is a small, exclusively owned value driven one sample at a
//! time. Nothing on the per-sample path allocates, blocks or reports errors.
//! NaN and infinite input is not sanitized.

pub mod config;
pub mod envelope;
pub mod error;
pub mod fast_math;
pub mod moving_average;
pub mod utils;

pub use config::{FollowerConfig, FollowerKind};
pub use envelope::{
    coefficient, EnvelopeFollower, ExponentialEnvelopeFollower, FastEnvelopeFollower,
    PeakEnvelopeFollower, RmsEnvelopeFollower, RmsEnvelopeFollowerDb,
    SmoothedFastEnvelopeFollower, SmoothedStaircaseEnvelopeFollower, StaircaseEnvelopeFollower,
    RMS_FLOOR,
};
pub use error::{ConfigError, MAX_HOLD_SAMPLES};
pub use moving_average::MovingAverage;
