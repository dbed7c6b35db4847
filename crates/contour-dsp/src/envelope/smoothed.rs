use super::{EnvelopeFollower, StaircaseEnvelopeFollower};
use crate::moving_average::MovingAverage;

/// Staircase follower smoothed by a moving average of the same length.
///
/// Keeps the staircase's fast attack while removing its steps.
#[derive(Clone, Debug)]
pub struct SmoothedStaircaseEnvelopeFollower<const SLOTS: usize = 3> {
    staircase: StaircaseEnvelopeFollower<SLOTS>,
    average: MovingAverage,
}

pub type SmoothedFastEnvelopeFollower = SmoothedStaircaseEnvelopeFollower<3>;

impl<const SLOTS: usize> SmoothedStaircaseEnvelopeFollower<SLOTS> {
    pub fn new(hold: f32, sample_rate: f32) -> Self {
        Self {
            staircase: StaircaseEnvelopeFollower::new(hold, sample_rate),
            average: MovingAverage::from_duration(hold, sample_rate),
        }
    }

    pub fn with_hold_samples(hold: usize) -> Self {
        Self {
            staircase: StaircaseEnvelopeFollower::with_hold_samples(hold),
            average: MovingAverage::new(hold),
        }
    }

    #[inline]
    pub fn process(&mut self, s: f32) -> f32 {
        self.average.process(self.staircase.process(s))
    }

    #[inline]
    pub fn peek(&self) -> f32 {
        self.average.peek()
    }

    #[inline]
    pub fn hold_samples(&self) -> usize {
        self.staircase.hold_samples()
    }

    pub fn clear(&mut self) {
        self.staircase.clear();
        self.average.clear();
    }
}

impl<const SLOTS: usize> EnvelopeFollower for SmoothedStaircaseEnvelopeFollower<SLOTS> {
    #[inline]
    fn process(&mut self, s: f32) -> f32 {
        SmoothedStaircaseEnvelopeFollower::process(self, s)
    }

    #[inline]
    fn peek(&self) -> f32 {
        SmoothedStaircaseEnvelopeFollower::peek(self)
    }
}
