use contour_utils::seconds_to_samples;

use super::EnvelopeFollower;

/// Windowed-maximum tracker with round-robin reset.
///
/// `SLOTS` accumulators each hold the maximum input seen since they were
/// last cleared. Every `hold` samples exactly one of them is cleared, in
/// turn, so the output is a ripple-free staircase that never drops to zero
/// all at once. A peak is held for at least `(SLOTS - 1) * hold` samples and
/// released after at most `SLOTS * hold` samples.
///
/// For a monophonic signal the hold should be at or slightly above
/// `1 / DIVISIONS` of the period of the lowest frequency to be tracked.
/// There is no smoothing; see
/// [`SmoothedStaircaseEnvelopeFollower`](super::SmoothedStaircaseEnvelopeFollower).
///
/// Cost is O(`SLOTS`) per sample. `SLOTS` must be at least 2, which is
/// checked at compile time.
#[derive(Clone, Copy, Debug)]
pub struct StaircaseEnvelopeFollower<const SLOTS: usize = 3> {
    slots: [f32; SLOTS],
    peak: f32,
    tick: usize,
    next: usize,
    hold: usize,
}

/// Staircase follower with two divisions (three slots).
pub type FastEnvelopeFollower = StaircaseEnvelopeFollower<3>;

impl<const SLOTS: usize> StaircaseEnvelopeFollower<SLOTS> {
    /// Number of hold periods that make up the tracking window.
    pub const DIVISIONS: usize = SLOTS - 1;

    const MIN_SLOTS: () = assert!(SLOTS >= 2, "staircase follower needs at least two slots");

    /// Creates a follower whose hold is `hold` seconds at `sample_rate`,
    /// rounded to the nearest sample.
    pub fn new(hold: f32, sample_rate: f32) -> Self {
        Self::with_hold_samples(seconds_to_samples(hold, sample_rate))
    }

    /// Creates a follower that clears one slot every `hold` samples.
    ///
    /// A hold of zero behaves like a hold of one.
    pub fn with_hold_samples(hold: usize) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::MIN_SLOTS;
        Self {
            slots: [0.0; SLOTS],
            peak: 0.0,
            tick: 0,
            next: 0,
            hold,
        }
    }

    #[inline]
    pub fn process(&mut self, s: f32) -> f32 {
        for y in &mut self.slots {
            *y = y.max(s);
        }

        self.tick += 1;
        if self.tick >= self.hold {
            self.tick = 0;
            self.slots[self.next] = 0.0;
            self.next = (self.next + 1) % SLOTS;
        }

        self.peak = self.slots[1..].iter().fold(self.slots[0], |max, &y| max.max(y));
        self.peak
    }

    #[inline]
    pub fn peek(&self) -> f32 {
        self.peak
    }

    #[inline]
    pub fn hold_samples(&self) -> usize {
        self.hold
    }

    /// Drops everything tracked so far. The hold is kept.
    pub fn clear(&mut self) {
        self.slots = [0.0; SLOTS];
        self.peak = 0.0;
        self.tick = 0;
        self.next = 0;
    }
}

impl<const SLOTS: usize> EnvelopeFollower for StaircaseEnvelopeFollower<SLOTS> {
    #[inline]
    fn process(&mut self, s: f32) -> f32 {
        StaircaseEnvelopeFollower::process(self, s)
    }

    #[inline]
    fn peek(&self) -> f32 {
        StaircaseEnvelopeFollower::peek(self)
    }
}
