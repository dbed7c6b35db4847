//! Rectangular moving average over a fixed window.

use contour_utils::seconds_to_samples;

/// Running-sum moving average with a window fixed at construction.
///
/// The ring is allocated once; `process` is O(1). The sum is kept in `f64`
/// so that long runs do not accumulate visible drift.
#[derive(Clone, Debug)]
pub struct MovingAverage {
    buffer: Vec<f32>,
    pos: usize,
    sum: f64,
    scale: f64,
}

impl MovingAverage {
    /// Creates a moving average over `window` samples (at least one).
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            buffer: vec![0.0; window],
            pos: 0,
            sum: 0.0,
            scale: 1.0 / window as f64,
        }
    }

    /// Creates a moving average spanning `seconds` at `sample_rate`.
    pub fn from_duration(seconds: f32, sample_rate: f32) -> Self {
        Self::new(seconds_to_samples(seconds, sample_rate))
    }

    #[inline]
    pub fn process(&mut self, s: f32) -> f32 {
        self.sum += s as f64 - self.buffer[self.pos] as f64;
        self.buffer[self.pos] = s;
        self.pos += 1;
        if self.pos == self.buffer.len() {
            self.pos = 0;
        }
        self.peek()
    }

    #[inline]
    pub fn peek(&self) -> f32 {
        (self.sum * self.scale) as f32
    }

    #[inline]
    pub fn window(&self) -> usize {
        self.buffer.len()
    }

    /// Empties the window.
    pub fn clear(&mut self) {
        self.fill(0.0);
    }

    /// Fills the whole window with `value`, as if it had been fed forever.
    pub fn fill(&mut self, value: f32) {
        self.buffer.fill(value);
        self.pos = 0;
        self.sum = value as f64 * self.buffer.len() as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_constant_input() {
        let mut ma = MovingAverage::new(16);
        let mut y = 0.0;
        for _ in 0..16 {
            y = ma.process(0.3);
        }
        assert!((y - 0.3).abs() < 1e-6);
        assert_eq!(y, ma.peek());
    }

    #[test]
    fn averages_the_last_window_only() {
        let mut ma = MovingAverage::new(4);
        for s in [1.0, 2.0, 3.0, 4.0, 5.0] {
            ma.process(s);
        }
        assert!((ma.peek() - 3.5).abs() < 1e-6);
    }

    #[test]
    fn zero_window_behaves_as_passthrough() {
        let mut ma = MovingAverage::new(0);
        assert_eq!(ma.window(), 1);
        assert_eq!(ma.process(0.25), 0.25);
        assert_eq!(ma.process(-1.0), -1.0);
    }

    #[test]
    fn fill_and_clear() {
        let mut ma = MovingAverage::from_duration(0.001, 8_000.0);
        assert_eq!(ma.window(), 8);
        ma.fill(0.5);
        assert!((ma.peek() - 0.5).abs() < 1e-7);
        assert!((ma.process(0.5) - 0.5).abs() < 1e-7);
        ma.clear();
        assert_eq!(ma.peek(), 0.0);
    }
}
