//! Per-object rotation state
//!
//! Each spinning object owns one [`Spin`] value and advances it with the
//! frame delta time. Keeping the accumulator per object (instead of a
//! process-wide mutable) lets several instances rotate independently and
//! lets tests drive time deterministically.

/// Spin rate of the demo shapes, radians per second of accumulated angle
pub const DEFAULT_SPIN_RATE: f32 = 0.7;

/// Accumulated rotation angle for one rendered object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    angle: f32,
    rate: f32,
}

impl Spin {
    /// New spin state at angle 0 with the demo's default rate
    pub fn new() -> Self {
        Self::with_rate(DEFAULT_SPIN_RATE)
    }

    /// New spin state at angle 0 with a custom rate (radians per second)
    pub fn with_rate(rate: f32) -> Self {
        Self { angle: 0.0, rate }
    }

    /// Advance by a frame's delta time in seconds
    pub fn advance(&mut self, dt: f32) {
        self.angle += dt * self.rate;
    }

    /// Current rotation angle in radians
    pub fn angle(&self) -> f32 {
        self.angle
    }
}

impl Default for Spin {
    fn default() -> Self {
        Self::new()
    }
}
