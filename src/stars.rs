//! Decorative star field.
//!
//! Positions are drawn once per dashboard mount; the twinkle and drift
//! animations are pure functions of the time elapsed since then.

use crate::consts::dashboard::{
    DRIFT_AMPLITUDE_ROWS, DRIFT_PERIOD_SECS, MAX_DRIFT_DELAY_SECS, MAX_TWINKLE_DELAY_SECS,
    TWINKLE_MIN_OPACITY, TWINKLE_PERIOD_SECS,
};
use rand::Rng;
use std::time::Duration;

/// Placement and timing of one background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPosition {
    /// Vertical offset, percent of the area height, in `[0, 100)`.
    pub top: f64,
    /// Horizontal offset, percent of the area width, in `[0, 100)`.
    pub left: f64,
    /// Twinkle delay in seconds, in `[0, 3)`.
    pub animation_delay_secs: f64,
    /// Drift delay in seconds, in `[0, 5)`.
    pub drift_delay_secs: f64,
}

impl StarPosition {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            top: rng.gen_range(0.0..100.0),
            left: rng.gen_range(0.0..100.0),
            animation_delay_secs: rng.gen_range(0.0..MAX_TWINKLE_DELAY_SECS),
            drift_delay_secs: rng.gen_range(0.0..MAX_DRIFT_DELAY_SECS),
        }
    }

    /// Opacity in `[0.3, 1.0]` at `elapsed` since mount.
    pub fn opacity(&self, elapsed: Duration) -> f64 {
        let t = elapsed.as_secs_f64() - self.animation_delay_secs;
        if t < 0.0 {
            return TWINKLE_MIN_OPACITY;
        }
        let phase = t.rem_euclid(TWINKLE_PERIOD_SECS) / TWINKLE_PERIOD_SECS;
        let peak = 1.0 - (2.0 * phase - 1.0).abs();
        TWINKLE_MIN_OPACITY + (1.0 - TWINKLE_MIN_OPACITY) * peak
    }

    /// Downward drift in rows at `elapsed` since mount, in `[0, amplitude]`.
    pub fn drift_rows(&self, elapsed: Duration) -> f64 {
        let t = elapsed.as_secs_f64() - self.drift_delay_secs;
        if t < 0.0 {
            return 0.0;
        }
        let phase = t.rem_euclid(DRIFT_PERIOD_SECS) / DRIFT_PERIOD_SECS;
        DRIFT_AMPLITUDE_ROWS * (1.0 - (2.0 * phase - 1.0).abs())
    }
}

/// Generate `n` star positions from the given random source.
pub fn generate<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<StarPosition> {
    (0..n).map(|_| StarPosition::random(rng)).collect()
}

/// Generate `n` star positions from fresh, non-seeded randomness.
pub fn generate_random(n: usize) -> Vec<StarPosition> {
    generate(n, &mut rand::thread_rng())
}
