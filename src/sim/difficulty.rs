//! Time-based difficulty ramp
//!
//! Both curves are pure functions of elapsed session time and are recomputed
//! every frame, so difficulty rises continuously rather than in steps.

use crate::tuning::Tuning;

/// Difficulty multipliers for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Scales every cookie's base fall speed
    pub speed_multiplier: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
}

impl Difficulty {
    /// Difficulty after `elapsed` seconds of play
    ///
    /// With default tuning: speed 1.0x at t=0, ~2.2x at t=3, capped at 3.0x;
    /// spawn interval 1.2s at t=0, ~0.45s at t=3, floored at 0.35s.
    pub fn at(elapsed: f32, tuning: &Tuning) -> Self {
        let t = elapsed.max(0.0);
        Self {
            speed_multiplier: speed_multiplier(t, tuning),
            spawn_interval: spawn_interval(t, tuning),
        }
    }
}

/// Fall speed multiplier at time `t`
pub fn speed_multiplier(t: f32, tuning: &Tuning) -> f32 {
    (tuning.base_speed_multiplier + tuning.speed_ramp_per_sec * t).min(tuning.max_speed_multiplier)
}

/// Seconds between spawns at time `t`
pub fn spawn_interval(t: f32, tuning: &Tuning) -> f32 {
    (tuning.base_spawn_interval - tuning.spawn_ramp_per_sec * t).max(tuning.min_spawn_interval)
}
