//! Data-driven game balance
//!
//! Every knob defaults to the value in [`crate::consts`]. A tuning file only
//! needs the fields it wants to override:
//!
//! ```json
//! { "speed_ramp_per_sec": 0.3, "max_speed_multiplier": 2.5 }
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance values consulted by the simulation every frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Lives at session start
    pub starting_lives: u8,

    // === Difficulty ramp ===
    pub base_speed_multiplier: f32,
    pub speed_ramp_per_sec: f32,
    pub max_speed_multiplier: f32,
    pub base_spawn_interval: f32,
    pub spawn_ramp_per_sec: f32,
    pub min_spawn_interval: f32,

    // === Spawning ===
    /// Base fall speed range (pixels/second), upper bound exclusive
    pub min_fall_speed: f32,
    pub max_fall_speed: f32,
    /// Roll below this is a normal cookie
    pub normal_roll_threshold: f32,
    /// Roll below this (and above the normal threshold) is a golden cookie
    pub golden_roll_threshold: f32,

    // === Frame timing ===
    /// Optional cap on frame deltas (seconds); `None` keeps play on wall-clock time
    pub max_frame_delta: Option<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,

            base_speed_multiplier: BASE_SPEED_MULTIPLIER,
            speed_ramp_per_sec: SPEED_RAMP_PER_SEC,
            max_speed_multiplier: MAX_SPEED_MULTIPLIER,
            base_spawn_interval: BASE_SPAWN_INTERVAL,
            spawn_ramp_per_sec: SPAWN_RAMP_PER_SEC,
            min_spawn_interval: MIN_SPAWN_INTERVAL,

            min_fall_speed: MIN_FALL_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            normal_roll_threshold: NORMAL_ROLL_THRESHOLD,
            golden_roll_threshold: GOLDEN_ROLL_THRESHOLD,

            max_frame_delta: None,
        }
    }
}

/// Replace NaN/inf/negative with the fallback
fn non_negative(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        fallback
    }
}

impl Tuning {
    /// Parse a tuning document and clamp it into a playable range
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    /// Clamp every value so the simulation invariants hold
    ///
    /// Lives stay in 1..=3, multipliers and intervals stay positive with
    /// max >= base, the kind thresholds stay ordered inside [0, 1], and a
    /// frame cap that is not a positive number is dropped.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        self.starting_lives = self.starting_lives.clamp(1, STARTING_LIVES);

        self.base_speed_multiplier = non_negative(self.base_speed_multiplier, defaults.base_speed_multiplier);
        self.speed_ramp_per_sec = non_negative(self.speed_ramp_per_sec, defaults.speed_ramp_per_sec);
        self.max_speed_multiplier = non_negative(self.max_speed_multiplier, defaults.max_speed_multiplier)
            .max(self.base_speed_multiplier);

        self.min_spawn_interval = non_negative(self.min_spawn_interval, defaults.min_spawn_interval).max(0.01);
        self.base_spawn_interval = non_negative(self.base_spawn_interval, defaults.base_spawn_interval)
            .max(self.min_spawn_interval);
        self.spawn_ramp_per_sec = non_negative(self.spawn_ramp_per_sec, defaults.spawn_ramp_per_sec);

        self.min_fall_speed = non_negative(self.min_fall_speed, defaults.min_fall_speed);
        self.max_fall_speed = non_negative(self.max_fall_speed, defaults.max_fall_speed).max(self.min_fall_speed);

        self.normal_roll_threshold = non_negative(self.normal_roll_threshold, defaults.normal_roll_threshold).min(1.0);
        self.golden_roll_threshold = non_negative(self.golden_roll_threshold, defaults.golden_roll_threshold)
            .clamp(self.normal_roll_threshold, 1.0);

        // A zero cap would freeze the game
        self.max_frame_delta = self.max_frame_delta.filter(|cap| cap.is_finite() && *cap > 0.0);

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "speed_ramp_per_sec": 0.3 }"#).unwrap();
        assert_eq!(tuning.speed_ramp_per_sec, 0.3);
        assert_eq!(tuning.max_speed_multiplier, MAX_SPEED_MULTIPLIER);
        assert_eq!(tuning.starting_lives, STARTING_LIVES);
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        assert!(Tuning::from_json("{ not json").is_err());
        assert!(Tuning::from_json(r#"{ "starting_lives": "three" }"#).is_err());
    }

    #[test]
    fn test_sanitize_clamps_out_of_range_values() {
        let tuning = Tuning {
            starting_lives: 9,
            max_speed_multiplier: 0.5,
            min_spawn_interval: -1.0,
            max_fall_speed: 10.0,
            golden_roll_threshold: 0.1,
            max_frame_delta: Some(f32::NAN),
            ..Default::default()
        }
        .sanitized();

        assert_eq!(tuning.starting_lives, STARTING_LIVES);
        assert_eq!(tuning.max_speed_multiplier, tuning.base_speed_multiplier);
        assert_eq!(tuning.min_spawn_interval, MIN_SPAWN_INTERVAL);
        assert_eq!(tuning.max_fall_speed, tuning.min_fall_speed);
        assert_eq!(tuning.golden_roll_threshold, tuning.normal_roll_threshold);
        assert_eq!(tuning.max_frame_delta, None);
    }

    #[test]
    fn test_frame_cap_must_be_positive() {
        let capped = |cap| Tuning { max_frame_delta: cap, ..Default::default() }.sanitized().max_frame_delta;
        assert_eq!(capped(Some(0.0)), None);
        assert_eq!(capped(Some(-0.5)), None);
        assert_eq!(capped(Some(f32::INFINITY)), None);
        assert_eq!(capped(Some(0.1)), Some(0.1));

        let tuning = Tuning::from_json(r#"{ "max_frame_delta": 0.0 }"#).unwrap();
        assert_eq!(tuning.max_frame_delta, None);
        assert_eq!(Tuning::default().max_frame_delta, None);
    }

    #[test]
    fn test_defaults_survive_sanitize() {
        assert_eq!(Tuning::default().sanitized(), Tuning::default());
    }
}
