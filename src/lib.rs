//! Cookie Catcher Frenzy - catch the falling cookies, dodge the burnt ones
//!
//! Core modules:
//! - `sim`: Simulation (spawning, difficulty ramp, collisions, scoring)
//! - `session`: Session lifecycle, frame timing and pointer handling
//! - `renderer`: Display-list renderer (painted onto a 2D canvas on the web)
//! - `platform`: Frame scheduling abstraction and browser glue
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::{FrameControl, GameSession, HudView, PointerPhase, PointerSample};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Lives at the start of every session
    pub const STARTING_LIVES: u8 = 3;

    /// Tray size and placement, as fractions of the playfield
    pub const TRAY_WIDTH_FRACTION: f32 = 0.2;
    pub const TRAY_HEIGHT_FRACTION: f32 = 0.05;
    pub const TRAY_TOP_FRACTION: f32 = 0.85;

    /// Cookie radius as a fraction of playfield width
    pub const NORMAL_RADIUS_FRACTION: f32 = 0.045;
    pub const GOLDEN_RADIUS_FRACTION: f32 = 0.05;
    pub const BURNT_RADIUS_FRACTION: f32 = 0.04;

    /// Points per catch
    pub const NORMAL_CATCH_SCORE: i64 = 10;
    pub const GOLDEN_CATCH_SCORE: i64 = 25;
    pub const BURNT_CATCH_SCORE: i64 = -15;

    /// Cumulative roll thresholds for cookie kind selection (65% / 20% / 15%)
    pub const NORMAL_ROLL_THRESHOLD: f32 = 0.65;
    pub const GOLDEN_ROLL_THRESHOLD: f32 = 0.85;

    /// Cookies spawn this far above the top edge (plus their radius)
    pub const SPAWN_MARGIN: f32 = 10.0;

    /// Base fall speed range in pixels/second, before difficulty scaling
    pub const MIN_FALL_SPEED: f32 = 80.0;
    pub const MAX_FALL_SPEED: f32 = 120.0;

    /// Difficulty ramp
    pub const BASE_SPEED_MULTIPLIER: f32 = 1.0;
    pub const SPEED_RAMP_PER_SEC: f32 = 0.4;
    pub const MAX_SPEED_MULTIPLIER: f32 = 3.0;
    pub const BASE_SPAWN_INTERVAL: f32 = 1.2;
    pub const SPAWN_RAMP_PER_SEC: f32 = 0.25;
    pub const MIN_SPAWN_INTERVAL: f32 = 0.35;

    /// Background grid spacing in pixels
    pub const GRID_STEP: f32 = 24.0;
}
