//! Game state and core simulation types
//!
//! Everything the frame loop and the input handlers touch lives in
//! [`GameState`]. Mutations go through the narrow methods below so each
//! field has one writer: pointer input only moves the tray, resize only
//! reshapes it, and the tick owns cookies and counters.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::cookie::{Cookie, CookieKind};
use super::tray::{Playfield, Tray};
use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting behind the start overlay
    NotStarted,
    /// Active gameplay
    Running,
    /// Out of lives
    Ended,
}

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Spawned { id: u32, kind: CookieKind },
    Caught { id: u32, kind: CookieKind },
    Missed { id: u32, kind: CookieKind },
    GameOver { final_score: u64 },
}

/// Per-kind counters for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub normal: u32,
    pub golden: u32,
    pub burnt: u32,
}

impl KindCounts {
    pub fn bump(&mut self, kind: CookieKind) {
        match kind {
            CookieKind::Normal => self.normal += 1,
            CookieKind::Golden => self.golden += 1,
            CookieKind::Burnt => self.burnt += 1,
        }
    }

    pub fn get(&self, kind: CookieKind) -> u32 {
        match kind {
            CookieKind::Normal => self.normal,
            CookieKind::Golden => self.golden,
            CookieKind::Burnt => self.burnt,
        }
    }

    pub fn total(&self) -> u32 {
        self.normal + self.golden + self.burnt
    }

    /// "normal 3, golden 1, burnt 0"
    pub fn breakdown(&self) -> String {
        CookieKind::ALL
            .iter()
            .map(|&kind| format!("{} {}", kind.as_str(), self.get(kind)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Session statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub spawned: u32,
    pub caught: KindCounts,
    pub missed: KindCounts,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Seconds since session start
    pub elapsed: f32,
    /// Seconds until the next spawn
    pub spawn_timer: f32,
    pub playfield: Playfield,
    pub tray: Tray,
    /// Live cookies (in spawn order)
    pub cookies: Vec<Cookie>,
    pub stats: SessionStats,
    pub tuning: Tuning,
    /// Shared across sessions so restarts see fresh cookies
    rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a not-yet-started game with a centered tray
    pub fn new(playfield: Playfield, tuning: Tuning, seed: u64) -> Self {
        let tray = Tray::centered(&playfield);
        let lives = tuning.starting_lives;
        Self {
            phase: GamePhase::NotStarted,
            score: 0,
            lives,
            elapsed: 0.0,
            spawn_timer: 0.0,
            playfield,
            tray,
            cookies: Vec::new(),
            stats: SessionStats::default(),
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Reset counters and cookies for a new session (tray and RNG survive)
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.elapsed = 0.0;
        self.spawn_timer = 0.0;
        self.cookies.clear();
        self.stats = SessionStats::default();
        self.next_id = 1;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Running -> Ended; false if the game was not running
    pub fn end(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = GamePhase::Ended;
        true
    }

    /// New playfield size; only the tray follows it
    pub fn resize(&mut self, width: f32, height: f32) {
        let origin = self.playfield.origin;
        self.playfield = Playfield::new(width, height);
        self.playfield.origin = origin;
        self.tray.fit_to(&self.playfield);
    }

    /// Record where the playfield sits in client coordinates
    pub fn set_origin(&mut self, left: f32, top: f32) {
        let left = if left.is_finite() { left } else { 0.0 };
        let top = if top.is_finite() { top } else { 0.0 };
        self.playfield.origin = Vec2::new(left, top);
    }

    /// Center the tray under a client-space pointer x
    pub fn set_tray_x(&mut self, client_x: f32) {
        let x = self.playfield.local_x(client_x);
        self.tray.center_on(x, self.playfield.width);
    }

    /// Allocate a new cookie ID
    fn next_cookie_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one cookie just above the top edge
    pub fn spawn_cookie(&mut self) -> &Cookie {
        let roll: f32 = self.rng.random();
        let kind = CookieKind::from_roll(
            roll,
            self.tuning.normal_roll_threshold,
            self.tuning.golden_roll_threshold,
        );

        let width = self.playfield.width;
        let radius = kind.radius_for(width);
        let x = if width > radius * 2.0 {
            self.rng.random_range(radius..width - radius)
        } else {
            width / 2.0
        };
        let y = -radius - crate::consts::SPAWN_MARGIN;

        let (min_speed, max_speed) = (self.tuning.min_fall_speed, self.tuning.max_fall_speed);
        let fall_speed = if max_speed > min_speed {
            self.rng.random_range(min_speed..max_speed)
        } else {
            min_speed
        };

        let id = self.next_cookie_id();
        self.stats.spawned += 1;
        self.cookies.push(Cookie::new(id, kind, Vec2::new(x, y), radius, fall_speed));
        &self.cookies[self.cookies.len() - 1]
    }

    /// Apply the catch rule for a cookie kind
    pub fn apply_catch(&mut self, kind: CookieKind) {
        let traits = kind.traits();
        self.score = self.score.saturating_add_signed(traits.catch_score);
        self.lives = self.lives.saturating_sub(traits.catch_life_cost);
        self.stats.caught.bump(kind);
    }

    /// Apply the miss rule for a cookie that fell past the bottom edge
    pub fn apply_miss(&mut self, kind: CookieKind) {
        self.lives = self.lives.saturating_sub(kind.traits().miss_life_cost);
        self.stats.missed.bump(kind);
    }
}
