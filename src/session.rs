//! Game session: lifecycle, frame timing and pointer handling
//!
//! [`GameSession`] wraps the simulation with everything the host needs:
//! start/restart, ending, converting frame timestamps into deltas,
//! pointer policy, and a HUD view for the DOM.

use serde::Serialize;

use crate::renderer::{self, Frame};
use crate::sim::{self, GameEvent, GamePhase, GameState, Playfield, SessionStats};
use crate::tuning::Tuning;

/// What the frame loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Schedule another frame
    Continue,
    /// Stop scheduling; the session is not running
    Stop,
}

/// Pointer event kinds the tray reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
}

/// A pointer event reduced to what the game needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: PointerPhase,
    /// Horizontal client coordinate
    pub client_x: f32,
    /// Pressed-button bitmask (1 = primary)
    pub buttons: u16,
    pub is_touch: bool,
}

impl PointerSample {
    /// Down always moves the tray; Move only while dragging or touching
    pub fn moves_tray(&self) -> bool {
        match self.phase {
            PointerPhase::Down => true,
            PointerPhase::Move => self.buttons == 1 || self.is_touch,
        }
    }
}

/// Heart glyph used for the lives display
pub const LIFE_GLYPH: &str = "❤️";

/// Text and visibility for the DOM HUD
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    pub score: String,
    pub lives: String,
    /// "Start" overlay, shown before the first session
    pub show_overlay: bool,
    /// Game-over panel with the final score
    pub show_game_over: bool,
    pub final_score: Option<String>,
}

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub final_score: u64,
    pub elapsed_secs: f32,
    pub stats: SessionStats,
}

/// One player's game, from start overlay to game over (and restarts)
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    /// Timestamp (ms) of the previous frame in this session
    last_frame_ms: Option<f64>,
    final_score: Option<u64>,
}

impl GameSession {
    /// A session waiting to start, tray centered on the playfield
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        let state = GameState::new(Playfield::new(width, height), tuning.sanitized(), seed);
        Self {
            state,
            last_frame_ms: None,
            final_score: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    /// Score frozen at the end of the last session
    pub fn final_score(&self) -> Option<u64> {
        self.final_score
    }

    /// Start (or restart) a session from a clean slate
    pub fn start(&mut self) {
        self.state.reset();
        let (width, height) = (self.state.playfield.width, self.state.playfield.height);
        self.state.resize(width, height);
        self.state.phase = GamePhase::Running;
        self.last_frame_ms = None;
        self.final_score = None;
        log::info!("Session started on {}x{} playfield", width, height);
    }

    /// End the session; no-op unless running
    pub fn end(&mut self) {
        if self.state.end() {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.final_score = Some(self.state.score);
        let summary = self.summary();
        log::info!(
            "Game over: score {} after {:.1}s ({} caught, {} missed)",
            summary.final_score,
            summary.elapsed_secs,
            summary.stats.caught.total(),
            summary.stats.missed.total(),
        );
        log::debug!(
            "Caught [{}], missed [{}]",
            summary.stats.caught.breakdown(),
            summary.stats.missed.breakdown(),
        );
    }

    /// Playfield resized; only the tray is rescaled
    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.state.resize(width, height);
        log::debug!("Playfield resized to {}x{}", self.state.playfield.width, self.state.playfield.height);
    }

    /// Client-space position of the playfield's top-left corner
    pub fn set_origin(&mut self, left: f32, top: f32) {
        self.state.set_origin(left, top);
    }

    /// Center the tray under the pointer
    pub fn on_pointer_input(&mut self, client_x: f32) {
        self.state.set_tray_x(client_x);
    }

    /// Apply a raw pointer event; returns whether the tray moved
    pub fn handle_pointer(&mut self, sample: PointerSample) -> bool {
        if !sample.moves_tray() {
            return false;
        }
        self.on_pointer_input(sample.client_x);
        true
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) -> Vec<GameEvent> {
        let events = sim::tick(&mut self.state, dt);
        if events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })) {
            self.finish();
        }
        events
    }

    /// Frame callback with a millisecond timestamp
    ///
    /// The first frame after `start` has a zero delta. Later deltas follow the
    /// timestamps, so elapsed time tracks the wall clock even at low frame
    /// rates; only a tuning `max_frame_delta` shortens them.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> FrameControl {
        if !self.is_running() {
            return FrameControl::Stop;
        }
        let dt = match self.last_frame_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_frame_ms = Some(timestamp_ms);

        // Timestamps going backwards freeze the frame
        let dt = dt.max(0.0);
        let dt = match self.state.tuning.max_frame_delta {
            Some(cap) => dt.min(cap),
            None => dt,
        };
        self.tick(dt);

        if self.is_running() {
            FrameControl::Continue
        } else {
            FrameControl::Stop
        }
    }

    /// Build the current frame without touching the simulation
    pub fn render(&self) -> Frame {
        renderer::render(&self.state)
    }

    pub fn hud(&self) -> HudView {
        let phase = self.phase();
        HudView {
            score: self.state.score.to_string(),
            lives: LIFE_GLYPH.repeat(self.state.lives as usize),
            show_overlay: phase == GamePhase::NotStarted,
            show_game_over: phase == GamePhase::Ended,
            final_score: self.final_score.filter(|_| phase == GamePhase::Ended).map(|s| s.to_string()),
        }
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            final_score: self.final_score.unwrap_or(self.state.score),
            elapsed_secs: self.state.elapsed,
            stats: self.state.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Cookie, CookieKind};
    use glam::Vec2;
    use proptest::prelude::*;

    fn session() -> GameSession {
        GameSession::new(1200.0, 630.0, Tuning::default(), 42)
    }

    #[test]
    fn test_new_session_waits_behind_overlay() {
        let s = session();
        assert_eq!(s.phase(), GamePhase::NotStarted);
        let hud = s.hud();
        assert!(hud.show_overlay);
        assert!(!hud.show_game_over);
        assert_eq!(hud.score, "0");
        assert_eq!(hud.lives, "❤️❤️❤️");
        assert_eq!(hud.final_score, None);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let mut s = session();
        assert!(s.tick(1.0).is_empty());
        assert_eq!(s.on_frame(16.0), FrameControl::Stop);
        assert!(s.state().cookies.is_empty());
    }

    #[test]
    fn test_first_frame_spawns_one_cookie() {
        let mut s = session();
        s.start();
        assert_eq!(s.on_frame(1000.0), FrameControl::Continue);
        assert_eq!(s.state().cookies.len(), 1);
        assert_eq!(s.state().elapsed, 0.0);
        assert!(!s.hud().show_overlay);
    }

    #[test]
    fn test_frame_deltas_from_timestamps() {
        let mut s = session();
        s.start();
        s.on_frame(1000.0);
        s.on_frame(1100.0);
        assert!((s.state().elapsed - 0.1).abs() < 1e-5);

        // A full second between frames counts as a full second
        s.on_frame(2100.0);
        assert!((s.state().elapsed - 1.1).abs() < 1e-5);

        // Clock went backwards: ignored
        s.on_frame(500.0);
        assert!((s.state().elapsed - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_elapsed_tracks_wall_clock_at_low_fps() {
        let mut s = session();
        s.start();
        s.on_frame(0.0);
        for i in 1..=9 {
            s.on_frame(i as f64 * 1000.0 / 3.0);
        }
        assert!(s.is_running());
        assert!((s.state().elapsed - 3.0).abs() < 1e-3);
    }

    #[test]
    fn test_configured_frame_cap_shortens_deltas() {
        let tuning = Tuning {
            max_frame_delta: Some(0.1),
            ..Default::default()
        };
        let mut s = GameSession::new(1200.0, 630.0, tuning, 42);
        s.start();
        s.on_frame(0.0);
        s.on_frame(1000.0);
        assert!((s.state().elapsed - 0.1).abs() < 1e-5);

        // A zero cap is discarded rather than freezing play
        let tuning = Tuning {
            max_frame_delta: Some(0.0),
            ..Default::default()
        };
        let mut s = GameSession::new(1200.0, 630.0, tuning, 42);
        s.start();
        s.on_frame(0.0);
        s.on_frame(500.0);
        assert!((s.state().elapsed - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_start_resets_everything() {
        let mut s = session();
        s.start();
        for i in 0..100 {
            s.on_frame(i as f64 * 16.0);
        }
        s.state.score = 55;
        s.state.lives = 1;
        s.end();

        s.start();
        assert_eq!(s.phase(), GamePhase::Running);
        assert_eq!((s.score(), s.lives()), (0, 3));
        assert!(s.state().cookies.is_empty());
        assert_eq!(s.state().elapsed, 0.0);
        assert_eq!(s.final_score(), None);
        assert_eq!(s.state().stats, SessionStats::default());
    }

    #[test]
    fn test_restart_while_running() {
        let mut s = session();
        s.start();
        for i in 0..60 {
            s.on_frame(i as f64 * 50.0);
        }
        s.state.score = 120;
        assert!(s.is_running());
        assert!(!s.state().cookies.is_empty());
        assert!(s.state().elapsed > 0.0);

        s.start();
        assert_eq!(s.phase(), GamePhase::Running);
        assert_eq!((s.score(), s.lives()), (0, 3));
        assert!(s.state().cookies.is_empty());
        assert_eq!(s.state().elapsed, 0.0);
        assert_eq!(s.final_score(), None);
        assert_eq!(s.state().stats, SessionStats::default());

        // Previous session's timestamps do not leak into the new one
        assert_eq!(s.on_frame(60_000.0), FrameControl::Continue);
        assert_eq!(s.state().elapsed, 0.0);
        assert_eq!(s.state().cookies.len(), 1);
    }

    #[test]
    fn test_end_is_idempotent() {
        let mut s = session();
        s.end();
        assert_eq!(s.phase(), GamePhase::NotStarted);

        s.start();
        s.state.score = 30;
        s.end();
        assert_eq!(s.phase(), GamePhase::Ended);
        assert_eq!(s.final_score(), Some(30));

        s.state.score = 99;
        s.end();
        assert_eq!(s.final_score(), Some(30));
        assert_eq!(s.on_frame(5000.0), FrameControl::Stop);

        let hud = s.hud();
        assert!(hud.show_game_over);
        assert_eq!(hud.final_score.as_deref(), Some("30"));
    }

    #[test]
    fn test_running_out_of_lives_stops_frames() {
        let mut s = session();
        s.start();
        s.on_frame(0.0);
        s.state.lives = 1;
        s.state.tray.pos.x = 0.0;
        s.state.cookies.push(Cookie::new(77, CookieKind::Golden, Vec2::new(1100.0, 700.0), 60.0, 100.0));

        assert_eq!(s.on_frame(16.0), FrameControl::Stop);
        assert_eq!(s.phase(), GamePhase::Ended);
        assert_eq!(s.lives(), 0);
        assert_eq!(s.final_score(), Some(0));
        assert!(s.hud().lives.is_empty());
    }

    #[test]
    fn test_pointer_policy() {
        let mut s = session();
        let drag = |buttons, is_touch| PointerSample {
            phase: PointerPhase::Move,
            client_x: 0.0,
            buttons,
            is_touch,
        };

        assert!(!s.handle_pointer(drag(0, false)));
        assert!(!s.handle_pointer(drag(2, false)));
        assert!(s.handle_pointer(drag(1, false)));
        assert!(s.handle_pointer(drag(0, true)));
        assert!(s.handle_pointer(PointerSample {
            phase: PointerPhase::Down,
            client_x: 0.0,
            buttons: 0,
            is_touch: false,
        }));
        assert_eq!(s.state().tray.left(), 0.0);
    }

    #[test]
    fn test_pointer_uses_playfield_origin() {
        let mut s = session();
        s.set_origin(100.0, 50.0);
        s.on_pointer_input(700.0);
        // local x 600, tray 240 wide
        assert!((s.state().tray.left() - 480.0).abs() < 1e-3);

        s.on_pointer_input(5000.0);
        assert!((s.state().tray.right() - 1200.0).abs() < 1e-3);
    }

    #[test]
    fn test_resize_mid_session_keeps_counters() {
        let mut s = session();
        s.start();
        s.on_frame(0.0);
        s.state.score = 45;
        let cookie_pos = s.state().cookies[0].pos;

        s.on_resize(600.0, 400.0);
        assert_eq!(s.score(), 45);
        assert_eq!(s.state().cookies[0].pos, cookie_pos);
        assert!((s.state().tray.width() - 120.0).abs() < 1e-3);
        assert!(s.is_running());
    }

    #[test]
    fn test_summary_serializes() {
        let mut s = session();
        s.start();
        s.state.score = 35;
        s.end();
        let json = serde_json::to_value(s.summary()).unwrap();
        assert_eq!(json["final_score"], 35);
        assert_eq!(json["stats"]["spawned"], 0);
    }

    proptest! {
        #[test]
        fn tray_stays_inside_after_pointer(
            width in 50.0f32..3000.0,
            height in 50.0f32..3000.0,
            left in -500.0f32..500.0,
            x in -4000.0f32..8000.0,
        ) {
            let mut s = GameSession::new(width, height, Tuning::default(), 1);
            s.set_origin(left, 0.0);
            s.on_pointer_input(x);
            let tray = &s.state().tray;
            prop_assert!(tray.left() >= 0.0);
            prop_assert!(tray.left() <= width - tray.width() + 1e-3);
        }
    }
}
