//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module touches the DOM or
//! the canvas:
//! - Variable timestep driven by the host's frame deltas
//! - Seeded RNG only
//! - Cookies iterate in spawn order

pub mod autopilot;
pub mod cookie;
pub mod difficulty;
pub mod state;
pub mod tick;
pub mod tray;

pub use cookie::{Cookie, CookieKind, CookieTraits};
pub use difficulty::Difficulty;
pub use state::{GameEvent, GamePhase, GameState, KindCounts, SessionStats};
pub use tick::tick;
pub use tray::{Playfield, Tray};
