//! Per-frame simulation step
//!
//! Advances the game by a variable wall-clock delta: spawn, fall, catch,
//! miss, and finally the out-of-lives check.

use super::difficulty::Difficulty;
use super::state::{GameEvent, GameState};

/// Advance the game state by `dt` seconds
///
/// Does nothing unless the game is running. Returns the events that
/// happened this frame, in order.
pub fn tick(state: &mut GameState, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    state.elapsed += dt;
    let difficulty = Difficulty::at(state.elapsed, &state.tuning);

    // Spawn
    state.spawn_timer -= dt;
    if state.spawn_timer <= 0.0 {
        let cookie = state.spawn_cookie();
        log::trace!("Spawned {} cookie #{} at x={:.1}", cookie.kind.as_str(), cookie.id, cookie.pos.x);
        events.push(GameEvent::Spawned {
            id: cookie.id,
            kind: cookie.kind,
        });
        state.spawn_timer = difficulty.spawn_interval;
    }

    // Fall
    for cookie in &mut state.cookies {
        cookie.advance(difficulty.speed_multiplier, dt);
    }

    // Catch or miss
    let mut cookies = std::mem::take(&mut state.cookies);
    cookies.retain(|cookie| {
        if state.tray.catches(cookie) {
            state.apply_catch(cookie.kind);
            log::debug!("Caught {} cookie #{} (score {})", cookie.kind.as_str(), cookie.id, state.score);
            events.push(GameEvent::Caught {
                id: cookie.id,
                kind: cookie.kind,
            });
            return false;
        }
        if cookie.is_below(state.playfield.height) {
            state.apply_miss(cookie.kind);
            log::debug!("Missed {} cookie #{} (lives {})", cookie.kind.as_str(), cookie.id, state.lives);
            events.push(GameEvent::Missed {
                id: cookie.id,
                kind: cookie.kind,
            });
            return false;
        }
        true
    });
    state.cookies = cookies;

    if state.lives == 0 && state.end() {
        events.push(GameEvent::GameOver {
            final_score: state.score,
        });
    }

    events
}
