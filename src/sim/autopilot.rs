//! Idle/demo mode controller
//!
//! Chases the lowest good cookie that can still be caught and steps out
//! from under burnt cookies about to land. Drives the native headless run
//! and long-session tests.

use super::cookie::{Cookie, CookieKind};
use super::state::GameState;

/// Pick where the tray center should go this frame (playfield-local x)
pub fn target_x(state: &GameState) -> Option<f32> {
    let tray = &state.tray;
    let catchable = |c: &&Cookie| c.bottom() <= tray.bottom();

    let target = state
        .cookies
        .iter()
        .filter(|c| c.kind != CookieKind::Burnt)
        .filter(catchable)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|c| c.pos.x);

    // A burnt cookie within two tray heights of landing on us
    let danger = state
        .cookies
        .iter()
        .filter(|c| c.kind == CookieKind::Burnt)
        .filter(catchable)
        .filter(|c| tray.top() - c.bottom() < tray.height() * 2.0)
        .find(|c| c.pos.x >= tray.left() && c.pos.x <= tray.right());

    match (target, danger) {
        (Some(x), Some(burnt)) if (x - burnt.pos.x).abs() > tray.width() / 2.0 => Some(x),
        (_, Some(burnt)) => Some(sidestep(state, burnt)),
        (target, None) => target,
    }
}

/// Move the tray clear of a burnt cookie, toward the roomier side
fn sidestep(state: &GameState, burnt: &Cookie) -> f32 {
    let half = state.tray.width() / 2.0;
    let clearance = half + burnt.radius + 1.0;
    if burnt.pos.x > state.playfield.width / 2.0 {
        burnt.pos.x - clearance
    } else {
        burnt.pos.x + clearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tray::Playfield;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn state_with(cookies: &[(CookieKind, f32, f32)]) -> GameState {
        let mut state = GameState::new(Playfield::new(1000.0, 600.0), Tuning::default(), 3);
        for (i, &(kind, x, y)) in cookies.iter().enumerate() {
            let radius = kind.radius_for(1000.0);
            state.cookies.push(Cookie::new(i as u32, kind, Vec2::new(x, y), radius, 100.0));
        }
        state
    }

    #[test]
    fn test_no_cookies_no_target() {
        assert_eq!(target_x(&state_with(&[])), None);
    }

    #[test]
    fn test_chases_lowest_good_cookie() {
        let state = state_with(&[
            (CookieKind::Normal, 100.0, 50.0),
            (CookieKind::Golden, 800.0, 300.0),
            (CookieKind::Burnt, 400.0, 400.0),
        ]);
        assert_eq!(target_x(&state), Some(800.0));
    }

    #[test]
    fn test_ignores_cookies_already_past_tray() {
        let state = state_with(&[
            (CookieKind::Normal, 100.0, 100.0),
            (CookieKind::Normal, 900.0, 590.0),
        ]);
        assert_eq!(target_x(&state), Some(100.0));
    }

    #[test]
    fn test_sidesteps_landing_burnt_cookie() {
        // Tray spans 400..600, top at 510
        let state = state_with(&[(CookieKind::Burnt, 500.0, 470.0)]);
        let x = target_x(&state).unwrap();
        assert!((x - 500.0).abs() > 100.0 + 40.0);
    }
}
