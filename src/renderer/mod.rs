//! Rendering module
//!
//! [`render`] turns game state into a display list of 2D primitives; on the
//! web, `canvas::paint` replays it onto a `CanvasRenderingContext2d`.
//! Building the list never mutates the simulation.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod shapes;

use glam::Vec2;

use crate::sim::GameState;

/// RGBA color, alpha in 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Opaque color from 0xRRGGBB
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string for the canvas API
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// One drawing primitive, in playfield pixels
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillRect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    StrokeRect {
        min: Vec2,
        size: Vec2,
        color: Color,
        width: f32,
    },
    /// Batch of independent line segments sharing one stroke
    Lines {
        segments: Vec<(Vec2, Vec2)>,
        color: Color,
        width: f32,
    },
    Disc {
        center: Vec2,
        radius: f32,
        fill: Color,
        outline: Option<(Color, f32)>,
    },
}

/// A complete frame, drawn back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub size: Vec2,
    pub commands: Vec<DrawCmd>,
}

/// Build the frame for the current state: background, cookies, then the tray
pub fn render(state: &GameState) -> Frame {
    let size = Vec2::new(state.playfield.width, state.playfield.height);
    let mut commands = shapes::background(size);
    for cookie in &state.cookies {
        commands.extend(shapes::cookie(cookie));
    }
    commands.extend(shapes::tray(&state.tray));
    Frame { size, commands }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CookieKind, GameState, Playfield};
    use crate::tuning::Tuning;

    #[test]
    fn test_css_colors() {
        assert_eq!(Color::hex(0xfef5e7).to_css(), "#fef5e7");
        assert_eq!(Color::rgba(0, 0, 0, 0.05).to_css(), "rgba(0,0,0,0.05)");
    }

    #[test]
    fn test_render_is_read_only_and_layered() {
        let mut state = GameState::new(Playfield::new(480.0, 240.0), Tuning::default(), 5);
        state.spawn_cookie();
        let before = format!("{:?}", state);

        let frame = render(&state);
        assert_eq!(format!("{:?}", state), before);
        assert_eq!(frame.size, Vec2::new(480.0, 240.0));

        // Background first, tray outline last
        assert!(matches!(frame.commands.first(), Some(DrawCmd::FillRect { .. })));
        assert!(matches!(frame.commands.last(), Some(DrawCmd::StrokeRect { .. })));

        let discs = frame
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Disc { outline: Some(_), .. }))
            .count();
        assert_eq!(discs, 1);
        assert!(CookieKind::ALL.contains(&state.cookies[0].kind));
    }
}
