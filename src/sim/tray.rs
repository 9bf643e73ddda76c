//! The player's tray
//!
//! Geometry is expressed relative to the playfield: 20% of its width, 5% of
//! its height, top edge at 85% of its height.

use glam::Vec2;

use super::cookie::Cookie;
use crate::consts::*;

/// Visible simulation rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    /// Client-space position of the top-left corner (for pointer mapping)
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Non-finite or negative lengths collapse to zero
fn sane_length(v: f32) -> f32 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::ZERO,
            width: sane_length(width),
            height: sane_length(height),
        }
    }

    /// Client x to playfield-local x, clamped to [0, width]
    pub fn local_x(&self, client_x: f32) -> f32 {
        let x = client_x - self.origin.x;
        if x.is_nan() { 0.0 } else { x.clamp(0.0, self.width) }
    }
}

/// The player-controlled catching tray
#[derive(Debug, Clone)]
pub struct Tray {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Tray {
    /// A tray sized for the playfield and centered horizontally
    pub fn centered(playfield: &Playfield) -> Self {
        let size = Self::size_for(playfield);
        Self {
            pos: Vec2::new((playfield.width - size.x) / 2.0, playfield.height * TRAY_TOP_FRACTION),
            size,
        }
    }

    fn size_for(playfield: &Playfield) -> Vec2 {
        Vec2::new(
            playfield.width * TRAY_WIDTH_FRACTION,
            playfield.height * TRAY_HEIGHT_FRACTION,
        )
    }

    /// Resize for a new playfield, keeping x proportional to the old width
    pub fn fit_to(&mut self, playfield: &Playfield) {
        let prev_width = if self.size.x > 0.0 { self.size.x } else { 1.0 };
        let ratio = self.pos.x / prev_width;

        self.size = Self::size_for(playfield);
        self.pos.y = playfield.height * TRAY_TOP_FRACTION;
        self.pos.x = (ratio * self.size.x).min(playfield.width - self.size.x).max(0.0);
    }

    /// Place the tray so its center sits at local `x`, fully inside the playfield
    pub fn center_on(&mut self, x: f32, playfield_width: f32) {
        let left = x - self.size.x / 2.0;
        self.pos.x = left.min(playfield_width - self.size.x).max(0.0);
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Vertical spans overlap and the cookie's center is over the tray
    pub fn catches(&self, cookie: &Cookie) -> bool {
        let within_vertical = cookie.bottom() >= self.top() && cookie.top() <= self.bottom();
        let within_horizontal = cookie.pos.x >= self.left() && cookie.pos.x <= self.right();
        within_vertical && within_horizontal
    }
}
