//! Cookie entities and their per-kind rules

use glam::Vec2;
use crate::consts::*;

/// Cookie types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CookieKind {
    Normal,
    /// Rare, worth more
    Golden,
    /// Must be avoided: catching one costs points and a life
    Burnt,
}

/// Everything that differs between cookie kinds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CookieTraits {
    /// Radius as a fraction of playfield width
    pub radius_fraction: f32,
    /// Score change on catch (score never drops below zero)
    pub catch_score: i64,
    /// Lives lost on catch
    pub catch_life_cost: u8,
    /// Lives lost when the cookie falls past the bottom edge
    pub miss_life_cost: u8,
}

const NORMAL_TRAITS: CookieTraits = CookieTraits {
    radius_fraction: NORMAL_RADIUS_FRACTION,
    catch_score: NORMAL_CATCH_SCORE,
    catch_life_cost: 0,
    miss_life_cost: 1,
};

const GOLDEN_TRAITS: CookieTraits = CookieTraits {
    radius_fraction: GOLDEN_RADIUS_FRACTION,
    catch_score: GOLDEN_CATCH_SCORE,
    catch_life_cost: 0,
    miss_life_cost: 1,
};

const BURNT_TRAITS: CookieTraits = CookieTraits {
    radius_fraction: BURNT_RADIUS_FRACTION,
    catch_score: BURNT_CATCH_SCORE,
    catch_life_cost: 1,
    miss_life_cost: 0,
};

impl CookieKind {
    pub const ALL: [CookieKind; 3] = [CookieKind::Normal, CookieKind::Golden, CookieKind::Burnt];

    /// Rule table lookup
    pub fn traits(self) -> &'static CookieTraits {
        match self {
            CookieKind::Normal => &NORMAL_TRAITS,
            CookieKind::Golden => &GOLDEN_TRAITS,
            CookieKind::Burnt => &BURNT_TRAITS,
        }
    }

    /// Pick a kind from a uniform roll in [0, 1)
    pub fn from_roll(roll: f32, normal_threshold: f32, golden_threshold: f32) -> Self {
        if roll < normal_threshold {
            CookieKind::Normal
        } else if roll < golden_threshold {
            CookieKind::Golden
        } else {
            CookieKind::Burnt
        }
    }

    /// Radius for a playfield of the given width
    pub fn radius_for(self, playfield_width: f32) -> f32 {
        playfield_width * self.traits().radius_fraction
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CookieKind::Normal => "normal",
            CookieKind::Golden => "golden",
            CookieKind::Burnt => "burnt",
        }
    }
}

/// A falling cookie
#[derive(Debug, Clone)]
pub struct Cookie {
    pub id: u32,
    pub kind: CookieKind,
    /// Center position (pixels, playfield-local)
    pub pos: Vec2,
    pub radius: f32,
    /// Base fall speed (pixels/second) before the difficulty multiplier
    pub fall_speed: f32,
}

impl Cookie {
    pub fn new(id: u32, kind: CookieKind, pos: Vec2, radius: f32, fall_speed: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            radius,
            fall_speed,
        }
    }

    /// Fall for `dt` seconds at the scaled speed
    pub fn advance(&mut self, speed_multiplier: f32, dt: f32) {
        self.pos.y += self.fall_speed * speed_multiplier * dt;
    }

    /// Top of the cookie
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    /// Bottom of the cookie
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    /// Fully below the playfield's bottom edge
    pub fn is_below(&self, playfield_height: f32) -> bool {
        self.top() > playfield_height
    }
}
