//! Shape generation for the game's sprites

use glam::Vec2;
use std::f32::consts::TAU;

use super::{Color, DrawCmd};
use crate::consts::GRID_STEP;
use crate::sim::{Cookie, CookieKind, Tray};

pub const BACKGROUND: Color = Color::hex(0xfef5e7);
pub const GRID_LINE: Color = Color::rgba(0, 0, 0, 0.05);

pub const NORMAL_DOUGH: Color = Color::hex(0xc58b4e); // gingerbread
pub const GOLDEN_DOUGH: Color = Color::hex(0xf2c14f);
pub const BURNT_DOUGH: Color = Color::hex(0x4b3b32);
pub const COOKIE_EDGE: Color = Color::hex(0x4a2f1b);
pub const CRACK: Color = Color::hex(0x1f130d);
pub const SPRINKLES: [Color; 2] = [Color::hex(0xd7263d), Color::hex(0x0f7173)];

pub const TRAY_BASE: Color = Color::hex(0x3b3b3b);
pub const TRAY_EDGE: Color = Color::hex(0xffffff);

/// Counter-top background with a faint grid
pub fn background(size: Vec2) -> Vec<DrawCmd> {
    let mut segments = Vec::new();
    let mut x = 0.0;
    while x < size.x {
        segments.push((Vec2::new(x, 0.0), Vec2::new(x, size.y)));
        x += GRID_STEP;
    }
    let mut y = 0.0;
    while y < size.y {
        segments.push((Vec2::new(0.0, y), Vec2::new(size.x, y)));
        y += GRID_STEP;
    }

    vec![
        DrawCmd::FillRect {
            min: Vec2::ZERO,
            size,
            color: BACKGROUND,
        },
        DrawCmd::Lines {
            segments,
            color: GRID_LINE,
            width: 1.0,
        },
    ]
}

/// Cookie disc plus sprinkles, or cracks when burnt
pub fn cookie(cookie: &Cookie) -> Vec<DrawCmd> {
    let fill = match cookie.kind {
        CookieKind::Normal => NORMAL_DOUGH,
        CookieKind::Golden => GOLDEN_DOUGH,
        CookieKind::Burnt => BURNT_DOUGH,
    };
    let mut commands = vec![DrawCmd::Disc {
        center: cookie.pos,
        radius: cookie.radius,
        fill,
        outline: Some((COOKIE_EDGE, 2.0)),
    }];

    let sprinkle_count = match cookie.kind {
        CookieKind::Normal => 4,
        CookieKind::Golden => 6,
        CookieKind::Burnt => 0,
    };

    if sprinkle_count > 0 {
        let ring = cookie.radius * 0.5;
        for i in 0..sprinkle_count {
            let angle = TAU * i as f32 / sprinkle_count as f32;
            commands.push(DrawCmd::Disc {
                center: cookie.pos + Vec2::new(angle.cos(), angle.sin()) * ring,
                radius: cookie.radius * 0.12,
                fill: SPRINKLES[i % 2],
                outline: None,
            });
        }
    } else {
        let (dx, dy) = (cookie.radius * 0.4, cookie.radius * 0.3);
        commands.push(DrawCmd::Lines {
            segments: vec![
                (cookie.pos - Vec2::new(dx, 0.0), cookie.pos + Vec2::new(dx, 0.0)),
                (cookie.pos - Vec2::new(0.0, dy), cookie.pos + Vec2::new(0.0, dy)),
            ],
            color: CRACK,
            width: 1.5,
        });
    }

    commands
}

/// Solid tray with an inset highlight
pub fn tray(tray: &Tray) -> Vec<DrawCmd> {
    vec![
        DrawCmd::FillRect {
            min: tray.pos,
            size: tray.size,
            color: TRAY_BASE,
        },
        DrawCmd::StrokeRect {
            min: tray.pos + Vec2::splat(2.0),
            size: (tray.size - Vec2::splat(4.0)).max(Vec2::ZERO),
            color: TRAY_EDGE,
            width: 2.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(kind: CookieKind) -> Cookie {
        Cookie::new(1, kind, Vec2::new(100.0, 100.0), 20.0, 90.0)
    }

    #[test]
    fn test_grid_covers_playfield() {
        let commands = background(Vec2::new(48.0, 30.0));
        match &commands[1] {
            // x = 0, 24 and y = 0, 24
            DrawCmd::Lines { segments, .. } => assert_eq!(segments.len(), 4),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_sprinkle_counts() {
        assert_eq!(cookie(&sample(CookieKind::Normal)).len(), 1 + 4);
        assert_eq!(cookie(&sample(CookieKind::Golden)).len(), 1 + 6);
    }

    #[test]
    fn test_burnt_cookie_is_cracked_not_sprinkled() {
        let commands = cookie(&sample(CookieKind::Burnt));
        assert_eq!(commands.len(), 2);
        match &commands[1] {
            DrawCmd::Lines { segments, color, .. } => {
                assert_eq!(*color, CRACK);
                assert_eq!(segments[0], (Vec2::new(92.0, 100.0), Vec2::new(108.0, 100.0)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
