//! Platform abstraction layer
//!
//! The session never schedules its own frames. A [`FrameSource`] hands out
//! timestamps and [`run_frames`] feeds them to the session until either side
//! stops. In the browser, `web::AnimationFrameLoop` plays the same role on
//! top of `requestAnimationFrame`; natively and in tests, [`SteppedFrames`]
//! produces synthetic timestamps so runs are deterministic.

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::renderer::Frame;
use crate::session::{FrameControl, GameSession};

/// Something that produces frame timestamps (milliseconds)
pub trait FrameSource {
    /// Timestamp of the next frame, or `None` when the source is exhausted
    fn next_timestamp(&mut self) -> Option<f64>;
}

/// Evenly spaced synthetic frames
#[derive(Debug, Clone)]
pub struct SteppedFrames {
    now_ms: f64,
    step_ms: f64,
    remaining: u64,
}

impl SteppedFrames {
    /// `count` frames, `step_ms` apart, starting at `start_ms`
    pub fn new(start_ms: f64, step_ms: f64, count: u64) -> Self {
        Self {
            now_ms: start_ms,
            step_ms,
            remaining: count,
        }
    }

    /// Frames at `fps` covering `seconds` of play
    pub fn at_fps(fps: u32, seconds: f64) -> Self {
        let fps = fps.max(1);
        let count = (seconds.max(0.0) * fps as f64).round() as u64;
        Self::new(0.0, 1000.0 / fps as f64, count)
    }
}

impl FrameSource for SteppedFrames {
    fn next_timestamp(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let now = self.now_ms;
        self.now_ms += self.step_ms;
        Some(now)
    }
}

/// Drive a session from a frame source, rendering after every frame
///
/// Hook `before_frame` runs ahead of each simulation step (input injection);
/// `on_render` receives each rendered frame. Returns the number of frames
/// simulated.
pub fn run_frames<S, I, R>(
    session: &mut GameSession,
    source: &mut S,
    mut before_frame: I,
    mut on_render: R,
) -> u64
where
    S: FrameSource,
    I: FnMut(&mut GameSession),
    R: FnMut(&Frame),
{
    let mut frames = 0;
    while let Some(timestamp) = source.next_timestamp() {
        before_frame(session);
        let control = session.on_frame(timestamp);
        on_render(&session.render());
        frames += 1;
        if control == FrameControl::Stop {
            break;
        }
    }
    frames
}
