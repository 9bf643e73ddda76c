//! Canvas 2D backend
//!
//! Sizes the backing store for the device pixel ratio and replays a
//! [`Frame`] onto the context.

use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{DrawCmd, Frame};

/// A canvas and its 2D context
pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    /// Wrap a canvas; `None` if it has no 2D context
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// CSS-pixel rect of the canvas: (left, top, width, height)
    pub fn client_rect(&self) -> (f32, f32, f32, f32) {
        let rect = self.canvas.get_bounding_client_rect();
        (rect.left() as f32, rect.top() as f32, rect.width() as f32, rect.height() as f32)
    }

    /// Match the backing store to the CSS size times the device pixel ratio,
    /// keeping drawing units in CSS pixels
    pub fn fit_to_display(&self, dpr: f64) {
        let rect = self.canvas.get_bounding_client_rect();
        self.canvas.set_width((rect.width() * dpr) as u32);
        self.canvas.set_height((rect.height() * dpr) as u32);
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("Canvas transform failed: {:?}", e);
        }
    }

    /// Draw a frame back to front
    pub fn paint(&self, frame: &Frame) {
        let ctx = &self.ctx;
        for cmd in &frame.commands {
            match cmd {
                DrawCmd::FillRect { min, size, color } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                DrawCmd::StrokeRect { min, size, color, width } => {
                    ctx.set_stroke_style_str(&color.to_css());
                    ctx.set_line_width(*width as f64);
                    ctx.stroke_rect(min.x as f64, min.y as f64, size.x as f64, size.y as f64);
                }
                DrawCmd::Lines { segments, color, width } => {
                    ctx.set_stroke_style_str(&color.to_css());
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    for (from, to) in segments {
                        ctx.move_to(from.x as f64, from.y as f64);
                        ctx.line_to(to.x as f64, to.y as f64);
                    }
                    ctx.stroke();
                }
                DrawCmd::Disc { center, radius, fill, outline } => {
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU).ok();
                    ctx.set_fill_style_str(&fill.to_css());
                    ctx.fill();
                    if let Some((color, width)) = outline {
                        ctx.set_stroke_style_str(&color.to_css());
                        ctx.set_line_width(*width as f64);
                        ctx.stroke();
                    }
                }
            }
        }
    }
}
