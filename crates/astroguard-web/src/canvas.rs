use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use astroguard::{DrawCommand, DrawList, Renderer, Viewport};

use crate::error::WebError;

/// Replays draw lists onto a `<canvas>` 2D context.
pub struct Canvas2dRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, WebError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(WebError::MissingElement("2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::Js("context is not a CanvasRenderingContext2d".into()))?;
        Ok(Self { canvas, ctx })
    }

    /// Layout size of the canvas element in CSS pixels.
    pub fn measure(&self) -> Viewport {
        Viewport::new(
            self.canvas.offset_width().max(0) as f64,
            self.canvas.offset_height().max(0) as f64,
        )
    }

    fn circle_path(&self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        // arc() only fails for a negative radius
        let _ = self.ctx.arc(x, y, radius.max(0.0), 0.0, TAU);
    }
}

impl Renderer for Canvas2dRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn draw(&mut self, frame: &DrawList) {
        let ctx = &self.ctx;
        for cmd in frame.commands() {
            match cmd {
                DrawCommand::Clear { width, height } => {
                    ctx.clear_rect(0.0, 0.0, *width, *height);
                }
                DrawCommand::FillCircle { center, radius, color, glow } => {
                    if let Some(glow) = glow {
                        ctx.set_shadow_blur(glow.blur);
                        ctx.set_shadow_color(&glow.color.css());
                    }
                    self.circle_path(center.x, center.y, *radius);
                    ctx.set_fill_style_str(&color.css());
                    ctx.fill();
                    if glow.is_some() {
                        ctx.set_shadow_blur(0.0);
                    }
                }
                DrawCommand::StrokeCircle { center, radius, width, color } => {
                    ctx.set_stroke_style_str(&color.css());
                    ctx.set_line_width(*width);
                    self.circle_path(center.x, center.y, *radius);
                    ctx.stroke();
                }
                DrawCommand::Line { from, to, width, color } => {
                    ctx.set_stroke_style_str(&color.css());
                    ctx.set_line_width(*width);
                    ctx.begin_path();
                    ctx.move_to(from.x, from.y);
                    ctx.line_to(to.x, to.y);
                    ctx.stroke();
                }
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}
