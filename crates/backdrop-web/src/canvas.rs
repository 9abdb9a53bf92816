use std::f64::consts::TAU;

use backdrop_engine::{CircleStyle, DrawSurface, LineStroke};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::FieldError;

/// [`DrawSurface`] over a canvas 2D context.
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, FieldError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(FieldError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::ContextUnavailable)?;
        Ok(Self { ctx })
    }
}

impl DrawSurface for Canvas2d {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        // arc only throws on a negative radius
        if let Err(e) = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
            log::debug!("arc rejected: {:?}", e);
        }
        ctx.set_fill_style_str(&style.fill.to_css());
        ctx.fill();
        if let Some(outline) = style.outline {
            ctx.set_line_width(style.outline_width as f64);
            ctx.set_stroke_style_str(&outline.to_css());
            ctx.stroke();
        }
        ctx.close_path();
        ctx.restore();
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: &LineStroke) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(&stroke.color.to_css());
        ctx.set_line_cap(stroke.cap.as_str());
        ctx.set_line_width(stroke.width as f64);
        ctx.stroke();
        ctx.close_path();
        ctx.restore();
    }
}
