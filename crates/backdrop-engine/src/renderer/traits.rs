//! Drawing contract between the simulation and a host surface.
//!
//! The engine never touches a browser API. Hosts implement [`DrawSurface`]
//! over whatever immediate-mode 2D context they have (`backdrop-web` wraps
//! `CanvasRenderingContext2d`); tests implement it with a recorder.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Rgba;

/// End cap of a stroked line. Mirrors the canvas `lineCap` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl LineCap {
    /// Keyword accepted by `CanvasRenderingContext2D.lineCap`.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        }
    }
}

/// Stroke parameters for a line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStroke {
    pub color: Rgba,
    pub width: f32,
    pub cap: LineCap,
}

/// Filled disc with an optional outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleStyle {
    pub fill: Rgba,
    pub outline: Option<Rgba>,
    pub outline_width: f32,
}

/// Immediate-mode 2D target.
///
/// Each call draws one shape and must leave no style state behind for the next.
pub trait DrawSurface {
    /// Backend identifier (e.g., "canvas2d").
    fn backend(&self) -> &'static str;

    /// Erase the rectangle from the origin to `size`.
    fn clear(&mut self, size: Vec2);

    /// Draw a circle.
    fn circle(&mut self, center: Vec2, radius: f32, style: &CircleStyle);

    /// Stroke a straight segment.
    fn line(&mut self, from: Vec2, to: Vec2, stroke: &LineStroke);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_cap_keywords() {
        assert_eq!(LineCap::Butt.as_str(), "butt");
        assert_eq!(LineCap::Round.as_str(), "round");
        assert_eq!(LineCap::Square.as_str(), "square");
    }

    #[test]
    fn line_cap_defaults_to_round() {
        assert_eq!(LineCap::default(), LineCap::Round);
    }

    #[test]
    fn line_cap_json_is_lowercase() {
        let cap: LineCap = serde_json::from_str(r#""square""#).unwrap();
        assert_eq!(cap, LineCap::Square);
    }
}
