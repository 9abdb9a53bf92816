use serde::{Deserialize, Serialize};

/// sRGB color with 8-bit channels and a fractional alpha, the shape CSS
/// color strings take.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Rgba {
    /// Create a color from RGB channels and alpha (0.0 - 1.0).
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with the given alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba()` string suitable for canvas fill/stroke styles.
    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a.clamp(0.0, 1.0))
    }

    pub const CRIMSON: Self = Self::rgb(199, 44, 65);
    pub const MIST: Self = Self::rgb(237, 230, 232);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::CRIMSON
    }
}
