pub mod color;
pub mod traits;

// Re-export key types for convenient access
pub use color::Rgba;
pub use traits::{CircleStyle, DrawSurface, LineCap, LineStroke};
