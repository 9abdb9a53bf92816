pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{ConnectorConfig, FieldConfig};
pub use api::error::ConfigError;
pub use components::particle::Particle;
pub use core::field::ParticleField;
pub use core::rng::Rng;
pub use core::surface::Surface;
pub use renderer::color::Rgba;
pub use renderer::traits::{CircleStyle, DrawSurface, LineCap, LineStroke};
pub use systems::connectors::{collect_connectors, connector_opacity, Connector};
pub use systems::population::{PopulationRule, WidthStep};
pub use systems::render::{render_frame, FrameStats};
pub use systems::spawn::{spawn, spawn_on_edge, Edge};
