use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::renderer::color::Rgba;
use crate::renderer::traits::LineCap;
use crate::systems::population::PopulationRule;

/// Connector lines drawn between nearby particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Draw connectors at all.
    pub enabled: bool,
    /// Base color; alpha is replaced per line by the distance fade.
    pub color: Rgba,
    /// Stroke width in pixels (default: 7.5).
    pub width: f32,
    /// Pairs this far apart or further get no line (default: 150).
    pub max_distance: f32,
    pub cap: LineCap,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            color: Rgba::CRIMSON,
            width: 7.5,
            max_distance: 150.0,
            cap: LineCap::Round,
        }
    }
}

impl ConnectorConfig {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Everything that distinguishes one background profile from another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Particle radius in pixels (default: 7.5).
    pub radius: f32,
    /// Disc fill color.
    pub fill: Rgba,
    /// Disc outline color. `None` skips the outline stroke.
    pub outline: Option<Rgba>,
    /// Outline stroke width in pixels (default: 1).
    pub outline_width: f32,
    pub connectors: ConnectorConfig,
    pub population: PopulationRule,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::connected()
    }
}

impl FieldConfig {
    /// Small translucent crimson discs linked by fading lines; population
    /// scales with surface width.
    pub fn connected() -> Self {
        Self {
            radius: 7.5,
            fill: Rgba::CRIMSON.with_alpha(0.5),
            outline: Some(Rgba::MIST),
            outline_width: 1.0,
            connectors: ConnectorConfig::default(),
            population: PopulationRule::responsive(),
        }
    }

    /// Larger pale discs drifting on their own, fixed population.
    pub fn drifting() -> Self {
        Self {
            radius: 10.0,
            fill: Rgba::MIST.with_alpha(0.35),
            outline: Some(Rgba::CRIMSON.with_alpha(0.8)),
            outline_width: 1.0,
            connectors: ConnectorConfig::disabled(),
            population: PopulationRule::Fixed { count: 30 },
        }
    }

    /// Parse a config from JSON. Missing fields fall back to [`FieldConfig::connected`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FieldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the simulation can't run sensibly.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.radius.is_nan() || self.radius <= 0.0 {
            return Err(ConfigError::Invalid(format!("radius must be positive, got {}", self.radius)));
        }
        let distance = self.connectors.max_distance;
        if self.connectors.enabled && (distance.is_nan() || distance <= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "connector max_distance must be positive, got {}",
                self.connectors.max_distance
            )));
        }
        if !self.population.is_sorted() {
            return Err(ConfigError::Invalid(
                "population steps must be sorted by ascending width".to_string(),
            ));
        }
        Ok(())
    }
}
