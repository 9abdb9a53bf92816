//! Error types for the browser host.

use std::fmt;

use backdrop_engine::ConfigError;
use wasm_bindgen::JsValue;

/// Errors that can occur while binding the field to a canvas.
#[derive(Debug)]
pub enum FieldError {
    /// The canvas element is missing or no longer attached to the document.
    SurfaceNotReady,
    /// The canvas refused to hand out a 2D context.
    ContextUnavailable,
    /// The profile JSON was rejected.
    Config(ConfigError),
    /// A browser API call threw.
    Js(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::SurfaceNotReady => write!(f, "Canvas reference not found."),
            FieldError::ContextUnavailable => write!(f, "Canvas 2D context unavailable."),
            FieldError::Config(e) => write!(f, "{}", e),
            FieldError::Js(msg) => write!(f, "Browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FieldError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for FieldError {
    fn from(e: ConfigError) -> Self {
        FieldError::Config(e)
    }
}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        FieldError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
