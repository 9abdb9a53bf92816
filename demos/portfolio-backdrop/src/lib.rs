//! Background for the portfolio home page: crimson discs linked by fading
//! lines, population scaled to the viewport width.

use backdrop_engine::FieldConfig;
use wasm_bindgen::prelude::*;

backdrop_web::export_backdrop!(FieldConfig::connected(), "portfolio-backdrop");
