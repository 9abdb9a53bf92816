pub mod connectors;
pub mod population;
pub mod render;
pub mod spawn;
