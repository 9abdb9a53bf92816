pub mod field;
pub mod rng;
pub mod surface;
