//! Light definitions consumed by the forward shading loop

mod lighting;

pub use lighting::{Light, LightType};
