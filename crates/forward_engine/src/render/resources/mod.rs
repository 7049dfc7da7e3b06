//! GPU-facing resources consumed by the renderer

pub mod materials;

pub use materials::{AlphaMode, Material, MaterialTextures, TextureHandle, TextureSlot};
