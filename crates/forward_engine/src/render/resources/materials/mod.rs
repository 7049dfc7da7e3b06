//! Material system
//!
//! Materials describe how a surface is shaded and composited: alpha mode,
//! face culling, scalar factors and the four texture slots bound for every draw.

mod material;
mod texture;

pub use material::{AlphaMode, Material};
pub use texture::{MaterialTextures, TextureHandle, TextureSlot};
