//! Core primitive types for rendering
//!
//! This module contains the camera and mesh types consumed by the
//! forward renderer.

pub mod camera;
pub mod mesh;

// Re-export commonly used types
pub use camera::Camera;
pub use mesh::{Mesh, Vertex};
