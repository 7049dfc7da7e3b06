//! # Forward Engine
//!
//! A forward renderer for prefab scene graphs.
//!
//! ## Features
//!
//! - **Prefab Scene Graphs**: Trees of transform/mesh/material nodes instanced into a scene
//! - **Frustum Culling**: World-space bounding boxes tested against the camera view volume
//! - **Transparency Ordering**: Opaque geometry first, transparent geometry back-to-front
//! - **Multi-Light Forward Shading**: One additive pass per active light
//! - **Backend Agnostic**: All GPU work goes through the [`render::RenderBackend`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forward_engine::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scene = Scene::new();
//!     let camera = Camera::default();
//!     let mut backend = RecordingBackend::new().with_shader("phong");
//!     let mut renderer = ForwardRenderer::new(RendererConfig::default());
//!
//!     let stats = renderer.render_scene(&scene, &camera, &mut backend)?;
//!     println!("{} draw calls", stats.draw_calls);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::{Mat4, Mat4Ext, Vec3, Vec4},
        render::{
            AlphaMode, Camera, ForwardRenderer, FrameStats, Light, LightType, Material, Mesh,
            RecordingBackend, RenderBackend, RenderError, RendererConfig,
        },
        scene::{Entity, LightEntity, Node, Prefab, PrefabEntity, PrefabLibrary, Scene},
    };
}
