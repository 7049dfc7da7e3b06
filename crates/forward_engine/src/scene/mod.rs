//! Scene management
//!
//! The scene is what the forward renderer reads each frame:
//!
//! ```text
//! Scene
//!  ├─ Entity::Prefab ── placement ── Prefab ── Node tree (mesh + material)
//!  └─ Entity::Light  ── placement ── Light
//! ```
//!
//! Prefab assets are shared between instances and never mutated while a
//! frame is rendered.

mod bounds;
mod description;
mod entity;
mod prefab_library;
mod scene_graph;
mod world;

pub use bounds::{Frustum, Plane, AABB};
pub use description::{EntityDescription, SceneDescription};
pub use entity::{Entity, LightEntity, PrefabEntity};
pub use prefab_library::PrefabLibrary;
pub use scene_graph::{Node, Prefab};
pub use world::Scene;
