//! The active scene
//!
//! Holds the top-level entities and the global lighting parameters. The
//! forward renderer receives the scene explicitly and reads it once per frame.

use super::{Entity, LightEntity, Prefab};
use crate::foundation::math::{Mat4, Vec3};
use crate::render::api::{BackendResult, RenderBackend, ShaderHandle};

/// Entities plus global ambient and background parameters
#[derive(Debug, Clone)]
pub struct Scene {
    /// Framebuffer clear color
    pub background_color: Vec3,
    /// Ambient term added once per item
    pub ambient_light: Vec3,
    entities: Vec<Entity>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with a black background and no ambient light
    pub fn new() -> Self {
        Self {
            background_color: Vec3::zeros(),
            ambient_light: Vec3::zeros(),
            entities: Vec::new(),
        }
    }

    /// Set the ambient light
    pub fn with_ambient_light(mut self, ambient: Vec3) -> Self {
        self.ambient_light = ambient;
        self
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: Vec3) -> Self {
        self.background_color = color;
        self
    }

    /// Append an entity and return its index
    pub fn add_entity(&mut self, entity: impl Into<Entity>) -> usize {
        self.entities.push(entity.into());
        self.entities.len() - 1
    }

    /// All entities in insertion order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable access to the entities
    ///
    /// Must not be used while a frame borrowing this scene is being rendered;
    /// the borrow checker enforces this for single-threaded callers.
    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    /// Find an entity by name
    pub fn find_entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.name() == name)
    }

    /// Find an entity by name for editing
    pub fn find_entity_mut(&mut self, name: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|entity| entity.name() == name)
    }

    /// Remove every entity
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Visible prefab instances with a resolved asset, as (placement, prefab)
    pub fn visible_prefab_instances(&self) -> impl Iterator<Item = (&Mat4, &Prefab)> + '_ {
        self.entities
            .iter()
            .filter_map(Entity::as_prefab)
            .filter(|instance| instance.visible)
            .filter_map(|instance| instance.prefab.as_deref().map(|prefab| (&instance.model, prefab)))
    }

    /// Every light entity in entity order
    ///
    /// Light visibility is not consulted: a hidden light still shades.
    pub fn active_lights(&self) -> Vec<&LightEntity> {
        self.entities.iter().filter_map(Entity::as_light).collect()
    }

    /// Ambient light term
    pub const fn ambient_light(&self) -> Vec3 {
        self.ambient_light
    }

    /// Upload `u_ambient_light`: the scene ambient on the first light pass, zero afterwards
    pub fn upload_global_uniforms(
        &self,
        backend: &mut dyn RenderBackend,
        shader: ShaderHandle,
        is_first_light_pass: bool,
    ) -> BackendResult<()> {
        let ambient = if is_first_light_pass { self.ambient_light } else { Vec3::zeros() };
        backend.set_uniform(shader, "u_ambient_light", ambient.into())
    }
}
