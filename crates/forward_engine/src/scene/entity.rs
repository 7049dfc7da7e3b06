//! Scene entities
//!
//! The renderer only needs two kinds of top-level entities, so they are a
//! closed enum rather than an open hierarchy.

use std::sync::Arc;

use super::Prefab;
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::render::api::{BackendResult, RenderBackend, ShaderHandle};
use crate::render::Light;

/// A placed instance of a prefab asset
#[derive(Debug, Clone)]
pub struct PrefabEntity {
    /// Entity name
    pub name: String,
    /// World placement of the prefab root
    pub model: Mat4,
    /// Hidden instances are not traversed
    pub visible: bool,
    /// Resolved asset; `None` when the reference could not be resolved
    pub prefab: Option<Arc<Prefab>>,
}

impl PrefabEntity {
    /// Create a visible instance of `prefab` at `model`
    pub fn new(name: impl Into<String>, model: Mat4, prefab: Arc<Prefab>) -> Self {
        Self {
            name: name.into(),
            model,
            visible: true,
            prefab: Some(prefab),
        }
    }
}

/// A placed light source
#[derive(Debug, Clone)]
pub struct LightEntity {
    /// Entity name
    pub name: String,
    /// World placement; the translation is the light position
    pub model: Mat4,
    /// Display flag; lights shade whether or not it is set
    pub visible: bool,
    /// Photometric parameters
    pub light: Light,
}

impl LightEntity {
    /// Create a visible light at `position`
    pub fn new(name: impl Into<String>, position: Vec3, light: Light) -> Self {
        Self {
            name: name.into(),
            model: Mat4::new_translation(&position),
            visible: true,
            light,
        }
    }

    /// World-space light position
    pub fn position(&self) -> Vec3 {
        self.model.translation_part()
    }

    /// Upload this light's parameters and world position
    pub fn upload_uniforms(&self, backend: &mut dyn RenderBackend, shader: ShaderHandle) -> BackendResult<()> {
        self.light.upload_uniforms(backend, shader, self.position())
    }
}

/// Top-level scene entity
#[derive(Debug, Clone)]
pub enum Entity {
    /// Prefab instance
    Prefab(PrefabEntity),
    /// Light source
    Light(LightEntity),
}

impl Entity {
    /// Entity name
    pub fn name(&self) -> &str {
        match self {
            Self::Prefab(prefab) => &prefab.name,
            Self::Light(light) => &light.name,
        }
    }

    /// World placement
    pub const fn model(&self) -> &Mat4 {
        match self {
            Self::Prefab(prefab) => &prefab.model,
            Self::Light(light) => &light.model,
        }
    }

    /// Visibility flag
    pub const fn is_visible(&self) -> bool {
        match self {
            Self::Prefab(prefab) => prefab.visible,
            Self::Light(light) => light.visible,
        }
    }

    /// Set the visibility flag
    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Self::Prefab(prefab) => prefab.visible = visible,
            Self::Light(light) => light.visible = visible,
        }
    }

    /// The prefab instance, if this is one
    pub const fn as_prefab(&self) -> Option<&PrefabEntity> {
        match self {
            Self::Prefab(prefab) => Some(prefab),
            Self::Light(_) => None,
        }
    }

    /// The light, if this is one
    pub const fn as_light(&self) -> Option<&LightEntity> {
        match self {
            Self::Light(light) => Some(light),
            Self::Prefab(_) => None,
        }
    }
}

impl From<PrefabEntity> for Entity {
    fn from(entity: PrefabEntity) -> Self {
        Self::Prefab(entity)
    }
}

impl From<LightEntity> for Entity {
    fn from(entity: LightEntity) -> Self {
        Self::Light(entity)
    }
}
