//! Serialized scene descriptions
//!
//! A scene description lists global lighting and the entities to create.
//! Prefabs are referenced by name and resolved through a [`PrefabLibrary`];
//! unresolved names still produce an instance, which then draws nothing.
//!
//! ```ron
//! (
//!     background_color: (0.1, 0.1, 0.1),
//!     ambient_light: (0.2, 0.2, 0.2),
//!     entities: [
//!         (type: "PREFAB", name: "crate", prefab: "crate", position: (0.0, 0.0, -5.0), angle: 45.0),
//!         (type: "LIGHT", name: "lamp", light_type: "POINT", position: (0.0, 5.0, 0.0), intensity: 2.0),
//!     ],
//! )
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Entity, LightEntity, PrefabEntity, PrefabLibrary, Scene};
use crate::config::{Config, ConfigError};
use crate::foundation::math::{utils, Mat4, Mat4Ext, Quat, Quaternion, Vec3};
use crate::render::{Light, LightType};

/// Whole-scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    /// Framebuffer clear color
    pub background_color: [f32; 3],
    /// Ambient light term
    pub ambient_light: [f32; 3],
    /// Entities in creation order
    pub entities: Vec<EntityDescription>,
}

impl Default for SceneDescription {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0],
            ambient_light: [0.0, 0.0, 0.0],
            entities: Vec::new(),
        }
    }
}

impl Config for SceneDescription {}

/// One entity of a scene description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityDescription {
    /// `"PREFAB"` or `"LIGHT"`
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Entity name
    pub name: String,
    /// Visibility flag
    pub visible: bool,
    /// Translation
    pub position: [f32; 3],
    /// Rotation about +Y in degrees
    pub angle: f32,
    /// Additional rotation quaternion (x, y, z, w)
    pub rotation: [f32; 4],
    /// Non-uniform scale
    pub scale: [f32; 3],
    /// Prefab name, for prefab entities
    pub prefab: String,
    /// `"POINT"`, `"DIRECTIONAL"` or `"SPOT"`, for lights
    pub light_type: String,
    /// Light color
    pub color: [f32; 3],
    /// Light intensity
    pub intensity: f32,
    /// Light attenuation range
    pub max_distance: f32,
    /// Spot cone angle in degrees
    pub cone_angle: f32,
    /// Light direction
    pub direction: [f32; 3],
}

impl Default for EntityDescription {
    fn default() -> Self {
        let light = Light::default();
        Self {
            entity_type: String::new(),
            name: String::new(),
            visible: true,
            position: [0.0, 0.0, 0.0],
            angle: 0.0,
            rotation: [0.0, 0.0, 0.0, 1.0],
            scale: [1.0, 1.0, 1.0],
            prefab: String::new(),
            light_type: String::new(),
            color: light.color.into(),
            intensity: light.intensity,
            max_distance: light.max_distance,
            cone_angle: light.cone_angle,
            direction: light.direction.into(),
        }
    }
}

impl EntityDescription {
    /// Model matrix: translation, then yaw, then the quaternion, then scale
    ///
    /// Applied to a point in reverse order: scale first, translation last.
    pub fn model_matrix(&self) -> Mat4 {
        let [x, y, z, w] = self.rotation;
        let rotation = Quat::from_quaternion(Quaternion::new(w, x, y, z));

        Mat4::new_translation(&Vec3::from(self.position))
            * Mat4::rotation_y(utils::deg_to_rad(self.angle))
            * rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&Vec3::from(self.scale))
    }

    fn light(&self) -> Light {
        let light_type = if self.light_type.is_empty() {
            LightType::default()
        } else {
            LightType::from_name(&self.light_type).unwrap_or_else(|| {
                log::warn!("Light '{}' has unknown type '{}'", self.name, self.light_type);
                LightType::default()
            })
        };

        Light {
            light_type,
            color: Vec3::from(self.color),
            intensity: self.intensity,
            cone_angle: self.cone_angle,
            max_distance: self.max_distance,
            direction: Vec3::from(self.direction),
        }
    }

    /// Build the entity, or `None` for an unknown type
    pub fn to_entity(&self, library: &PrefabLibrary) -> Option<Entity> {
        match self.entity_type.as_str() {
            "PREFAB" => {
                let prefab = library.get(&self.prefab);
                if prefab.is_none() {
                    log::warn!("Prefab '{}' for entity '{}' is not loaded", self.prefab, self.name);
                }
                Some(Entity::Prefab(PrefabEntity {
                    name: self.name.clone(),
                    model: self.model_matrix(),
                    visible: self.visible,
                    prefab,
                }))
            }
            "LIGHT" => Some(Entity::Light(LightEntity {
                name: self.name.clone(),
                model: self.model_matrix(),
                visible: self.visible,
                light: self.light(),
            })),
            other => {
                log::warn!("Entity '{}' has unknown type '{}', skipping", self.name, other);
                None
            }
        }
    }
}

impl SceneDescription {
    /// Instantiate the described scene
    pub fn build(&self, library: &PrefabLibrary) -> Scene {
        let mut scene = Scene::new()
            .with_background_color(Vec3::from(self.background_color))
            .with_ambient_light(Vec3::from(self.ambient_light));

        for description in &self.entities {
            if let Some(entity) = description.to_entity(library) {
                log::debug!("+ entity: {}", entity.name());
                scene.add_entity(entity);
            }
        }
        scene
    }
}

impl Scene {
    /// Load a scene description file (`.ron` or `.toml`) and instantiate it
    pub fn load_from_file(path: impl AsRef<Path>, library: &PrefabLibrary) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Reading scene: {}", path.display());
        let description = SceneDescription::load_from_file(path)?;
        let scene = description.build(library);
        log::info!("Scene '{}' loaded with {} entities", path.display(), scene.entities().len());
        Ok(scene)
    }
}
