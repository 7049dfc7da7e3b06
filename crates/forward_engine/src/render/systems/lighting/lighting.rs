//! Light sources for forward shading
//!
//! Each active light produces one draw submission per item. A light only
//! carries its photometric parameters; its world position comes from the
//! owning scene entity.

use crate::foundation::math::Vec3;
use crate::render::api::{BackendResult, RenderBackend, ShaderHandle};

/// Light types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LightType {
    /// Directional light (like sunlight)
    Directional,
    /// Point light (like a lightbulb)
    #[default]
    Point,
    /// Spot light (like a flashlight)
    Spot,
}

impl LightType {
    /// Parse the upper-case names used in scene descriptions
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DIRECTIONAL" => Some(Self::Directional),
            "POINT" => Some(Self::Point),
            "SPOT" => Some(Self::Spot),
            _ => None,
        }
    }

    /// Integer code expected by the shader's `u_light_type`
    pub const fn shader_code(self) -> i32 {
        match self {
            Self::Directional => 0,
            Self::Point => 1,
            Self::Spot => 2,
        }
    }
}

/// Light source
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    /// Light type
    pub light_type: LightType,
    /// Light color
    pub color: Vec3,
    /// Light intensity
    pub intensity: f32,
    /// Spot cone angle in degrees
    pub cone_angle: f32,
    /// Attenuation range for point and spot lights
    pub max_distance: f32,
    /// Direction for directional and spot lights
    pub direction: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            light_type: LightType::Point,
            color: Vec3::new(1.0, 1.0, 1.0),
            intensity: 1.0,
            cone_angle: 45.0,
            max_distance: 100.0,
            direction: Vec3::new(0.0, -1.0, 0.0),
        }
    }
}

impl Light {
    /// Create a directional light
    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            direction: direction.normalize(),
            color,
            intensity,
            ..Self::default()
        }
    }

    /// Create a point light
    pub fn point(color: Vec3, intensity: f32, max_distance: f32) -> Self {
        Self {
            light_type: LightType::Point,
            color,
            intensity,
            max_distance,
            ..Self::default()
        }
    }

    /// Create a spot light
    pub fn spot(direction: Vec3, color: Vec3, intensity: f32, max_distance: f32, cone_angle: f32) -> Self {
        Self {
            light_type: LightType::Spot,
            direction: direction.normalize(),
            color,
            intensity,
            max_distance,
            cone_angle,
        }
    }

    /// Upload this light's parameters, placed at `position`
    pub fn upload_uniforms(&self, backend: &mut dyn RenderBackend, shader: ShaderHandle, position: Vec3) -> BackendResult<()> {
        backend.set_uniform(shader, "u_light_type", self.light_type.shader_code().into())?;
        backend.set_uniform(shader, "u_light_color", self.color.into())?;
        backend.set_uniform(shader, "u_light_intensity", self.intensity.into())?;
        backend.set_uniform(shader, "u_light_cone_angle", self.cone_angle.into())?;
        backend.set_uniform(shader, "u_light_max_distance", self.max_distance.into())?;
        backend.set_uniform(shader, "u_light_position", position.into())?;
        backend.set_uniform(shader, "u_light_direction", self.direction.into())
    }
}
