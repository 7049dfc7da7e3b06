//! Material definitions
//!
//! A material decides how a node is composited (opaque or alpha blended),
//! whether back faces are culled, and which factors and textures the
//! shading program receives.

use super::{MaterialTextures, TextureHandle, TextureSlot};
use crate::foundation::math::{Vec3, Vec4};
use crate::render::api::{BackendResult, RenderBackend, ShaderHandle};

/// Alpha blending modes
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum AlphaMode {
    /// No transparency
    #[default]
    Opaque,
    /// Alpha testing with cutoff value
    Mask(f32),
    /// Alpha blending
    Blend,
}

/// Surface description attached to a scene node
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Name for debugging
    pub name: String,
    /// Compositing mode
    pub alpha_mode: AlphaMode,
    /// Render both faces (disables back-face culling)
    pub two_sided: bool,
    /// Base color multiplier (RGBA)
    pub color: Vec4,
    /// Emissive color multiplier
    pub emissive_factor: Vec3,
    /// Metalness multiplier
    pub metallic_factor: f32,
    /// Roughness multiplier
    pub roughness_factor: f32,
    /// Texture bindings
    pub textures: MaterialTextures,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            alpha_mode: AlphaMode::Opaque,
            two_sided: false,
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            emissive_factor: Vec3::zeros(),
            metallic_factor: 0.0,
            roughness_factor: 1.0,
            textures: MaterialTextures::new(),
        }
    }
}

impl Material {
    /// Create an opaque material with the given base color
    pub fn opaque(name: impl Into<String>, color: Vec4) -> Self {
        Self {
            name: name.into(),
            color,
            ..Default::default()
        }
    }

    /// Create an alpha-blended material with the given base color
    pub fn transparent(name: impl Into<String>, color: Vec4) -> Self {
        Self {
            name: name.into(),
            alpha_mode: AlphaMode::Blend,
            color,
            ..Default::default()
        }
    }

    /// Set the alpha mode
    pub fn with_alpha_mode(mut self, alpha_mode: AlphaMode) -> Self {
        self.alpha_mode = alpha_mode;
        self
    }

    /// Mark the material as two-sided
    pub fn with_two_sided(mut self, two_sided: bool) -> Self {
        self.two_sided = two_sided;
        self
    }

    /// Set the emissive factor
    pub fn with_emissive_factor(mut self, emissive: Vec3) -> Self {
        self.emissive_factor = emissive;
        self
    }

    /// Set metallic and roughness factors
    pub fn with_metallic_roughness(mut self, metallic: f32, roughness: f32) -> Self {
        self.metallic_factor = metallic;
        self.roughness_factor = roughness;
        self
    }

    /// Attach a texture to a slot
    pub fn with_texture(mut self, slot: TextureSlot, texture: TextureHandle) -> Self {
        self.textures.set(slot, texture);
        self
    }

    /// Whether draws with this material are alpha blended
    pub const fn is_transparent(&self) -> bool {
        matches!(self.alpha_mode, AlphaMode::Blend)
    }

    /// Alpha cutoff uploaded to the shader; zero unless masked
    pub const fn alpha_cutoff(&self) -> f32 {
        match self.alpha_mode {
            AlphaMode::Mask(cutoff) => cutoff,
            AlphaMode::Opaque | AlphaMode::Blend => 0.0,
        }
    }

    /// Upload scalar and vector factors
    pub fn upload_uniforms(&self, backend: &mut dyn RenderBackend, shader: ShaderHandle) -> BackendResult<()> {
        backend.set_uniform(shader, "u_color", self.color.into())?;
        backend.set_uniform(shader, "u_alpha_cutoff", self.alpha_cutoff().into())?;
        backend.set_uniform(shader, "u_metallic_factor", self.metallic_factor.into())?;
        backend.set_uniform(shader, "u_roughness_factor", self.roughness_factor.into())?;
        Ok(())
    }

    /// Bind the four texture slots at their fixed units plus the emissive factor
    ///
    /// Unset slots receive [`TextureHandle::WHITE`] so every sampler is bound.
    pub fn bind_textures(&self, backend: &mut dyn RenderBackend, shader: ShaderHandle) -> BackendResult<()> {
        for slot in TextureSlot::ALL {
            backend.bind_texture(shader, slot.uniform_name(), self.textures.get_or_white(slot), slot.unit())?;
        }
        backend.set_uniform(shader, "u_emissive_factor", self.emissive_factor.into())
    }
}
