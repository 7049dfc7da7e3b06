//! Texture handles and material texture slots

/// Opaque handle to a texture owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// Neutral 1x1 white texture, bound for every unset slot
    pub const WHITE: Self = Self(0);
}

/// Fixed texture slots of the forward shading program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureSlot {
    /// Base color / albedo
    Color,
    /// Emissive color
    Emissive,
    /// Ambient occlusion
    Occlusion,
    /// Metallic (B) and roughness (G)
    MetallicRoughness,
}

impl TextureSlot {
    /// All slots in texture-unit order
    pub const ALL: [Self; 4] = [
        Self::Color,
        Self::Emissive,
        Self::Occlusion,
        Self::MetallicRoughness,
    ];

    /// Sampler uniform name in the shading program
    pub const fn uniform_name(self) -> &'static str {
        match self {
            Self::Color => "u_texture",
            Self::Emissive => "u_emissive_texture",
            Self::Occlusion => "u_occlusion_texture",
            Self::MetallicRoughness => "u_metallic_roughness_texture",
        }
    }

    /// Texture unit the slot is bound to
    pub const fn unit(self) -> u32 {
        match self {
            Self::Color => 0,
            Self::Emissive => 1,
            Self::Occlusion => 2,
            Self::MetallicRoughness => 3,
        }
    }
}

/// Texture bindings for a material
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialTextures {
    /// Base color texture
    pub color: Option<TextureHandle>,
    /// Emissive texture
    pub emissive: Option<TextureHandle>,
    /// Ambient occlusion texture
    pub occlusion: Option<TextureHandle>,
    /// Metallic-roughness texture
    pub metallic_roughness: Option<TextureHandle>,
}

impl MaterialTextures {
    /// Create an empty set of bindings
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture bound to `slot`, if any
    pub const fn get(&self, slot: TextureSlot) -> Option<TextureHandle> {
        match slot {
            TextureSlot::Color => self.color,
            TextureSlot::Emissive => self.emissive,
            TextureSlot::Occlusion => self.occlusion,
            TextureSlot::MetallicRoughness => self.metallic_roughness,
        }
    }

    /// Bind `texture` to `slot`
    pub fn set(&mut self, slot: TextureSlot, texture: TextureHandle) {
        let target = match slot {
            TextureSlot::Color => &mut self.color,
            TextureSlot::Emissive => &mut self.emissive,
            TextureSlot::Occlusion => &mut self.occlusion,
            TextureSlot::MetallicRoughness => &mut self.metallic_roughness,
        };
        *target = Some(texture);
    }

    /// Texture bound to `slot`, or the white texture when unset
    pub fn get_or_white(&self, slot: TextureSlot) -> TextureHandle {
        self.get(slot).unwrap_or(TextureHandle::WHITE)
    }
}
