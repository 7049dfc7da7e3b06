//! Fixed-function pipeline state

use crate::render::Material;

/// Blend factor used by a blend equation `src * S + dst * D`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// 1
    One,
    /// Source alpha
    SrcAlpha,
    /// 1 - source alpha
    OneMinusSrcAlpha,
}

/// Color blending configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Blending off; fragments replace the framebuffer
    #[default]
    Disabled,
    /// Standard "over" compositing (src-alpha, one-minus-src-alpha)
    AlphaBlend,
    /// Light accumulation (src-alpha, one)
    Additive,
}

impl BlendMode {
    /// Source and destination factors, or `None` when blending is off
    pub const fn factors(self) -> Option<(BlendFactor, BlendFactor)> {
        match self {
            Self::Disabled => None,
            Self::AlphaBlend => Some((BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)),
            Self::Additive => Some((BlendFactor::SrcAlpha, BlendFactor::One)),
        }
    }

    /// Whether blending is enabled
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Depth comparison function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DepthFunc {
    /// Pass when the fragment is strictly closer
    #[default]
    Less,
    /// Pass when the fragment is closer or at the same depth
    LessEqual,
}

/// Face culling configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// Cull back faces
    #[default]
    Back,
    /// Render both faces
    Disabled,
}

/// Complete fixed-function state for one draw submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PipelineState {
    /// Color blending
    pub blend: BlendMode,
    /// Depth comparison
    pub depth: DepthFunc,
    /// Face culling
    pub cull: CullMode,
}

impl PipelineState {
    /// State the pipeline rests in between items: no blending, depth `Less`, back-face culling
    pub const RESTING: Self = Self {
        blend: BlendMode::Disabled,
        depth: DepthFunc::Less,
        cull: CullMode::Back,
    };

    /// State requested by a material before any light pass
    pub fn for_material(material: &Material) -> Self {
        Self {
            blend: if material.is_transparent() { BlendMode::AlphaBlend } else { BlendMode::Disabled },
            depth: DepthFunc::Less,
            cull: if material.two_sided { CullMode::Disabled } else { CullMode::Back },
        }
    }

    /// State of the first light pass: material blending, depth `Less`
    #[must_use]
    pub const fn first_light_pass(self) -> Self {
        Self { depth: DepthFunc::Less, ..self }
    }

    /// State of every later light pass: additive blending, depth `LessEqual`
    ///
    /// `LessEqual` lets the pass land on fragments already resolved by the
    /// first pass at identical depth.
    #[must_use]
    pub const fn additional_light_pass(self) -> Self {
        Self { blend: BlendMode::Additive, depth: DepthFunc::LessEqual, ..self }
    }

    /// State after an item finished: blending off, depth `Less`, culling untouched
    #[must_use]
    pub const fn restored(self) -> Self {
        Self { blend: BlendMode::Disabled, depth: DepthFunc::Less, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec4;

    #[test]
    fn test_opaque_material_state() {
        let state = PipelineState::for_material(&Material::opaque("stone", Vec4::new(1.0, 1.0, 1.0, 1.0)));
        assert_eq!(state, PipelineState::RESTING);
    }

    #[test]
    fn test_two_sided_blended_material_state() {
        let material = Material::transparent("glass", Vec4::new(1.0, 1.0, 1.0, 0.4)).with_two_sided(true);
        let state = PipelineState::for_material(&material);
        assert_eq!(state.blend, BlendMode::AlphaBlend);
        assert_eq!(state.cull, CullMode::Disabled);
        assert_eq!(state.blend.factors(), Some((BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha)));
    }

    #[test]
    fn test_light_pass_transitions() {
        let base = PipelineState::for_material(&Material::transparent("glass", Vec4::zeros()));

        let first = base.first_light_pass();
        assert_eq!(first.blend, BlendMode::AlphaBlend);
        assert_eq!(first.depth, DepthFunc::Less);

        let extra = base.additional_light_pass();
        assert_eq!(extra.blend, BlendMode::Additive);
        assert_eq!(extra.depth, DepthFunc::LessEqual);
        assert_eq!(extra.blend.factors(), Some((BlendFactor::SrcAlpha, BlendFactor::One)));

        let restored = extra.restored();
        assert!(!restored.blend.is_enabled());
        assert_eq!(restored.depth, DepthFunc::Less);
        assert_eq!(restored.cull, base.cull);
    }
}
