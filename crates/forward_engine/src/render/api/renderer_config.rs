//! Renderer configuration for application-specific settings
//!
//! This module provides configuration structures that applications can use
//! to customize the renderer behavior without hardcoding values in the
//! rendering system itself.

use serde::{Deserialize, Serialize};

use super::PrimitiveKind;
use crate::config::Config;

/// Configuration for the forward renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Name of the shading program used for every item
    pub shader_name: String,
    /// Test node bounds against the camera frustum during traversal
    pub frustum_culling: bool,
    /// Primitive topology for mesh submissions
    pub primitive: PrimitiveKind,
    /// Clear color and depth with the scene background at frame start
    pub clear_each_frame: bool,
}

impl RendererConfig {
    /// Create a configuration using the given shading program
    pub fn new(shader_name: impl Into<String>) -> Self {
        Self {
            shader_name: shader_name.into(),
            ..Self::default()
        }
    }

    /// Enable or disable frustum culling
    pub fn with_frustum_culling(mut self, enabled: bool) -> Self {
        self.frustum_culling = enabled;
        self
    }

    /// Set the primitive topology
    pub fn with_primitive(mut self, primitive: PrimitiveKind) -> Self {
        self.primitive = primitive;
        self
    }

    /// Enable or disable the per-frame clear
    pub fn with_clear_each_frame(mut self, enabled: bool) -> Self {
        self.clear_each_frame = enabled;
        self
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            shader_name: "phong".to_string(),
            frustum_culling: true,
            primitive: PrimitiveKind::Triangles,
            clear_each_frame: true,
        }
    }
}

impl Config for RendererConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_renderer_config_default() {
        let config = RendererConfig::default();
        assert_eq!(config.shader_name, "phong");
        assert!(config.frustum_culling);
        assert!(config.clear_each_frame);
        assert_eq!(config.primitive, PrimitiveKind::Triangles);
    }

    #[test]
    fn test_renderer_config_partial_toml() {
        let config = RendererConfig::from_str_with_format(
            "shader_name = \"flat\"\nprimitive = \"lines\"\n",
            ConfigFormat::Toml,
        )
        .unwrap();
        assert_eq!(config.shader_name, "flat");
        assert_eq!(config.primitive, PrimitiveKind::Lines);
        assert!(config.frustum_culling);
    }

    #[test]
    fn test_renderer_config_ron_round_trip() {
        let config = RendererConfig::new("pbr").with_frustum_culling(false);
        let text = config.to_string_with_format(ConfigFormat::Ron).unwrap();
        let parsed = RendererConfig::from_str_with_format(&text, ConfigFormat::Ron).unwrap();
        assert_eq!(parsed, config);
    }
}
