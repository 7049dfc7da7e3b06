//! Per-frame draw work items

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::render::{Material, Mesh};
use crate::scene::Node;

/// One drawable node instance collected for the current frame
///
/// Borrows its node from the scene, so it cannot outlive the render call
/// that produced it.
#[derive(Debug, Clone, Copy)]
pub struct DrawItem<'a> {
    /// World transform of the node
    pub model: Mat4,
    /// Source node
    pub node: &'a Node,
    /// Distance from the camera eye to the world translation of the node
    pub distance_to_camera: f32,
    /// Whether the node material alpha-blends
    pub is_transparent: bool,
}

impl<'a> DrawItem<'a> {
    /// Create an item, computing camera distance and transparency once
    pub fn new(model: Mat4, node: &'a Node, eye: Vec3) -> Self {
        let is_transparent = node.material.as_deref().is_some_and(Material::is_transparent);
        Self {
            model,
            node,
            distance_to_camera: (model.translation_part() - eye).norm(),
            is_transparent,
        }
    }

    /// Mesh of the source node
    pub fn mesh(&self) -> Option<&'a Mesh> {
        self.node.mesh.as_deref()
    }

    /// Material of the source node
    pub fn material(&self) -> Option<&'a Material> {
        self.node.material.as_deref()
    }
}
