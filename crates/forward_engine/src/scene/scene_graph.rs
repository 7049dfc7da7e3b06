//! Prefab node trees
//!
//! A prefab is a reusable tree of nodes. Each node has a transform relative
//! to its parent and may carry a mesh and material. Instances place the tree
//! in the world through their own model matrix.

use std::sync::Arc;

use crate::foundation::math::Mat4;
use crate::render::{Material, Mesh};

/// One element of a prefab tree
#[derive(Debug, Clone)]
pub struct Node {
    /// Name for debugging
    pub name: String,
    /// Transform relative to the parent node
    pub local: Mat4,
    /// Geometry drawn at this node
    pub mesh: Option<Arc<Mesh>>,
    /// Surface used for the geometry
    pub material: Option<Arc<Material>>,
    /// Hidden nodes are skipped together with their subtree
    pub visible: bool,
    /// Child nodes, in draw-collection order
    pub children: Vec<Node>,
}

impl Node {
    /// Create a visible, empty node with an identity transform
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            local: Mat4::identity(),
            mesh: None,
            material: None,
            visible: true,
            children: Vec::new(),
        }
    }

    /// Set the local transform
    pub fn with_transform(mut self, local: Mat4) -> Self {
        self.local = local;
        self
    }

    /// Attach geometry
    pub fn with_mesh(mut self, mesh: Arc<Mesh>) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Attach a material
    pub fn with_material(mut self, material: Arc<Material>) -> Self {
        self.material = Some(material);
        self
    }

    /// Set the visibility flag
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Append a child
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child and return it for further edits
    pub fn add_child(&mut self, child: Self) -> &mut Self {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Transform of this node relative to the prefab root
    ///
    /// `parent_global` is the accumulated transform of all ancestors.
    pub fn global_matrix(&self, parent_global: &Mat4) -> Mat4 {
        parent_global * self.local
    }

    /// Whether the node carries both a mesh and a material
    pub const fn is_drawable(&self) -> bool {
        self.mesh.is_some() && self.material.is_some()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first search by name
    pub fn find(&self, name: &str) -> Option<&Self> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Mutable depth-first search by name
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Self> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(name))
    }
}

/// Reusable node tree instantiated into scenes
#[derive(Debug, Clone)]
pub struct Prefab {
    /// Asset name
    pub name: String,
    /// Root of the node tree
    pub root: Node,
}

impl Prefab {
    /// Create a prefab from its root node
    pub fn new(name: impl Into<String>, root: Node) -> Self {
        Self {
            name: name.into(),
            root,
        }
    }

    /// Create a prefab whose root draws a single mesh
    pub fn single(name: impl Into<String>, mesh: Arc<Mesh>, material: Arc<Material>) -> Self {
        let name = name.into();
        let root = Node::new(name.clone()).with_mesh(mesh).with_material(material);
        Self { name, root }
    }
}
