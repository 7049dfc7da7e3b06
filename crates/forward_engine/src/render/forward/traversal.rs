//! Scene traversal
//!
//! Walks the node tree of every visible prefab instance, accumulating
//! transforms, and queues one [`DrawItem`] per visible drawable node whose
//! world bounds pass the frustum test.

use crate::foundation::math::{Mat4, Vec3};
use crate::render::{Camera, DrawItem, RenderQueue};
use crate::scene::{Frustum, Node, Scene};

/// Frustum test toggle for a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Culling {
    /// Test world bounds against the camera frustum
    Frustum,
    /// Queue every visible drawable node
    Disabled,
}

impl Culling {
    /// Map the renderer config flag
    pub const fn from_enabled(enabled: bool) -> Self {
        if enabled {
            Self::Frustum
        } else {
            Self::Disabled
        }
    }
}

/// Camera data shared by every node of one traversal
///
/// The frustum planes are extracted once, when the view is built.
#[derive(Debug, Clone)]
pub struct TraversalView {
    eye: Vec3,
    frustum: Option<Frustum>,
}

impl TraversalView {
    /// Capture the eye position and, when culling, the frustum of `camera`
    pub fn new(camera: &Camera, culling: Culling) -> Self {
        let frustum = match culling {
            Culling::Frustum => Some(camera.frustum()),
            Culling::Disabled => None,
        };
        Self {
            eye: camera.eye_position(),
            frustum,
        }
    }

    /// Eye position used for camera distances
    pub const fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Whether a world-space box given by center and half extents may be visible
    pub fn contains_box(&self, center: Vec3, half_extents: Vec3) -> bool {
        match &self.frustum {
            Some(frustum) => frustum.intersects_box(center, half_extents),
            None => true,
        }
    }
}

/// Queue draw items for every visible prefab instance of `scene`
///
/// Lights and unresolved prefab instances contribute nothing.
pub fn collect_scene<'a>(
    scene: &'a Scene,
    camera: &Camera,
    culling: Culling,
    queue: &mut RenderQueue<'a>,
) {
    let view = TraversalView::new(camera, culling);
    for (placement, prefab) in scene.visible_prefab_instances() {
        collect_prefab(placement, &prefab.root, &view, queue);
    }
}

/// Queue draw items for one prefab tree placed at `placement`
pub fn collect_prefab<'a>(
    placement: &Mat4,
    root: &'a Node,
    view: &TraversalView,
    queue: &mut RenderQueue<'a>,
) {
    visit_node(placement, &Mat4::identity(), root, view, queue);
}

/// Visit `node` and its subtree
///
/// Returns whether the node was entered. A hidden node returns `false`
/// and its children are not visited.
pub fn visit_node<'a>(
    placement: &Mat4,
    parent_global: &Mat4,
    node: &'a Node,
    view: &TraversalView,
    queue: &mut RenderQueue<'a>,
) -> bool {
    if !node.visible {
        log::trace!("skip hidden node '{}' and its subtree", node.name);
        return false;
    }

    let global = node.global_matrix(parent_global);
    let model = placement * global;

    if let (Some(mesh), Some(_)) = (&node.mesh, &node.material) {
        let world_bounds = mesh.bounds().transformed(&model);
        if view.contains_box(world_bounds.center(), world_bounds.extents()) {
            queue.push(DrawItem::new(model, node, view.eye()));
        } else {
            log::trace!("cull node '{}'", node.name);
        }
    }

    for child in &node.children {
        visit_node(placement, &global, child, view, queue);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Mat4Ext, Vec3, Vec4};
    use crate::render::{Material, Mesh};
    use crate::scene::{LightEntity, Prefab, PrefabEntity};
    use approx::assert_relative_eq;
    use std::sync::Arc;

    fn drawable(name: &str) -> Node {
        Node::new(name)
            .with_mesh(Arc::new(Mesh::cube(name, 0.5)))
            .with_material(Arc::new(Material::opaque(name, Vec4::new(1.0, 1.0, 1.0, 1.0))))
    }

    fn camera() -> Camera {
        // At z = 10 looking down -Z towards the origin
        Camera::perspective(Vec3::new(0.0, 0.0, 10.0), 60.0, 1.0, 0.1, 100.0)
    }

    fn view(culling: Culling) -> TraversalView {
        TraversalView::new(&camera(), culling)
    }

    fn names(queue: &RenderQueue<'_>) -> Vec<String> {
        queue.iter().map(|item| item.node.name.clone()).collect()
    }

    #[test]
    fn test_node_inside_frustum_is_queued() {
        let node = drawable("inside");
        let mut queue = RenderQueue::new();
        collect_prefab(&Mat4::identity(), &node, &view(Culling::Frustum), &mut queue);
        assert_eq!(queue.len(), 1);
        assert_relative_eq!(queue.items()[0].distance_to_camera, 10.0);
    }

    #[test]
    fn test_node_behind_camera_is_culled() {
        let node = drawable("behind");
        let placement = Mat4::new_translation(&Vec3::new(0.0, 0.0, 30.0));
        let mut queue = RenderQueue::new();
        collect_prefab(&placement, &node, &view(Culling::Frustum), &mut queue);
        assert!(queue.is_empty());

        collect_prefab(&placement, &node, &view(Culling::Disabled), &mut queue);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_box_straddling_frustum_edge_is_kept() {
        let node = Node::new("wide")
            .with_mesh(Arc::new(Mesh::cube("wide", 8.0)))
            .with_material(Arc::new(Material::default()));
        // Center is outside the view volume, but the box reaches into it
        let placement = Mat4::new_translation(&Vec3::new(12.0, 0.0, 0.0));
        let mut queue = RenderQueue::new();
        collect_prefab(&placement, &node, &view(Culling::Frustum), &mut queue);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_hidden_parent_hides_subtree() {
        let hidden = drawable("hidden").with_visible(false).with_child(drawable("grandchild"));
        let root = drawable("root").with_child(hidden);
        let view = view(Culling::Frustum);
        let identity = Mat4::identity();

        let mut queue = RenderQueue::new();
        assert!(visit_node(&identity, &identity, &root, &view, &mut queue));
        assert_eq!(names(&queue), ["root"]);

        assert!(!visit_node(&identity, &identity, &root.children[0], &view, &mut queue));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_transforms_accumulate_down_the_tree() {
        let child = drawable("child").with_transform(Mat4::new_translation(&Vec3::new(0.0, 1.0, 0.0)));
        let root = Node::new("root")
            .with_transform(Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0)))
            .with_child(child);
        let placement = Mat4::new_translation(&Vec3::new(0.0, 0.0, -2.0));

        let mut queue = RenderQueue::new();
        collect_prefab(&placement, &root, &view(Culling::Frustum), &mut queue);

        // Empty root is not drawable but still passes its transform on
        assert_eq!(names(&queue), ["child"]);
        assert_relative_eq!(queue.items()[0].model.translation_part(), Vec3::new(1.0, 1.0, -2.0));
    }

    #[test]
    fn test_node_without_material_is_not_queued() {
        let node = Node::new("bare").with_mesh(Arc::new(Mesh::cube("bare", 0.5)));
        let mut queue = RenderQueue::new();
        collect_prefab(&Mat4::identity(), &node, &view(Culling::Frustum), &mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_collect_scene_uses_entity_placement() {
        let prefab = Arc::new(Prefab::new("crate", drawable("crate")));
        let mut scene = Scene::new();
        scene.add_entity(PrefabEntity::new("left", Mat4::new_translation(&Vec3::new(-1.0, 0.0, 0.0)), prefab.clone()));
        let mut hidden = PrefabEntity::new("hidden", Mat4::identity(), prefab.clone());
        hidden.visible = false;
        scene.add_entity(hidden);
        scene.add_entity(PrefabEntity::new("right", Mat4::new_translation(&Vec3::new(1.0, 0.0, 0.0)), prefab));
        scene.add_entity(LightEntity::new("lamp", Vec3::zeros(), crate::render::Light::default()));

        let mut queue = RenderQueue::new();
        collect_scene(&scene, &camera(), Culling::Frustum, &mut queue);

        let xs: Vec<f32> = queue.iter().map(|item| item.model.translation_part().x).collect();
        assert_eq!(xs.len(), 2);
        assert_relative_eq!(xs[0], -1.0);
        assert_relative_eq!(xs[1], 1.0);
    }

    #[test]
    fn test_view_matches_camera_frustum_test() {
        let camera = camera();
        let view = TraversalView::new(&camera, Culling::Frustum);
        let half = Vec3::new(0.5, 0.5, 0.5);
        for center in [
            Vec3::zeros(),
            Vec3::new(0.0, 0.0, 30.0),
            Vec3::new(6.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -95.0),
            Vec3::new(0.0, 0.0, -120.0),
        ] {
            assert_eq!(view.contains_box(center, half), camera.test_box_in_frustum(center, half));
        }
        assert_relative_eq!(view.eye(), camera.eye_position());

        let unculled = TraversalView::new(&camera, Culling::Disabled);
        assert!(unculled.contains_box(Vec3::new(0.0, 0.0, 30.0), half));
    }
}
