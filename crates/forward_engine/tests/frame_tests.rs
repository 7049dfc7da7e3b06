//! Whole-frame rendering tests
//!
//! Tests for:
//! - Multi-light pass sequencing (depth, blending, ambient)
//! - Pipeline state restored between items
//! - Frustum culling and hierarchical visibility through a full frame
//! - Opaque/transparent draw ordering
//! - Scene descriptions loaded from text and rendered

use std::sync::Arc;

use forward_engine::config::ConfigFormat;
use forward_engine::prelude::*;
use forward_engine::render::{
    BlendMode, CullMode, DepthFunc, PipelineState, RecordedCommand, UniformValue,
};
use forward_engine::scene::SceneDescription;

const SHADER: &str = "phong";

fn camera() -> Camera {
    Camera::perspective(Vec3::new(0.0, 0.0, 10.0), 60.0, 1.0, 0.1, 100.0)
}

fn backend() -> RecordingBackend {
    RecordingBackend::new().with_shader(SHADER)
}

fn solid(name: &str) -> Arc<Material> {
    Arc::new(Material::opaque(name, Vec4::new(0.8, 0.8, 0.8, 1.0)))
}

fn glass(name: &str) -> Arc<Material> {
    Arc::new(Material::transparent(name, Vec4::new(0.6, 0.8, 1.0, 0.4)))
}

fn cube_prefab(name: &str, material: Arc<Material>) -> Arc<Prefab> {
    Arc::new(Prefab::single(name, Arc::new(Mesh::cube(name, 0.5)), material))
}

fn at(x: f32, y: f32, z: f32) -> Mat4 {
    Mat4::new_translation(&Vec3::new(x, y, z))
}

fn drawn_meshes(backend: &RecordingBackend) -> Vec<String> {
    backend.draws().map(|draw| draw.mesh.clone()).collect()
}

#[test]
fn test_two_light_frame() {
    let mut scene = Scene::new().with_ambient_light(Vec3::new(0.1, 0.1, 0.1));
    scene.add_entity(PrefabEntity::new("box", Mat4::identity(), cube_prefab("box", solid("box"))));
    scene.add_entity(LightEntity::new("key", Vec3::new(2.0, 4.0, 2.0), Light::point(Vec3::new(1.0, 1.0, 1.0), 1.0, 50.0)));
    scene.add_entity(LightEntity::new("fill", Vec3::new(-2.0, 1.0, 2.0), Light::point(Vec3::new(0.3, 0.3, 0.5), 0.5, 50.0)));

    let mut backend = backend();
    let mut renderer = ForwardRenderer::default();
    let stats = renderer.render_scene(&scene, &camera(), &mut backend).unwrap();

    assert_eq!(stats.draw_calls, 2);
    let draws: Vec<_> = backend.draws().collect();
    assert_eq!(draws.len(), 2);
    assert_eq!((draws[0].state.depth, draws[0].state.blend), (DepthFunc::Less, BlendMode::Disabled));
    assert_eq!((draws[1].state.depth, draws[1].state.blend), (DepthFunc::LessEqual, BlendMode::Additive));

    assert_eq!(draws[0].uniform("u_light_position"), Some(&UniformValue::Vec3(Vec3::new(2.0, 4.0, 2.0))));
    assert_eq!(draws[1].uniform("u_light_position"), Some(&UniformValue::Vec3(Vec3::new(-2.0, 1.0, 2.0))));
    assert_eq!(
        backend.uniform_uploads("u_ambient_light"),
        vec![UniformValue::Vec3(Vec3::new(0.1, 0.1, 0.1)), UniformValue::Vec3(Vec3::zeros())]
    );

    // Program disabled and state restored once the item is done
    assert!(matches!(
        backend.commands()[backend.commands().len() - 2],
        RecordedCommand::DisableProgram(_)
    ));
    assert_eq!(backend.current_state(), PipelineState::RESTING);
}

#[test]
fn test_zero_light_frame() {
    let mut scene = Scene::new();
    scene.add_entity(PrefabEntity::new("box", Mat4::identity(), cube_prefab("box", solid("box"))));

    let mut backend = backend();
    let stats = ForwardRenderer::default().render_scene(&scene, &camera(), &mut backend).unwrap();

    assert_eq!(backend.draw_count(), 0);
    assert_eq!(stats.items_collected, 1);
    assert_eq!(stats.items_unlit, 1);
}

#[test]
fn test_culled_and_hidden_geometry_is_not_drawn() {
    let prefab = cube_prefab("box", solid("box"));
    let mut scene = Scene::new();
    scene.add_entity(PrefabEntity::new("visible", Mat4::identity(), prefab.clone()));
    scene.add_entity(PrefabEntity::new("behind_camera", at(0.0, 0.0, 40.0), prefab.clone()));
    let mut hidden = PrefabEntity::new("hidden", at(1.0, 0.0, 0.0), prefab);
    hidden.visible = false;
    scene.add_entity(hidden);
    scene.add_entity(LightEntity::new("lamp", Vec3::new(0.0, 5.0, 0.0), Light::default()));

    let mut backend = backend();
    let stats = ForwardRenderer::default().render_scene(&scene, &camera(), &mut backend).unwrap();
    assert_eq!(stats.items_collected, 1);
    assert_eq!(backend.draw_count(), 1);

    // Without culling the box behind the camera is submitted too
    let mut backend = self::backend();
    let mut renderer = ForwardRenderer::new(RendererConfig::default().with_frustum_culling(false));
    let stats = renderer.render_scene(&scene, &camera(), &mut backend).unwrap();
    assert_eq!(stats.items_collected, 2);
}

#[test]
fn test_hidden_node_hides_descendants() {
    let mesh = Arc::new(Mesh::cube("part", 0.25));
    let root = Node::new("body")
        .with_mesh(mesh.clone())
        .with_material(solid("body"))
        .with_child(
            Node::new("arm")
                .with_visible(false)
                .with_mesh(mesh.clone())
                .with_material(solid("arm"))
                .with_child(Node::new("hand").with_mesh(mesh).with_material(solid("hand"))),
        );
    let mut scene = Scene::new();
    scene.add_entity(PrefabEntity::new("robot", Mat4::identity(), Arc::new(Prefab::new("robot", root))));
    scene.add_entity(LightEntity::new("lamp", Vec3::new(0.0, 5.0, 0.0), Light::default()));

    let mut backend = backend();
    let stats = ForwardRenderer::default().render_scene(&scene, &camera(), &mut backend).unwrap();
    assert_eq!(stats.items_collected, 1);
    assert_eq!(stats.draw_calls, 1);
}

#[test]
fn test_opaque_first_then_transparent_back_to_front() {
    let mut scene = Scene::new();
    // Camera sits at z = 10: near glass at distance 5, far glass at distance 10
    scene.add_entity(PrefabEntity::new("B", at(0.0, 0.0, 5.0), cube_prefab("B", glass("B"))));
    scene.add_entity(PrefabEntity::new("A", at(0.0, 0.0, -20.0), cube_prefab("A", solid("A"))));
    scene.add_entity(PrefabEntity::new("C", at(0.0, 0.0, 0.0), cube_prefab("C", glass("C"))));
    scene.add_entity(LightEntity::new("lamp", Vec3::new(0.0, 5.0, 0.0), Light::default()));

    let mut backend = backend();
    ForwardRenderer::default().render_scene(&scene, &camera(), &mut backend).unwrap();
    assert_eq!(drawn_meshes(&backend), ["A", "C", "B"]);

    let blends: Vec<BlendMode> = backend.draws().map(|draw| draw.state.blend).collect();
    assert_eq!(blends, [BlendMode::Disabled, BlendMode::AlphaBlend, BlendMode::AlphaBlend]);
}

#[test]
fn test_frames_do_not_accumulate_items() {
    let mut scene = Scene::new();
    scene.add_entity(PrefabEntity::new("box", Mat4::identity(), cube_prefab("box", solid("box"))));
    scene.add_entity(LightEntity::new("lamp", Vec3::new(0.0, 5.0, 0.0), Light::default()));

    let mut backend = backend();
    let mut renderer = ForwardRenderer::default();
    for _ in 0..3 {
        backend.reset();
        let stats = renderer.render_scene(&scene, &camera(), &mut backend).unwrap();
        assert_eq!(stats.items_collected, 1);
        assert_eq!(backend.draw_count(), 1);
    }
    assert_eq!(renderer.frame_count(), 3);
}

#[test]
fn test_missing_program_fails_the_frame() {
    let mut scene = Scene::new();
    scene.add_entity(PrefabEntity::new("box", Mat4::identity(), cube_prefab("box", solid("box"))));
    scene.add_entity(LightEntity::new("lamp", Vec3::new(0.0, 5.0, 0.0), Light::default()));

    let mut backend = RecordingBackend::new();
    let result = ForwardRenderer::default().render_scene(&scene, &camera(), &mut backend);
    assert_eq!(result, Err(RenderError::MissingShader(SHADER.to_string())));
    assert_eq!(backend.draw_count(), 0);
}

#[test]
fn test_described_scene_renders() {
    let text = r#"(
        background_color: (0.05, 0.05, 0.1),
        ambient_light: (0.2, 0.2, 0.2),
        entities: [
            (type: "PREFAB", name: "floor", prefab: "crate", position: (0.0, -1.0, 0.0), scale: (4.0, 0.1, 4.0)),
            (type: "PREFAB", name: "window", prefab: "pane", position: (0.0, 0.0, 2.0)),
            (type: "PREFAB", name: "lost", prefab: "not_loaded"),
            (type: "LIGHT", name: "sun", light_type: "DIRECTIONAL", direction: (0.0, -1.0, -1.0)),
            (type: "LIGHT", name: "bulb", light_type: "POINT", position: (0.0, 3.0, 0.0), max_distance: 20.0),
            (type: "LIGHT", name: "hidden_lamp", visible: false),
        ],
    )"#;
    let library = PrefabLibrary::new()
        .with(Prefab::single("crate", Arc::new(Mesh::cube("crate", 0.5)), solid("crate")))
        .with(Prefab::single("pane", Arc::new(Mesh::quad("pane", 1.0, 1.0)), glass("pane")));

    let scene = SceneDescription::from_str_with_format(text, ConfigFormat::Ron)
        .unwrap()
        .build(&library);

    let mut backend = backend();
    let stats = ForwardRenderer::default().render_scene(&scene, &camera(), &mut backend).unwrap();

    // Three lights, the hidden one included
    assert_eq!(stats.items_collected, 2);
    assert_eq!(stats.draw_calls, 6);
    assert_eq!(drawn_meshes(&backend), ["crate", "crate", "crate", "pane", "pane", "pane"]);
    assert!(matches!(
        backend.commands().first(),
        Some(RecordedCommand::Clear { color, .. }) if *color == Vec4::new(0.05, 0.05, 0.1, 1.0)
    ));
}

#[test]
fn test_state_does_not_leak_between_items() {
    let pane = Arc::new(Material::transparent("pane", Vec4::new(0.6, 0.8, 1.0, 0.4)).with_two_sided(true));
    let mut scene = Scene::new();
    scene.add_entity(PrefabEntity::new("stone", Mat4::identity(), cube_prefab("stone", solid("stone"))));
    scene.add_entity(PrefabEntity::new("pane", at(0.0, 0.0, 3.0), cube_prefab("pane", pane)));
    scene.add_entity(LightEntity::new("key", Vec3::new(2.0, 4.0, 2.0), Light::default()));
    scene.add_entity(LightEntity::new("fill", Vec3::new(-2.0, 1.0, 2.0), Light::default()));

    let mut backend = backend();
    ForwardRenderer::default().render_scene(&scene, &camera(), &mut backend).unwrap();

    let state = |blend, depth, cull| PipelineState { blend, depth, cull };
    assert_eq!(
        backend.state_transitions(),
        vec![
            // Opaque stone: material, first pass, additional pass, restored
            state(BlendMode::Disabled, DepthFunc::Less, CullMode::Back),
            state(BlendMode::Disabled, DepthFunc::Less, CullMode::Back),
            state(BlendMode::Additive, DepthFunc::LessEqual, CullMode::Back),
            state(BlendMode::Disabled, DepthFunc::Less, CullMode::Back),
            // Two-sided transparent pane
            state(BlendMode::AlphaBlend, DepthFunc::Less, CullMode::Disabled),
            state(BlendMode::AlphaBlend, DepthFunc::Less, CullMode::Disabled),
            state(BlendMode::Additive, DepthFunc::LessEqual, CullMode::Disabled),
            state(BlendMode::Disabled, DepthFunc::Less, CullMode::Disabled),
        ]
    );

    // The pane's first pass is back at its own blend with depth Less
    let draws: Vec<_> = backend.draws().collect();
    assert_eq!(drawn_meshes(&backend), ["stone", "stone", "pane", "pane"]);
    assert_eq!(draws[2].state, state(BlendMode::AlphaBlend, DepthFunc::Less, CullMode::Disabled));
}

#[test]
fn test_hidden_light_still_shades_every_item() {
    let mut scene = Scene::new();
    scene.add_entity(PrefabEntity::new("stone", Mat4::identity(), cube_prefab("stone", solid("stone"))));
    scene.add_entity(PrefabEntity::new("pane", at(0.0, 0.0, 3.0), cube_prefab("pane", glass("pane"))));
    scene.add_entity(LightEntity::new("key", Vec3::new(2.0, 4.0, 2.0), Light::default()));
    let mut hidden = LightEntity::new("hidden", Vec3::new(0.0, 6.0, 0.0), Light::default());
    hidden.visible = false;
    scene.add_entity(hidden);
    scene.add_entity(LightEntity::new("fill", Vec3::new(-2.0, 1.0, 2.0), Light::default()));

    let mut backend = backend();
    let stats = ForwardRenderer::default().render_scene(&scene, &camera(), &mut backend).unwrap();

    assert_eq!(stats.draw_calls, 6);
    let positions: Vec<_> = backend.draws().map(|draw| draw.uniform("u_light_position").copied()).collect();
    assert_eq!(positions[1], Some(UniformValue::Vec3(Vec3::new(0.0, 6.0, 0.0))));
    assert_eq!(positions[4], Some(UniformValue::Vec3(Vec3::new(0.0, 6.0, 0.0))));
}
