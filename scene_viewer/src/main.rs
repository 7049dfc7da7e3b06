//! Headless scene viewer
//!
//! Loads a scene description and renderer settings, builds a small prefab
//! library in code, and renders a short camera orbit through the recording
//! backend, printing what each frame submitted.
//!
//! Usage: `scene_viewer [scene.ron|scene.toml] [renderer.toml|renderer.ron]`

use std::path::PathBuf;
use std::sync::Arc;

use forward_engine::foundation::logging;
use forward_engine::foundation::math::{utils, Mat4, Mat4Ext, Vec3, Vec4};
use forward_engine::prelude::*;
use forward_engine::render::{TextureHandle, TextureSlot};

const ORBIT_FRAMES: u16 = 8;
const ORBIT_RADIUS: f32 = 9.0;

/// Viewer state: scene, camera and renderer driven against a recording backend
pub struct ViewerApp {
    scene: Scene,
    camera: Camera,
    renderer: ForwardRenderer,
    backend: RecordingBackend,
}

impl ViewerApp {
    /// Load settings and scene from disk
    pub fn new(scene_path: PathBuf, config_path: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        let config = if config_path.exists() {
            RendererConfig::load_from_file(&config_path)?
        } else {
            log::warn!("No renderer config at {}, using defaults", config_path.display());
            RendererConfig::default()
        };

        let library = demo_library();
        let scene = Scene::load_from_file(&scene_path, &library)?;

        let mut camera = Camera::perspective(Vec3::new(0.0, 3.0, ORBIT_RADIUS), 45.0, 800.0 / 600.0, 0.1, 100.0);
        camera.look_at(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));

        let backend = RecordingBackend::new().with_shader(&config.shader_name);

        Ok(Self {
            scene,
            camera,
            renderer: ForwardRenderer::new(config),
            backend,
        })
    }

    /// Render the orbit and print per-frame statistics
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        for frame in 0..ORBIT_FRAMES {
            let angle = utils::deg_to_rad(360.0 * f32::from(frame) / f32::from(ORBIT_FRAMES));
            let eye = Mat4::rotation_y(angle).transform_position(Vec3::new(0.0, 3.0, ORBIT_RADIUS));
            self.camera.set_position(eye);
            self.camera.look_at(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0));

            self.backend.reset();
            let stats = self.renderer.render_scene(&self.scene, &self.camera, &mut self.backend)?;

            let order: Vec<&str> = self.backend.draws().map(|draw| draw.mesh.as_str()).collect();
            println!(
                "frame {frame}: {} items, {} draw calls, {} skipped, {} unlit | {}",
                stats.items_collected,
                stats.draw_calls,
                stats.items_skipped,
                stats.items_unlit,
                order.join(" ")
            );
        }
        Ok(())
    }
}

/// Prefabs the demo scene refers to by name
fn demo_library() -> PrefabLibrary {
    let stone = Arc::new(
        Material::opaque("stone", Vec4::new(0.7, 0.68, 0.62, 1.0))
            .with_metallic_roughness(0.0, 0.9)
            .with_texture(TextureSlot::Color, TextureHandle(1)),
    );
    let glass = Arc::new(Material::transparent("glass", Vec4::new(0.6, 0.8, 1.0, 0.35)).with_two_sided(true));
    let lamp_glow = Arc::new(
        Material::opaque("lamp_glow", Vec4::new(1.0, 0.9, 0.6, 1.0)).with_emissive_factor(Vec3::new(1.0, 0.9, 0.6)),
    );

    let cube = Arc::new(Mesh::cube("cube", 0.5));
    let pane = Arc::new(Mesh::quad("pane", 2.0, 2.0));
    let bulb = Arc::new(Mesh::cube("bulb", 0.1));

    // Post with a lamp on top and a glass shade around it
    let lamp_post = Node::new("post")
        .with_transform(Mat4::new_nonuniform_scaling(&Vec3::new(0.2, 3.0, 0.2)))
        .with_mesh(cube.clone())
        .with_material(stone.clone());
    let lamp_head = Node::new("head")
        .with_transform(Mat4::new_translation(&Vec3::new(0.0, 1.6, 0.0)))
        .with_mesh(bulb)
        .with_material(lamp_glow)
        .with_child(
            Node::new("shade")
                .with_transform(Mat4::new_nonuniform_scaling(&Vec3::new(0.2, 0.2, 0.2)))
                .with_mesh(pane.clone())
                .with_material(glass.clone()),
        );
    let street_lamp = Node::new("street_lamp").with_child(lamp_post).with_child(lamp_head);

    PrefabLibrary::new()
        .with(Prefab::single("crate", cube, stone))
        .with(Prefab::single("window", pane, glass))
        .with(Prefab::new("street_lamp", street_lamp))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_level(log::LevelFilter::Info);

    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets");
    let mut args = std::env::args().skip(1);
    let scene_path = args.next().map_or_else(|| assets.join("demo_scene.ron"), PathBuf::from);
    let config_path = args.next().map_or_else(|| assets.join("renderer.toml"), PathBuf::from);

    log::info!("Starting scene viewer");
    let mut app = ViewerApp::new(scene_path, config_path)?;
    app.run()?;
    log::info!("Scene viewer finished");
    Ok(())
}
