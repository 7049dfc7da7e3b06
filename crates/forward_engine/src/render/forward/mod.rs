//! Forward renderer
//!
//! Drives one frame: clear, collect draw items from the scene, sort them and
//! run the multi-light shading loop.

pub mod shading;
pub mod traversal;

pub use shading::{render_queue, shade_item, ItemOutcome, ShadingContext, ShadingStats};
pub use traversal::{collect_prefab, collect_scene, visit_node, Culling, TraversalView};

use crate::foundation::math::Vec4;
use crate::foundation::time::FrameClock;
use crate::render::{Camera, ClearFlags, RenderBackend, RenderQueue, RenderResult, RendererConfig};
use crate::scene::Scene;

/// Counters for one rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Items that passed visibility and culling
    pub items_collected: usize,
    /// Items that issued at least one draw
    pub items_drawn: usize,
    /// Items skipped for missing geometry or material
    pub items_skipped: usize,
    /// Drawable items with no active light to draw with
    pub items_unlit: usize,
    /// Total draw submissions
    pub draw_calls: usize,
}

/// Forward renderer with per-light additive passes
#[derive(Debug)]
pub struct ForwardRenderer {
    config: RendererConfig,
    clock: FrameClock,
    frame_count: u64,
}

impl ForwardRenderer {
    /// Create a renderer; `u_time` counts from this point
    pub fn new(config: RendererConfig) -> Self {
        log::info!(
            "Forward renderer: program '{}', frustum culling {}",
            config.shader_name,
            if config.frustum_culling { "on" } else { "off" }
        );
        Self {
            config,
            clock: FrameClock::new(),
            frame_count: 0,
        }
    }

    /// Active configuration
    pub const fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Frames rendered so far, including failed ones
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Render `scene` as seen from `camera`
    ///
    /// # Errors
    ///
    /// Returns [`crate::render::RenderError::MissingShader`] when the configured
    /// program is not available and any error the backend reports. The work
    /// list is discarded in both cases.
    pub fn render_scene(
        &mut self,
        scene: &Scene,
        camera: &Camera,
        backend: &mut dyn RenderBackend,
    ) -> RenderResult<FrameStats> {
        self.frame_count += 1;

        if self.config.clear_each_frame {
            let background = scene.background_color;
            backend.clear(
                ClearFlags::COLOR | ClearFlags::DEPTH,
                Vec4::new(background.x, background.y, background.z, 1.0),
            )?;
        }

        let mut queue = RenderQueue::new();
        collect_scene(scene, camera, Culling::from_enabled(self.config.frustum_culling), &mut queue);
        let items_collected = queue.len();
        queue.sort();

        let context = ShadingContext {
            scene,
            camera,
            shader_name: &self.config.shader_name,
            primitive: self.config.primitive,
            time: self.clock.elapsed_seconds(),
        };
        let shaded = render_queue(&mut queue, &context, backend)?;

        let stats = FrameStats {
            items_collected,
            items_drawn: shaded.items_drawn,
            items_skipped: shaded.items_skipped,
            items_unlit: shaded.items_unlit,
            draw_calls: shaded.draw_calls,
        };
        log::debug!(
            "frame {}: {} collected, {} drawn, {} skipped, {} unlit, {} draw calls",
            self.frame_count,
            stats.items_collected,
            stats.items_drawn,
            stats.items_skipped,
            stats.items_unlit,
            stats.draw_calls
        );
        Ok(stats)
    }
}

impl Default for ForwardRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}
