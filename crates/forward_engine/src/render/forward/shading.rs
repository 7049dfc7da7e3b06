//! Forward shading loop
//!
//! Each queued item binds its material once, then is drawn once per active
//! light. The first light pass uses the material blending and uploads the
//! ambient term; later passes blend additively at `LessEqual` depth with a
//! zero ambient so ambient is only counted once.

use crate::render::pipeline::PipelineState;
use crate::render::{
    BackendResult, Camera, DrawItem, Material, Mesh, PrimitiveKind, RenderBackend, RenderError,
    RenderQueue, RenderResult, ShaderHandle,
};
use crate::scene::{LightEntity, Scene};

/// Per-frame shading inputs that stay fixed across items
pub struct ShadingContext<'s> {
    /// Scene supplying ambient and lights
    pub scene: &'s Scene,
    /// Viewing camera
    pub camera: &'s Camera,
    /// Name of the shading program
    pub shader_name: &'s str,
    /// Topology passed to every draw
    pub primitive: PrimitiveKind,
    /// Value uploaded as `u_time`
    pub time: f32,
}

/// Outcome of shading one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Missing mesh, missing material or a mesh with no vertices
    Skipped,
    /// Drawn with `draw_calls` light passes; zero when the scene has no lights
    Drawn {
        /// Number of submissions issued
        draw_calls: usize,
    },
}

/// Counters produced by one pass over the queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadingStats {
    /// Items that issued at least one draw
    pub items_drawn: usize,
    /// Items skipped for missing geometry or material
    pub items_skipped: usize,
    /// Drawable items that issued no draw because no light is active
    pub items_unlit: usize,
    /// Total draw submissions
    pub draw_calls: usize,
}

/// Shade every queued item in order
///
/// The queue is cleared whether or not shading succeeds. A missing shading
/// program aborts the frame with [`RenderError::MissingShader`].
pub fn render_queue(
    queue: &mut RenderQueue<'_>,
    context: &ShadingContext<'_>,
    backend: &mut dyn RenderBackend,
) -> RenderResult<ShadingStats> {
    let result = shade_all(queue, context, backend);
    queue.clear();
    result
}

fn shade_all(
    queue: &RenderQueue<'_>,
    context: &ShadingContext<'_>,
    backend: &mut dyn RenderBackend,
) -> RenderResult<ShadingStats> {
    let mut stats = ShadingStats::default();
    if queue.is_empty() {
        return Ok(stats);
    }

    let Some(shader) = backend.find_shader(context.shader_name) else {
        log::error!("Shading program '{}' not found, frame not shaded", context.shader_name);
        return Err(RenderError::MissingShader(context.shader_name.to_string()));
    };

    let lights = context.scene.active_lights();
    for item in queue.iter() {
        match shade_item(item, &lights, shader, context, backend)? {
            ItemOutcome::Skipped => stats.items_skipped += 1,
            ItemOutcome::Drawn { draw_calls: 0 } => stats.items_unlit += 1,
            ItemOutcome::Drawn { draw_calls } => {
                stats.items_drawn += 1;
                stats.draw_calls += draw_calls;
            }
        }
    }
    Ok(stats)
}

/// Bind material state for one item and draw it once per light
pub fn shade_item(
    item: &DrawItem<'_>,
    lights: &[&LightEntity],
    shader: ShaderHandle,
    context: &ShadingContext<'_>,
    backend: &mut dyn RenderBackend,
) -> BackendResult<ItemOutcome> {
    let (Some(mesh), Some(material)) = (item.mesh(), item.material()) else {
        return Ok(ItemOutcome::Skipped);
    };
    if !mesh.has_vertices() {
        return Ok(ItemOutcome::Skipped);
    }

    let material_state = PipelineState::for_material(material);
    backend.apply_state(material_state)?;
    if let Err(error) = backend.enable_program(shader) {
        backend.apply_state(material_state.restored())?;
        return Err(error);
    }

    let passes = bind_and_draw(
        item,
        mesh,
        material,
        material_state,
        lights,
        shader,
        context,
        backend,
    );

    // Program and state are restored even when a pass failed
    let disabled = backend.disable_program(shader);
    let restored = backend.apply_state(material_state.restored());
    passes?;
    disabled?;
    restored?;

    Ok(ItemOutcome::Drawn {
        draw_calls: lights.len(),
    })
}

fn bind_and_draw(
    item: &DrawItem<'_>,
    mesh: &Mesh,
    material: &Material,
    material_state: PipelineState,
    lights: &[&LightEntity],
    shader: ShaderHandle,
    context: &ShadingContext<'_>,
    backend: &mut dyn RenderBackend,
) -> BackendResult<()> {
    material.bind_textures(backend, shader)?;
    context.camera.upload_uniforms(backend, shader)?;
    backend.set_uniform(shader, "u_model", item.model.into())?;
    backend.set_uniform(shader, "u_time", context.time.into())?;
    material.upload_uniforms(backend, shader)?;

    for (index, light) in lights.iter().enumerate() {
        let is_first = index == 0;
        if is_first {
            backend.apply_state(material_state.first_light_pass())?;
        } else {
            backend.apply_state(material_state.additional_light_pass())?;
        }
        context.scene.upload_global_uniforms(backend, shader, is_first)?;
        light.upload_uniforms(backend, shader)?;

        log::trace!("draw '{}' light {} ('{}')", item.node.name, index, light.name);
        backend.draw_mesh(mesh, context.primitive)?;
    }
    Ok(())
}
