//! Rendering system
//!
//! Forward rendering of prefab scenes:
//!
//! 1. [`forward::collect_scene`] walks every visible prefab instance and emits
//!    a [`DrawItem`] per visible, drawable node inside the camera frustum.
//! 2. [`RenderQueue::sort`] puts opaque items first and transparent items
//!    back to front.
//! 3. [`forward::render_queue`] draws each item once per active light, the
//!    first pass with material blending and every later pass additively.
//!
//! All GPU work is issued through the [`RenderBackend`] trait.

pub mod api;
pub mod draw_item;
pub mod forward;
pub mod pipeline;
pub mod primitives;
pub mod render_queue;
pub mod resources;
pub mod systems;

pub use api::{
    BackendResult, ClearFlags, DrawRecord, PrimitiveKind, RecordedCommand, RecordingBackend, RenderBackend,
    RendererConfig, ShaderHandle, UniformValue,
};
pub use draw_item::DrawItem;
pub use forward::{ForwardRenderer, FrameStats};
pub use pipeline::{BlendFactor, BlendMode, CullMode, DepthFunc, PipelineState};
pub use primitives::{Camera, Mesh, Vertex};
pub use render_queue::RenderQueue;
pub use resources::{AlphaMode, Material, MaterialTextures, TextureHandle, TextureSlot};
pub use systems::lighting::{Light, LightType};

use thiserror::Error;

/// Rendering system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The shading program could not be found
    ///
    /// The whole shading loop is abandoned for the frame.
    #[error("Shading program not found: {0}")]
    MissingShader(String),

    /// The backend rejected a command
    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
