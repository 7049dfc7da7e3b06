//! Public rendering API
//!
//! The backend trait the forward renderer draws through, an in-memory
//! recording implementation of it, and the renderer configuration.

pub mod recording_backend;
pub mod render_backend;
pub mod renderer_config;

// Re-export commonly used types
pub use recording_backend::{DrawRecord, RecordedCommand, RecordingBackend};
pub use render_backend::{BackendResult, ClearFlags, PrimitiveKind, RenderBackend, ShaderHandle, UniformValue};
pub use renderer_config::RendererConfig;
