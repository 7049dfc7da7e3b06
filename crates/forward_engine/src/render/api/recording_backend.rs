//! In-memory render backend
//!
//! Records every call made through [`RenderBackend`] instead of talking to a
//! GPU. Draws capture the pipeline state and the uniforms of the active
//! program at submission time, which makes per-light pass sequencing
//! checkable without a graphics context.

use std::collections::HashMap;

use super::render_backend::{BackendResult, ClearFlags, PrimitiveKind, RenderBackend, ShaderHandle, UniformValue};
use crate::foundation::math::Vec4;
use crate::render::pipeline::PipelineState;
use crate::render::{Mesh, RenderError, TextureHandle};

/// Snapshot of one draw submission
#[derive(Debug, Clone, PartialEq)]
pub struct DrawRecord {
    /// Name of the submitted mesh
    pub mesh: String,
    /// Vertex count of the submitted mesh
    pub vertex_count: usize,
    /// Primitive topology
    pub primitive: PrimitiveKind,
    /// Program active at submission
    pub shader: ShaderHandle,
    /// Fixed-function state active at submission
    pub state: PipelineState,
    /// Uniforms of the active program at submission
    pub uniforms: HashMap<String, UniformValue>,
    /// Texture bound to each unit at submission
    pub textures: HashMap<u32, TextureHandle>,
}

impl DrawRecord {
    /// Value of a uniform at draw time
    pub fn uniform(&self, name: &str) -> Option<&UniformValue> {
        self.uniforms.get(name)
    }
}

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    /// Framebuffer clear
    Clear {
        /// Cleared attachments
        flags: ClearFlags,
        /// Clear color
        color: Vec4,
    },
    /// Pipeline state change
    ApplyState(PipelineState),
    /// Program enabled
    EnableProgram(ShaderHandle),
    /// Program disabled
    DisableProgram(ShaderHandle),
    /// Uniform upload
    SetUniform {
        /// Target program
        shader: ShaderHandle,
        /// Uniform name
        name: String,
        /// Uploaded value
        value: UniformValue,
    },
    /// Texture bind
    BindTexture {
        /// Target program
        shader: ShaderHandle,
        /// Sampler uniform name
        name: String,
        /// Bound texture
        texture: TextureHandle,
        /// Texture unit
        unit: u32,
    },
    /// Draw submission
    Draw(DrawRecord),
}

/// Render backend that records calls instead of executing them
#[derive(Debug, Default)]
pub struct RecordingBackend {
    shaders: HashMap<String, ShaderHandle>,
    active_program: Option<ShaderHandle>,
    state: PipelineState,
    uniforms: HashMap<ShaderHandle, HashMap<String, UniformValue>>,
    textures: HashMap<u32, TextureHandle>,
    commands: Vec<RecordedCommand>,
}

impl RecordingBackend {
    /// Create a backend with no registered programs
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shading program under `name`
    pub fn with_shader(mut self, name: &str) -> Self {
        self.register_shader(name);
        self
    }

    /// Register a shading program under `name` and return its handle
    pub fn register_shader(&mut self, name: &str) -> ShaderHandle {
        let next = ShaderHandle(u32::try_from(self.shaders.len()).unwrap_or(u32::MAX).saturating_add(1));
        *self.shaders.entry(name.to_string()).or_insert(next)
    }

    /// Every recorded call in submission order
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Recorded draw submissions in order
    pub fn draws(&self) -> impl Iterator<Item = &DrawRecord> + '_ {
        self.commands.iter().filter_map(|command| match command {
            RecordedCommand::Draw(draw) => Some(draw),
            _ => None,
        })
    }

    /// Number of draw submissions
    pub fn draw_count(&self) -> usize {
        self.draws().count()
    }

    /// Pipeline states applied, in order
    pub fn state_transitions(&self) -> Vec<PipelineState> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RecordedCommand::ApplyState(state) => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// Every value uploaded to uniform `name`, in order
    pub fn uniform_uploads(&self, name: &str) -> Vec<UniformValue> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                RecordedCommand::SetUniform { name: uploaded, value, .. } if uploaded == name => Some(*value),
                _ => None,
            })
            .collect()
    }

    /// Current pipeline state
    pub const fn current_state(&self) -> PipelineState {
        self.state
    }

    /// Currently enabled program
    pub const fn active_program(&self) -> Option<ShaderHandle> {
        self.active_program
    }

    /// Forget all recorded calls and bound state, keeping registered programs
    pub fn reset(&mut self) {
        self.active_program = None;
        self.state = PipelineState::default();
        self.uniforms.clear();
        self.textures.clear();
        self.commands.clear();
    }

    fn require_active(&self, shader: ShaderHandle, operation: &str) -> BackendResult<()> {
        if self.active_program == Some(shader) {
            Ok(())
        } else {
            Err(RenderError::BackendError(format!(
                "{operation} targets program {shader:?} but {:?} is active",
                self.active_program
            )))
        }
    }
}

impl RenderBackend for RecordingBackend {
    fn find_shader(&self, name: &str) -> Option<ShaderHandle> {
        self.shaders.get(name).copied()
    }

    fn clear(&mut self, flags: ClearFlags, color: Vec4) -> BackendResult<()> {
        self.commands.push(RecordedCommand::Clear { flags, color });
        Ok(())
    }

    fn apply_state(&mut self, state: PipelineState) -> BackendResult<()> {
        self.state = state;
        self.commands.push(RecordedCommand::ApplyState(state));
        Ok(())
    }

    fn enable_program(&mut self, shader: ShaderHandle) -> BackendResult<()> {
        if !self.shaders.values().any(|registered| *registered == shader) {
            return Err(RenderError::BackendError(format!("unknown program {shader:?}")));
        }
        self.active_program = Some(shader);
        self.commands.push(RecordedCommand::EnableProgram(shader));
        Ok(())
    }

    fn disable_program(&mut self, shader: ShaderHandle) -> BackendResult<()> {
        self.require_active(shader, "disable")?;
        self.active_program = None;
        self.commands.push(RecordedCommand::DisableProgram(shader));
        Ok(())
    }

    fn set_uniform(&mut self, shader: ShaderHandle, name: &str, value: UniformValue) -> BackendResult<()> {
        self.require_active(shader, "set_uniform")?;
        self.uniforms.entry(shader).or_default().insert(name.to_string(), value);
        self.commands.push(RecordedCommand::SetUniform {
            shader,
            name: name.to_string(),
            value,
        });
        Ok(())
    }

    fn bind_texture(&mut self, shader: ShaderHandle, name: &str, texture: TextureHandle, unit: u32) -> BackendResult<()> {
        self.require_active(shader, "bind_texture")?;
        self.textures.insert(unit, texture);
        self.commands.push(RecordedCommand::BindTexture {
            shader,
            name: name.to_string(),
            texture,
            unit,
        });
        Ok(())
    }

    fn draw_mesh(&mut self, mesh: &Mesh, primitive: PrimitiveKind) -> BackendResult<()> {
        let shader = self
            .active_program
            .ok_or_else(|| RenderError::BackendError(format!("draw of '{}' with no program enabled", mesh.name)))?;

        let record = DrawRecord {
            mesh: mesh.name.clone(),
            vertex_count: mesh.vertex_count(),
            primitive,
            shader,
            state: self.state,
            uniforms: self.uniforms.get(&shader).cloned().unwrap_or_default(),
            textures: self.textures.clone(),
        };
        log::trace!("draw '{}' ({} vertices) with {:?}", record.mesh, record.vertex_count, record.state);
        self.commands.push(RecordedCommand::Draw(record));
        Ok(())
    }
}
