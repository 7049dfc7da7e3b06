//! Backend abstraction traits for the rendering system
//!
//! This module defines the low-level surface the forward renderer needs from
//! a graphics API: program binding, uniform upload, texture binding, fixed
//! function state and draw submission.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::foundation::math::{Mat4, Vec3, Vec4};
use crate::render::pipeline::PipelineState;
use crate::render::{Mesh, RenderError, TextureHandle};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to a compiled shading program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

bitflags! {
    /// Framebuffer attachments cleared at the start of a frame
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ClearFlags: u32 {
        /// Color attachment
        const COLOR = 0b01;
        /// Depth attachment
        const DEPTH = 0b10;
    }
}

/// Primitive topology of a draw submission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveKind {
    /// Triangle list
    #[default]
    Triangles,
    /// Line list
    Lines,
    /// Point list
    Points,
}

/// Value of a shader uniform
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Scalar float
    Float(f32),
    /// Scalar integer
    Int(i32),
    /// 3-component vector
    Vec3(Vec3),
    /// 4-component vector
    Vec4(Vec4),
    /// 4x4 matrix
    Mat4(Mat4),
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        Self::Vec3(value)
    }
}

impl From<Vec4> for UniformValue {
    fn from(value: Vec4) -> Self {
        Self::Vec4(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        Self::Mat4(value)
    }
}

/// Main rendering backend trait
///
/// Uniform uploads and texture binds target the program most recently
/// enabled; implementations may reject them when `shader` is not active.
pub trait RenderBackend {
    /// Look up a shading program by name
    fn find_shader(&self, name: &str) -> Option<ShaderHandle>;

    /// Clear framebuffer attachments
    fn clear(&mut self, flags: ClearFlags, color: Vec4) -> BackendResult<()>;

    /// Apply blend, depth and cull state for subsequent draws
    fn apply_state(&mut self, state: PipelineState) -> BackendResult<()>;

    /// Make `shader` the active program
    fn enable_program(&mut self, shader: ShaderHandle) -> BackendResult<()>;

    /// Unbind `shader`
    fn disable_program(&mut self, shader: ShaderHandle) -> BackendResult<()>;

    /// Set a named uniform on the active program
    fn set_uniform(&mut self, shader: ShaderHandle, name: &str, value: UniformValue) -> BackendResult<()>;

    /// Bind `texture` to texture unit `unit` and point sampler `name` at it
    fn bind_texture(&mut self, shader: ShaderHandle, name: &str, texture: TextureHandle, unit: u32) -> BackendResult<()>;

    /// Submit the full mesh with the current program and state
    fn draw_mesh(&mut self, mesh: &Mesh, primitive: PrimitiveKind) -> BackendResult<()>;
}
