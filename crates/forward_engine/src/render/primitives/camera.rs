//! # 3D Camera System
//!
//! Perspective camera providing the eye position, the view-projection
//! transform, the frustum used for culling and the camera uniforms of the
//! shading program.
//!
//! ## Design Principles
//! - **Library-agnostic**: No graphics API types in camera math
//! - **On-demand matrices**: Matrices are derived from the parameters on every call
//! - **Right-handed, Y-up**: Standard OpenGL-style view space with depth in [-1, 1]

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use crate::render::api::{BackendResult, RenderBackend, ShaderHandle};
use crate::scene::Frustum;

/// 3D Camera for perspective projections
///
/// # Performance Notes
/// Matrix calculations are performed on-demand rather than cached. The forward
/// renderer builds the frustum once per visited node, so callers rendering
/// very large prefabs may want to hold a [`Frustum`] themselves.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height) for projection calculations
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera with standard Y-up orientation
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view angle in degrees (converted to radians internally)
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    ///
    /// # Example
    /// ```rust
    /// use forward_engine::foundation::math::Vec3;
    /// use forward_engine::render::Camera;
    ///
    /// let camera = Camera::perspective(Vec3::new(0.0, 2.0, 5.0), 75.0, 16.0 / 9.0, 0.1, 100.0);
    /// assert_eq!(camera.eye_position(), Vec3::new(0.0, 2.0, 5.0));
    /// ```
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Update camera position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Configure camera to look at a specific point with custom up vector
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Only logs changes larger than 0.01 to keep resize storms quiet.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// Eye position in world space
    pub const fn eye_position(&self) -> Vec3 {
        self.position
    }

    /// World-to-camera transform
    pub fn get_view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Camera-to-clip transform
    pub fn get_projection_matrix(&self) -> Mat4 {
        Mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Combined `projection * view`
    pub fn get_view_projection_matrix(&self) -> Mat4 {
        self.get_projection_matrix() * self.get_view_matrix()
    }

    /// View volume as six world-space planes
    pub fn frustum(&self) -> Frustum {
        Frustum::from_matrix(&self.get_view_projection_matrix())
    }

    /// Whether a world-space box given by center and half extents intersects the view volume
    pub fn test_box_in_frustum(&self, center: Vec3, half_extents: Vec3) -> bool {
        self.frustum().intersects_box(center, half_extents)
    }

    /// Upload `u_viewprojection` and `u_camera_position`
    pub fn upload_uniforms(&self, backend: &mut dyn RenderBackend, shader: ShaderHandle) -> BackendResult<()> {
        backend.set_uniform(shader, "u_viewprojection", self.get_view_projection_matrix().into())?;
        backend.set_uniform(shader, "u_camera_position", self.position.into())
    }
}

impl Default for Camera {
    /// Camera above and behind the origin, looking at it
    ///
    /// - Position: (0, 3, 3)
    /// - FOV: 45 degrees
    /// - Aspect: 16:9
    /// - Near / far: 0.1 / 1000.0
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 3.0),
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}
