//! Camera parameters bundled into a single value.

use clipspace_core::{Mat4, Result, Tolerances, Vec3};
use serde::{Deserialize, Serialize};

use crate::projection::build_perspective;
use crate::transform::{transform_with, TransformedBatch};
use crate::view::CameraFrame;

/// A perspective camera: where it is, where it looks, and its frustum.
///
/// The camera holds plain configuration. Nothing is validated until a matrix
/// is requested, so an invalid camera reports its error at that point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector. Need not be orthogonal to the viewing direction.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f64,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f64,
    /// Near clipping plane distance.
    pub near: f64,
    /// Far clipping plane distance.
    pub far: f64,
    /// Degeneracy thresholds.
    pub tolerances: Tolerances,
}

impl Camera {
    /// Creates a camera at `position` looking at `target`, with the default
    /// frustum (60 degrees, square aspect, near 0.5, far 50).
    #[must_use]
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        Self {
            position,
            target,
            up,
            ..Self::default()
        }
    }

    /// Sets the frustum parameters.
    #[must_use]
    pub fn with_perspective(
        mut self,
        fov_y_degrees: f64,
        aspect_ratio: f64,
        near: f64,
        far: f64,
    ) -> Self {
        self.fov_y_degrees = fov_y_degrees;
        self.aspect_ratio = aspect_ratio;
        self.near = near;
        self.far = far;
        self
    }

    /// Returns a copy of this camera moved to `position`, keeping target and up.
    #[must_use]
    pub fn moved_to(&self, position: Vec3) -> Self {
        Self { position, ..*self }
    }

    /// Returns the vertical field of view in radians.
    #[must_use]
    pub fn fov_radians(&self) -> f64 {
        self.fov_y_degrees.to_radians()
    }

    /// Returns the orthonormal camera basis.
    pub fn frame(&self) -> Result<CameraFrame> {
        CameraFrame::look_at(self.position, self.target, self.up, &self.tolerances)
    }

    /// Returns the camera's forward direction.
    pub fn forward(&self) -> Result<Vec3> {
        self.frame().map(|f| f.forward)
    }

    /// Returns the view matrix.
    pub fn view_matrix(&self) -> Result<Mat4> {
        self.frame().map(|f| f.view_matrix())
    }

    /// Returns the projection matrix.
    pub fn projection_matrix(&self) -> Result<Mat4> {
        build_perspective(self.fov_y_degrees, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Result<Mat4> {
        Ok(self.projection_matrix()? * self.view_matrix()?)
    }

    /// Transforms `points` into clip space and NDC.
    ///
    /// Both matrices are built and validated before any point is touched.
    pub fn transform_points(&self, points: &[Vec3]) -> Result<TransformedBatch> {
        let view = self.view_matrix()?;
        let projection = self.projection_matrix()?;
        Ok(transform_with(&view, &projection, points, &self.tolerances))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            target: Vec3::new(0.0, 0.0, -5.0),
            up: Vec3::Y,
            fov_y_degrees: 60.0,
            aspect_ratio: 1.0,
            near: 0.5,
            far: 50.0,
            tolerances: Tolerances::default(),
        }
    }
}
