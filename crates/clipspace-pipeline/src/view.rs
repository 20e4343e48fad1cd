//! Look-at view matrices and the camera basis they are built from.

use clipspace_core::{BasisDefect, ClipspaceError, Mat4, Result, Tolerances, Vec3, Vec4};

/// Orthonormal camera basis derived from an eye/target/up triple.
///
/// `right = normalize(forward x up)` and `up = right x forward`, so the
/// supplied up vector only needs to be non-parallel to `forward`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Unit vector pointing from the eye towards the target.
    pub forward: Vec3,
    /// Unit vector pointing to the right of the view.
    pub right: Vec3,
    /// Re-orthogonalized unit up vector.
    pub up: Vec3,
}

impl CameraFrame {
    /// Builds the camera basis for a camera at `eye` looking at `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ClipspaceError::InvalidParameter`] if `eye`, `target` or `up`
    /// has a non-finite component, or if `target - eye` overflows.
    ///
    /// Returns [`ClipspaceError::DegenerateBasis`] if `eye` and `target`
    /// coincide, or if `up` is zero or parallel to the viewing direction.
    /// Both are checked before any normalization.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3, tolerances: &Tolerances) -> Result<Self> {
        for (name, v) in [("eye", eye), ("target", target), ("up", up)] {
            if !v.is_finite() {
                return Err(ClipspaceError::invalid(
                    name,
                    v.length(),
                    "components must be finite",
                ));
            }
        }
        let offset = target - eye;
        if !offset.is_finite() {
            return Err(ClipspaceError::invalid(
                "target",
                offset.length(),
                "distance from eye overflows",
            ));
        }
        if offset.length() <= tolerances.basis_epsilon {
            return Err(ClipspaceError::DegenerateBasis(BasisDefect::EyeEqualsTarget));
        }
        // Scaled by the largest component so the length cannot overflow
        let forward = (offset / offset.abs().max_element()).normalize();

        let up_scale = up.abs().max_element();
        if up_scale == 0.0 {
            return Err(ClipspaceError::DegenerateBasis(
                BasisDefect::UpParallelToForward,
            ));
        }
        let up_dir = up / up_scale;
        let side = forward.cross(up_dir);
        let side_len = side.length();
        if side_len <= tolerances.basis_epsilon * up_dir.length() {
            return Err(ClipspaceError::DegenerateBasis(
                BasisDefect::UpParallelToForward,
            ));
        }
        let right = side / side_len;
        let up = right.cross(forward);

        log::debug!("camera frame: eye={eye} forward={forward} right={right} up={up}");
        Ok(Self {
            eye,
            forward,
            right,
            up,
        })
    }

    /// Returns the world-to-camera matrix.
    ///
    /// Rows of the rotation block are `right`, `up` and `-forward`; the
    /// translation column moves `eye` to the origin.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let (r, u, f) = (self.right, self.up, self.forward);
        Mat4::from_cols(
            Vec4::new(r.x, u.x, -f.x, 0.0),
            Vec4::new(r.y, u.y, -f.y, 0.0),
            Vec4::new(r.z, u.z, -f.z, 0.0),
            Vec4::new(-r.dot(self.eye), -u.dot(self.eye), f.dot(self.eye), 1.0),
        )
    }

    /// Returns the camera-to-world matrix, the exact inverse of
    /// [`CameraFrame::view_matrix`].
    #[must_use]
    pub fn inverse_view_matrix(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            (-self.forward).extend(0.0),
            self.eye.extend(1.0),
        )
    }
}

/// Builds the view matrix for a camera at `eye` looking at `target`.
///
/// # Errors
///
/// Returns [`ClipspaceError::DegenerateBasis`] when no camera basis exists.
///
/// # Example
///
/// ```rust
/// use clipspace_core::{Vec3, to_homogeneous};
/// use clipspace_pipeline::build_view;
///
/// let eye = Vec3::new(3.0, 2.0, 0.0);
/// let view = build_view(eye, Vec3::new(0.0, 0.0, -5.0), Vec3::Y).unwrap();
/// let origin = view.mul_vec4(to_homogeneous(eye));
/// assert!(origin.truncate().length() < 1e-12);
/// ```
pub fn build_view(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4> {
    CameraFrame::look_at(eye, target, up, &Tolerances::default()).map(|f| f.view_matrix())
}

/// Builds the inverse of [`build_view`] (camera space back to world space).
pub fn build_inverse_view(eye: Vec3, target: Vec3, up: Vec3) -> Result<Mat4> {
    CameraFrame::look_at(eye, target, up, &Tolerances::default())
        .map(|f| f.inverse_view_matrix())
}
