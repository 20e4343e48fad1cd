//! Perspective projection matrices.
//!
//! # Convention
//!
//! View space is right-handed with the camera looking down `-Z`. The matrix
//! routes `-z_view` into clip `w`, so after the divide the near plane lands on
//! NDC `z = -1` and the far plane on NDC `z = +1`:
//!
//! ```text
//! | f/aspect  0        0                    0                  |
//! | 0         f        0                    0                  |
//! | 0         0   (far+near)/(near-far)  2*far*near/(near-far) |
//! | 0         0       -1                    0                  |
//! ```
//!
//! with `f = 1 / tan(fov_y / 2)`.

use clipspace_core::{from_homogeneous, ClipspaceError, Mat4, Result, Vec4};

/// Returns `f = 1 / tan(fov_y / 2)` for a vertical field of view in degrees.
#[must_use]
pub fn focal_length(fov_y_degrees: f64) -> f64 {
    1.0 / (fov_y_degrees.to_radians() / 2.0).tan()
}

/// Builds a perspective projection matrix.
///
/// # Errors
///
/// Returns [`ClipspaceError::InvalidParameter`] unless `0 < fov_y_degrees < 180`,
/// `aspect > 0` and `0 < near < far`. NaN and infinite values are rejected.
///
/// # Example
///
/// ```rust
/// use clipspace_pipeline::{build_perspective, ndc_depth};
///
/// let proj = build_perspective(60.0, 1.0, 0.5, 50.0).unwrap();
/// assert!((ndc_depth(&proj, -0.5).unwrap() + 1.0).abs() < 1e-12);
/// ```
pub fn build_perspective(fov_y_degrees: f64, aspect: f64, near: f64, far: f64) -> Result<Mat4> {
    if !(fov_y_degrees > 0.0 && fov_y_degrees < 180.0) {
        return Err(ClipspaceError::invalid(
            "fov_y_degrees",
            fov_y_degrees,
            "must lie in the open interval (0, 180)",
        ));
    }
    if !(aspect > 0.0 && aspect.is_finite()) {
        return Err(ClipspaceError::invalid(
            "aspect",
            aspect,
            "must be positive and finite",
        ));
    }
    if !(near > 0.0 && near.is_finite()) {
        return Err(ClipspaceError::invalid(
            "near",
            near,
            "must be positive and finite",
        ));
    }
    if !(far > near && far.is_finite()) {
        return Err(ClipspaceError::invalid(
            "far",
            far,
            "must be finite and greater than near",
        ));
    }

    let f = focal_length(fov_y_degrees);
    if !f.is_finite() {
        return Err(ClipspaceError::invalid(
            "fov_y_degrees",
            fov_y_degrees,
            "too small, focal length overflows",
        ));
    }
    let m00 = f / aspect;
    if !m00.is_finite() {
        return Err(ClipspaceError::invalid(
            "aspect",
            aspect,
            "too small for the field of view, x scale overflows",
        ));
    }
    let m22 = (far + near) / (near - far);
    let m23 = (2.0 * far * near) / (near - far);
    if !(m22.is_finite() && m23.is_finite()) {
        return Err(ClipspaceError::invalid(
            "far",
            far,
            "depth range overflows the depth mapping",
        ));
    }

    let proj = Mat4::from_cols(
        Vec4::new(m00, 0.0, 0.0, 0.0),
        Vec4::new(0.0, f, 0.0, 0.0),
        Vec4::new(0.0, 0.0, m22, -1.0),
        Vec4::new(0.0, 0.0, m23, 0.0),
    );
    log::debug!(
        "perspective: fov_y={fov_y_degrees} aspect={aspect} near={near} far={far} f={f}"
    );
    Ok(proj)
}

/// Returns the NDC depth that `projection` assigns to a view-space depth.
///
/// `view_z` is negative in front of the camera. Returns `None` when the depth
/// lands on the camera plane (`w == 0`).
#[must_use]
pub fn ndc_depth(projection: &Mat4, view_z: f64) -> Option<f64> {
    let clip = projection.mul_vec4(Vec4::new(0.0, 0.0, view_z, 1.0));
    from_homogeneous(clip, 0.0).map(|ndc| ndc.z)
}
