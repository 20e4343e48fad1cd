//! Point transforms from object space to clip space and NDC.
//!
//! Points are promoted to homogeneous form (`w = 1`), carried through the view
//! and projection matrices, and then divided by the clip-space `w`.
//!
//! No clipping happens here. A point behind the camera (negative `w`) or nearer
//! than the near plane is divided like any other and comes out with extreme or
//! sign-flipped NDC values. Only a point on the camera plane (`w == 0`) cannot
//! be divided; it is reported as [`NdcPoint::OnCameraPlane`] without affecting
//! the rest of the batch.

use clipspace_core::{from_homogeneous, to_homogeneous, Mat4, Tolerances, Vec3, Vec4};
use serde::Serialize;

/// Clip-space homogeneous coordinates, before the perspective divide.
pub type ClipPoint = Vec4;

/// A point after the perspective divide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum NdcPoint {
    /// Normalized device coordinates `xyz / w`.
    Projected(Vec3),
    /// The point lies on the camera plane; `w` is kept for diagnostics.
    OnCameraPlane { w: f64 },
}

impl NdcPoint {
    /// Divides a clip-space point by its `w`.
    #[must_use]
    pub fn from_clip(clip: ClipPoint, divide_epsilon: f64) -> Self {
        match from_homogeneous(clip, divide_epsilon) {
            Some(ndc) => NdcPoint::Projected(ndc),
            None => NdcPoint::OnCameraPlane { w: clip.w },
        }
    }

    /// Returns the NDC position, or `None` for a point on the camera plane.
    #[must_use]
    pub fn position(&self) -> Option<Vec3> {
        match self {
            NdcPoint::Projected(p) => Some(*p),
            NdcPoint::OnCameraPlane { .. } => None,
        }
    }

    /// Returns true if the divide was undefined for this point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, NdcPoint::OnCameraPlane { .. })
    }

    /// Returns true if every coordinate lies in the canonical `[-1, 1]` cube.
    #[must_use]
    pub fn in_view_volume(&self) -> bool {
        self.position()
            .is_some_and(|p| p.abs().max_element() <= 1.0)
    }
}

/// Clip-space and NDC coordinates for a batch of points, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedBatch {
    /// Homogeneous clip-space coordinates.
    pub clip: Vec<ClipPoint>,
    /// Coordinates after the perspective divide.
    pub ndc: Vec<NdcPoint>,
}

impl TransformedBatch {
    /// Splits the batch into its clip and NDC arrays.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ClipPoint>, Vec<NdcPoint>) {
        (self.clip, self.ndc)
    }

    /// Returns the number of transformed points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clip.len()
    }

    /// Returns true if the batch holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clip.is_empty()
    }

    /// Returns the indices of points that landed on the camera plane.
    #[must_use]
    pub fn degenerate_indices(&self) -> Vec<usize> {
        self.ndc
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.is_degenerate().then_some(i))
            .collect()
    }

    /// Returns the NDC positions, with `None` for points on the camera plane.
    #[must_use]
    pub fn ndc_positions(&self) -> Vec<Option<Vec3>> {
        self.ndc.iter().map(NdcPoint::position).collect()
    }
}

/// Transforms one point by a combined `projection * view` matrix.
#[must_use]
pub fn transform_point(view_projection: &Mat4, point: Vec3) -> ClipPoint {
    view_projection.mul_vec4(to_homogeneous(point))
}

/// Transforms `points` through `view` and then `projection`.
///
/// Uses the default [`Tolerances`] for the divide.
///
/// # Example
///
/// ```rust
/// use clipspace_core::Vec3;
/// use clipspace_pipeline::{build_perspective, build_view, transform};
///
/// let view = build_view(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0), Vec3::Y).unwrap();
/// let proj = build_perspective(60.0, 1.0, 0.5, 50.0).unwrap();
/// let batch = transform(&view, &proj, &[Vec3::new(0.0, 0.0, -5.0)]);
/// assert!(batch.ndc[0].in_view_volume());
/// ```
#[must_use]
pub fn transform(view: &Mat4, projection: &Mat4, points: &[Vec3]) -> TransformedBatch {
    transform_with(view, projection, points, &Tolerances::default())
}

/// Transforms `points` through `view` and then `projection` with explicit
/// tolerances.
#[must_use]
pub fn transform_with(
    view: &Mat4,
    projection: &Mat4,
    points: &[Vec3],
    tolerances: &Tolerances,
) -> TransformedBatch {
    let mut clip = Vec::with_capacity(points.len());
    let mut ndc = Vec::with_capacity(points.len());

    for &point in points {
        let view_space = view.mul_vec4(to_homogeneous(point));
        let clip_point = projection.mul_vec4(view_space);
        clip.push(clip_point);
        ndc.push(NdcPoint::from_clip(clip_point, tolerances.divide_epsilon));
    }

    let batch = TransformedBatch { clip, ndc };
    let degenerate = batch.degenerate_indices();
    if !degenerate.is_empty() {
        log::warn!(
            "{} of {} points lie on the camera plane and have no NDC position: {:?}",
            degenerate.len(),
            batch.len(),
            degenerate
        );
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_perspective, build_view};

    fn demo_matrices() -> (Mat4, Mat4) {
        let view = build_view(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0), Vec3::Y).unwrap();
        let proj = build_perspective(60.0, 1.0, 0.5, 50.0).unwrap();
        (view, proj)
    }

    #[test]
    fn test_point_on_axis_projects_to_center() {
        let (view, proj) = demo_matrices();
        let batch = transform(&view, &proj, &[Vec3::new(0.0, 0.0, -5.0)]);
        let p = batch.ndc[0].position().unwrap();
        assert!(p.x.abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z > -1.0 && p.z < 1.0);
        // Clip w carries the view-space distance
        assert!((batch.clip[0].w - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_ndc_is_clip_divided_by_w() {
        let (view, proj) = demo_matrices();
        let points = [Vec3::new(1.0, -1.0, -4.0), Vec3::new(-0.5, 2.0, -20.0)];
        let batch = transform(&view, &proj, &points);
        for (clip, ndc) in batch.clip.iter().zip(&batch.ndc) {
            let expected = clip.truncate() / clip.w;
            assert!((ndc.position().unwrap() - expected).length() < 1e-12);
        }
    }

    #[test]
    fn test_perspective_shrinks_with_distance() {
        let (view, proj) = demo_matrices();
        let batch = transform(
            &view,
            &proj,
            &[Vec3::new(1.0, 0.0, -2.0), Vec3::new(1.0, 0.0, -10.0)],
        );
        let near_x = batch.ndc[0].position().unwrap().x;
        let far_x = batch.ndc[1].position().unwrap().x;
        assert!(near_x > far_x && far_x > 0.0);
    }

    #[test]
    fn test_point_closer_than_near_leaves_ndc_range() {
        let (view, proj) = demo_matrices();
        let batch = transform(&view, &proj, &[Vec3::new(0.0, 0.0, -0.3)]);
        let z = batch.ndc[0].position().unwrap().z;
        assert!(z < -1.0);
        assert!(!batch.ndc[0].in_view_volume());
    }

    #[test]
    fn test_point_behind_camera_is_divided() {
        let (view, proj) = demo_matrices();
        let batch = transform(&view, &proj, &[Vec3::new(1.0, 1.0, 2.0)]);
        assert!(batch.clip[0].w < 0.0);
        let p = batch.ndc[0].position().unwrap();
        // x and y flip sign relative to the object-space point
        assert!(p.x < 0.0 && p.y < 0.0);
    }

    #[test]
    fn test_camera_plane_point_is_flagged_without_spoiling_batch() {
        let (view, proj) = demo_matrices();
        let points = [
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.5, 0.0, -3.0),
        ];
        let batch = transform(&view, &proj, &points);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.degenerate_indices(), vec![1]);
        assert!(batch.ndc[1].is_degenerate());
        assert_eq!(batch.ndc[1].position(), None);
        assert!(batch.ndc[0].position().is_some());
        assert!(batch.ndc[2].position().is_some());
    }

    #[test]
    fn test_divide_epsilon_widens_camera_plane() {
        let (view, proj) = demo_matrices();
        let points = [Vec3::new(0.0, 0.0, -1e-6)];
        let strict = transform(&view, &proj, &points);
        let loose = transform_with(
            &view,
            &proj,
            &points,
            &Tolerances::default().with_divide_epsilon(1e-3),
        );
        assert!(!strict.ndc[0].is_degenerate());
        assert!(loose.ndc[0].is_degenerate());
    }

    #[test]
    fn test_transform_is_deterministic() {
        let (view, proj) = demo_matrices();
        let points = [Vec3::new(1.0, 2.0, -3.0), Vec3::new(-1.0, 0.0, 0.0)];
        assert_eq!(
            transform(&view, &proj, &points),
            transform(&view, &proj, &points)
        );
    }

    #[test]
    fn test_transform_point_matches_batch() {
        let (view, proj) = demo_matrices();
        let p = Vec3::new(0.3, -0.7, -6.0);
        let batch = transform(&view, &proj, &[p]);
        let single = transform_point(&(proj * view), p);
        assert!((single - batch.clip[0]).length() < 1e-12);
    }

    #[test]
    fn test_empty_batch() {
        let (view, proj) = demo_matrices();
        let batch = transform(&view, &proj, &[]);
        assert!(batch.is_empty());
        let (clip, ndc) = batch.into_parts();
        assert!(clip.is_empty() && ndc.is_empty());
    }
}
