//! The perspective demonstrations, as data ready for a plotting layer.
//!
//! 1. [`clip_vs_ndc`] - a cube before and after the divide by `w`
//! 2. [`camera_motion`] - the same cube seen from two camera positions
//! 3. [`near_plane_sweep`] - cubes approaching and crossing the near plane
//!
//! Nothing here draws. Each result holds the segments a caller would plot.

use clipspace_core::{Result, Vec2, Vec3};
use clipspace_pipeline::Camera;
use clipspace_structures::Wireframe;
use serde::Serialize;

use crate::config::{CubeConfig, SceneConfig};

/// A cube in clip space next to the same cube in NDC.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClipVsNdc {
    /// Edge segments in clip-space `xyz`, before the divide.
    pub clip_segments: Vec<[Vec3; 2]>,
    /// Edge segments in NDC.
    pub ndc_segments: Vec<[Vec3; 2]>,
    /// Clip-space `w` of every vertex.
    pub w: Vec<f64>,
}

/// Builds the clip-space versus NDC comparison for `cube`.
pub fn clip_vs_ndc(camera: &Camera, cube: &CubeConfig) -> Result<ClipVsNdc> {
    let projected = cube.wireframe("cube").project(camera)?;
    Ok(ClipVsNdc {
        clip_segments: projected.clip_segments_3d(),
        ndc_segments: projected.ndc_segments_3d(),
        w: projected.clip().iter().map(|c| c.w).collect(),
    })
}

/// The same cube projected from two camera positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CameraMotion {
    /// Where the original camera sits.
    pub original_position: Vec3,
    /// Where the moved camera sits.
    pub moved_position: Vec3,
    /// NDC `xy` segments seen from the original camera.
    pub original_segments: Vec<[Vec2; 2]>,
    /// NDC `xy` segments seen from the moved camera.
    pub moved_segments: Vec<[Vec2; 2]>,
    /// Per-vertex NDC `xy` shift, `None` where either view hit the camera plane.
    pub displacement: Vec<Option<Vec2>>,
}

impl CameraMotion {
    /// Returns the largest per-vertex NDC `xy` shift.
    pub fn max_displacement(&self) -> f64 {
        self.displacement
            .iter()
            .flatten()
            .map(|d| d.length())
            .fold(0.0, f64::max)
    }
}

/// Projects `cube` from `camera` and from the same camera moved to
/// `moved_position`.
pub fn camera_motion(
    camera: &Camera,
    moved_position: Vec3,
    cube: &CubeConfig,
) -> Result<CameraMotion> {
    let wireframe = cube.wireframe("cube");
    let moved_camera = camera.moved_to(moved_position);

    let original = wireframe.project(camera)?;
    let moved = wireframe.project(&moved_camera)?;

    let displacement = original
        .ndc()
        .iter()
        .zip(moved.ndc())
        .map(|(a, b)| Some((b.position()? - a.position()?).truncate()))
        .collect();

    Ok(CameraMotion {
        original_position: camera.position,
        moved_position,
        original_segments: original.segments_2d(),
        moved_segments: moved.segments_2d(),
        displacement,
    })
}

/// One cube of the near-plane sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearPlaneCase {
    /// Short description of the cube's placement.
    pub label: String,
    /// The cube that was projected.
    pub cube: CubeConfig,
    /// NDC `xy` segments.
    pub segments: Vec<[Vec2; 2]>,
    /// Whether every vertex landed inside the `[-1, 1]` cube.
    pub in_view_volume: bool,
    /// Smallest NDC depth among the cube's vertices.
    pub min_ndc_z: Option<f64>,
}

/// Cubes placed progressively closer to the camera, the last one straddling
/// the near plane.
pub fn near_plane_cubes() -> Vec<(&'static str, CubeConfig)> {
    [
        ("z=-10 (far)", -10.0, 2.0),
        ("z=-5 (middle)", -5.0, 2.0),
        ("z=-2 (near)", -2.0, 2.0),
        ("z=-0.3 (closer than near)", -0.3, 0.5),
    ]
    .into_iter()
    .map(|(label, z, size)| {
        (
            label,
            CubeConfig {
                center: Vec3::new(0.0, 0.0, z),
                size,
            },
        )
    })
    .collect()
}

/// Projects every cube of [`near_plane_cubes`] through `camera`.
pub fn near_plane_sweep(camera: &Camera) -> Result<Vec<NearPlaneCase>> {
    near_plane_cubes()
        .into_iter()
        .map(|(label, cube)| -> Result<NearPlaneCase> {
            let projected = Wireframe::cube(label, cube.center, cube.size).project(camera)?;
            let min_ndc_z = projected
                .ndc()
                .iter()
                .filter_map(|p| p.position())
                .map(|p| p.z)
                .reduce(f64::min);
            Ok(NearPlaneCase {
                label: label.to_string(),
                cube,
                segments: projected.segments_2d(),
                in_view_volume: projected.in_view_volume(),
                min_ndc_z,
            })
        })
        .collect()
}

/// All demonstrations for one scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The camera used.
    pub camera: Camera,
    /// Clip space versus NDC.
    pub clip_vs_ndc: ClipVsNdc,
    /// Camera motion comparison.
    pub camera_motion: CameraMotion,
    /// Near-plane sweep.
    pub near_plane: Vec<NearPlaneCase>,
}

/// Runs every demonstration for `scene`, using its first cube (or the default
/// cube when the scene has none).
pub fn run(scene: &SceneConfig) -> Result<Report> {
    let cube = scene
        .cubes
        .first()
        .copied()
        .unwrap_or_else(|| SceneConfig::default().cubes[0]);
    log::info!(
        "running scenarios: camera at {} looking at {}",
        scene.camera.position,
        scene.camera.target
    );

    Ok(Report {
        camera: scene.camera,
        clip_vs_ndc: clip_vs_ndc(&scene.camera, &cube)?,
        camera_motion: camera_motion(&scene.camera, scene.moved_position, &cube)?,
        near_plane: near_plane_sweep(&scene.camera)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_cube() -> CubeConfig {
        SceneConfig::default().cubes[0]
    }

    #[test]
    fn test_clip_vs_ndc_shapes() {
        let result = clip_vs_ndc(&Camera::default(), &demo_cube()).unwrap();
        assert_eq!(result.clip_segments.len(), 12);
        assert_eq!(result.ndc_segments.len(), 12);
        // w equals the distance in front of the camera: 4 or 6
        for w in result.w {
            assert!((w - 4.0).abs() < 1e-12 || (w - 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_camera_motion_shifts_ndc() {
        let motion =
            camera_motion(&Camera::default(), Vec3::new(3.0, 2.0, 0.0), &demo_cube()).unwrap();
        assert_eq!(motion.displacement.len(), 8);
        assert!(motion.displacement.iter().all(Option::is_some));
        assert!(motion.max_displacement() > 1e-3);
    }

    #[test]
    fn test_camera_motion_without_moving() {
        let motion = camera_motion(&Camera::default(), Vec3::ZERO, &demo_cube()).unwrap();
        assert_eq!(motion.max_displacement(), 0.0);
    }

    #[test]
    fn test_near_plane_sweep() {
        let cases = near_plane_sweep(&Camera::default()).unwrap();
        assert_eq!(cases.len(), 4);
        assert!(cases[0].in_view_volume);
        assert!(cases[1].in_view_volume);

        let too_near = &cases[3];
        assert!(!too_near.in_view_volume);
        assert!(too_near.min_ndc_z.unwrap() < -1.0);
        // Still drawn, never dropped
        assert_eq!(too_near.segments.len(), 12);
    }

    #[test]
    fn test_run_with_empty_cube_list_uses_default_cube() {
        let scene = SceneConfig {
            cubes: Vec::new(),
            ..SceneConfig::default()
        };
        let report = run(&scene).unwrap();
        assert_eq!(report.clip_vs_ndc.clip_segments.len(), 12);
    }

    #[test]
    fn test_run_reports_invalid_camera() {
        let scene = SceneConfig {
            camera: Camera::default().with_perspective(0.0, 1.0, 0.5, 50.0),
            ..SceneConfig::default()
        };
        assert!(run(&scene).is_err());
    }
}
