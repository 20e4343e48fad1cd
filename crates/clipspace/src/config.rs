//! Scene configuration loaded from JSON.

use clipspace_core::{Result, Vec3};
use clipspace_pipeline::Camera;
use clipspace_structures::Wireframe;
use serde::{Deserialize, Serialize};

/// An axis-aligned cube in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubeConfig {
    /// Cube center in world space.
    pub center: Vec3,
    /// Edge length.
    pub size: f64,
}

impl CubeConfig {
    /// Builds the cube's wireframe.
    pub fn wireframe(&self, name: impl Into<String>) -> Wireframe {
        Wireframe::cube(name, self.center, self.size)
    }
}

/// A camera plus the geometry it looks at.
///
/// Every field is optional in JSON; missing fields take the demo defaults.
///
/// ```
/// use clipspace::SceneConfig;
///
/// let scene = SceneConfig::from_json(r#"{ "camera": { "fov_y_degrees": 90.0 } }"#).unwrap();
/// assert_eq!(scene.camera.fov_y_degrees, 90.0);
/// assert_eq!(scene.cubes.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// The viewing camera.
    pub camera: Camera,
    /// Position the camera is moved to for the camera-motion comparison.
    pub moved_position: Vec3,
    /// Cubes to project.
    pub cubes: Vec<CubeConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            moved_position: Vec3::new(3.0, 2.0, 0.0),
            cubes: vec![CubeConfig {
                center: Vec3::new(0.0, 0.0, -5.0),
                size: 2.0,
            }],
        }
    }
}

impl SceneConfig {
    /// Parses a scene from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let scene = serde_json::from_str(json)?;
        Ok(scene)
    }

    /// Serializes the scene to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the wireframes of all cubes, named `cube0`, `cube1`, ...
    pub fn wireframes(&self) -> Vec<Wireframe> {
        self.cubes
            .iter()
            .enumerate()
            .map(|(i, cube)| cube.wireframe(format!("cube{i}")))
            .collect()
    }
}
