//! Wireframe structure: nodes connected by index-pair edges.
//!
//! The edge list is topology owned by the caller. Projection only transforms
//! node positions; edges are used afterwards to assemble drawable segments.

use clipspace_core::{ClipspaceError, Result, Vec2, Vec3};
use clipspace_pipeline::{Camera, ClipPoint, NdcPoint, TransformedBatch};
use serde::Serialize;

/// A set of nodes connected by straight edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Wireframe {
    name: String,
    nodes: Vec<Vec3>,
    edges: Vec<[u32; 2]>,
}

impl Wireframe {
    /// Creates a new wireframe from nodes and edges.
    ///
    /// Fails with [`ClipspaceError::EdgeOutOfRange`] if an edge refers to a
    /// node that does not exist.
    pub fn new(name: impl Into<String>, nodes: Vec<Vec3>, edges: Vec<[u32; 2]>) -> Result<Self> {
        for (edge, pair) in edges.iter().enumerate() {
            if let Some(&index) = pair.iter().find(|&&i| i as usize >= nodes.len()) {
                return Err(ClipspaceError::EdgeOutOfRange {
                    edge,
                    index,
                    len: nodes.len(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            nodes,
            edges,
        })
    }

    /// Creates the wireframe of an axis-aligned cube.
    pub fn cube(name: impl Into<String>, center: Vec3, size: f64) -> Self {
        Self {
            name: name.into(),
            nodes: crate::create_cube(center, size),
            edges: crate::cube_edges(),
        }
    }

    /// Returns the name of this wireframe.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node positions.
    pub fn nodes(&self) -> &[Vec3] {
        &self.nodes
    }

    /// Returns the edges.
    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Returns the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Projects every node through `camera`.
    pub fn project(&self, camera: &Camera) -> Result<ProjectedWireframe> {
        let batch = camera.transform_points(&self.nodes)?;
        log::debug!(
            "projected wireframe '{}': {} nodes, {} edges",
            self.name,
            self.nodes.len(),
            self.edges.len()
        );
        Ok(ProjectedWireframe {
            name: self.name.clone(),
            edges: self.edges.clone(),
            batch,
        })
    }
}

/// A wireframe whose nodes have been carried into clip space and NDC.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedWireframe {
    name: String,
    edges: Vec<[u32; 2]>,
    batch: TransformedBatch,
}

impl ProjectedWireframe {
    /// Returns the name of the source wireframe.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the per-node clip-space coordinates.
    pub fn clip(&self) -> &[ClipPoint] {
        &self.batch.clip
    }

    /// Returns the per-node NDC results.
    pub fn ndc(&self) -> &[NdcPoint] {
        &self.batch.ndc
    }

    /// Returns true if every node has an NDC position inside `[-1, 1]`.
    pub fn in_view_volume(&self) -> bool {
        self.batch.ndc.iter().all(NdcPoint::in_view_volume)
    }

    /// Returns the NDC `xy` segment of every edge whose endpoints both have an
    /// NDC position. Edges touching the camera plane are left out.
    pub fn segments_2d(&self) -> Vec<[Vec2; 2]> {
        self.ndc_segments_3d()
            .into_iter()
            .map(|[a, b]| [a.truncate(), b.truncate()])
            .collect()
    }

    /// Returns the NDC segment of every edge whose endpoints both have an NDC
    /// position.
    pub fn ndc_segments_3d(&self) -> Vec<[Vec3; 2]> {
        self.edges
            .iter()
            .filter_map(|&[a, b]| {
                let a = self.batch.ndc[a as usize].position()?;
                let b = self.batch.ndc[b as usize].position()?;
                Some([a, b])
            })
            .collect()
    }

    /// Returns the clip-space `xyz` segment of every edge, before the divide.
    pub fn clip_segments_3d(&self) -> Vec<[Vec3; 2]> {
        self.edges
            .iter()
            .map(|&[a, b]| {
                [
                    self.batch.clip[a as usize].truncate(),
                    self.batch.clip[b as usize].truncate(),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_edges() {
        let nodes = vec![Vec3::ZERO, Vec3::X];
        assert!(Wireframe::new("ok", nodes.clone(), vec![[0, 1]]).is_ok());
        assert!(matches!(
            Wireframe::new("bad", nodes, vec![[0, 1], [1, 2]]),
            Err(ClipspaceError::EdgeOutOfRange {
                edge: 1,
                index: 2,
                len: 2
            })
        ));
    }

    #[test]
    fn test_cube_wireframe() {
        let cube = Wireframe::cube("cube", Vec3::new(0.0, 0.0, -5.0), 2.0);
        assert_eq!(cube.name(), "cube");
        assert_eq!(cube.num_nodes(), 8);
        assert_eq!(cube.num_edges(), 12);
    }

    #[test]
    fn test_project_cube_in_front_of_camera() {
        let cube = Wireframe::cube("cube", Vec3::new(0.0, 0.0, -5.0), 2.0);
        let projected = cube.project(&Camera::default()).unwrap();
        assert!(projected.in_view_volume());
        assert_eq!(projected.segments_2d().len(), 12);
        assert_eq!(projected.clip_segments_3d().len(), 12);
        assert_eq!(projected.clip().len(), 8);
    }

    #[test]
    fn test_front_face_appears_larger() {
        let cube = Wireframe::cube("cube", Vec3::new(0.0, 0.0, -5.0), 2.0);
        let projected = cube.project(&Camera::default()).unwrap();
        let ndc = projected.ndc();
        // node 6 is on the face nearer the camera, node 2 on the farther one
        let near = ndc[6].position().unwrap();
        let far = ndc[2].position().unwrap();
        assert!(near.x > far.x && near.y > far.y);
    }

    #[test]
    fn test_edges_on_camera_plane_are_skipped() {
        let nodes = vec![
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(1.0, 0.0, -5.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let wire = Wireframe::new("tri", nodes, vec![[0, 1], [1, 2], [2, 0]]).unwrap();
        let projected = wire.project(&Camera::default()).unwrap();
        assert_eq!(projected.segments_2d().len(), 1);
        assert_eq!(projected.clip_segments_3d().len(), 3);
        assert!(!projected.in_view_volume());
    }
}
