//! Axis-aligned cube fixture.

use clipspace_core::Vec3;

/// Returns the 8 vertices of an axis-aligned cube.
///
/// The face at `z - size/2` comes first, walked counter-clockwise from the
/// `(-x, -y)` corner, followed by the face at `z + size/2` in the same order.
#[must_use]
pub fn create_cube(center: Vec3, size: f64) -> Vec<Vec3> {
    let s = size / 2.0;
    let Vec3 { x, y, z } = center;
    vec![
        Vec3::new(x - s, y - s, z - s),
        Vec3::new(x + s, y - s, z - s),
        Vec3::new(x + s, y + s, z - s),
        Vec3::new(x - s, y + s, z - s),
        Vec3::new(x - s, y - s, z + s),
        Vec3::new(x + s, y - s, z + s),
        Vec3::new(x + s, y + s, z + s),
        Vec3::new(x - s, y + s, z + s),
    ]
}

/// Returns the 12 edges of a cube built by [`create_cube`] as vertex index pairs.
#[must_use]
pub fn cube_edges() -> Vec<[u32; 2]> {
    vec![
        // first face
        [0, 1],
        [1, 2],
        [2, 3],
        [3, 0],
        // second face
        [4, 5],
        [5, 6],
        [6, 7],
        [7, 4],
        // connectors
        [0, 4],
        [1, 5],
        [2, 6],
        [3, 7],
    ]
}
