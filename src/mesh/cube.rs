use log::debug;

use super::Mesh;
use crate::config::CanvasConfig;
use crate::point::Point;

/// Corner offsets in units of the edge length, near face first.
///
/// ```text
///        v6-------v7
///       /|        /|
///     v2-------v3  |
///     |  |      |  |
///     |  v5-----|-v8
///     | /       | /
///     v1-------v4
/// ```
const CUBE_CORNERS: [(f32, f32, f32); 8] = [
    (0.0, 0.0, 0.0), // v1
    (0.0, 1.0, 0.0), // v2
    (1.0, 1.0, 0.0), // v3
    (1.0, 0.0, 0.0), // v4
    (0.0, 0.0, 1.0), // v5
    (0.0, 1.0, 1.0), // v6
    (1.0, 1.0, 1.0), // v7
    (1.0, 0.0, 1.0), // v8
];

/// Two triangles per face, clockwise as seen from outside.
pub const CUBE_FACES: [[usize; 3]; 12] = [
    // Near
    [0, 1, 2],
    [0, 2, 3],
    // Far
    [4, 6, 5],
    [4, 7, 6],
    // Left
    [0, 5, 1],
    [0, 4, 5],
    // Right
    [3, 2, 6],
    [3, 6, 7],
    // Bottom
    [0, 7, 4],
    [0, 3, 7],
    // Top
    [1, 5, 6],
    [1, 6, 2],
];

impl Mesh {
    /// Axis-aligned cube with its near-bottom-left corner at world `(x, y, z)`.
    ///
    /// `z` must be positive for the corners to project sensibly.
    pub fn cube(x: f32, y: f32, z: f32, size: f32, color: u32, config: &CanvasConfig) -> Self {
        let points = CUBE_CORNERS
            .iter()
            .map(|&(dx, dy, dz)| {
                Point::from_world(x + dx * size, y + dy * size, z + dz * size, config)
            })
            .collect();
        let mesh = Mesh::new(points, &CUBE_FACES, color, config);
        debug!(
            "cube at ({}, {}, {}) size {}: {} points, {} triangles",
            x,
            y,
            z,
            size,
            mesh.points().len(),
            mesh.triangles().len()
        );
        mesh
    }
}
