//! Regular pyramids, and cones approximated by many-sided pyramids.
//!
//! The base ring hangs `height` below the apex. Its first corner sits
//! `radius` nearer to the viewer than the apex; every other corner is the
//! previous one rotated by `2π / sides` around the apex's vertical axis.
//! Each rotation starts from the previous corner's canvas position carried
//! back to world space, so rounding accumulates around the ring the same
//! way it would for any incremental walk.

use std::f32::consts::TAU;

use log::debug;

use super::{Mesh, MeshError};
use crate::config::CanvasConfig;
use crate::point::Point;

/// Fewest base corners that enclose a solid.
pub const MIN_SIDES: usize = 3;

/// Faces for a base ring of `sides` corners (indices `0..sides`) and an
/// apex at index `sides`.
fn pyramid_faces(sides: usize) -> Vec<[usize; 3]> {
    let apex = sides;
    let mut faces = Vec::with_capacity(2 * sides - 2);

    // Base, fanned from the first corner
    for i in 2..sides {
        faces.push([0, i, i - 1]);
    }

    // Sides, wrapping the last corner back to the first
    for i in 0..sides - 1 {
        faces.push([i, i + 1, apex]);
    }
    faces.push([sides - 1, 0, apex]);

    faces
}

impl Mesh {
    /// Pyramid with its apex at world `(x, y, z)` and a regular `sides`-gon base.
    ///
    /// Produces `sides + 1` points and `2 * sides - 2` triangles.
    #[allow(clippy::too_many_arguments)]
    pub fn pyramid(
        x: f32,
        y: f32,
        z: f32,
        height: f32,
        radius: f32,
        sides: usize,
        color: u32,
        config: &CanvasConfig,
    ) -> Result<Self, MeshError> {
        if sides < MIN_SIDES {
            return Err(MeshError::TooFewSides { sides });
        }

        let theta = TAU / sides as f32;
        let (sin, cos) = theta.sin_cos();
        let base_y = y - height;

        let mut points = Vec::with_capacity(sides + 1);
        points.push(Point::from_world(x, base_y, z - radius, config));
        for i in 1..sides {
            let previous = &points[i - 1];
            // Relative to the apex axis
            let rx = previous.world_x(config) - x;
            let rz = previous.z() - z;

            let new_x = rx * cos + rz * sin + x;
            let new_z = -rx * sin + rz * cos + z;
            points.push(Point::from_world(new_x, base_y, new_z, config));
        }
        points.push(Point::from_world(x, y, z, config));

        let mesh = Mesh::new(points, &pyramid_faces(sides), color, config);
        debug!(
            "pyramid at ({}, {}, {}) with {} sides: {} points, {} triangles",
            x,
            y,
            z,
            sides,
            mesh.points().len(),
            mesh.triangles().len()
        );
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::render::Renderer;
    use approx::assert_relative_eq;

    fn pyramid(sides: usize) -> Result<Mesh, MeshError> {
        Mesh::pyramid(0.0, 1.0, 10.0, 2.0, 1.0, sides, colors::BLUE, &CanvasConfig::default())
    }

    #[test]
    fn triangle_count_is_two_per_side_minus_two() {
        for (sides, expected) in [(3, 4), (4, 6), (7, 12), (49, 96), (99, 196)] {
            let mesh = pyramid(sides).unwrap();
            assert_eq!(mesh.triangles().len(), expected, "{sides} sides");
            assert_eq!(mesh.points().len(), sides + 1);
        }
    }

    #[test]
    fn side_count_is_not_capped() {
        let mesh = pyramid(150).unwrap();
        assert_eq!(mesh.triangles().len(), 298);
    }

    #[test]
    fn fewer_than_three_sides_is_rejected() {
        for sides in [0, 1, 2] {
            assert_eq!(pyramid(sides).unwrap_err(), MeshError::TooFewSides { sides });
        }
    }

    #[test]
    fn faces_fan_the_base_and_wrap_the_sides() {
        let faces = pyramid_faces(5);
        assert_eq!(
            faces,
            vec![
                [0, 2, 1],
                [0, 3, 2],
                [0, 4, 3],
                [0, 1, 5],
                [1, 2, 5],
                [2, 3, 5],
                [3, 4, 5],
                [4, 0, 5],
            ]
        );
    }

    #[test]
    fn ring_lies_on_circle_below_apex() {
        let cfg = CanvasConfig::default();
        let mesh = Mesh::pyramid(2.0, 3.0, 12.0, 2.5, 1.5, 12, colors::BLUE, &cfg).unwrap();
        let (ring, apex) = mesh.points().split_at(12);

        let apex = apex[0].world(&cfg);
        assert_relative_eq!(apex.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(apex.y, 3.0, epsilon = 1e-4);
        assert_relative_eq!(apex.z, 12.0);

        let first = ring[0].world(&cfg);
        assert_relative_eq!(first.x, 2.0, epsilon = 1e-4);
        assert_relative_eq!(first.z, 10.5, epsilon = 1e-4);

        for p in ring {
            let w = p.world(&cfg);
            let r = ((w.x - 2.0).powi(2) + (w.z - 12.0).powi(2)).sqrt();
            assert_relative_eq!(r, 1.5, epsilon = 1e-3);
            assert_relative_eq!(w.y, 0.5, epsilon = 1e-3);
        }
    }

    #[test]
    fn ring_steps_by_equal_angles() {
        let cfg = CanvasConfig::default();
        let mesh = Mesh::pyramid(0.0, 0.0, 10.0, 1.0, 2.0, 4, colors::BLUE, &cfg).unwrap();
        let ring: Vec<_> = mesh.points()[..4].iter().map(|p| p.world(&cfg)).collect();
        // Near, left, far, right
        let expected = [(0.0, 8.0), (-2.0, 10.0), (0.0, 12.0), (2.0, 10.0)];
        for (w, (x, z)) in ring.iter().zip(expected) {
            assert_relative_eq!(w.x, x, epsilon = 1e-3);
            assert_relative_eq!(w.z, z, epsilon = 1e-3);
        }
    }

    #[test]
    fn only_near_sides_face_a_viewer_above_the_base() {
        let cfg = CanvasConfig::default();
        let mesh = pyramid(4).unwrap();
        let mut renderer = Renderer::new(cfg.width, cfg.height, colors::WHITE);
        let stats = mesh.draw(&cfg, &mut renderer.as_framebuffer(), false);
        // Near-left and near-right sides; the base and far sides are culled.
        assert_eq!(stats.filled, 2);
        assert_eq!(stats.back_facing, 4);

        let dots: Vec<f32> = mesh
            .triangles()
            .iter()
            .map(|t| t.facing(mesh.points(), &cfg))
            .collect();
        assert!(dots[0] > 0.0 && dots[1] > 0.0, "base seen from above");
        assert!(dots[2] < 0.0 && dots[5] < 0.0);
        assert!(dots[3] > 0.0 && dots[4] > 0.0);
    }

    #[test]
    fn base_is_visible_from_below() {
        // Eye level (y = 0) is under the base plane (y = 2).
        let cfg = CanvasConfig::default();
        let mesh = Mesh::pyramid(0.0, 4.0, 10.0, 2.0, 1.0, 6, colors::BLUE, &cfg).unwrap();
        let base_dots: Vec<f32> = mesh.triangles()[..4]
            .iter()
            .map(|t| t.facing(mesh.points(), &cfg))
            .collect();
        assert!(base_dots.iter().all(|&d| d < 0.0));
    }
}
