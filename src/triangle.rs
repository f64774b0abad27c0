//! Mesh triangles: face normal, clipping, backface culling and flat shading.
//!
//! A [`Triangle`] stores indices into its mesh's point list rather than the
//! points themselves. Vertices must be listed clockwise as seen from the
//! side the face should be visible from; the normal derived from that
//! winding points away from the viewer for visible faces.

use log::trace;

use crate::colors;
use crate::config::CanvasConfig;
use crate::math::vec3::Vec3;
use crate::point::Point;
use crate::render::{draw_line, fill_triangle, FrameBuffer};

/// What a single [`Triangle::draw`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// At least one vertex was off the canvas or outside the depth range.
    Clipped,
    /// The face points away from the viewer, or is seen edge-on.
    BackFacing,
    /// Filled with the shaded color.
    Filled,
    /// Outlined with the unshaded color.
    Wireframe,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [usize; 3],
    normal: Vec3,
    color: u32,
}

impl Triangle {
    /// Bind three vertices and compute the face normal.
    ///
    /// The normal is the cross product of the world-space edges `v1 -> v2`
    /// and `v1 -> v3`. It is computed here and never again: moving the points
    /// afterwards leaves it stale.
    ///
    /// # Panics
    /// Panics if any index is out of range for `points`.
    pub fn new(vertices: [usize; 3], points: &[Point], color: u32, config: &CanvasConfig) -> Self {
        let [a, b, c] = vertices.map(|i| points[i].world(config));
        let normal = (b - a).cross(c - a);
        Self {
            vertices,
            normal,
            color,
        }
    }

    pub fn vertices(&self) -> [usize; 3] {
        self.vertices
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// All-or-nothing visibility test.
    ///
    /// Passes only when every vertex is on the canvas and has a depth in
    /// `(0, distance_clip)`. Partially visible triangles fail.
    pub fn clip_test(&self, points: &[Point], config: &CanvasConfig) -> bool {
        self.vertices.iter().all(|&i| {
            let p = &points[i];
            config.contains(p.x(), p.y()) && config.in_depth_range(p.z())
        })
    }

    /// Dot product of the face normal with the eye-to-`v1` vector.
    ///
    /// Negative means the face points toward the viewer; its magnitude is
    /// the flat-shading intensity.
    pub fn facing(&self, points: &[Point], config: &CanvasConfig) -> f32 {
        let view = points[self.vertices[0]].world(config);
        self.normal.dot(view)
    }

    /// Draw the triangle into `buffer`.
    ///
    /// Filled triangles use the color scaled by `-dot`; wireframes (`xray`)
    /// trace the three edges with the unscaled color. Nothing is cached
    /// between calls.
    pub fn draw(
        &self,
        points: &[Point],
        config: &CanvasConfig,
        buffer: &mut FrameBuffer,
        xray: bool,
    ) -> DrawOutcome {
        if !self.clip_test(points, config) {
            trace!("triangle {:?} clipped", self.vertices);
            return DrawOutcome::Clipped;
        }

        let dot = self.facing(points, config);
        if dot.is_nan() || dot >= 0.0 {
            trace!("triangle {:?} culled (dot = {})", self.vertices, dot);
            return DrawOutcome::BackFacing;
        }

        let [v1, v2, v3] = self.vertices.map(|i| &points[i]);
        if xray {
            draw_line(buffer, v1.x(), v1.y(), v2.x(), v2.y(), self.color);
            draw_line(buffer, v1.x(), v1.y(), v3.x(), v3.y(), self.color);
            draw_line(buffer, v2.x(), v2.y(), v3.x(), v3.y(), self.color);
            DrawOutcome::Wireframe
        } else {
            fill_triangle(buffer, v1, v2, v3, colors::shade(self.color, -dot));
            DrawOutcome::Filled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Renderer;
    use approx::assert_relative_eq;

    const BG: u32 = colors::WHITE;
    const COLOR: u32 = 0x0010_2030;

    fn points(world: &[(f32, f32, f32)]) -> (CanvasConfig, Vec<Point>) {
        let cfg = CanvasConfig::default();
        let pts = world
            .iter()
            .map(|&(x, y, z)| Point::from_world(x, y, z, &cfg))
            .collect();
        (cfg, pts)
    }

    fn draw(cfg: &CanvasConfig, pts: &[Point], tri: &Triangle, xray: bool) -> (DrawOutcome, Renderer) {
        let mut renderer = Renderer::new(cfg.width, cfg.height, BG);
        let outcome = tri.draw(pts, cfg, &mut renderer.as_framebuffer(), xray);
        (outcome, renderer)
    }

    fn untouched(renderer: &Renderer) -> bool {
        renderer.pixels().iter().all(|&c| c == BG)
    }

    // Lower-left half of a unit square facing the viewer at z = 10.
    const FRONT: [(f32, f32, f32); 3] = [(0.0, 0.0, 10.0), (0.0, 1.0, 10.0), (1.0, 1.0, 10.0)];

    #[test]
    fn normal_follows_clockwise_winding() {
        let (cfg, pts) = points(&FRONT);
        let tri = Triangle::new([0, 1, 2], &pts, COLOR, &cfg);
        let n = tri.normal();
        assert_relative_eq!(n.x, 0.0);
        assert_relative_eq!(n.y, 0.0);
        assert_relative_eq!(n.z, -1.0, epsilon = 1e-5);
        assert_relative_eq!(tri.facing(&pts, &cfg), -10.0, epsilon = 1e-4);
    }

    #[test]
    fn reversed_winding_is_back_facing() {
        let (cfg, pts) = points(&FRONT);
        let tri = Triangle::new([0, 2, 1], &pts, COLOR, &cfg);
        assert!(tri.facing(&pts, &cfg) > 0.0);
        let (outcome, renderer) = draw(&cfg, &pts, &tri, false);
        assert_eq!(outcome, DrawOutcome::BackFacing);
        assert!(untouched(&renderer));
    }

    #[test]
    fn edge_on_triangle_is_not_drawn() {
        // Lies in the plane x = 0, which contains the eye.
        let (cfg, pts) = points(&[(0.0, 0.0, 10.0), (0.0, 1.0, 11.0), (0.0, 1.0, 10.0)]);
        let tri = Triangle::new([0, 1, 2], &pts, COLOR, &cfg);
        assert_eq!(tri.facing(&pts, &cfg), 0.0);
        for xray in [false, true] {
            let (outcome, renderer) = draw(&cfg, &pts, &tri, xray);
            assert_eq!(outcome, DrawOutcome::BackFacing);
            assert!(untouched(&renderer));
        }
    }

    #[test]
    fn front_face_is_filled_with_shaded_color() {
        let (cfg, pts) = points(&FRONT);
        let tri = Triangle::new([0, 1, 2], &pts, COLOR, &cfg);
        let (outcome, renderer) = draw(&cfg, &pts, &tri, false);
        assert_eq!(outcome, DrawOutcome::Filled);
        // Canvas corners: (512, 360), (512, 260), (612, 260)
        assert_eq!(renderer.pixel(530, 300), Some(0x00A1_41E0));
        assert_eq!(renderer.pixel(600, 350), Some(BG));
    }

    #[test]
    fn xray_outlines_with_unshaded_color() {
        let (cfg, pts) = points(&FRONT);
        let tri = Triangle::new([0, 1, 2], &pts, COLOR, &cfg);
        let (outcome, renderer) = draw(&cfg, &pts, &tri, true);
        assert_eq!(outcome, DrawOutcome::Wireframe);
        assert_eq!(renderer.pixel(512, 300), Some(COLOR));
        assert_eq!(renderer.pixel(550, 260), Some(COLOR));
        assert_eq!(renderer.pixel(530, 300), Some(BG));
    }

    #[test]
    fn draw_can_switch_modes_between_calls() {
        let (cfg, pts) = points(&FRONT);
        let tri = Triangle::new([0, 1, 2], &pts, COLOR, &cfg);
        let mut renderer = Renderer::new(cfg.width, cfg.height, BG);
        assert_eq!(tri.draw(&pts, &cfg, &mut renderer.as_framebuffer(), true), DrawOutcome::Wireframe);
        assert_eq!(tri.draw(&pts, &cfg, &mut renderer.as_framebuffer(), false), DrawOutcome::Filled);
        assert_eq!(tri.draw(&pts, &cfg, &mut renderer.as_framebuffer(), true), DrawOutcome::Wireframe);
    }

    #[test]
    fn vertex_off_canvas_clips_whole_triangle() {
        // x = 10 at z = 10 projects 1000 px right of center.
        let (cfg, pts) = points(&[(0.0, 0.0, 10.0), (0.0, 1.0, 10.0), (10.0, 1.0, 10.0)]);
        let tri = Triangle::new([0, 1, 2], &pts, COLOR, &cfg);
        assert!(!tri.clip_test(&pts, &cfg));
        let (outcome, renderer) = draw(&cfg, &pts, &tri, false);
        assert_eq!(outcome, DrawOutcome::Clipped);
        assert!(untouched(&renderer));
    }

    #[test]
    fn depth_outside_range_clips() {
        let (cfg, far) = points(&[(0.0, 0.0, 34.0), (0.0, 1.0, 34.0), (1.0, 1.0, 35.0)]);
        let tri = Triangle::new([0, 1, 2], &far, COLOR, &cfg);
        assert!(!tri.clip_test(&far, &cfg));

        let (cfg, behind) = points(&[(0.0, 0.0, -5.0), (0.0, 1.0, -5.0), (1.0, 1.0, -5.0)]);
        let tri = Triangle::new([0, 1, 2], &behind, COLOR, &cfg);
        assert_eq!(draw(&cfg, &behind, &tri, false).0, DrawOutcome::Clipped);
    }

    #[test]
    fn normal_is_not_recomputed_after_points_move() {
        let (cfg, mut pts) = points(&FRONT);
        let tri = Triangle::new([0, 1, 2], &pts, COLOR, &cfg);
        let before = tri.normal();
        pts[2].set_x(-300.0);
        pts[2].set_z(20.0);
        assert_eq!(tri.normal(), before);
    }
}
