//! Mixed-space vertex positions.
//!
//! A [`Point`] keeps its x and y in canvas space (pixels) and its z in world
//! space. Keeping depth in world units lets any canvas position be carried
//! back to world space through the perspective relation
//! `world = centered * z / viewport_distance`.
//!
//! Two canvas conventions meet here:
//!
//! - **stored** coordinates: pixel position measured from the top-left
//!   corner, y growing downward. This is what the rasterizers consume.
//! - **centered** coordinates: offset from the canvas center, y growing
//!   upward. This is what the projection math produces and consumes.
//!
//! The constructor and every setter take centered input; [`Point::from_stored`]
//! is the only way in with stored coordinates.

use crate::config::CanvasConfig;
use crate::math::vec3::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
    z: f32,
    half_width: f32,
    half_height: f32,
}

impl Point {
    /// Create a point from centered canvas coordinates and a world depth.
    pub fn new(px: f32, py: f32, pz: f32, config: &CanvasConfig) -> Self {
        let half_width = config.half_width();
        let half_height = config.half_height();
        Self {
            x: half_width + px,
            y: half_height - py,
            z: pz,
            half_width,
            half_height,
        }
    }

    /// The zero point: stored pixel `(0, 0)` at depth `0`.
    pub fn zero(config: &CanvasConfig) -> Self {
        Self::from_stored(0.0, 0.0, 0.0, config)
    }

    /// Create a point from stored (top-left, y-down) pixel coordinates.
    pub fn from_stored(x: f32, y: f32, z: f32, config: &CanvasConfig) -> Self {
        Self {
            x,
            y,
            z,
            half_width: config.half_width(),
            half_height: config.half_height(),
        }
    }

    /// Project a world-space position onto the canvas.
    ///
    /// `z` must be positive for the perspective divide to be meaningful.
    pub fn from_world(x: f32, y: f32, z: f32, config: &CanvasConfig) -> Self {
        Self::new(config.project(x, z), config.project(y, z), z, config)
    }

    /// Stored x: pixel column from the left edge.
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Stored y: pixel row from the top edge.
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// World-space depth.
    #[inline]
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Horizontal offset from the canvas center.
    #[inline]
    pub fn centered_x(&self) -> f32 {
        self.x - self.half_width
    }

    /// Vertical offset from the canvas center, positive upward.
    #[inline]
    pub fn centered_y(&self) -> f32 {
        self.half_height - self.y
    }

    /// Set x from a centered offset.
    pub fn set_x(&mut self, px: f32) {
        self.x = self.half_width + px;
    }

    /// Set y from a centered offset (positive upward).
    pub fn set_y(&mut self, py: f32) {
        self.y = self.half_height - py;
    }

    pub fn set_z(&mut self, pz: f32) {
        self.z = pz;
    }

    /// World-space x recovered from the canvas position and depth.
    #[inline]
    pub fn world_x(&self, config: &CanvasConfig) -> f32 {
        config.unproject(self.centered_x(), self.z)
    }

    /// World-space y recovered from the canvas position and depth.
    #[inline]
    pub fn world_y(&self, config: &CanvasConfig) -> f32 {
        config.unproject(self.centered_y(), self.z)
    }

    /// Full world-space position.
    #[inline]
    pub fn world(&self, config: &CanvasConfig) -> Vec3 {
        Vec3::new(self.world_x(config), self.world_y(config), self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn origin_maps_to_canvas_center() {
        let cfg = CanvasConfig::default();
        let p = Point::new(0.0, 0.0, 5.0, &cfg);
        assert_relative_eq!(p.x(), 512.0);
        assert_relative_eq!(p.y(), 360.0);
        assert_relative_eq!(p.z(), 5.0);
    }

    #[test]
    fn positive_centered_y_moves_up() {
        let cfg = CanvasConfig::default();
        let p = Point::new(10.0, 20.0, 1.0, &cfg);
        assert_relative_eq!(p.x(), 522.0);
        assert_relative_eq!(p.y(), 340.0);
        assert_relative_eq!(p.centered_x(), 10.0);
        assert_relative_eq!(p.centered_y(), 20.0);
    }

    #[test]
    fn zero_point_sits_at_top_left() {
        let cfg = CanvasConfig::default();
        let p = Point::zero(&cfg);
        assert_relative_eq!(p.x(), 0.0);
        assert_relative_eq!(p.y(), 0.0);
        assert_relative_eq!(p.z(), 0.0);
        assert_relative_eq!(p.centered_x(), -512.0);
        assert_relative_eq!(p.centered_y(), 360.0);
    }

    #[test]
    fn setters_round_trip_through_centered_accessors() {
        let cfg = CanvasConfig::default();
        let mut p = Point::zero(&cfg);
        for v in [-700.25_f32, -1.5, 0.0, 3.75, 123.0, 2048.5] {
            p.set_x(v);
            p.set_y(v);
            assert_relative_eq!(p.centered_x(), v, epsilon = 1e-3);
            assert_relative_eq!(p.centered_y(), v, epsilon = 1e-3);
        }
        p.set_z(7.0);
        assert_relative_eq!(p.z(), 7.0);
    }

    #[test]
    fn setters_match_constructor() {
        let cfg = CanvasConfig::default();
        let mut p = Point::zero(&cfg);
        p.set_x(-40.0);
        p.set_y(25.0);
        p.set_z(3.0);
        assert_eq!(p, Point::new(-40.0, 25.0, 3.0, &cfg));
    }

    #[test]
    fn from_stored_keeps_pixel_position() {
        let cfg = CanvasConfig::default();
        let p = Point::from_stored(100.0, 50.0, 2.0, &cfg);
        assert_relative_eq!(p.x(), 100.0);
        assert_relative_eq!(p.y(), 50.0);
        assert_relative_eq!(p.centered_x(), -412.0);
        assert_relative_eq!(p.centered_y(), 310.0);
    }

    #[test]
    fn world_position_survives_projection() {
        let cfg = CanvasConfig::default();
        let p = Point::from_world(-4.0, 2.5, 12.5, &cfg);
        let w = p.world(&cfg);
        assert_relative_eq!(w.x, -4.0, epsilon = 1e-4);
        assert_relative_eq!(w.y, 2.5, epsilon = 1e-4);
        assert_relative_eq!(w.z, 12.5);
    }

    #[test]
    fn canvas_dimensions_come_from_config() {
        let cfg = CanvasConfig::new(200, 100, 50.0, 10.0);
        let p = Point::from_world(1.0, 1.0, 5.0, &cfg);
        // 1 * 50 / 5 = 10 pixels right of and above (100, 50)
        assert_relative_eq!(p.x(), 110.0);
        assert_relative_eq!(p.y(), 40.0);
    }
}
