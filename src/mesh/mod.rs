//! Solid meshes.
//!
//! A [`Mesh`] owns its points and the triangles that index into them, so a
//! triangle can never outlive the vertices it refers to. Geometry is built
//! once by a generator ([`Mesh::cube`], [`Mesh::pyramid`]) and never moved.

mod cube;
mod pyramid;

use std::ops::{Add, AddAssign};

use log::debug;

use crate::config::CanvasConfig;
use crate::point::Point;
use crate::render::FrameBuffer;
use crate::triangle::{DrawOutcome, Triangle};

pub use cube::CUBE_FACES;
pub use pyramid::MIN_SIDES;

/// Mesh construction errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A pyramid base needs at least three corners
    #[error("a pyramid needs at least {MIN_SIDES} sides, got {sides}")]
    TooFewSides { sides: usize },
}

/// Per-call tally of triangle outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub filled: usize,
    pub wireframe: usize,
    pub back_facing: usize,
    pub clipped: usize,
}

impl DrawStats {
    /// Triangles that reached the framebuffer.
    pub fn drawn(&self) -> usize {
        self.filled + self.wireframe
    }

    pub fn total(&self) -> usize {
        self.drawn() + self.back_facing + self.clipped
    }

    fn record(&mut self, outcome: DrawOutcome) {
        match outcome {
            DrawOutcome::Filled => self.filled += 1,
            DrawOutcome::Wireframe => self.wireframe += 1,
            DrawOutcome::BackFacing => self.back_facing += 1,
            DrawOutcome::Clipped => self.clipped += 1,
        }
    }
}

impl Add for DrawStats {
    type Output = DrawStats;

    fn add(self, rhs: DrawStats) -> Self::Output {
        Self {
            filled: self.filled + rhs.filled,
            wireframe: self.wireframe + rhs.wireframe,
            back_facing: self.back_facing + rhs.back_facing,
            clipped: self.clipped + rhs.clipped,
        }
    }
}

impl AddAssign for DrawStats {
    fn add_assign(&mut self, rhs: DrawStats) {
        *self = *self + rhs;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    points: Vec<Point>,
    triangles: Vec<Triangle>,
    color: u32,
}

impl Mesh {
    /// Build a mesh from its points and clockwise-wound faces.
    ///
    /// # Panics
    /// Panics if a face refers to a point that doesn't exist.
    pub fn new(points: Vec<Point>, faces: &[[usize; 3]], color: u32, config: &CanvasConfig) -> Self {
        let triangles = faces
            .iter()
            .map(|&face| Triangle::new(face, &points, color, config))
            .collect();
        Self {
            points,
            triangles,
            color,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// Draw every triangle in construction order with the same `xray` flag.
    pub fn draw(&self, config: &CanvasConfig, buffer: &mut FrameBuffer, xray: bool) -> DrawStats {
        let mut stats = DrawStats::default();
        for triangle in &self.triangles {
            stats.record(triangle.draw(&self.points, config, buffer, xray));
        }
        debug!(
            "mesh of {} triangles: {} filled, {} outlined, {} back-facing, {} clipped",
            self.triangles.len(),
            stats.filled,
            stats.wireframe,
            stats.back_facing,
            stats.clipped
        );
        stats
    }
}
