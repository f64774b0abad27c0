//! Painter's-order scenes.
//!
//! There is no depth buffer: meshes are drawn in the order they were added
//! and later meshes simply paint over earlier ones.

use log::debug;

use crate::config::{CanvasConfig, SceneConfig, ShapeConfig};
use crate::mesh::{DrawStats, Mesh, MeshError};
use crate::render::{FrameBuffer, Renderer};

/// A mesh and how to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub mesh: Mesh,
    /// Outline triangles instead of filling them.
    pub xray: bool,
}

#[derive(Clone, Debug)]
pub struct Scene {
    config: CanvasConfig,
    background: u32,
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(config: CanvasConfig, background: u32) -> Self {
        Self {
            config,
            background,
            objects: Vec::new(),
        }
    }

    /// Build every shape of a scene description, keeping its order.
    pub fn from_config(scene: &SceneConfig) -> Result<Self, MeshError> {
        let config = scene.canvas;
        let mut out = Self::new(config, scene.background);
        out.objects.reserve_exact(scene.shapes.len());

        for shape in &scene.shapes {
            match *shape {
                ShapeConfig::Cube {
                    x,
                    y,
                    z,
                    size,
                    color,
                    xray,
                } => out.push(Mesh::cube(x, y, z, size, color, &config), xray),
                ShapeConfig::Pyramid {
                    x,
                    y,
                    z,
                    height,
                    radius,
                    sides,
                    color,
                    xray,
                } => out.push(
                    Mesh::pyramid(x, y, z, height, radius, sides, color, &config)?,
                    xray,
                ),
            }
        }
        Ok(out)
    }

    /// Append a mesh; it will be drawn after everything already in the scene.
    pub fn push(&mut self, mesh: Mesh, xray: bool) {
        self.objects.push(SceneObject { mesh, xray });
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Draw every mesh into `buffer` in insertion order.
    pub fn draw(&self, buffer: &mut FrameBuffer) -> DrawStats {
        let stats = self
            .objects
            .iter()
            .fold(DrawStats::default(), |acc, object| {
                acc + object.mesh.draw(&self.config, buffer, object.xray)
            });
        debug!(
            "scene of {} meshes: {} of {} triangles drawn",
            self.objects.len(),
            stats.drawn(),
            stats.total()
        );
        stats
    }

    /// Render into a fresh buffer cleared to the scene background.
    pub fn render(&self) -> (Renderer, DrawStats) {
        let mut renderer = Renderer::new(self.config.width, self.config.height, self.background);
        let stats = self.draw(&mut renderer.as_framebuffer());
        (renderer, stats)
    }
}
