//! A CPU software rasterizer for flat-shaded solids.
//!
//! Cubes and pyramids are projected onto a packed-RGBA pixel buffer with a
//! fixed perspective camera at the world origin looking down +z. Triangles
//! facing away from the eye are culled, the rest are either filled with a
//! flat-shaded color or outlined ("xray"). Meshes are drawn in painter's
//! order with no depth buffer.
//!
//! # Quick Start
//!
//! ```no_run
//! use solidcanvas::prelude::*;
//!
//! let config = CanvasConfig::default();
//! let mut scene = Scene::new(config, colors::WHITE);
//! scene.push(Mesh::cube(-1.0, -1.0, 10.0, 2.0, colors::RED, &config), false);
//! scene.push(Mesh::pyramid(2.0, 1.0, 12.0, 2.0, 1.0, 8, colors::BLUE, &config)?, true);
//!
//! let (renderer, _stats) = scene.render();
//! renderer.save_png("frame.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod colors;
pub mod config;
pub mod math;
pub mod mesh;
pub mod point;
pub mod render;
pub mod scene;
pub mod triangle;
#[cfg(feature = "window")]
pub mod window;

pub use config::{CanvasConfig, ConfigError, SceneConfig, ShapeConfig};
pub use mesh::{DrawStats, Mesh, MeshError};
pub use point::Point;
pub use render::{FrameBuffer, RenderError, Renderer};
pub use scene::Scene;
pub use triangle::{DrawOutcome, Triangle};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::colors;
    pub use crate::config::{CanvasConfig, SceneConfig, ShapeConfig};
    pub use crate::math::vec3::Vec3;
    pub use crate::mesh::{DrawStats, Mesh};
    pub use crate::point::Point;
    pub use crate::render::{draw_line, fill_triangle, FrameBuffer, Renderer};
    pub use crate::scene::Scene;
    pub use crate::triangle::Triangle;

    #[cfg(feature = "window")]
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
