//! Canvas and scene configuration.
//!
//! [`CanvasConfig`] carries every constant the projection and clipping math
//! depends on, so resolution and viewport changes never need a rebuild.
//! [`SceneConfig`] describes a whole frame (canvas, background, solids) and
//! can be loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::colors;

/// Projection and clipping parameters shared by points, triangles and meshes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Distance from the eye to the projection plane, in world units.
    pub viewport_distance: f32,
    /// Far depth threshold. Triangles with any vertex at or beyond it are dropped.
    pub distance_clip: f32,
}

impl CanvasConfig {
    pub const DEFAULT_WIDTH: u32 = 1024;
    pub const DEFAULT_HEIGHT: u32 = 720;
    pub const DEFAULT_VIEWPORT_DISTANCE: f32 = 1000.0;
    pub const DEFAULT_DISTANCE_CLIP: f32 = 35.0;

    pub fn new(width: u32, height: u32, viewport_distance: f32, distance_clip: f32) -> Self {
        Self {
            width,
            height,
            viewport_distance,
            distance_clip,
        }
    }

    /// Horizontal offset of the canvas center (integer halving).
    #[inline]
    pub fn half_width(&self) -> f32 {
        (self.width / 2) as f32
    }

    /// Vertical offset of the canvas center (integer halving).
    #[inline]
    pub fn half_height(&self) -> f32 {
        (self.height / 2) as f32
    }

    /// World axis value to center-relative canvas offset: `world * d / z`.
    #[inline]
    pub fn project(&self, world: f32, z: f32) -> f32 {
        world * self.viewport_distance / z
    }

    /// Center-relative canvas offset back to world units: `canvas * z / d`.
    #[inline]
    pub fn unproject(&self, canvas: f32, z: f32) -> f32 {
        canvas * z / self.viewport_distance
    }

    /// True when a stored (top-left) canvas position lies on the canvas.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= 0.0 && x < self.width as f32 && y >= 0.0 && y < self.height as f32
    }

    /// True when `z` lies in the open interval `(0, distance_clip)`.
    #[inline]
    pub fn in_depth_range(&self, z: f32) -> bool {
        z > 0.0 && z < self.distance_clip
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_VIEWPORT_DISTANCE,
            Self::DEFAULT_DISTANCE_CLIP,
        )
    }
}

/// One solid in a scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeConfig {
    /// Axis-aligned cube from its near-bottom-left corner.
    Cube {
        x: f32,
        y: f32,
        z: f32,
        size: f32,
        color: u32,
        #[serde(default)]
        xray: bool,
    },
    /// Regular pyramid (or cone approximation) hanging below its apex.
    Pyramid {
        x: f32,
        y: f32,
        z: f32,
        height: f32,
        radius: f32,
        sides: usize,
        color: u32,
        #[serde(default)]
        xray: bool,
    },
}

/// A full frame description: canvas parameters, background and solids in draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_background")]
    pub background: u32,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub shapes: Vec<ShapeConfig>,
}

fn default_background() -> u32 {
    colors::WHITE
}

impl SceneConfig {
    /// Load a scene description from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse a scene description from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize the scene description back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

impl Default for SceneConfig {
    /// Three cubes and three pyramids on a white canvas.
    fn default() -> Self {
        let cube = |x, y, z, size, color, xray| ShapeConfig::Cube {
            x,
            y,
            z,
            size,
            color,
            xray,
        };
        let pyramid = |x, y, z, height, radius, sides, color, xray| ShapeConfig::Pyramid {
            x,
            y,
            z,
            height,
            radius,
            sides,
            color,
            xray,
        };

        Self {
            background: colors::WHITE,
            canvas: CanvasConfig::default(),
            shapes: vec![
                cube(5.0, 2.0, 20.0, 2.5, 0x00FF_F0FF, false),
                cube(-4.0, -3.0, 10.0, 2.5, 0xFF00_00FF, true),
                cube(1.0, 2.0, 10.0, 1.0, 0x0123_45FF, false),
                pyramid(1.0, 4.0, 25.0, 3.0, 2.0, 7, 0xFFFF_11FF, true),
                pyramid(3.0, -1.0, 15.0, 2.0, 1.0, 49, 0x0000_0FFF, false),
                pyramid(5.0, -1.0, 10.0, 2.0, 1.0, 20, 0x0000_0FFF, false),
            ],
        }
    }
}

/// Scene file errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),
}
