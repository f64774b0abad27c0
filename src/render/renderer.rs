//! Owning pixel storage.
//!
//! Provides the [`Renderer`] struct which owns the color buffer, hands out
//! [`FrameBuffer`] views for drawing and exports the finished frame.

use std::path::Path;

use super::framebuffer::FrameBuffer;
use crate::colors;

/// Frame export errors
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// Encoding or writing the image failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Buffer does not describe a complete image
    #[error("Buffer of {len} pixels does not fit {width}x{height}")]
    Size { len: usize, width: u32, height: u32 },
}

pub struct Renderer {
    color_buffer: Vec<u32>,
    width: u32,
    height: u32,
    background: u32,
}

impl Renderer {
    pub fn new(width: u32, height: u32, background: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            color_buffer: vec![background; size],
            width,
            height,
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    /// Fill the whole buffer with the background color.
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background);
    }

    pub fn pixels(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Get the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    /// Get a mutable FrameBuffer view into the color buffer.
    pub fn as_framebuffer(&mut self) -> FrameBuffer<'_> {
        FrameBuffer::new(&mut self.color_buffer, self.width, self.height)
    }

    /// Pixels as native-endian bytes, the layout a packed 32-bit texture expects.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.color_buffer
            .iter()
            .flat_map(|pixel| pixel.to_ne_bytes())
            .collect()
    }

    /// Unpack the RGBA8888 buffer into an 8-bit-per-channel image.
    pub fn to_rgba_image(&self) -> Result<image::RgbaImage, RenderError> {
        let bytes: Vec<u8> = self
            .color_buffer
            .iter()
            .flat_map(|&pixel| colors::unpack_rgba(pixel))
            .collect();
        image::RgbaImage::from_raw(self.width, self.height, bytes).ok_or(RenderError::Size {
            len: self.color_buffer.len(),
            width: self.width,
            height: self.height,
        })
    }

    /// Write the frame to a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
