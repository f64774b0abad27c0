//! Frame buffer abstraction for 2D pixel access.
//!
//! Provides a safe view into a packed color buffer with bounds-checked writes.
//! There is no depth buffer: later writes simply replace earlier ones, so
//! overlapping geometry is resolved by draw order.

/// A view into a color buffer.
///
/// Wraps a 1D slice with width/height metadata to enable safe 2D pixel access.
/// This is a borrowed view, not an owning type - it's meant to be created
/// temporarily when you need to pass the buffer + dimensions together.
pub struct FrameBuffer<'a> {
    color_buffer: &'a mut [u32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    /// Create a new FrameBuffer view from a buffer slice and dimensions.
    ///
    /// # Panics
    /// Panics in debug builds if the buffer length doesn't match width * height
    pub fn new(color_buffer: &'a mut [u32], width: u32, height: u32) -> Self {
        debug_assert_eq!(
            color_buffer.len(),
            (width as usize) * (height as usize),
            "Color buffer size doesn't match dimensions"
        );
        Self {
            color_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set a pixel at (x, y).
    ///
    /// Coordinates outside `[0, width) x [0, height)` are silently ignored;
    /// this is the only per-pixel clipping in the pipeline.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && (x as i64) < self.width as i64 && y >= 0 && (y as i64) < self.height as i64 {
            let idx = y as usize * self.width as usize + x as usize;
            self.color_buffer[idx] = color;
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if x >= 0 && (x as i64) < self.width as i64 && y >= 0 && (y as i64) < self.height as i64 {
            Some(self.color_buffer[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }
}
