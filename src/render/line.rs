//! Line segment rasterization.
//!
//! Endpoints arrive as float canvas coordinates and are truncated to whole
//! pixels. Axis-aligned segments are walked directly. Diagonal segments use the
//! slope-intercept form `y = m * x + b` and step one pixel at a time along the
//! dominant axis, solving for the other axis on each step:
//!
//! ```text
//!   |m| <= 1  (shallow)          |m| > 1  (steep)
//!   one pixel per column         one pixel per row
//!
//!   x ->                          x ->
//!   ##                            #
//!     ###                          #
//!        ###                       #
//!           ##                      #
//! ```
//!
//! Stepping along the dominant axis guarantees one pixel per unit step, so
//! the path has no gaps. Bounds are left to [`FrameBuffer::set_pixel`]; the
//! iteration range is only narrowed to the canvas so far-off endpoints don't
//! spin through pixels that would be discarded anyway.

use super::framebuffer::FrameBuffer;

/// Draw the segment from `(x1, y1)` to `(x2, y2)` in stored canvas coordinates.
pub fn draw_line(buffer: &mut FrameBuffer, x1: f32, y1: f32, x2: f32, y2: f32, color: u32) {
    let x1 = x1 as i32;
    let x2 = x2 as i32;
    let y1 = y1 as i32;
    let y2 = y2 as i32;

    let width = buffer.width() as i32;
    let height = buffer.height() as i32;

    let min_x = x1.min(x2).max(0);
    let max_x = x1.max(x2).min(width - 1);
    let min_y = y1.min(y2).max(0);
    let max_y = y1.max(y2).min(height - 1);

    if x1 == x2 {
        for y in min_y..=max_y {
            buffer.set_pixel(x1, y, color);
        }
    } else if y1 == y2 {
        for x in min_x..=max_x {
            buffer.set_pixel(x, y1, color);
        }
    } else {
        let m = (y2 as f32 - y1 as f32) / (x2 as f32 - x1 as f32);
        let b = y1 as f32 - m * x1 as f32;
        if m.abs() > 1.0 {
            for y in min_y..=max_y {
                let x = ((y as f32 - b) / m) as i32;
                buffer.set_pixel(x, y, color);
            }
        } else {
            for x in min_x..=max_x {
                let y = (m * x as f32 + b) as i32;
                buffer.set_pixel(x, y, color);
            }
        }
    }
}
