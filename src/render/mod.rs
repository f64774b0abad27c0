//! Pixel-level rendering.
//!
//! - [`FrameBuffer`]: bounds-checked writes into a borrowed color buffer
//! - [`draw_line`]: segment rasterization
//! - [`fill_triangle`]: scanline triangle filling
//! - [`Renderer`]: owning buffer, clearing and export

mod framebuffer;
mod line;
mod renderer;
mod scanline;

pub use framebuffer::FrameBuffer;
pub use line::draw_line;
pub use renderer::{RenderError, Renderer};
pub use scanline::fill_triangle;
