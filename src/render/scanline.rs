//! Scanline-based triangle filling.
//!
//! The triangle is processed one horizontal row at a time:
//!
//! 1. **Sort vertices** by descending stored y (bottom of the screen first)
//! 2. **Walk rows** from the lowest vertex up to, but not including, the
//!    highest one
//! 3. **Span** each row between the long edge (v1 -> v3) and whichever short
//!    edge covers that row: v1 -> v2 below the middle vertex, v2 -> v3 at or
//!    above it
//!
//! ```text
//!             v3
//!             /|
//!            / |  rows above v2: span [x13, x23]
//!      v2   /  |
//!        \ /   |  <- switch at v2.y
//!         \    |  rows below v2: span [x12, x13]
//!          \   |
//!           \  |
//!            \ |
//!             v1
//! ```
//!
//! Vertex positions are truncated to whole pixels before any slope is
//! computed. Each edge keeps a slope/intercept pair, except vertical edges,
//! which just report their constant x. Rows are drawn with
//! [`draw_line`](super::line::draw_line).

use super::framebuffer::FrameBuffer;
use super::line::draw_line;
use crate::point::Point;

/// A triangle edge in slope-intercept form, solved for x.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Edge {
    Vertical(i32),
    Sloped { m: f32, b: f32 },
}

impl Edge {
    fn new((xa, ya): (i32, i32), (xb, yb): (i32, i32)) -> Self {
        if xa == xb {
            Edge::Vertical(xa)
        } else {
            let m = (yb as f32 - ya as f32) / (xb as f32 - xa as f32);
            Edge::Sloped {
                m,
                b: yb as f32 - m * xb as f32,
            }
        }
    }

    /// x where this edge crosses row `y`, truncated to a pixel column.
    #[inline]
    fn x_at(&self, y: i32) -> i32 {
        match *self {
            Edge::Vertical(x) => x,
            Edge::Sloped { m, b } => ((y as f32 - b) / m) as i32,
        }
    }
}

/// Sorts three vertices by stored y, largest first.
///
/// The order among vertices with equal y is irrelevant to the fill.
fn sort_descending<'a>(v1: &'a Point, v2: &'a Point, v3: &'a Point) -> [&'a Point; 3] {
    let mut sorted = [v1, v2, v3];
    if sorted[1].y() > sorted[0].y() {
        sorted.swap(0, 1);
    }
    if sorted[2].y() > sorted[1].y() {
        sorted.swap(1, 2);
    }
    if sorted[1].y() > sorted[0].y() {
        sorted.swap(0, 1);
    }
    sorted
}

/// Fill the triangle `v1 v2 v3` with a solid color. Vertex order is free.
///
/// Triangles where two vertices share a row (flat top or flat bottom) take
/// the same path as the general case: a horizontal short edge is never
/// solved for x, because no row is assigned to it.
pub fn fill_triangle(buffer: &mut FrameBuffer, v1: &Point, v2: &Point, v3: &Point, color: u32) {
    let [p1, p2, p3] = sort_descending(v1, v2, v3);

    let a = (p1.x() as i32, p1.y() as i32);
    let b = (p2.x() as i32, p2.y() as i32);
    let c = (p3.x() as i32, p3.y() as i32);

    let edge12 = Edge::new(a, b);
    let edge13 = Edge::new(a, c);
    let edge23 = Edge::new(b, c);

    let (y1, y2, y3) = (a.1, b.1, c.1);

    // Rows off the canvas would be dropped by the line rasterizer anyway.
    let top = y3.max(-1);
    let bottom = y1.min(buffer.height() as i32 - 1);

    let mut y = bottom;
    while y > top {
        let x13 = edge13.x_at(y);
        let x_other = if y > y2 {
            edge12.x_at(y)
        } else {
            edge23.x_at(y)
        };
        draw_line(buffer, x_other as f32, y as f32, x13 as f32, y as f32, color);
        y -= 1;
    }
}
