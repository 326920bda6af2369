use cgmath::Vector2;

pub mod framebuffer;
pub mod raster;
pub mod square;

use crate::square::Square;

/// Hard bound on the subdivision recursion. Deeper levels are smaller than
/// a pixel at typical window sizes.
pub const MAX_DEPTH: u32 = 9;

/// Drawing capability the subdivision recurses through.
///
/// Corners arrive in bottom-left, top-left, top-right, bottom-right order.
pub trait QuadSink {
    fn draw_quad(&mut self, corners: [Vector2<f32>; 4]);
}

/// Draws the center cell of the 3x3 grid spanning `square`, then recurses
/// into the eight cells around it with an incremented depth.
///
/// The depth is incremented before the bound check, so a root call at depth
/// 0 draws through nine levels.
pub fn subdivide<S: QuadSink>(sink: &mut S, square: Square, depth: u32) {
    let depth = depth + 1;
    if depth > MAX_DEPTH {
        return;
    }

    sink.draw_quad(square.cell(1, 1).corners());

    for row in 0..3 {
        for col in 0..3 {
            if row == 1 && col == 1 {
                continue;
            }

            subdivide(sink, square.cell(row, col), depth);
        }
    }
}
