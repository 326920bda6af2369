use cgmath::Vector2;

use crate::framebuffer::{FrameBuffer, Pixel};
use crate::QuadSink;

/// Software rasterizer for axis-aligned quads in normalized coordinates.
///
/// The surface origin is the bottom-left corner while image rows run top to
/// bottom, so the y axis is flipped when mapping to pixels. Quads outside
/// the buffer are clamped; degenerate quads fill nothing.
pub struct RasterSink<'a> {
    framebuffer: &'a mut FrameBuffer,
    fill: Pixel,
}

impl<'a> RasterSink<'a> {
    pub fn new(framebuffer: &'a mut FrameBuffer, fill: Pixel) -> Self {
        Self { framebuffer, fill }
    }
}

impl QuadSink for RasterSink<'_> {
    fn draw_quad(&mut self, corners: [Vector2<f32>; 4]) {
        let [bottom_left, _, top_right, _] = corners;

        let width = self.framebuffer.width();
        let height = self.framebuffer.height();

        let x_min = to_pixel(bottom_left.x, width);
        let x_max = to_pixel(top_right.x, width);
        let y_min = to_pixel(bottom_left.y, height);
        let y_max = to_pixel(top_right.y, height);

        for y in y_min..y_max {
            let row = height - 1 - y;

            for x in x_min..x_max {
                if let Some(pixel) = self.framebuffer.pixel_mut(x, row) {
                    *pixel = self.fill;
                }
            }
        }
    }
}

fn to_pixel(coordinate: f32, extent: usize) -> usize {
    let scaled = (coordinate * extent as f32).round();

    (scaled.max(0.0) as usize).min(extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;
    use crate::{subdivide, MAX_DEPTH};

    fn white_pixels(fb: &FrameBuffer) -> usize {
        fb.buffer().iter().filter(|p| **p == Pixel::white()).count()
    }

    #[test]
    fn center_quad_fills_the_middle_ninth() {
        let mut fb = FrameBuffer::new(9, 9);

        let mut sink = RasterSink::new(&mut fb, Pixel::white());
        sink.draw_quad(Square::unit().cell(1, 1).corners());

        assert_eq!(white_pixels(&fb), 9);

        // rows 3..6, columns 3..6
        for y in 0..9 {
            for x in 0..9 {
                let expected = (3..6).contains(&x) && (3..6).contains(&y);
                let pixel = *fb.pixel_mut(x, y).unwrap();

                assert_eq!(pixel == Pixel::white(), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn quads_clamp_to_the_buffer() {
        let mut fb = FrameBuffer::new(4, 4);

        let outside = Square::new(Vector2::new(-1.0, -1.0), Vector2::new(0.5, 2.0));
        let mut sink = RasterSink::new(&mut fb, Pixel::white());
        sink.draw_quad(outside.corners());

        // left half of the buffer, nothing out of range touched
        assert_eq!(white_pixels(&fb), 8);
    }

    #[test]
    fn degenerate_quad_fills_nothing() {
        let mut fb = FrameBuffer::new(8, 8);

        let point = Square::new(Vector2::new(0.5, 0.5), Vector2::new(0.5, 0.5));
        let mut sink = RasterSink::new(&mut fb, Pixel::white());
        sink.draw_quad(point.corners());

        assert_eq!(white_pixels(&fb), 0);
    }

    #[test]
    fn three_levels_leave_the_carpet_holes() {
        // on a 27x27 grid, three levels paint every cell except the
        // 8^3 never-drawn ones
        let mut fb = FrameBuffer::new(27, 27);

        let mut sink = RasterSink::new(&mut fb, Pixel::white());
        subdivide(&mut sink, Square::unit(), MAX_DEPTH - 3);

        assert_eq!(white_pixels(&fb), 27 * 27 - 8 * 8 * 8);
    }
}
