use cgmath::Vector2;

/// Axis-aligned region given by its bottom-left and top-right corners.
///
/// The corners are not reordered; an inverted square produces inverted
/// cells and is left to degenerate on its own.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Square {
    pub bottom_left: Vector2<f32>,
    pub top_right: Vector2<f32>,
}

impl Square {
    pub fn new(bottom_left: Vector2<f32>, top_right: Vector2<f32>) -> Self {
        Self {
            bottom_left,
            top_right,
        }
    }

    /// The whole normalized drawing surface.
    pub fn unit() -> Self {
        Self::new(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0))
    }

    /// Side lengths of one cell of the 3x3 grid spanning this square.
    pub fn cell_size(&self) -> Vector2<f32> {
        (self.top_right - self.bottom_left) / 3.0
    }

    /// Cell of the 3x3 grid, rows and columns counted from the bottom-left
    /// corner.
    pub fn cell(&self, row: u32, col: u32) -> Self {
        let size = self.cell_size();
        let bottom_left = self.bottom_left + Vector2::new(col as f32 * size.x, row as f32 * size.y);

        Self {
            bottom_left,
            top_right: bottom_left + size,
        }
    }

    /// Corner points in bottom-left, top-left, top-right, bottom-right
    /// order.
    pub fn corners(&self) -> [Vector2<f32>; 4] {
        [
            self.bottom_left,
            Vector2::new(self.bottom_left.x, self.top_right.y),
            self.top_right,
            Vector2::new(self.top_right.x, self.bottom_left.y),
        ]
    }

    pub fn contains(&self, other: &Square) -> bool {
        self.bottom_left.x <= other.bottom_left.x
            && self.bottom_left.y <= other.bottom_left.y
            && self.top_right.x >= other.top_right.x
            && self.top_right.y >= other.top_right.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vector2<f32>, b: Vector2<f32>) {
        assert!(
            (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn cell_size_is_a_third_per_axis() {
        let square = Square::new(Vector2::new(1.0, 2.0), Vector2::new(4.0, 8.0));

        assert_close(square.cell_size(), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn cells_index_from_the_bottom_left() {
        let unit = Square::unit();

        let bottom_left = unit.cell(0, 0);
        assert_close(bottom_left.bottom_left, Vector2::new(0.0, 0.0));
        assert_close(bottom_left.top_right, Vector2::new(1.0 / 3.0, 1.0 / 3.0));

        let top_right = unit.cell(2, 2);
        assert_close(top_right.bottom_left, Vector2::new(2.0 / 3.0, 2.0 / 3.0));
        assert_close(top_right.top_right, Vector2::new(1.0, 1.0));

        let bottom_row_right = unit.cell(0, 2);
        assert_close(bottom_row_right.bottom_left, Vector2::new(2.0 / 3.0, 0.0));
    }

    #[test]
    fn cells_tile_the_parent() {
        let square = Square::new(Vector2::new(-1.0, -1.0), Vector2::new(2.0, 0.5));

        for row in 0..3 {
            for col in 0..3 {
                let cell = square.cell(row, col);

                assert!(square.contains(&cell));

                // neighbours share edges
                if col < 2 {
                    let right = square.cell(row, col + 1);
                    assert!((cell.top_right.x - right.bottom_left.x).abs() < 1e-6);
                }
                if row < 2 {
                    let above = square.cell(row + 1, col);
                    assert!((cell.top_right.y - above.bottom_left.y).abs() < 1e-6);
                }
            }
        }

        let size = square.cell_size();
        let parent = (square.top_right.x - square.bottom_left.x)
            * (square.top_right.y - square.bottom_left.y);

        assert!((9.0 * size.x * size.y - parent).abs() < 1e-5);
    }

    #[test]
    fn corner_winding() {
        let square = Square::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 1.0));

        let [bl, tl, tr, br] = square.corners();
        assert_close(bl, Vector2::new(0.0, 0.0));
        assert_close(tl, Vector2::new(0.0, 1.0));
        assert_close(tr, Vector2::new(2.0, 1.0));
        assert_close(br, Vector2::new(2.0, 0.0));
    }

    #[test]
    fn contains_rejects_overlap() {
        let unit = Square::unit();
        let shifted = Square::new(Vector2::new(0.5, 0.5), Vector2::new(1.5, 1.5));

        assert!(unit.contains(&unit));
        assert!(!unit.contains(&shifted));
        assert!(!shifted.contains(&unit));
    }
}
