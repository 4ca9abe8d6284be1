//! Board geometry

use egui::{Pos2, Rect, pos2, vec2};

/// Square cells fitted and centered inside an area of the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
    pub origin: Pos2,
    pub cell_size: f32,
}

impl BoardLayout {
    /// Largest board of `rows` x `cols` square cells that fits `area`
    pub fn fit(rows: usize, cols: usize, area: Rect) -> Self {
        let cell_size = (area.width() / cols as f32).min(area.height() / rows as f32);
        let size = vec2(cell_size * cols as f32, cell_size * rows as f32);

        Self {
            rows,
            cols,
            origin: area.center() - size / 2.0,
            cell_size,
        }
    }

    /// Whole board
    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(
            self.origin,
            vec2(
                self.cell_size * self.cols as f32,
                self.cell_size * self.rows as f32,
            ),
        )
    }

    pub fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::from_min_size(
            self.origin + vec2(col as f32, row as f32) * self.cell_size,
            vec2(self.cell_size, self.cell_size),
        )
    }

    pub fn cell_center(&self, row: usize, col: usize) -> Pos2 {
        self.cell_rect(row, col).center()
    }

    /// Converts screen coordinates to board cell (row, col)
    /// Returns None if outside the board
    pub fn screen_to_cell(&self, pos: [f32; 2]) -> Option<(usize, usize)> {
        let rel_x = pos[0] - self.origin.x;
        let rel_y = pos[1] - self.origin.y;
        if rel_x < 0.0 || rel_y < 0.0 {
            return None;
        }

        let col = (rel_x / self.cell_size) as usize;
        let row = (rel_y / self.cell_size) as usize;

        (row < self.rows && col < self.cols).then_some((row, col))
    }

    /// Interior grid lines as (from, to) pairs
    pub fn grid_lines(&self) -> Vec<(Pos2, Pos2)> {
        let bounds = self.bounds();
        let horizontal = (1..self.rows).map(|r| {
            let y = bounds.top() + r as f32 * self.cell_size;
            (pos2(bounds.left(), y), pos2(bounds.right(), y))
        });
        let vertical = (1..self.cols).map(|c| {
            let x = bounds.left() + c as f32 * self.cell_size;
            (pos2(x, bounds.top()), pos2(x, bounds.bottom()))
        });

        horizontal.chain(vertical).collect()
    }
}
