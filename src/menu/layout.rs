//! Grid layout for launcher buttons
//!
//! Buttons are placed row by row. Every row, including a partially filled
//! last row, is centered horizontally on its own.

/// Axis-aligned rectangle in integer screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.height as i32 / 2
    }

    /// Check if a point is inside this rectangle
    ///
    /// The right and bottom edges are exclusive, so two adjacent rects never
    /// both contain the same point.
    pub fn contains(&self, pos: [f32; 2]) -> bool {
        let px = pos[0].floor() as i32;
        let py = pos[1].floor() as i32;
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns the same rectangle moved by `(dx, dy)`
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Convert to an egui rectangle in points
    pub fn to_egui(self) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(self.x as f32, self.y as f32),
            egui::vec2(self.width as f32, self.height as f32),
        )
    }
}

/// Fixed grid parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub screen_width: u32,
    pub columns: usize,
    pub button_width: u32,
    pub button_height: u32,
    pub spacing_x: u32,
    pub spacing_y: u32,
    pub top: i32,
}

impl GridLayout {
    /// The grid used by the launcher window
    pub const LAUNCHER: GridLayout = GridLayout {
        screen_width: crate::app::window::LAUNCHER_WIDTH,
        columns: 3,
        button_width: 420,
        button_height: 160,
        spacing_x: 80,
        spacing_y: 60,
        top: 320,
    };

    /// Column count, with 0 treated as a single column
    fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Number of buttons on `row` when the grid holds `total` buttons
    pub fn buttons_in_row(&self, row: usize, total: usize) -> usize {
        let columns = self.columns();
        total.saturating_sub(row * columns).min(columns)
    }

    /// Total pixel width of `count` buttons including the gaps between them
    pub fn row_width(&self, count: usize) -> i32 {
        let count = count as i32;
        count * self.button_width as i32 + (count - 1).max(0) * self.spacing_x as i32
    }

    /// Left edge of `row` so that the row is centered on screen
    pub fn row_start_x(&self, row: usize, total: usize) -> i32 {
        let width = self.row_width(self.buttons_in_row(row, total));
        (self.screen_width as i32 - width).div_euclid(2)
    }

    /// Top-left corner of the button at `index` in a grid of `total` buttons
    pub fn position(&self, index: usize, total: usize) -> (i32, i32) {
        let columns = self.columns();
        let row = index / columns;
        let col = index % columns;

        let x = self.row_start_x(row, total)
            + col as i32 * (self.button_width + self.spacing_x) as i32;
        let y = self.top + row as i32 * (self.button_height + self.spacing_y) as i32;
        (x, y)
    }

    /// Rectangles for every button of a grid holding `total` buttons
    pub fn rects(&self, total: usize) -> Vec<Rect> {
        (0..total)
            .map(|index| {
                let (x, y) = self.position(index, total);
                Rect::new(x, y, self.button_width, self.button_height)
            })
            .collect()
    }

    /// Number of rows needed for `total` buttons
    pub fn row_count(&self, total: usize) -> usize {
        total.div_ceil(self.columns())
    }
}
