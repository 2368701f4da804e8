/// Viewport maps window pixels to grid cells.
/// The grid is drawn from the top-left corner with square cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cell_size: f32,
    pub columns: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn new(cell_size: u32, columns: usize, rows: usize) -> Self {
        Self {
            cell_size: cell_size as f32,
            columns,
            rows,
        }
    }

    /// Cell under the given screen position, if any
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> Option<(usize, usize)> {
        if screen_x < 0.0 || screen_y < 0.0 {
            return None;
        }
        let col = (screen_x / self.cell_size) as usize;
        let row = (screen_y / self.cell_size) as usize;
        (col < self.columns && row < self.rows).then_some((col, row))
    }

    /// Top-left corner of a cell in screen coordinates
    pub fn cell_origin(&self, col: usize, row: usize) -> (f32, f32) {
        (col as f32 * self.cell_size, row as f32 * self.cell_size)
    }

    /// Size of the drawn grid in pixels
    pub fn window_dimensions(&self) -> (f32, f32) {
        (
            self.columns as f32 * self.cell_size,
            self.rows as f32 * self.cell_size,
        )
    }
}
