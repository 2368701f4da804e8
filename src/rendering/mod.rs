use macroquad::prelude::*;

use crate::application::{GameState, Viewport};

pub const BACKGROUND_COLOR: Color = Color::new(147. / 255., 147. / 255., 147. / 255., 1.0);
pub const LIVE_CELL_COLOR: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const GRID_LINE_COLOR: Color = Color::new(180. / 255., 180. / 255., 180. / 255., 1.0);

const GRID_LINE_THICKNESS: f32 = 2.0;

/// Draw one full frame: background, live cells, hover preview and grid lines
pub fn draw_frame(state: &GameState, viewport: &Viewport) {
    clear_background(BACKGROUND_COLOR);
    draw_live_cells(state, viewport);

    // Ghost of the cell a click would bring to life
    if !state.is_running() {
        if let Some((x, y)) = state.hovered {
            if state.grid.get(x, y).is_some_and(|cell| !cell.is_alive()) {
                fill_cell(viewport, x, y);
            }
        }
    }

    draw_grid_lines(viewport);
}

fn draw_live_cells(state: &GameState, viewport: &Viewport) {
    state
        .grid
        .alive_cells()
        .for_each(|(x, y)| fill_cell(viewport, x, y));
}

fn fill_cell(viewport: &Viewport, x: usize, y: usize) {
    let (left, top) = viewport.cell_origin(x, y);
    draw_rectangle(left, top, viewport.cell_size, viewport.cell_size, LIVE_CELL_COLOR);
}

/// Lines sit one pixel left of / above each cell boundary
fn draw_grid_lines(viewport: &Viewport) {
    let (width, height) = viewport.window_dimensions();

    for col in 0..viewport.columns {
        let x = col as f32 * viewport.cell_size - 1.0;
        draw_line(x, 0.0, x, height, GRID_LINE_THICKNESS, GRID_LINE_COLOR);
    }
    for row in 0..viewport.rows {
        let y = row as f32 * viewport.cell_size - 1.0;
        draw_line(0.0, y, width, y, GRID_LINE_THICKNESS, GRID_LINE_COLOR);
    }
}
