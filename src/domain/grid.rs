use super::{Boundary, Cell};
use rand::Rng;

/// Grid holds the cells of one generation.
/// Dimensions and boundary policy are fixed at creation; `step` returns a
/// fresh grid rather than updating cells in place.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    boundary: Boundary,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(width: usize, height: usize, boundary: Boundary) -> Self {
        Self {
            width,
            height,
            boundary,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Create a grid where the listed `(x, y)` cells are alive.
    /// Coordinates outside the grid are ignored.
    pub fn from_alive(
        width: usize,
        height: usize,
        boundary: Boundary,
        alive: &[(usize, usize)],
    ) -> Self {
        let mut grid = Self::new(width, height, boundary);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (None when out of range)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position; out of range writes are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip the cell at position; out of range is ignored
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.get(x, y) {
            self.set(x, y, cell.toggle());
        }
    }

    /// Count live cells among the up-to-eight neighbors of (x, y).
    /// Which neighbors exist is decided by the grid's boundary policy.
    pub fn live_neighbors(&self, x: usize, y: usize) -> u8 {
        let xs = self.boundary.axis_span(x, self.width);
        let ys = self.boundary.axis_span(y, self.height);

        ys.into_iter()
            .flatten()
            .flat_map(|ny| xs.into_iter().flatten().map(move |nx| (nx, ny)))
            .filter(|&pos| pos != (x, y))
            .filter(|&(nx, ny)| self.cells[self.get_index(nx, ny)].is_alive())
            .count() as u8
    }

    /// Advance one generation.
    /// Every next state is computed from `self` only, so no cell ever sees
    /// an already-updated neighbor.
    pub fn step(&self) -> Self {
        let cells = self
            .positions()
            .map(|(x, y)| {
                let current = self.cells[self.get_index(x, y)];
                current.evolve(self.live_neighbors(x, y))
            })
            .collect();

        Self {
            width: self.width,
            height: self.height,
            boundary: self.boundary,
            cells,
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Kill every cell
    pub fn clear(mut self) -> Self {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
        self
    }

    /// Replace every cell with a random state; `density` is the chance of
    /// a cell being alive and is clamped to [0, 1].
    pub fn randomize<R: Rng>(mut self, density: f64, rng: &mut R) -> Self {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
        self
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.positions()
            .map(|(x, y)| (x, y, self.cells[self.get_index(x, y)]))
    }

    /// Positions of alive cells, row by row
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }
}
