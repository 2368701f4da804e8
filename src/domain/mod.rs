mod boundary;
mod cell;
mod grid;

pub use boundary::Boundary;
pub use cell::Cell;
pub use grid::Grid;
