// Domain layer - the automaton itself
pub mod domain;

// Application layer - run-loop state and coordination
pub mod application;
pub mod config;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Boundary, Cell, Grid};
pub use application::{FpsLimiter, GameState, Phase, Viewport};
pub use config::{Cli, Config};
