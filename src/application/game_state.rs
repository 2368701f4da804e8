use log::{debug, info};
use rand::Rng;

use crate::config::{Config, MAX_EVOLUTION_RATE, MIN_EVOLUTION_RATE};
use crate::domain::{Cell, Grid};

/// What the user is currently doing with the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Evolution paused; cells can be edited with the mouse
    Editing,
    /// Evolution advancing at `updates_per_second`
    Running,
}

/// GameState is the run-loop state: it owns the only grid and decides
/// when the next generation is due.
pub struct GameState {
    pub grid: Grid,
    pub phase: Phase,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    /// Alive fraction used by `randomize`
    pub random_density: f64,
    /// Cell under the mouse cursor, if it is over the grid
    pub hovered: Option<(usize, usize)>,
    /// Generation at which the last live cell died, if the grid died out
    pub died_out_at: Option<u64>,
}

impl GameState {
    /// Fresh state in the editing phase with an all-dead grid
    pub fn new(config: &Config) -> Self {
        Self {
            grid: Grid::new(config.columns, config.rows, config.boundary),
            phase: Phase::Editing,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: config.evolution_rate,
            random_density: config.random_density.unwrap_or(0.3),
            hovered: None,
            died_out_at: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Switch between editing and running
    pub fn toggle_running(mut self) -> Self {
        self.phase = match self.phase {
            Phase::Editing => Phase::Running,
            Phase::Running => Phase::Editing,
        };
        self.update_timer = 0.0;
        info!(
            "{:?} at generation {} ({} alive)",
            self.phase,
            self.generation,
            self.grid.population()
        );
        self
    }

    /// Kill every cell and go back to editing
    pub fn clear(mut self) -> Self {
        self.grid = self.grid.clear();
        self.reset()
    }

    /// Reseed the grid randomly and go back to editing
    pub fn randomize<R: Rng>(mut self, rng: &mut R) -> Self {
        self.grid = self.grid.randomize(self.random_density, rng);
        debug!("randomized grid: {} alive", self.grid.population());
        self.reset()
    }

    fn reset(mut self) -> Self {
        self.generation = 0;
        self.died_out_at = None;
        self.update_timer = 0.0;
        self.phase = Phase::Editing;
        self
    }

    /// Change the evolution rate, staying within 1..=60 per second
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second =
            (self.updates_per_second + delta).clamp(MIN_EVOLUTION_RATE, MAX_EVOLUTION_RATE);
        debug!("evolution rate: {} per second", self.updates_per_second);
        self
    }

    /// Flip a cell; only allowed while editing
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if self.phase == Phase::Editing {
            self.grid.toggle(x, y);
        }
    }

    /// Make a cell alive; only allowed while editing
    pub fn paint_cell(&mut self, x: usize, y: usize) {
        if self.phase == Phase::Editing {
            self.grid.set(x, y, Cell::Alive);
        }
    }

    /// Seconds between generations
    pub fn update_interval(&self) -> f32 {
        1.0 / self.updates_per_second
    }

    /// Advance the clock by `delta_time` seconds and step the grid once if
    /// a generation is due. Leftover time is dropped after a step.
    /// Returns whether the grid changed.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        self.update_timer += delta_time;
        if self.update_timer < self.update_interval() {
            return false;
        }

        let had_cells = !self.grid.is_empty();
        self.grid = self.grid.step();
        self.generation += 1;
        self.update_timer = 0.0;

        if had_cells && self.grid.is_empty() {
            self.died_out_at = Some(self.generation);
            info!("generation {}: no cells left alive", self.generation);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Boundary;
    use rand::{SeedableRng, rngs::StdRng};

    fn config(columns: usize, rows: usize, rate: f32) -> Config {
        Config {
            window_size: 400,
            columns,
            rows,
            cell_size: 10,
            evolution_rate: rate,
            max_fps: 60.0,
            boundary: Boundary::Bounded,
            random_density: None,
            seed: None,
        }
    }

    fn blinker_state() -> GameState {
        let mut state = GameState::new(&config(5, 5, 4.0));
        for x in 1..=3 {
            state.paint_cell(x, 2);
        }
        state
    }

    #[test]
    fn test_new_state_is_editing_and_empty() {
        let state = GameState::new(&config(7, 3, 8.0));
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.grid.dimensions(), (7, 3));
        assert!(state.grid.is_empty());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_tick_does_nothing_while_editing() {
        let mut state = blinker_state();
        assert!(!state.tick(10.0));
        assert_eq!(state.generation, 0);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_tick_steps_once_per_interval() {
        let mut state = blinker_state().toggle_running();

        // 4 generations per second: nothing due after 0.2s
        assert!(!state.tick(0.2));
        assert_eq!(state.generation, 0);

        assert!(state.tick(0.1));
        assert_eq!(state.generation, 1);
        assert_eq!(state.grid.get(2, 1), Some(Cell::Alive));
        assert_eq!(state.grid.get(1, 2), Some(Cell::Dead));

        // Timer was reset, so a long frame still yields one step
        assert!(state.tick(5.0));
        assert_eq!(state.generation, 2);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_editing_locked_while_running() {
        let mut state = GameState::new(&config(5, 5, 8.0)).toggle_running();
        state.paint_cell(0, 0);
        state.toggle_cell(1, 1);
        assert!(state.grid.is_empty());

        let mut state = state.toggle_running();
        state.toggle_cell(1, 1);
        assert_eq!(state.grid.population(), 1);
    }

    #[test]
    fn test_clear_resets_generation() {
        let mut state = blinker_state().toggle_running();
        state.tick(1.0);
        let state = state.clear();
        assert!(state.grid.is_empty());
        assert_eq!(state.generation, 0);
        assert_eq!(state.phase, Phase::Editing);
    }

    #[test]
    fn test_randomize_uses_configured_density() {
        let mut cfg = config(6, 6, 8.0);
        cfg.random_density = Some(1.0);
        let state = GameState::new(&cfg)
            .toggle_running()
            .randomize(&mut StdRng::seed_from_u64(3));
        assert_eq!(state.grid.population(), 36);
        assert_eq!(state.phase, Phase::Editing);
    }

    #[test]
    fn test_died_out_recorded_once() {
        // A lone cell dies on the first step; later empty steps keep the
        // generation it died at.
        let mut state = GameState::new(&config(5, 5, 10.0));
        state.paint_cell(2, 2);
        let mut state = state.toggle_running();

        assert!(state.tick(1.0));
        assert_eq!(state.died_out_at, Some(1));

        assert!(state.tick(1.0));
        assert!(state.tick(1.0));
        assert_eq!(state.generation, 3);
        assert_eq!(state.died_out_at, Some(1));

        let state = state.clear();
        assert_eq!(state.died_out_at, None);
    }

    #[test]
    fn test_empty_start_never_dies_out() {
        let mut state = GameState::new(&config(5, 5, 10.0)).toggle_running();
        assert!(state.tick(1.0));
        assert_eq!(state.died_out_at, None);
    }

    #[test]
    fn test_adjust_speed_clamps() {
        let state = GameState::new(&config(3, 3, 59.0)).adjust_speed(5.0);
        assert_eq!(state.updates_per_second, 60.0);
        let state = state.adjust_speed(-100.0);
        assert_eq!(state.updates_per_second, 1.0);
    }
}
