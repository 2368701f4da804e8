use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use macroquad::{
    Window,
    input::prevent_quit,
    time::get_frame_time,
    window::{Conf, next_frame},
};
use rand::{SeedableRng, rngs::StdRng};

use conway_window::{Cli, Config, FpsLimiter, GameState, Viewport, input, rendering};

fn window_conf(config: &Config) -> Conf {
    let (width, height) = config.window_dimensions();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_cli(Cli::parse()).context("invalid configuration")?;
    info!(
        "{}x{} {} grid, {}px cells, {} generations/s, {} fps max",
        config.columns,
        config.rows,
        config.boundary.name(),
        config.cell_size,
        config.evolution_rate,
        config.max_fps
    );
    info!("Click or drag over cells to set them up, Space to start, Escape to quit");

    Window::from_config(window_conf(&config), run(config));
    Ok(())
}

/// The frame loop owns the one `GameState` and threads it through input,
/// evolution and drawing until the user quits.
async fn run(config: Config) {
    prevent_quit();

    let viewport = Viewport::new(config.cell_size, config.columns, config.rows);
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut limiter = FpsLimiter::new(config.max_fps);

    let mut state = GameState::new(&config);
    if config.random_density.is_some() {
        state = state.randomize(&mut rng);
    }

    loop {
        if input::quit_requested() {
            info!(
                "quitting at generation {} ({} alive)",
                state.generation,
                state.grid.population()
            );
            break;
        }

        state = input::process_keyboard_input(state, &mut rng);
        input::handle_mouse_edit(&mut state, &viewport);

        state.tick(get_frame_time());

        rendering::draw_frame(&state, &viewport);

        limiter.delay();
        next_frame().await;
    }
}
