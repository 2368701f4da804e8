mod fps_limit;
mod game_state;
mod viewport;

pub use fps_limit::FpsLimiter;
pub use game_state::{GameState, Phase};
pub use viewport::Viewport;
