use macroquad::input::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_down, is_mouse_button_pressed,
    is_quit_requested, mouse_position,
};
use rand::Rng;

use crate::application::{GameState, Viewport};

/// Escape or the window close button
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape) || is_quit_requested()
}

/// Process keyboard input functionally
pub fn process_keyboard_input<R: Rng>(state: GameState, rng: &mut R) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    let state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if is_key_pressed(KeyCode::R) {
        state.randomize(rng)
    } else {
        state
    }
}

/// Read the mouse and edit the grid under the cursor
pub fn handle_mouse_edit(state: &mut GameState, viewport: &Viewport) {
    let (mouse_x, mouse_y) = mouse_position();
    let hovered = viewport.screen_to_cell(mouse_x, mouse_y);
    apply_mouse(
        state,
        hovered,
        is_mouse_button_pressed(MouseButton::Left),
        is_mouse_button_down(MouseButton::Left),
    );
}

/// Clicking toggles a cell; dragging with the left button held sets each
/// newly entered cell alive. The hovered cell is remembered for the next
/// frame and for the placement preview.
pub fn apply_mouse(
    state: &mut GameState,
    hovered: Option<(usize, usize)>,
    pressed: bool,
    held: bool,
) {
    let previous = state.hovered;
    state.hovered = hovered;

    let Some((x, y)) = hovered else {
        return;
    };

    if pressed {
        state.toggle_cell(x, y);
    } else if held && previous != hovered {
        state.paint_cell(x, y);
    }
}
