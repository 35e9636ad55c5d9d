use macroquad::prelude::*;
use tracing::warn;

use crate::application::{Driver, Engine};
use crate::domain::Pattern;
use crate::ui::{Action, Button, screen_to_cell};

const SPEED_STEP: i32 = 5;

/// Apply one panel action to the engine
pub fn apply(action: Action, engine: &mut Engine, driver: &mut Driver) {
    match action {
        Action::StartStop => driver.toggle(engine),
        Action::Step => {
            engine.step_once();
        }
        Action::Clear => {
            engine.clear();
        }
        Action::Randomize => {
            engine.randomize();
        }
        Action::Slower => engine.nudge_speed(-SPEED_STEP),
        Action::Faster => engine.nudge_speed(SPEED_STEP),
    }
}

/// Toggle the cell under the cursor on a left click
pub fn handle_cell_click(engine: &mut Engine, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let Some((row, col)) = screen_to_cell(mouse_pos.0, mouse_pos.1) else {
        return;
    };
    // Clicks in the margin past the board are expected; only log them.
    if let Err(err) = engine.toggle_cell(row, col) {
        warn!(%err, "click ignored");
    }
}

/// Keyboard shortcuts. Digits stamp the matching preset at the board centre.
pub fn process_keyboard_input(engine: &mut Engine, driver: &mut Driver, patterns: &[Pattern]) {
    let actions = [
        (KeyCode::Space, Action::StartStop),
        (KeyCode::N, Action::Step),
        (KeyCode::C, Action::Clear),
        (KeyCode::R, Action::Randomize),
        (KeyCode::Down, Action::Slower),
        (KeyCode::Up, Action::Faster),
    ];
    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| apply(*action, engine, driver));

    let digits = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
        KeyCode::Key6,
        KeyCode::Key7,
    ];
    let (rows, cols) = engine.grid().dimensions();
    for (key, pattern) in digits.iter().zip(patterns) {
        if !is_key_pressed(*key) {
            continue;
        }
        let (row, col) = pattern.centred_on(rows / 2, cols / 2);
        if let Err(err) = engine.stamp(pattern, row, col) {
            warn!(%err, pattern = pattern.name, "pattern does not fit");
        }
    }
}

/// Process button clicks
pub fn process_button_clicks(
    engine: &mut Engine,
    driver: &mut Driver,
    buttons: &[(Action, Button)],
    mouse_pos: (f32, f32),
) {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .for_each(|(action, _)| apply(*action, engine, driver));
}
