mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 14.0;
pub const GRID_ORIGIN: (f32, f32) = (10.0, 10.0);

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    StartStop,
    Step,
    Clear,
    Randomize,
    Slower,
    Faster,
}

/// Create UI buttons with standard layout
pub fn create_buttons() -> Vec<(Action, Button)> {
    let px = panel_x();
    let half = PANEL_WIDTH / 2.0;
    vec![
        (Action::StartStop, Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Start/Stop")),
        (Action::Step, Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step")),
        (Action::Clear, Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear")),
        (Action::Randomize, Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random")),
        (Action::Slower, Button::new(px, 220.0, half - 5.0, BUTTON_HEIGHT, "Slower")),
        (Action::Faster, Button::new(px + half, 220.0, half - 5.0, BUTTON_HEIGHT, "Faster")),
    ]
}

/// Map a screen position to a `(row, col)` on the board. The result may be
/// outside the grid; the engine decides whether it is valid.
pub fn screen_to_cell(x: f32, y: f32) -> Option<(usize, usize)> {
    let (ox, oy) = GRID_ORIGIN;
    if x < ox || y < oy || x >= panel_x() {
        return None;
    }
    let col = ((x - ox) / CELL_SIZE) as usize;
    let row = ((y - oy) / CELL_SIZE) as usize;
    Some((row, col))
}

/// Top-left screen corner of a cell
pub fn cell_to_screen(row: usize, col: usize) -> (f32, f32) {
    let (ox, oy) = GRID_ORIGIN;
    (ox + col as f32 * CELL_SIZE, oy + row as f32 * CELL_SIZE)
}
