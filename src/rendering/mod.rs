use macroquad::prelude::*;

use crate::application::Engine;
use crate::domain::{Grid, Pattern};
use crate::ui::{Action, Button, CELL_SIZE, PANEL_WIDTH, cell_to_screen, panel_x};

const ALIVE: Color = Color::new(1.0, 0.75, 0.8, 1.0);
const GRID_LINE: Color = Color::new(0.16, 0.16, 0.16, 1.0);

/// Draw the board: live cells filled, every cell outlined
pub fn draw_grid(grid: &Grid) {
    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = cell_to_screen(row, col);
        if cell.is_alive() {
            draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, ALIVE);
        }
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, GRID_LINE);
    }
}

/// Draw the control panel with buttons, status and key help
pub fn draw_controls(
    engine: &Engine,
    buttons: &[(Action, Button)],
    patterns: &[Pattern],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    for (action, button) in buttons {
        let active = *action == Action::StartStop && engine.is_running();
        button.draw(mouse_pos, active);
    }

    let grid = engine.grid();
    let (rows, cols) = grid.dimensions();
    let status = if engine.is_running() { "Running" } else { "Stopped" };
    let lines = [
        format!("Status: {status}"),
        format!("Generation: {}", engine.generation()),
        format!("Population: {}", grid.population()),
        format!("Grid: {rows}x{cols}"),
        format!(
            "Speed: {} ({} ms)",
            engine.speed().get(),
            engine.delay().as_millis()
        ),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(line, px, 290.0 + i as f32 * 20.0, 16.0, WHITE);
    }

    let help = [
        "Click: toggle cell",
        "Space: start/stop",
        "N: step  C: clear",
        "R: random",
        "Up/Down: speed",
    ];
    for (i, line) in help.iter().enumerate() {
        draw_text(line, px, 410.0 + i as f32 * 15.0, 13.0, GRAY);
    }
    for (i, pattern) in patterns.iter().enumerate() {
        let y = 495.0 + i as f32 * 28.0;
        let line = format!("{}: {}", i + 1, pattern.name);
        draw_text(&line, px, y, 13.0, GRAY);
        draw_text(pattern.description, px + 12.0, y + 12.0, 11.0, DARKGRAY);
    }
}
