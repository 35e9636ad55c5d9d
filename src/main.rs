use std::{env, time::Duration};

use life_engine::{
    Driver, Engine, EngineConfig, input, presets, rendering,
    ui::{self, CELL_SIZE, GRID_ORIGIN, PANEL_WIDTH},
};
use macroquad::prelude::*;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let config = config_from_env();
    let width = GRID_ORIGIN.0 * 2.0 + config.cols as f32 * CELL_SIZE + PANEL_WIDTH;
    let height = GRID_ORIGIN.1 * 2.0 + config.rows as f32 * CELL_SIZE;
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height.max(620.0) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Read a numeric override, keeping the default when unset or malformed
fn env_override<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(name, %raw, "ignoring malformed override");
            None
        }
    }
}

/// Defaults with optional `LIFE_ROWS`, `LIFE_COLS`, `LIFE_SPEED`, `LIFE_SEED` overrides
fn config_from_env() -> EngineConfig {
    let mut config = EngineConfig::default();
    if let Some(rows) = env_override("LIFE_ROWS") {
        config.rows = rows;
    }
    if let Some(cols) = env_override("LIFE_COLS") {
        config.cols = cols;
    }
    if let Some(speed) = env_override("LIFE_SPEED") {
        config.speed = speed;
    }
    config.seed = env_override("LIFE_SEED");
    config
}

#[macroquad::main(window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut engine = match Engine::new(config_from_env()) {
        Ok(engine) => engine,
        Err(err) => {
            error!(%err, "invalid configuration, falling back to defaults");
            match Engine::new(EngineConfig::default()) {
                Ok(engine) => engine,
                Err(err) => {
                    error!(%err, "default configuration rejected");
                    return;
                }
            }
        }
    };
    let mut driver = Driver::new();
    let patterns = presets::all_patterns();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        input::process_button_clicks(&mut engine, &mut driver, &buttons, mouse_pos);
        input::handle_cell_click(&mut engine, mouse_pos);
        input::process_keyboard_input(&mut engine, &mut driver, &patterns);

        driver.advance(&mut engine, Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(engine.grid());
        rendering::draw_controls(&engine, &buttons, &patterns, mouse_pos);

        next_frame().await;
    }
}
