mod cell;
mod grid;
mod patterns;
mod speed;

pub use cell::{ALIVE_THRESHOLD, Cell};
pub use grid::{Grid, NEIGHBOR_OFFSETS};
pub use patterns::{Pattern, presets};
pub use speed::Speed;
