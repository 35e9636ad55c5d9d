/// Draws strictly above this value produce a live cell.
pub const ALIVE_THRESHOLD: f64 = 0.5;

/// Cell is the state of one grid position: Dead (0) or Alive (1).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric weight used when summing neighbors
    pub const fn weight(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Flip between Alive and Dead
    pub const fn toggle(self) -> Self {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// Map a uniform draw in `[0, 1)` to a state. Exactly 0.5 is Dead.
    pub fn from_draw(draw: f64) -> Self {
        if draw > ALIVE_THRESHOLD {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    /// Next state under Conway's rules, given the live neighbor count:
    /// 1. Fewer than 2 or more than 3 neighbors: dead
    /// 2. Dead cell with exactly 3 neighbors: born
    /// 3. Otherwise the state carries over
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (_, n) if n < 2 || n > 3 => Cell::Dead,
            (Cell::Dead, 3) => Cell::Alive,
            (current, _) => current,
        }
    }
}
