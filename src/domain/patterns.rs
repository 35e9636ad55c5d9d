use super::Grid;
use crate::error::EngineError;

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// New grid with the pattern's cells set alive, anchored at `(row, col)`.
    /// Fails without touching anything if the pattern does not fit.
    pub fn stamp(&self, grid: &Grid, row: usize, col: usize) -> Result<Grid, EngineError> {
        let (rows, cols) = grid.dimensions();
        let cells = self
            .cells
            .iter()
            .map(|&(dr, dc)| match (row.checked_add(dr), col.checked_add(dc)) {
                (Some(r), Some(c)) => Ok((r, c)),
                _ => Err(EngineError::OutOfBounds { row, col, rows, cols }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        grid.with_alive(cells)
    }

    /// Anchor that centres the pattern on `(row, col)`, clamped at the top-left
    pub fn centred_on(&self, row: usize, col: usize) -> (usize, usize) {
        (row.saturating_sub(self.rows / 2), col.saturating_sub(self.cols / 2))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), lwss(), r_pentomino()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        let lwss = presets::lwss();
        assert_eq!((lwss.rows, lwss.cols), (4, 5));
    }

    #[test]
    fn test_stamp_places_cells() {
        let grid = presets::block().stamp(&Grid::create_empty(6, 6), 2, 3).unwrap();
        assert_eq!(grid.population(), 4);
        assert!(grid.get(3, 4).unwrap().is_alive());
    }

    #[test]
    fn test_stamp_past_edge_fails_cleanly() {
        let grid = Grid::create_empty(5, 5);
        let err = presets::blinker().stamp(&grid, 0, 3).unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { col: 5, .. }));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_stamp_at_huge_anchor_fails_cleanly() {
        let grid = Grid::create_empty(5, 5);
        let err = presets::blinker().stamp(&grid, 0, usize::MAX).unwrap_err();
        assert_eq!(
            err,
            EngineError::OutOfBounds {
                row: 0,
                col: usize::MAX,
                rows: 5,
                cols: 5,
            }
        );
        assert!(presets::glider().stamp(&grid, usize::MAX, 0).is_err());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_oscillators_have_period_two() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let start = pattern.stamp(&Grid::create_empty(10, 10), 3, 3).unwrap();
            let next = start.step();
            assert_ne!(next, start, "{} should change", pattern.name);
            assert_eq!(next.step(), start, "{} should return", pattern.name);
        }
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let empty = Grid::create_empty(12, 12);
        let glider = presets::glider();
        let mut grid = glider.stamp(&empty, 1, 1).unwrap();
        for _ in 0..4 {
            grid = grid.step();
        }
        assert_eq!(grid, glider.stamp(&empty, 2, 2).unwrap());
    }

    #[test]
    fn test_centred_on_clamps() {
        let lwss = presets::lwss();
        assert_eq!(lwss.centred_on(10, 10), (8, 8));
        assert_eq!(lwss.centred_on(0, 1), (0, 0));
    }
}
