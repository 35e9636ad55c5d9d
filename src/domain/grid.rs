use super::Cell;
use crate::error::EngineError;
use rand::Rng;

/// Relative `(row, col)` offsets of the eight neighbors, clockwise from the east.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

/// Grid is a fixed-size, row-major board of cells.
///
/// Every operation returns a new value; a grid a caller holds on to never
/// changes underneath it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn create_empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Fill a grid from an injectable random source, one uniform draw per cell
    pub fn randomize<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Self {
        Self::randomize_with(rows, cols, || rng.random::<f64>())
    }

    /// Fill a grid from arbitrary draws in `[0, 1)`, row-major order
    pub fn randomize_with(rows: usize, cols: usize, mut draw: impl FnMut() -> f64) -> Self {
        let cells = (0..rows * cols).map(|_| Cell::from_draw(draw())).collect();
        Self { rows, cols, cells }
    }

    /// Get grid dimensions as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> EngineError {
        EngineError::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Count live neighbors. Positions past an edge are skipped, not wrapped.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .map(Cell::weight)
            .sum()
    }

    /// Advance one generation. Every cell reads only `self`, never the grid
    /// being built.
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.get_index(row, col)];
                current.evolve(self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Copy of this grid with one cell flipped
    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<Self, EngineError> {
        if !self.contains(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        let mut next = self.clone();
        let idx = next.get_index(row, col);
        next.cells[idx] = next.cells[idx].toggle();
        Ok(next)
    }

    /// Copy of this grid with every listed cell alive. Rejects the whole batch
    /// if any coordinate is out of range.
    pub fn with_alive<I>(&self, coords: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let coords: Vec<_> = coords.into_iter().collect();
        if let Some(&(row, col)) = coords.iter().find(|&&(r, c)| !self.contains(r, c)) {
            return Err(self.out_of_bounds(row, col));
        }
        let mut next = self.clone();
        for (row, col) in coords {
            let idx = next.get_index(row, col);
            next.cells[idx] = Cell::Alive;
        }
        Ok(next)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when every cell is dead
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_alive())
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
        Grid::create_empty(rows, cols)
            .with_alive(alive.iter().copied())
            .unwrap()
    }

    fn alive_cells(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    /// Straightforward signed-index implementation used as an oracle.
    fn reference_step(grid: &Grid) -> Grid {
        let (rows, cols) = grid.dimensions();
        let mut alive = Vec::new();
        for r in 0..rows as i64 {
            for c in 0..cols as i64 {
                let mut n = 0;
                for dr in -1..=1i64 {
                    for dc in -1..=1i64 {
                        if (dr, dc) == (0, 0) {
                            continue;
                        }
                        let (nr, nc) = (r + dr, c + dc);
                        if nr >= 0 && nc >= 0 && nr < rows as i64 && nc < cols as i64 {
                            if grid.get(nr as usize, nc as usize) == Some(Cell::Alive) {
                                n += 1;
                            }
                        }
                    }
                }
                let was_alive = grid.get(r as usize, c as usize) == Some(Cell::Alive);
                if (was_alive && (n == 2 || n == 3)) || (!was_alive && n == 3) {
                    alive.push((r as usize, c as usize));
                }
            }
        }
        grid_with(rows, cols, &alive)
    }

    #[test]
    fn test_create_empty() {
        let grid = Grid::create_empty(50, 40);
        assert_eq!(grid.dimensions(), (50, 40));
        assert!(grid.is_empty());
        assert_eq!(grid.get(49, 39), Some(Cell::Dead));
        assert_eq!(grid.get(50, 0), None);
        assert_eq!(grid.get(0, 40), None);
    }

    #[test]
    fn test_empty_grid_stays_empty() {
        let grid = Grid::create_empty(12, 9);
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert!(grid.step().is_empty());
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 3), (3, 2)]);
        assert_eq!(grid.live_neighbors(2, 2), 3);
        assert_eq!(grid.step().get(2, 2), Some(Cell::Alive));
    }

    #[test]
    fn test_survival_with_two_and_three() {
        // Block: every cell has exactly 3 neighbors.
        let block = grid_with(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(block.step(), block);

        // Middle of a diagonal line of three has 2 neighbors.
        let diagonal = grid_with(5, 5, &[(1, 1), (2, 2), (3, 3)]);
        assert_eq!(diagonal.live_neighbors(2, 2), 2);
        assert_eq!(diagonal.step().get(2, 2), Some(Cell::Alive));
    }

    #[test]
    fn test_overpopulation_kills() {
        // Centre has 4 neighbors.
        let grid = grid_with(3, 3, &[(1, 1), (0, 0), (0, 2), (2, 0), (2, 2)]);
        assert_eq!(grid.live_neighbors(1, 1), 4);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Dead));
    }

    #[test]
    fn test_dead_cell_with_two_neighbors_stays_dead() {
        let grid = grid_with(3, 3, &[(0, 0), (0, 2)]);
        assert_eq!(grid.live_neighbors(1, 1), 2);
        assert_eq!(grid.step().get(1, 1), Some(Cell::Dead));
    }

    #[test]
    fn test_corner_counts_only_in_bounds() {
        let full = Grid::randomize_with(4, 4, || 0.9);
        assert_eq!(full.population(), 16);
        assert_eq!(full.live_neighbors(0, 0), 3);
        assert_eq!(full.live_neighbors(3, 3), 3);
        assert_eq!(full.live_neighbors(0, 2), 5);
        assert_eq!(full.live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_no_wraparound() {
        // A vertical blinker pressed against the left edge would gain
        // neighbors from the right edge on a torus.
        let grid = grid_with(5, 5, &[(1, 0), (2, 0), (3, 0), (2, 4)]);
        assert_eq!(grid.live_neighbors(2, 4), 0);
        assert_eq!(grid.live_neighbors(2, 0), 2);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with(7, 7, &[(3, 2), (3, 3), (3, 4)]);
        let vertical = horizontal.step();
        assert_eq!(alive_cells(&vertical), vec![(2, 3), (3, 3), (4, 3)]);
        assert_eq!(vertical.step(), horizontal);
    }

    #[test]
    fn test_step_matches_snapshot_reference() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut grid = Grid::randomize(23, 31, &mut rng);
        for _ in 0..10 {
            let expected = reference_step(&grid);
            let next = grid.step();
            assert_eq!(next, expected);
            grid = next;
        }
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.clone();
        let _ = grid.step();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        let grid = grid_with(6, 6, &[(0, 0), (5, 5)]);
        for (r, c) in [(0, 0), (3, 2), (5, 5)] {
            let once = grid.toggle_cell(r, c).unwrap();
            assert_ne!(once, grid);
            assert_eq!(once.toggle_cell(r, c).unwrap(), grid);
        }
    }

    #[test]
    fn test_toggle_out_of_bounds() {
        let grid = grid_with(3, 4, &[(1, 1)]);
        let before = grid.clone();
        assert_eq!(
            grid.toggle_cell(3, 0),
            Err(EngineError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 4 })
        );
        assert!(matches!(grid.toggle_cell(0, 4), Err(EngineError::OutOfBounds { .. })));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_with_alive_rejects_whole_batch() {
        let grid = Grid::create_empty(3, 3);
        assert!(grid.with_alive([(0, 0), (3, 3)]).is_err());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let a = Grid::randomize(50, 50, &mut StdRng::seed_from_u64(42));
        let b = Grid::randomize(50, 50, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.population() > 0);
        assert!(a.population() < 2500);
    }

    #[test]
    fn test_randomize_tie_is_dead() {
        let grid = Grid::randomize_with(3, 3, || 0.5);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_iter_cells_row_major() {
        let grid = grid_with(2, 3, &[(1, 2)]);
        let positions: Vec<_> = grid.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(positions[..4], [(0, 0), (0, 1), (0, 2), (1, 0)]);
        assert_eq!(alive_cells(&grid), vec![(1, 2)]);
    }
}
