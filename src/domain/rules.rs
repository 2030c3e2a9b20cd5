use super::{Cell, Coord, Grid};

/// RuleEngine advances a grid by one generation.
///
/// Evolution is a pure function: the whole next grid is computed from a
/// read-only snapshot of the current one, then handed back as a fresh
/// `Grid`. Nothing is updated in traversal order, so a neighbor's new state
/// can never leak into a calculation in the same pass.
pub struct RuleEngine;

impl RuleEngine {
    /// Produce the next generation of `grid`, same dimensions.
    pub fn next_generation(grid: &Grid) -> Grid {
        let cells = grid
            .iter_cells()
            .map(|(coord, cell)| cell.evolve(Self::alive_neighbors(grid, coord)))
            .collect();
        Grid::from_parts(grid.width(), grid.height(), cells)
    }

    /// Count alive cells in the clamped neighborhood of `coord`.
    ///
    /// The window is truncated at the grid boundary rather than wrapped, so
    /// corner cells see at most 3 candidates and edge cells at most 5; cells
    /// beyond the boundary simply do not exist and are never counted.
    fn alive_neighbors(grid: &Grid, coord: Coord) -> u8 {
        let row_lo = (coord.row - 1).max(0);
        let row_hi = (coord.row + 1).min(grid.height() as i32 - 1);
        let col_lo = (coord.column - 1).max(0);
        let col_hi = (coord.column + 1).min(grid.width() as i32 - 1);

        let mut alive = 0;
        for row in row_lo..=row_hi {
            for column in col_lo..=col_hi {
                let neighbor = Coord::new(row, column);
                if neighbor != coord && grid.cell(neighbor).is_alive() {
                    alive += 1;
                }
            }
        }
        alive
    }
}
