use rand::Rng;

use super::{Cell, Coord, GridError};

/// Grid owns the 2D cell array for one simulation.
///
/// Dimensions are fixed at construction; every mutation happens in place or
/// by wholesale replacement with another grid of the same size. Storage is a
/// single `Vec` in row-major order.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Rebuild a grid from an evolved cell vector. Callers guarantee
    /// `cells.len() == width * height`.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Whether the coordinate falls inside the grid extent.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.column >= 0
            && (coord.row as usize) < self.height
            && (coord.column as usize) < self.width
    }

    /// Convert an in-bounds coordinate to its row-major index.
    fn index(&self, coord: Coord) -> usize {
        coord.row as usize * self.width + coord.column as usize
    }

    fn out_of_bounds(&self, coord: Coord) -> GridError {
        GridError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        }
    }

    /// Get cell state at a coordinate.
    pub fn get(&self, coord: Coord) -> Result<Cell, GridError> {
        if !self.contains(coord) {
            return Err(self.out_of_bounds(coord));
        }
        Ok(self.cells[self.index(coord)])
    }

    /// Set cell state at a coordinate (in-place mutation for painting).
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), GridError> {
        if !self.contains(coord) {
            return Err(self.out_of_bounds(coord));
        }
        let idx = self.index(coord);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Read a cell the engine already knows is in bounds.
    pub(crate) fn cell(&self, coord: Coord) -> Cell {
        debug_assert!(self.contains(coord));
        self.cells[self.index(coord)]
    }

    /// Reset every cell to dead, in place.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Mark `count` uniformly random cells alive.
    pub fn randomize(&mut self, count: usize) {
        self.randomize_with(&mut rand::rng(), count);
    }

    /// Same as [`randomize`](Self::randomize) with a caller-supplied RNG.
    ///
    /// Positions are drawn independently, so collisions are possible and the
    /// number of distinct live cells may come out below `count`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize) {
        for _ in 0..count {
            let coord = Coord::new(
                rng.random_range(0..self.height as i32),
                rng.random_range(0..self.width as i32),
            );
            let idx = self.index(coord);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Iterate over all cells with their positions, row by row.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        (0..self.height as i32)
            .flat_map(move |row| (0..self.width as i32).map(move |column| Coord::new(row, column)))
            .map(|coord| (coord, self.cell(coord)))
    }

    /// Number of alive cells on the grid.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(7, 3).unwrap();
        assert_eq!(grid.width(), 7);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.iter_cells().count(), 21);
    }

    #[test]
    fn zero_extent_is_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions { width: 0, height: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            GridError::InvalidDimensions { width: 5, height: 0 }
        );
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn set_then_get_roundtrips() {
        let mut grid = Grid::new(4, 4).unwrap();
        let coord = Coord::new(2, 3);
        grid.set(coord, Cell::Alive).unwrap();
        assert_eq!(grid.get(coord), Ok(Cell::Alive));
        grid.set(coord, Cell::Dead).unwrap();
        assert_eq!(grid.get(coord), Ok(Cell::Dead));
    }

    #[test]
    fn out_of_bounds_is_rejected() {
        let mut grid = Grid::new(4, 3).unwrap();
        for coord in [
            Coord::new(-1, 0),
            Coord::new(0, -1),
            Coord::new(3, 0),
            Coord::new(0, 4),
            Coord::new(3, 4),
        ] {
            assert_eq!(
                grid.get(coord).unwrap_err(),
                GridError::OutOfBounds {
                    coord,
                    width: 4,
                    height: 3
                }
            );
            assert!(grid.set(coord, Cell::Alive).is_err());
        }
        // nothing was mutated by the failed sets
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn clear_kills_every_cell() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(Coord::new(0, 0), Cell::Alive).unwrap();
        grid.set(Coord::new(4, 4), Cell::Alive).unwrap();
        grid.clear();
        assert_eq!(grid.alive_count(), 0);
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
    }

    #[test]
    fn randomize_marks_at_most_count_cells() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(10, 10).unwrap();
        grid.randomize_with(&mut rng, 30);
        let alive = grid.alive_count();
        assert!(alive > 0);
        assert!(alive <= 30);
    }

    #[test]
    fn randomize_collisions_saturate_at_grid_area() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(3, 3).unwrap();
        // far more draws than cells: duplicates are re-marked alive
        grid.randomize_with(&mut rng, 500);
        assert!(grid.alive_count() <= 9);
    }

    #[test]
    fn randomize_zero_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(6, 6).unwrap();
        grid.randomize_with(&mut rng, 0);
        assert_eq!(grid.alive_count(), 0);
    }
}
