use crate::domain::{Cell, Coord, Grid, GridError, RuleEngine};

/// What the simulation is currently doing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    /// Cells may be painted; nothing advances automatically.
    #[default]
    Editing,
    /// The driver steps the simulation once per tick.
    Evolving,
}

/// SimulationController orchestrates one simulation run.
///
/// This is the application layer: it owns the grid, tracks the generation
/// counter, and delegates advancement to the rule engine. It holds no global
/// state, so independent simulations can coexist.
#[derive(Debug)]
pub struct SimulationController {
    grid: Grid,
    generation: u64,
    mode: Mode,
}

impl SimulationController {
    /// Create a controller with an all-dead grid, then seed `initial_cells`
    /// uniformly random alive cells.
    pub fn new(width: usize, height: usize, initial_cells: usize) -> Result<Self, GridError> {
        let mut grid = Grid::new(width, height)?;
        grid.randomize(initial_cells);
        Ok(Self {
            grid,
            generation: 0,
            mode: Mode::Editing,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Count of rule applications since the last restart.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_evolving(&self) -> bool {
        self.mode == Mode::Evolving
    }

    /// Paint the target cell alive.
    ///
    /// Painting while the simulation is evolving restarts it: the whole grid
    /// is cleared, the generation counter drops back to 0, and the painted
    /// cell becomes the sole seed of a fresh Editing session.
    pub fn edit(&mut self, coord: Coord) -> Result<(), GridError> {
        // bounds-probe up front so a bad coordinate fails outright instead
        // of wiping the grid and then failing
        self.grid.get(coord)?;
        if self.mode == Mode::Evolving {
            self.grid.clear();
            self.generation = 0;
            self.mode = Mode::Editing;
        }
        self.grid.set(coord, Cell::Alive)
    }

    /// Switch to Evolving. Does not itself advance a generation.
    pub fn start(&mut self) {
        self.mode = Mode::Evolving;
    }

    /// Advance exactly one generation.
    ///
    /// The grid is replaced wholesale with the rule engine's output, so the
    /// old generation is fully superseded before anyone reads the new one.
    /// The driver calls this once per tick while in Evolving mode.
    pub fn step(&mut self) {
        self.grid = RuleEngine::next_generation(&self.grid);
        self.generation += 1;
    }
}
