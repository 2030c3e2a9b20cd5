mod simulation;

pub use simulation::{Mode, SimulationController};
