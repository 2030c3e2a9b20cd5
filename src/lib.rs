// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coord, Grid, GridError, RuleEngine};
pub use application::{Mode, SimulationController};
