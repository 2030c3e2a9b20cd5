mod cell;
mod coord;
mod error;
mod grid;
mod rules;

pub use cell::Cell;
pub use coord::Coord;
pub use error::GridError;
pub use grid::Grid;
pub use rules::RuleEngine;
