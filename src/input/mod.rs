use macroquad::prelude::*;

use crate::application::SimulationController;
use crate::domain::{Coord, Grid};
use crate::rendering::TILE_SIZE;

/// Map a mouse position in window pixels to the grid cell under it.
///
/// This is the one place screen (x, y) becomes grid (row, column); past this
/// boundary everything speaks (row, column). Returns `None` when the pointer
/// is outside the grid, so out-of-range input never reaches the core.
pub fn mouse_cell(grid: &Grid, mouse_pos: (f32, f32)) -> Option<Coord> {
    let coord = Coord::new(
        (mouse_pos.1 / TILE_SIZE).floor() as i32,
        (mouse_pos.0 / TILE_SIZE).floor() as i32,
    );
    grid.contains(coord).then_some(coord)
}

/// Translate mouse gestures into controller calls.
///
/// Holding the left button paints the hovered cell (restarting the run when
/// the simulation is evolving); pressing the right button starts evolution.
pub fn handle_mouse(sim: &mut SimulationController, mouse_pos: (f32, f32)) {
    if is_mouse_button_down(MouseButton::Left) {
        if let Some(coord) = mouse_cell(sim.grid(), mouse_pos) {
            if let Err(err) = sim.edit(coord) {
                error!("paint at {coord} rejected: {err}");
            }
        }
    }

    if is_mouse_button_pressed(MouseButton::Right) {
        sim.start();
    }
}
