use macroquad::prelude::*;

use crate::application::{Mode, SimulationController};
use crate::domain::{Coord, Grid};

/// Square tile edge in window pixels.
pub const TILE_SIZE: f32 = 20.0;

// alive cells flicker red, the cursor tile flickers pale pink
const CELL_GREEN: u8 = 30;
const CELL_BLUE: u8 = 30;
const CURSOR_GREEN: u8 = 200;
const CURSOR_BLUE: u8 = 200;

/// Tile color with the red channel re-rolled in 100..250 every frame.
fn flicker(green: u8, blue: u8) -> Color {
    use macroquad::rand;
    let red = (100 + rand::gen_range(0, 150)) as u8;
    Color::from_rgba(red, green, blue, 255)
}

fn draw_tile(coord: Coord, color: Color) {
    // one-pixel gutter so individual tiles stay distinguishable
    draw_rectangle(
        coord.column as f32 * TILE_SIZE,
        coord.row as f32 * TILE_SIZE,
        TILE_SIZE - 1.0,
        TILE_SIZE - 1.0,
        color,
    );
}

/// Draw every alive cell of the grid.
pub fn draw_grid(grid: &Grid) {
    for (coord, cell) in grid.iter_cells() {
        if cell.is_alive() {
            draw_tile(coord, flicker(CELL_GREEN, CELL_BLUE));
        }
    }
}

/// Highlight the cell under the mouse. Doubles as the pointer, since the OS
/// cursor is hidden inside the window.
pub fn draw_cursor(coord: Coord) {
    draw_tile(coord, flicker(CURSOR_GREEN, CURSOR_BLUE));
}

/// Generation counter and mode in the top-left corner.
pub fn draw_status(sim: &SimulationController) {
    let mode = match sim.mode() {
        Mode::Editing => "editing",
        Mode::Evolving => "evolving",
    };
    let status = format!("Generation: {} ({mode})", sim.generation());
    draw_text(&status, 8.0, 20.0, 24.0, WHITE);
}
