use clap::Parser;
use macroquad::prelude::*;

use gamelife::{SimulationController, input, rendering};

/// Conway's game of life
#[derive(Parser, Debug)]
#[command(version, about)]
struct CliArgs {
    /// Screen width in cells
    #[arg(short, long, default_value_t = 60)]
    width: usize,

    /// Screen height in cells
    #[arg(short = 'e', long, default_value_t = 40)]
    height: usize,

    /// Random cells at init
    #[arg(short, long, default_value_t = 0)]
    cells: usize,
}

fn window_conf() -> Conf {
    // parsed again in main; both invocations see the same argv
    let args = CliArgs::parse();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (args.width as f32 * rendering::TILE_SIZE) as i32,
        window_height: (args.height as f32 * rendering::TILE_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = CliArgs::parse();
    let mut sim = match SimulationController::new(args.width, args.height, args.cells) {
        Ok(sim) => sim,
        Err(err) => {
            error!("cannot start simulation: {err}");
            return;
        }
    };
    info!(
        "{}x{} grid seeded with {} random cells",
        args.width, args.height, args.cells
    );

    show_mouse(false);

    loop {
        let mouse_pos = mouse_position();

        input::handle_mouse(&mut sim, mouse_pos);

        if sim.is_evolving() {
            sim.step();
        }

        clear_background(BLACK);
        rendering::draw_grid(sim.grid());
        if let Some(coord) = input::mouse_cell(sim.grid(), mouse_pos) {
            rendering::draw_cursor(coord);
        }
        rendering::draw_status(&sim);

        next_frame().await;
    }
}
