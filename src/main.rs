// src/main.rs

use std::env;

use heat_surface::error::{HeatError, HeatResult};
use heat_surface::input::input_deck::{OutputSettings, SimulationSettings};
use heat_surface::input::parse_input_deck;
use heat_surface::surface::{Surface, Surface1D, Surface2D};
use heat_surface::utils::postprocess::{trim_field, trim_profile};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> HeatResult<()> {
    let path = env::args().nth(1).ok_or_else(|| {
        HeatError::InvalidConfig("usage: heat-surface <input_deck.yaml>".to_string())
    })?;
    let deck = parse_input_deck(&path)?;

    match (deck.surface_1d, deck.surface_2d) {
        (Some(config), None) => {
            let surface = Surface1D::new(
                config.t_left,
                config.t_right,
                config.t_middle,
                config.x_extent,
                config.x_grid,
                config.dt,
                config.k_coef,
            )?;
            log::info!(
                "1D surface: {} cells over {} m, k = {} m^2/s",
                surface.x_grid,
                surface.x_extent,
                surface.k_coef
            );
            run_1d(&surface, &deck.simulation, &deck.output)
        }
        (None, Some(config)) => {
            let surface = Surface2D::new(
                config.x_extent,
                config.x_grid,
                config.y_extent,
                config.y_grid,
                config.t_boundary_top,
                config.t_boundary_bot,
                config.t_boundary_left,
                config.t_boundary_right,
                config.t_init_mid,
                config.dt,
                config.k_coef,
            )?;
            log::info!(
                "2D surface: {}x{} cells over {}x{} m, k = {} m^2/s",
                surface.x_grid,
                surface.y_grid,
                surface.x_extent,
                surface.y_extent,
                surface.k_coef
            );
            run_2d(&surface, &deck.simulation, &deck.output)
        }
        _ => Err(HeatError::InvalidConfig(
            "input deck must contain exactly one of surface_1d or surface_2d".to_string(),
        )),
    }
}

fn run_1d(
    surface: &Surface1D,
    simulation: &SimulationSettings,
    output: &OutputSettings,
) -> HeatResult<()> {
    for (sample_ix, result) in surface
        .sim(simulation.iterations, simulation.yield_step)
        .enumerate()
    {
        let state = result?;
        let state = if output.include_boundaries {
            state
        } else {
            trim_profile(&state)?
        };
        println!(
            "step {:>7}: min {:10.3} K, max {:10.3} K",
            sample_ix * simulation.yield_step,
            state.min(),
            state.max()
        );
    }
    Ok(())
}

fn run_2d(
    surface: &Surface2D,
    simulation: &SimulationSettings,
    output: &OutputSettings,
) -> HeatResult<()> {
    for (sample_ix, result) in surface
        .sim(simulation.iterations, simulation.yield_step)
        .enumerate()
    {
        let field = result?;
        let field = if output.include_boundaries {
            field
        } else {
            trim_field(&field)?
        };
        println!(
            "step {:>7}: min {:10.3} K, max {:10.3} K",
            sample_ix * simulation.yield_step,
            field.min(),
            field.max()
        );
    }
    Ok(())
}
