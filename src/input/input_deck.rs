// src/input/input_deck.rs
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SimulationSettings {
    pub iterations: usize,             // Total number of implicit time steps
    pub yield_step: usize,             // Sample the state every N steps
}

#[derive(Debug, Deserialize)]
pub struct Surface1DConfig {
    pub t_left: f64,                   // [K] Fixed left-endpoint temperature
    pub t_right: f64,                  // [K] Fixed right-endpoint temperature
    pub t_middle: f64,                 // [K] Initial interior temperature
    pub x_extent: f64,                 // [m] Physical width
    pub x_grid: usize,                 // Number of grid cells
    pub dt: f64,                       // [s] Time step label
    pub k_coef: f64,                   // [m^2/s] Thermal diffusivity
}

#[derive(Debug, Deserialize)]
pub struct Surface2DConfig {
    pub x_extent: f64,                 // [m] Physical width
    pub y_extent: f64,                 // [m] Physical height
    pub x_grid: usize,                 // Number of grid columns
    pub y_grid: usize,                 // Number of grid rows
    pub t_boundary_top: f64,           // [K] Fixed top-edge temperature
    pub t_boundary_bot: f64,           // [K] Fixed bottom-edge temperature
    pub t_boundary_left: f64,          // [K] Fixed left-edge temperature
    pub t_boundary_right: f64,         // [K] Fixed right-edge temperature
    pub t_init_mid: f64,               // [K] Initial interior temperature
    pub dt: f64,                       // [s] Time step label
    pub k_coef: f64,                   // [m^2/s] Thermal diffusivity
}

#[derive(Debug, Deserialize)]
pub struct OutputSettings {
    pub include_boundaries: bool,      // Report full grids or interiors only
}

/// One simulation run: settings plus exactly one surface section.
#[derive(Debug, Deserialize)]
pub struct InputDeck {
    pub simulation: SimulationSettings,
    pub surface_1d: Option<Surface1DConfig>,
    pub surface_2d: Option<Surface2DConfig>,
    pub output: OutputSettings,
}
