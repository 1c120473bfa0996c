// src/surface/surface1d.rs

use nalgebra::{DMatrix, DVector};

use crate::error::{HeatError, HeatResult};
use crate::surface::Surface;
use crate::utils::linear_algebra::build_heat_operator_1d;

/// A heated line segment with two fixed-temperature endpoints and a uniform
/// interior initial temperature.
///
/// Temperature evolves by the backward-Euler discretization of the 1D heat
/// equation \(\partial T / \partial t = k \cdot \partial^2 T / \partial x^2\).
#[derive(Debug, Clone)]
pub struct Surface1D {
    pub t_left: f64,      // [K] Fixed left-endpoint temperature
    pub t_right: f64,     // [K] Fixed right-endpoint temperature
    pub t_middle: f64,    // [K] Initial interior temperature
    pub x_extent: f64,    // [m] Physical width
    pub x_grid: usize,    // Number of grid cells
    /// Accepted for reporting but not folded into the stencil coefficients;
    /// the discretization assumes one time unit per step.
    pub dt: f64,
    pub k_coef: f64,      // [m^2/s] Thermal diffusivity
    dx: f64,
}

impl Surface1D {
    /// Creates a new 1D surface, validating the engine's minimum bounds.
    ///
    /// # Arguments
    ///
    /// * `t_left` - Fixed temperature of cell 0.
    /// * `t_right` - Fixed temperature of cell `x_grid - 1`.
    /// * `t_middle` - Initial temperature of every interior cell.
    /// * `x_extent` - Physical width, must be positive.
    /// * `x_grid` - Grid resolution, at least 3 (two boundary cells plus
    ///   one interior cell).
    /// * `dt` - Time step label.
    /// * `k_coef` - Thermal diffusivity, must be positive.
    ///
    /// # Returns
    ///
    /// * `Ok(Surface1D)` on valid parameters.
    /// * `HeatError::InvalidConfig` otherwise; nothing is partially built.
    pub fn new(
        t_left: f64,
        t_right: f64,
        t_middle: f64,
        x_extent: f64,
        x_grid: usize,
        dt: f64,
        k_coef: f64,
    ) -> HeatResult<Self> {
        if x_grid < 3 {
            return Err(HeatError::InvalidConfig(format!(
                "x_grid must be at least 3, got {}",
                x_grid
            )));
        }
        if x_extent <= 0.0 {
            return Err(HeatError::InvalidConfig(format!(
                "x_extent must be positive, got {}",
                x_extent
            )));
        }
        if k_coef <= 0.0 {
            return Err(HeatError::InvalidConfig(format!(
                "k_coef must be positive, got {}",
                k_coef
            )));
        }
        let dx = x_extent / x_grid as f64;
        Ok(Surface1D {
            t_left,
            t_right,
            t_middle,
            x_extent,
            x_grid,
            dt,
            k_coef,
            dx,
        })
    }
}

impl Surface for Surface1D {
    type Sample = DVector<f64>;

    fn cell_count(&self) -> usize {
        self.x_grid
    }

    fn initial_state(&self) -> DVector<f64> {
        let mut state = DVector::from_element(self.x_grid, self.t_middle);
        state[0] = self.t_left;
        state[self.x_grid - 1] = self.t_right;
        state
    }

    fn operator(&self) -> DMatrix<f64> {
        let k = self.k_coef / (self.dx * self.dx);
        build_heat_operator_1d(self.x_grid, k)
    }

    fn sample(&self, state: &DVector<f64>) -> DVector<f64> {
        state.clone()
    }
}
