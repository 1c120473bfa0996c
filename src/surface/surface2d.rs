// src/surface/surface2d.rs

use nalgebra::{DMatrix, DVector};

use crate::error::{HeatError, HeatResult};
use crate::surface::Surface;
use crate::utils::linear_algebra::{build_heat_operator_2d, flat_index};

/// A heated rectangle with four fixed-temperature edges and a uniform
/// interior initial temperature.
///
/// The `(y_grid, x_grid)` grid is flattened row-major (row 0 = top) for
/// linear-algebra purposes and reshaped back before states are exposed.
#[derive(Debug, Clone)]
pub struct Surface2D {
    pub x_extent: f64,          // [m] Physical width
    pub y_extent: f64,          // [m] Physical height
    pub x_grid: usize,          // Number of grid columns
    pub y_grid: usize,          // Number of grid rows
    pub t_boundary_top: f64,    // [K] Fixed top-edge temperature
    pub t_boundary_bot: f64,    // [K] Fixed bottom-edge temperature
    pub t_boundary_left: f64,   // [K] Fixed left-edge temperature
    pub t_boundary_right: f64,  // [K] Fixed right-edge temperature
    pub t_init_mid: f64,        // [K] Initial interior temperature
    /// Accepted for reporting but not folded into the stencil coefficients;
    /// the discretization assumes one time unit per step.
    pub dt: f64,
    pub k_coef: f64,            // [m^2/s] Thermal diffusivity
    dx: f64,
    dy: f64,
}

impl Surface2D {
    /// Creates a new 2D surface, validating the engine's minimum bounds.
    ///
    /// # Arguments
    ///
    /// * `x_extent`, `y_extent` - Physical dimensions, must be positive.
    /// * `x_grid`, `y_grid` - Grid resolutions, each at least 3.
    /// * `t_boundary_*` - Fixed edge temperatures (top/bottom/left/right).
    /// * `t_init_mid` - Initial temperature of every interior cell.
    /// * `dt` - Time step label.
    /// * `k_coef` - Thermal diffusivity, must be positive.
    ///
    /// # Returns
    ///
    /// * `Ok(Surface2D)` on valid parameters.
    /// * `HeatError::InvalidConfig` otherwise; nothing is partially built.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x_extent: f64,
        x_grid: usize,
        y_extent: f64,
        y_grid: usize,
        t_boundary_top: f64,
        t_boundary_bot: f64,
        t_boundary_left: f64,
        t_boundary_right: f64,
        t_init_mid: f64,
        dt: f64,
        k_coef: f64,
    ) -> HeatResult<Self> {
        if x_grid < 3 || y_grid < 3 {
            return Err(HeatError::InvalidConfig(format!(
                "grid resolutions must be at least 3, got ({}, {})",
                x_grid, y_grid
            )));
        }
        if x_extent <= 0.0 || y_extent <= 0.0 {
            return Err(HeatError::InvalidConfig(format!(
                "extents must be positive, got ({}, {})",
                x_extent, y_extent
            )));
        }
        if k_coef <= 0.0 {
            return Err(HeatError::InvalidConfig(format!(
                "k_coef must be positive, got {}",
                k_coef
            )));
        }
        let dx = x_extent / x_grid as f64;
        let dy = y_extent / y_grid as f64;
        Ok(Surface2D {
            x_extent,
            y_extent,
            x_grid,
            y_grid,
            t_boundary_top,
            t_boundary_bot,
            t_boundary_left,
            t_boundary_right,
            t_init_mid,
            dt,
            k_coef,
            dx,
            dy,
        })
    }
}

impl Surface for Surface2D {
    type Sample = DMatrix<f64>;

    fn cell_count(&self) -> usize {
        self.x_grid * self.y_grid
    }

    fn initial_state(&self) -> DVector<f64> {
        let mut state = DVector::from_element(self.cell_count(), self.t_init_mid);
        for x in 0..self.x_grid {
            state[flat_index(x, 0, self.x_grid)] = self.t_boundary_top;
            state[flat_index(x, self.y_grid - 1, self.x_grid)] = self.t_boundary_bot;
        }
        for y in 1..self.y_grid - 1 {
            state[flat_index(0, y, self.x_grid)] = self.t_boundary_left;
            state[flat_index(self.x_grid - 1, y, self.x_grid)] = self.t_boundary_right;
        }
        state
    }

    fn operator(&self) -> DMatrix<f64> {
        let kx = self.k_coef / (self.dx * self.dx);
        let ky = self.k_coef / (self.dy * self.dy);
        build_heat_operator_2d(self.x_grid, self.y_grid, kx, ky)
    }

    fn sample(&self, state: &DVector<f64>) -> DMatrix<f64> {
        // The flat state is row-major; nalgebra fills column-major, so
        // rebuild from a row slice to keep the (y_grid, x_grid) layout.
        DMatrix::from_row_slice(self.y_grid, self.x_grid, state.as_slice())
    }
}
