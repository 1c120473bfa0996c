// src/utils/linear_algebra.rs

use nalgebra::DMatrix;

/// Maps a 2D grid cell at column `x`, row `y` (row 0 = top) to its index in
/// the row-major flattened state vector.
#[inline]
pub fn flat_index(x: usize, y: usize, x_grid: usize) -> usize {
    y * x_grid + x
}

/// Builds the backward-Euler operator matrix for 1D heat diffusion on a
/// uniform grid with fixed-value (Dirichlet) endpoints.
///
/// Solving \(P \cdot T_{next} = T_{current}\) advances the temperature
/// profile by one implicit time step. Boundary rows are identity rows, so
/// the endpoint temperatures stay fixed for the lifetime of the simulation.
///
/// # Arguments
///
/// * `x_grid` - Number of grid cells (two boundary cells plus interior).
/// * `k` - Stencil coefficient \(k_{coef} / \Delta x^2\).
///
/// # Returns
///
/// * A tridiagonal operator matrix of size \(N \times N\),
///   where \(N\) = `x_grid`.
pub fn build_heat_operator_1d(x_grid: usize, k: f64) -> DMatrix<f64> {
    let mut operator = DMatrix::zeros(x_grid, x_grid);

    operator[(0, 0)] = 1.0;
    operator[(x_grid - 1, x_grid - 1)] = 1.0;
    for i in 1..x_grid - 1 {
        operator[(i, i - 1)] = -k;
        operator[(i, i)] = 1.0 + 2.0 * k;
        operator[(i, i + 1)] = -k;
    }

    operator
}

/// Builds the backward-Euler operator matrix for 2D heat diffusion on a
/// uniform rectangular grid with fixed-value (Dirichlet) edges.
///
/// The grid is flattened row-major via [`flat_index`]; matrix row ordering
/// mirrors that convention exactly so that identity rows land on the edge
/// cells. Every interior cell gets the 5-point implicit stencil.
///
/// # Arguments
///
/// * `x_grid` - Number of grid columns.
/// * `y_grid` - Number of grid rows.
/// * `kx` - Horizontal stencil coefficient \(k_{coef} / \Delta x^2\).
/// * `ky` - Vertical stencil coefficient \(k_{coef} / \Delta y^2\).
///
/// # Returns
///
/// * An operator matrix of size \(N \times N\), where \(N\) =
///   `x_grid * y_grid`, with five nonzero entries per interior-cell row.
pub fn build_heat_operator_2d(x_grid: usize, y_grid: usize, kx: f64, ky: f64) -> DMatrix<f64> {
    let n = x_grid * y_grid;
    let mut operator = DMatrix::zeros(n, n);

    // Top and bottom grid rows are entirely boundary cells.
    for x in 0..x_grid {
        let top = flat_index(x, 0, x_grid);
        let bot = flat_index(x, y_grid - 1, x_grid);
        operator[(top, top)] = 1.0;
        operator[(bot, bot)] = 1.0;
    }

    for y in 1..y_grid - 1 {
        let left = flat_index(0, y, x_grid);
        let right = flat_index(x_grid - 1, y, x_grid);
        operator[(left, left)] = 1.0;
        operator[(right, right)] = 1.0;

        for x in 1..x_grid - 1 {
            let center = flat_index(x, y, x_grid);
            operator[(center, center)] = 1.0 + 2.0 * (kx + ky);
            operator[(center, flat_index(x - 1, y, x_grid))] = -kx;
            operator[(center, flat_index(x + 1, y, x_grid))] = -kx;
            operator[(center, flat_index(x, y - 1, x_grid))] = -ky;
            operator[(center, flat_index(x, y + 1, x_grid))] = -ky;
        }
    }

    operator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index_row_major() {
        // 4 columns: cell (x=2, y=1) sits at 1*4 + 2.
        assert_eq!(flat_index(0, 0, 4), 0);
        assert_eq!(flat_index(3, 0, 4), 3);
        assert_eq!(flat_index(2, 1, 4), 6);
        assert_eq!(flat_index(3, 2, 4), 11);
    }

    #[test]
    fn test_build_heat_operator_1d() {
        let operator = build_heat_operator_1d(4, 0.5);

        let expected = DMatrix::from_row_slice(4, 4, &[
            1.0,  0.0,  0.0,  0.0,
           -0.5,  2.0, -0.5,  0.0,
            0.0, -0.5,  2.0, -0.5,
            0.0,  0.0,  0.0,  1.0,
        ]);

        assert_eq!(operator, expected);
    }

    #[test]
    fn test_build_heat_operator_2d_single_interior_cell() {
        // 3x3 grid: only cell (1, 1) is interior, at flat index 4.
        let operator = build_heat_operator_2d(3, 3, 0.25, 0.5);

        for row in 0..9 {
            if row == 4 {
                continue;
            }
            for col in 0..9 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_eq!(operator[(row, col)], expected);
            }
        }

        assert_eq!(operator[(4, 4)], 1.0 + 2.0 * (0.25 + 0.5));
        assert_eq!(operator[(4, 3)], -0.25);
        assert_eq!(operator[(4, 5)], -0.25);
        assert_eq!(operator[(4, 1)], -0.5);
        assert_eq!(operator[(4, 7)], -0.5);
    }

    #[test]
    fn test_build_heat_operator_2d_interior_row_structure() {
        let x_grid = 4;
        let y_grid = 4;
        let operator = build_heat_operator_2d(x_grid, y_grid, 1.0, 2.0);

        // Every interior-cell row has exactly five nonzero entries.
        for y in 1..y_grid - 1 {
            for x in 1..x_grid - 1 {
                let row = flat_index(x, y, x_grid);
                let nonzero = (0..x_grid * y_grid)
                    .filter(|&col| operator[(row, col)] != 0.0)
                    .count();
                assert_eq!(nonzero, 5);
            }
        }

        // Edge-cell rows are identity rows.
        for x in 0..x_grid {
            let row = flat_index(x, 0, x_grid);
            assert_eq!(operator[(row, row)], 1.0);
            assert_eq!(operator.row(row).sum(), 1.0);
        }
    }
}
