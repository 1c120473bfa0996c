// src/utils/postprocess.rs

use nalgebra::{DMatrix, DVector};

use crate::error::{HeatError, HeatResult};

/// Removes the two boundary cells from a 1D temperature profile.
///
/// The engine always emits the full grid including boundaries; consumers that
/// only want the evolving interior call this on each yielded state.
///
/// # Arguments
///
/// * `profile` - A yielded 1D state of length `x_grid`.
///
/// # Returns
///
/// * The interior profile of length `x_grid - 2`.
/// * `HeatError::MalformedResult` if the profile has no interior to expose.
pub fn trim_profile(profile: &DVector<f64>) -> HeatResult<DVector<f64>> {
    let n = profile.len();
    if n < 3 {
        return Err(HeatError::MalformedResult(format!(
            "profile of length {} has no interior cells",
            n
        )));
    }
    Ok(profile.rows(1, n - 2).into_owned())
}

/// Removes the boundary edges from a 2D temperature field.
///
/// # Arguments
///
/// * `field` - A yielded 2D state of shape `(y_grid, x_grid)`.
///
/// # Returns
///
/// * The interior field of shape `(y_grid - 2, x_grid - 2)`.
/// * `HeatError::MalformedResult` if either dimension has no interior.
pub fn trim_field(field: &DMatrix<f64>) -> HeatResult<DMatrix<f64>> {
    let (rows, cols) = field.shape();
    if rows < 3 || cols < 3 {
        return Err(HeatError::MalformedResult(format!(
            "field of shape ({}, {}) has no interior cells",
            rows, cols
        )));
    }
    Ok(field.slice((1, 1), (rows - 2, cols - 2)).into_owned())
}
