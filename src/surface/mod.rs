// src/surface/mod.rs

pub mod surface1d;
pub mod surface2d;

pub use surface1d::Surface1D;
pub use surface2d::Surface2D;

use nalgebra::{DMatrix, DVector, Dynamic, LU};

use crate::error::HeatError;

/// A diffusible surface: knows its cell count, its initial temperature
/// state, and the constant implicit-step operator over its flattened grid.
///
/// Both dimensionalities share the same staging: build the initial state,
/// build the operator once, then repeatedly solve the operator against the
/// current state to advance time. Only construction and the shape of the
/// exposed samples differ.
pub trait Surface {
    /// Shape a consumer sees: a vector for 1D, a `(y_grid, x_grid)` matrix
    /// for 2D.
    type Sample;

    /// Total number of grid cells, boundaries included.
    fn cell_count(&self) -> usize;

    /// Initial temperature of every cell, flattened row-major.
    fn initial_state(&self) -> DVector<f64>;

    /// The implicit diffusion operator \(P\). Identity rows pin boundary
    /// cells; interior rows carry the backward-Euler stencil.
    fn operator(&self) -> DMatrix<f64>;

    /// An independent, consumer-shaped copy of a flat state.
    fn sample(&self, state: &DVector<f64>) -> Self::Sample;

    /// Runs the simulation, yielding a copy of the state every `yield_step`
    /// iterations.
    ///
    /// The sequence is lazy and finite: exactly `iterations.div_ceil(yield_step)`
    /// samples (steps 0, `yield_step`, ... up to but excluding `iterations`).
    /// It is not restartable; construct a new sequence to re-run.
    ///
    /// # Panics
    ///
    /// Panics if `yield_step` is zero.
    fn sim(&self, iterations: usize, yield_step: usize) -> StateSequence<'_, Self>
    where
        Self: Sized,
    {
        assert!(yield_step > 0, "yield_step must be at least 1");
        log::debug!(
            "starting simulation: {} cells, {} iterations, sampling every {}",
            self.cell_count(),
            iterations,
            yield_step
        );
        StateSequence {
            surface: self,
            lu: self.operator().lu(),
            state: self.initial_state(),
            step: 0,
            iterations,
            yield_step,
            failed: false,
        }
    }
}

/// Lazy sequence of sampled temperature states.
///
/// Owns the LU-factored operator and the mutable current state; each call to
/// `next` advances the simulation in place up to the following sample point.
/// Yielded samples are independent copies, safe for consumers to mutate.
pub struct StateSequence<'a, S: Surface> {
    surface: &'a S,
    lu: LU<f64, Dynamic, Dynamic>,
    state: DVector<f64>,
    step: usize,
    iterations: usize,
    yield_step: usize,
    failed: bool,
}

impl<S: Surface> Iterator for StateSequence<'_, S> {
    type Item = Result<S::Sample, HeatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while self.step < self.iterations {
            let sample = if self.step % self.yield_step == 0 {
                Some(self.surface.sample(&self.state))
            } else {
                None
            };

            match self.lu.solve(&self.state) {
                Some(next_state) => self.state = next_state,
                None => {
                    log::warn!(
                        "diffusion operator is singular, aborting at iteration {}",
                        self.step
                    );
                    self.failed = true;
                    return Some(Err(HeatError::SingularOperator {
                        iteration: self.step,
                    }));
                }
            }
            self.step += 1;

            if let Some(sample) = sample {
                return Some(Ok(sample));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_length() {
        // ceil(iterations / yield_step) samples, per the sampling contract.
        let surface = Surface1D::new(0.0, 0.0, 100.0, 10.0, 5, 1.0, 0.5).unwrap();
        for (iterations, yield_step, expected) in
            [(10, 1, 10), (10, 3, 4), (9, 3, 3), (1, 5, 1), (0, 1, 0)]
        {
            let count = surface.sim(iterations, yield_step).count();
            assert_eq!(
                count, expected,
                "iterations={}, yield_step={}",
                iterations, yield_step
            );
        }
    }

    #[test]
    fn test_samples_are_independent_copies() {
        let surface = Surface1D::new(10.0, 10.0, 200.0, 10.0, 5, 1.0, 0.5).unwrap();
        let mut seq = surface.sim(2, 1);
        let mut first = seq.next().unwrap().unwrap();
        first[2] = -1.0e9;
        let second = seq.next().unwrap().unwrap();
        // Mutating a yielded sample must not leak into engine state.
        assert!(second[2] > 10.0);
    }

    #[test]
    #[should_panic(expected = "yield_step")]
    fn test_zero_yield_step_panics() {
        let surface = Surface1D::new(0.0, 0.0, 1.0, 1.0, 3, 1.0, 1.0).unwrap();
        let _ = surface.sim(10, 0);
    }
}
