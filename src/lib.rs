// src/lib.rs

//! Transient heat diffusion over 1D and 2D rectangular surfaces.
//!
//! Each surface builds an initial temperature state and a constant
//! backward-Euler operator, then advances time by solving the operator
//! against the current state, yielding sampled snapshots through a lazy
//! [`surface::StateSequence`]. Boundaries are fixed-value (Dirichlet) and
//! held exactly by identity rows in the operator.
//!
//! Operators are stored dense and LU-factored once per run. Interior rows
//! carry only three (1D) or five (2D) nonzero entries, so a large-grid
//! engine would switch to a banded solver; the dense path is kept for its
//! exact solve semantics.

pub mod error;
pub mod input;
pub mod surface;
pub mod utils;

pub use error::{HeatError, HeatResult};
pub use surface::{StateSequence, Surface, Surface1D, Surface2D};
