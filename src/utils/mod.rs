// src/utils/mod.rs

pub mod linear_algebra;
pub mod postprocess;

// Re-export specific functions for easier access
pub use linear_algebra::{
    build_heat_operator_1d,
    build_heat_operator_2d,
    flat_index,
};
pub use postprocess::{trim_field, trim_profile};
