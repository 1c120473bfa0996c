// src/error.rs

use thiserror::Error;

/// Result type used throughout the crate.
pub type HeatResult<T> = Result<T, HeatError>;

/// Unified error type for the heat diffusion engine.
#[derive(Error, Debug)]
pub enum HeatError {
    /// A construction parameter violates the engine's minimum bounds.
    ///
    /// Raised before any state or operator is built; a surface is never
    /// partially constructed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The implicit-step linear solve could not proceed because the
    /// diffusion operator is not invertible.
    ///
    /// Not expected for any valid construction, but surfaced rather than
    /// letting NaNs propagate through later states.
    #[error("singular diffusion operator at iteration {iteration}")]
    SingularOperator {
        /// Iteration index at which the solve failed.
        iteration: usize,
    },

    /// A yielded state is too small to have an interior to trim.
    #[error("malformed result: {0}")]
    MalformedResult(String),

    /// Error reading the input deck file.
    #[error("failed to read input deck {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing the input deck YAML.
    #[error("failed to parse input deck: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HeatError::InvalidConfig("x_grid must be at least 3".to_string());
        assert_eq!(
            err.to_string(),
            "invalid configuration: x_grid must be at least 3"
        );

        let err = HeatError::SingularOperator { iteration: 42 };
        assert_eq!(err.to_string(), "singular diffusion operator at iteration 42");
    }
}
