// src/input/parser.rs

use std::fs::File;
use std::io::Read;

use crate::error::{HeatError, HeatResult};
use crate::input::InputDeck;

/// Parses the input deck from a YAML file.
///
/// # Arguments
///
/// * `file_path` - Path to the YAML input file.
///
/// # Returns
///
/// * `Ok(InputDeck)` if parsing is successful.
/// * `HeatError::Io` or `HeatError::Parse` otherwise.
pub fn parse_input_deck(file_path: &str) -> HeatResult<InputDeck> {
    let mut file = File::open(file_path).map_err(|source| HeatError::Io {
        path: file_path.to_string(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|source| HeatError::Io {
        path: file_path.to_string(),
        source,
    })?;
    let input_deck: InputDeck = serde_yaml::from_str(&contents)?;
    Ok(input_deck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_input_deck_1d() {
        let yaml = r#"
simulation:
  iterations: 1200
  yield_step: 200
surface_1d:
  t_left: 30.0
  t_right: 30.0
  t_middle: 500.0
  x_extent: 100.0
  x_grid: 30
  dt: 1.0
  k_coef: 0.5
output:
  include_boundaries: true
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let deck = parse_input_deck(file.path().to_str().unwrap()).unwrap();
        assert_eq!(deck.simulation.iterations, 1200);
        assert_eq!(deck.simulation.yield_step, 200);
        let surface = deck.surface_1d.unwrap();
        assert_eq!(surface.x_grid, 30);
        assert_eq!(surface.t_middle, 500.0);
        assert!(deck.surface_2d.is_none());
        assert!(deck.output.include_boundaries);
    }

    #[test]
    fn test_parse_input_deck_2d() {
        let yaml = r#"
simulation:
  iterations: 600
  yield_step: 100
surface_2d:
  x_extent: 100.0
  y_extent: 80.0
  x_grid: 20
  y_grid: 16
  t_boundary_top: 10.0
  t_boundary_bot: 20.0
  t_boundary_left: 30.0
  t_boundary_right: 40.0
  t_init_mid: 450.0
  dt: 1.0
  k_coef: 0.5
output:
  include_boundaries: false
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let deck = parse_input_deck(file.path().to_str().unwrap()).unwrap();
        let surface = deck.surface_2d.unwrap();
        assert_eq!((surface.x_grid, surface.y_grid), (20, 16));
        assert_eq!(surface.t_boundary_right, 40.0);
        assert!(!deck.output.include_boundaries);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = parse_input_deck("/no/such/deck.yaml").unwrap_err();
        assert!(matches!(err, HeatError::Io { .. }));
    }
}
