use thiserror::Error;

/// Failures of the grid and session APIs.
///
/// All of these are synchronous and leave the grid untouched: validation
/// happens before any mutation, so there is no partial-failure state to
/// recover from and retrying with the same input fails identically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("grid size must be positive, got {size}")]
    InvalidSize { size: usize },

    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    IndexOutOfRange { x: usize, y: usize, size: usize },

    #[error("replacement grid is {found}x{found}, expected {expected}x{expected}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("malformed grid: {len} cells for side length {size}")]
    InvalidGrid { size: usize, len: usize },

    #[error("grid edits are rejected while the simulation is running")]
    SimulationRunning,

    #[error("generation advances are rejected while editing")]
    SimulationNotRunning,
}
