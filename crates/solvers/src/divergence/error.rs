use rossler_core::{LengthMismatch, TimeGridError};
use thiserror::Error;

/// Errors that can occur during a divergence run.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("invalid time grid: {0}")]
    InvalidGrid(#[from] TimeGridError),

    #[error("misaligned trajectories: {0}")]
    Misaligned(#[from] LengthMismatch),
}
