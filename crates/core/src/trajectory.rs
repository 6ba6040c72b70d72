use thiserror::Error;

use crate::{Coordinate, State};

/// An immutable sequence of states, one per sample instant of the grid it
/// was integrated on.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
}

/// Two trajectories passed to [`difference`] hold different sample counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("trajectory lengths differ: {left} vs {right}")]
pub struct LengthMismatch {
    pub left: usize,
    pub right: usize,
}

impl Trajectory {
    /// Creates a trajectory from a sequence of states.
    #[must_use]
    pub fn new(states: Vec<State>) -> Self {
        Self { states }
    }

    /// Returns the states in sample order.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the trajectory holds no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<State> {
        self.states.get(index).copied()
    }

    /// Extracts one coordinate as a series aligned with the time grid.
    #[must_use]
    pub fn coordinate(&self, coordinate: Coordinate) -> Vec<f64> {
        self.states
            .iter()
            .map(|state| state.coordinate(coordinate))
            .collect()
    }
}

/// Computes the per-sample difference `perturbed - base` in one coordinate.
///
/// The result is aligned with both inputs: `result[i]` compares the two
/// trajectories at sample `i`. Trajectories integrated from bitwise-equal
/// initial states on the same grid produce a difference of exact zeros.
///
/// # Errors
///
/// Returns an error if the trajectories hold different numbers of states.
pub fn difference(
    base: &Trajectory,
    perturbed: &Trajectory,
    coordinate: Coordinate,
) -> Result<Vec<f64>, LengthMismatch> {
    if base.len() != perturbed.len() {
        return Err(LengthMismatch {
            left: base.len(),
            right: perturbed.len(),
        });
    }

    Ok(base
        .states
        .iter()
        .zip(&perturbed.states)
        .map(|(b, p)| p.coordinate(coordinate) - b.coordinate(coordinate))
        .collect())
}
