//! Forward Euler integration.
//!
//! Advances a state across a time grid with the first-order explicit update:
//!
//! ```text
//! state[i + 1] = state[i] + derivative(state[i]) * (t[i + 1] - t[i])
//! ```
//!
//! The step size is read from the grid at every step, so non-uniform grids
//! integrate without special handling. Global error shrinks linearly with the
//! step size, and a chaotic system amplifies whatever error remains, so a
//! single trajectory is representative of the dynamics rather than exact.

use rossler_core::{State, TimeGrid, Trajectory, VectorField};

/// Integrates `field` from `initial` across `grid`.
///
/// Returns one state per grid sample, the first being `initial` itself. The
/// result is deterministic: the same field, initial state, and grid produce
/// bitwise-identical trajectories on every run.
///
/// Non-finite values are not treated as failures. If the state overflows or
/// the field produces `NaN`, the remaining samples carry the non-finite
/// values forward.
///
/// # Examples
///
/// ```
/// use rossler_core::{Rossler, State, TimeGrid};
/// use rossler_solvers::euler;
///
/// let grid = TimeGrid::uniform(0.0, 1.0, 0.1)?;
/// let trajectory = euler::integrate(&Rossler::default(), State::new(0.1, 0.0, 0.1), &grid);
///
/// assert_eq!(trajectory.len(), grid.len());
/// # Ok::<(), rossler_core::TimeGridError>(())
/// ```
#[must_use]
pub fn integrate<F: VectorField>(field: &F, initial: State, grid: &TimeGrid) -> Trajectory {
    let mut states = Vec::with_capacity(grid.len());
    let mut current = initial;
    states.push(current);

    for h in grid.steps() {
        current = current.step(field.derivative(current), h);
        states.push(current);
    }

    Trajectory::new(states)
}
