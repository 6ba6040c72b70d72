use rossler_core::{TimeGrid, Trajectory};

/// Two trajectories of the same system from nearby initial states, with
/// their pointwise difference in one coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryPair {
    /// The grid both trajectories were integrated on.
    pub grid: TimeGrid,

    /// The trajectory from the base initial state.
    pub base: Trajectory,

    /// The trajectory from the perturbed initial state.
    pub perturbed: Trajectory,

    /// Per-sample difference, perturbed minus base, in the compared
    /// coordinate.
    pub difference: Vec<f64>,
}

impl TrajectoryPair {
    /// Returns the largest absolute difference reached across the run.
    ///
    /// `NaN` samples are ignored, so a run that went non-finite reports the
    /// largest separation seen while the values were still comparable.
    #[must_use]
    pub fn max_separation(&self) -> f64 {
        self.difference.iter().fold(0.0, |max, d| max.max(d.abs()))
    }
}
