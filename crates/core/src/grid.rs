use std::cmp::Ordering;

use thiserror::Error;

/// A validated sequence of sample instants.
///
/// A `TimeGrid` holds at least two samples in strictly increasing order, so
/// every adjacent pair defines a positive step. Construction is the only
/// place these properties are checked; once a grid exists, solvers consume it
/// without revalidating.
///
/// Spacing does not have to be uniform. [`TimeGrid::uniform`] builds the
/// common fixed-step case, while [`TimeGrid::new`] accepts any strictly
/// increasing sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
}

/// Errors from [`TimeGrid`] construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimeGridError {
    /// The sequence holds fewer than two samples.
    #[error("time grid needs at least two samples, got {0}")]
    TooShort(usize),

    /// The sequence is not strictly increasing at the reported index.
    ///
    /// A `NaN` sample is unordered against its neighbor and is reported the
    /// same way.
    #[error("time grid must be strictly increasing, violated at index {0}")]
    NotIncreasing(usize),

    /// The requested step size is zero, negative, or non-finite.
    #[error("step size must be finite and greater than zero, got {0}")]
    StepNotPositive(f64),

    /// A requested grid bound is non-finite.
    #[error("grid bounds must be finite, got start {start} and stop {stop}")]
    NonFiniteBounds { start: f64, stop: f64 },
}

impl TimeGrid {
    /// Creates a grid from an explicit sequence of sample instants.
    ///
    /// # Errors
    ///
    /// Returns an error if the sequence holds fewer than two samples or is
    /// not strictly increasing.
    pub fn new(times: Vec<f64>) -> Result<Self, TimeGridError> {
        if times.len() < 2 {
            return Err(TimeGridError::TooShort(times.len()));
        }

        for i in 1..times.len() {
            if times[i].partial_cmp(&times[i - 1]) != Some(Ordering::Greater) {
                return Err(TimeGridError::NotIncreasing(i));
            }
        }

        Ok(Self { times })
    }

    /// Creates a uniform grid covering the half-open interval `[start, stop)`.
    ///
    /// The grid holds `ceil((stop - start) / step)` samples, with
    /// `times[i] = start + i * step`. The final sample falls strictly before
    /// `stop`.
    ///
    /// # Errors
    ///
    /// Returns an error if `step` is not a positive finite number, if either
    /// bound is non-finite, or if the interval is too short to hold two
    /// samples.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(start: f64, stop: f64, step: f64) -> Result<Self, TimeGridError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(TimeGridError::StepNotPositive(step));
        }
        if !start.is_finite() || !stop.is_finite() {
            return Err(TimeGridError::NonFiniteBounds { start, stop });
        }

        let count = ((stop - start) / step).ceil().max(0.0) as usize;
        let times = (0..count).map(|i| start + i as f64 * step).collect();

        // Re-running the full check catches degenerate cases, such as a step
        // too small to change `start` at its magnitude.
        Self::new(times)
    }

    /// Returns the sample instants.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if the grid holds no samples.
    ///
    /// Construction guarantees at least two samples, so this is always
    /// `false` for a grid obtained through the public constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Returns the first sample instant.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.times[0]
    }

    /// Returns the last sample instant.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Returns the step sizes between adjacent samples.
    ///
    /// Every yielded value is positive. The iterator yields one fewer item
    /// than [`len`](TimeGrid::len).
    pub fn steps(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.windows(2).map(|pair| pair[1] - pair[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn uniform_matches_half_open_range_semantics() {
        let grid = TimeGrid::uniform(0.0, 1.0, 0.25).unwrap();

        assert_eq!(grid.times(), &[0.0, 0.25, 0.5, 0.75]);
        assert_relative_eq!(grid.start(), 0.0);
        assert_relative_eq!(grid.end(), 0.75);
    }

    #[test]
    fn uniform_includes_a_partial_final_step() {
        // ceil(1.1 / 0.25) = 5 samples, the last short of the stop bound.
        let grid = TimeGrid::uniform(0.0, 1.1, 0.25).unwrap();

        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid.end(), 1.0);
    }

    #[test]
    fn uniform_handles_long_fine_grids() {
        let grid = TimeGrid::uniform(0.0, 300.0, 0.001).unwrap();

        assert_eq!(grid.len(), 300_000);
        assert_relative_eq!(grid.start(), 0.0);
        assert_relative_eq!(grid.end(), 299.999, max_relative = 1e-12);
    }

    #[test]
    fn uniform_rejects_non_positive_steps() {
        assert_eq!(
            TimeGrid::uniform(0.0, 1.0, 0.0).unwrap_err(),
            TimeGridError::StepNotPositive(0.0)
        );
        assert_eq!(
            TimeGrid::uniform(0.0, 1.0, -0.1).unwrap_err(),
            TimeGridError::StepNotPositive(-0.1)
        );
    }

    #[test]
    fn uniform_rejects_non_finite_steps() {
        assert!(matches!(
            TimeGrid::uniform(0.0, 1.0, f64::NAN).unwrap_err(),
            TimeGridError::StepNotPositive(step) if step.is_nan()
        ));
        assert!(matches!(
            TimeGrid::uniform(0.0, 1.0, f64::INFINITY).unwrap_err(),
            TimeGridError::StepNotPositive(_)
        ));
    }

    #[test]
    fn uniform_rejects_non_finite_bounds() {
        assert!(matches!(
            TimeGrid::uniform(f64::NAN, 1.0, 0.1).unwrap_err(),
            TimeGridError::NonFiniteBounds { .. }
        ));
        assert!(matches!(
            TimeGrid::uniform(0.0, f64::INFINITY, 0.1).unwrap_err(),
            TimeGridError::NonFiniteBounds { .. }
        ));
    }

    #[test]
    fn uniform_rejects_ranges_too_short_for_two_samples() {
        assert_eq!(
            TimeGrid::uniform(1.0, 1.0, 0.1).unwrap_err(),
            TimeGridError::TooShort(0)
        );
        assert_eq!(
            TimeGrid::uniform(2.0, 1.0, 0.1).unwrap_err(),
            TimeGridError::TooShort(0)
        );
        assert_eq!(
            TimeGrid::uniform(0.0, 0.05, 0.1).unwrap_err(),
            TimeGridError::TooShort(1)
        );
    }

    #[test]
    fn new_accepts_non_uniform_spacing() {
        let grid = TimeGrid::new(vec![0.0, 0.1, 0.4, 1.0]).unwrap();

        let steps: Vec<f64> = grid.steps().collect();
        assert_eq!(steps.len(), 3);
        assert_relative_eq!(steps[0], 0.1);
        assert_relative_eq!(steps[1], 0.3);
        assert_relative_eq!(steps[2], 0.6);
    }

    #[test]
    fn new_rejects_short_sequences() {
        assert_eq!(
            TimeGrid::new(Vec::new()).unwrap_err(),
            TimeGridError::TooShort(0)
        );
        assert_eq!(
            TimeGrid::new(vec![1.0]).unwrap_err(),
            TimeGridError::TooShort(1)
        );
    }

    #[test]
    fn new_rejects_non_increasing_sequences() {
        assert_eq!(
            TimeGrid::new(vec![0.0, 1.0, 0.5]).unwrap_err(),
            TimeGridError::NotIncreasing(2)
        );
        assert_eq!(
            TimeGrid::new(vec![0.0, 0.0, 1.0]).unwrap_err(),
            TimeGridError::NotIncreasing(1)
        );
    }

    #[test]
    fn new_rejects_nan_samples() {
        assert_eq!(
            TimeGrid::new(vec![0.0, f64::NAN, 1.0]).unwrap_err(),
            TimeGridError::NotIncreasing(1)
        );
        assert_eq!(
            TimeGrid::new(vec![f64::NAN, 1.0]).unwrap_err(),
            TimeGridError::NotIncreasing(1)
        );
    }

    #[test]
    fn steps_yield_adjacent_differences() {
        let grid = TimeGrid::uniform(2.0, 2.01, 0.002).unwrap();

        assert_eq!(grid.len(), 5);
        for step in grid.steps() {
            assert_relative_eq!(step, 0.002, max_relative = 1e-9);
        }
    }
}
