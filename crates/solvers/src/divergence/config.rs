use rossler_core::{Coordinate, Rossler, State};
use serde::{Deserialize, Serialize};

/// Configuration for a divergence run.
///
/// The default reproduces the canonical demonstration: the chaotic Rössler
/// parameters integrated over `[0, 300)` at a step of `0.001`, from the
/// initial states `(0.1, 0, 0.1)` and `(0.1001, 0, 0.1001)`, compared in the
/// `x` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// The system both trajectories integrate.
    pub system: Rossler,

    /// First sample instant of the uniform grid.
    pub start: f64,

    /// Exclusive upper bound of the uniform grid.
    pub stop: f64,

    /// Step size of the uniform grid.
    pub step: f64,

    /// Initial state of the base trajectory.
    pub initial: State,

    /// Initial state of the perturbed trajectory.
    pub perturbed: State,

    /// The coordinate compared between the two trajectories.
    pub coordinate: Coordinate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            system: Rossler::default(),
            start: 0.0,
            stop: 300.0,
            step: 0.001,
            initial: State::new(0.1, 0.0, 0.1),
            perturbed: State::new(0.1001, 0.0, 0.1001),
            coordinate: Coordinate::X,
        }
    }
}

impl Config {
    /// Sets the system parameters.
    #[must_use]
    pub fn system(mut self, system: Rossler) -> Self {
        self.system = system;
        self
    }

    /// Sets the start and exclusive stop of the time span.
    #[must_use]
    pub fn time_span(mut self, start: f64, stop: f64) -> Self {
        self.start = start;
        self.stop = stop;
        self
    }

    /// Sets the step size.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the base initial state.
    #[must_use]
    pub fn initial(mut self, initial: State) -> Self {
        self.initial = initial;
        self
    }

    /// Sets the perturbed initial state.
    #[must_use]
    pub fn perturbed(mut self, perturbed: State) -> Self {
        self.perturbed = perturbed;
        self
    }

    /// Sets the compared coordinate.
    #[must_use]
    pub fn coordinate(mut self, coordinate: Coordinate) -> Self {
        self.coordinate = coordinate;
        self
    }
}
