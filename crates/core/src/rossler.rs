use serde::{Deserialize, Serialize};

use crate::{State, VectorField};

/// The Rössler system.
///
/// A three-dimensional autonomous flow governed by
///
/// ```text
/// dx/dt = -y - z
/// dy/dt = x + a * y
/// dz/dt = b + z * (x - c)
/// ```
///
/// For the canonical parameters `a = 0.2`, `b = 0.2`, `c = 5.7` the system is
/// chaotic: trajectories settle onto a strange attractor and nearby initial
/// conditions separate exponentially.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rossler {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Rossler {
    /// Creates a system with the given parameters.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
}

impl Default for Rossler {
    /// Returns the canonical chaotic parameters `a = 0.2`, `b = 0.2`,
    /// `c = 5.7`.
    fn default() -> Self {
        Self {
            a: 0.2,
            b: 0.2,
            c: 5.7,
        }
    }
}

impl VectorField for Rossler {
    fn derivative(&self, state: State) -> State {
        let State { x, y, z } = state;

        State {
            x: -y - z,
            y: x + self.a * y,
            z: self.b + z * (x - self.c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    #[allow(clippy::float_cmp)]
    fn default_parameters_are_the_canonical_chaotic_set() {
        let system = Rossler::default();

        assert_eq!(system.a, 0.2);
        assert_eq!(system.b, 0.2);
        assert_eq!(system.c, 5.7);
    }

    #[test]
    fn derivative_matches_the_governing_equations() {
        let system = Rossler::default();
        let state = State::new(1.0, 2.0, 3.0);

        let derivative = system.derivative(state);

        assert_relative_eq!(derivative.x, -5.0);
        assert_relative_eq!(derivative.y, 1.0 + 0.2 * 2.0);
        assert_relative_eq!(derivative.z, 0.2 + 3.0 * (1.0 - 5.7));
    }

    #[test]
    fn derivative_is_pure() {
        let system = Rossler::new(0.1, 0.1, 14.0);
        let state = State::new(-3.0, 0.5, 0.02);

        assert_eq!(system.derivative(state), system.derivative(state));
    }

    #[test]
    fn non_finite_states_propagate() {
        let system = Rossler::default();

        let from_nan = system.derivative(State::new(f64::NAN, 1.0, 1.0));
        assert!(from_nan.y.is_nan());
        assert!(from_nan.z.is_nan());

        let from_inf = system.derivative(State::new(1.0, f64::INFINITY, 1.0));
        assert!(from_inf.x.is_infinite());
    }
}
