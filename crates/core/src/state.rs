use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point in the Rössler system's phase space.
///
/// Depending on context, a `State` is either a position in phase space or,
/// when produced by a [`VectorField`](crate::VectorField), the instantaneous
/// rate of change of each component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Selects one component of a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coordinate {
    X,
    Y,
    Z,
}

impl State {
    /// Creates a state from its components.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the selected component.
    #[must_use]
    pub fn coordinate(&self, coordinate: Coordinate) -> f64 {
        match coordinate {
            Coordinate::X => self.x,
            Coordinate::Y => self.y,
            Coordinate::Z => self.z,
        }
    }

    /// Returns the state advanced by `derivative` over a step of size `h`.
    ///
    /// This is the first-order update `self + derivative * h`, applied
    /// componentwise.
    #[must_use]
    pub fn step(self, derivative: State, h: f64) -> Self {
        self + derivative * h
    }
}

impl Add for State {
    type Output = State;

    fn add(self, rhs: State) -> Self::Output {
        State {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for State {
    type Output = State;

    fn sub(self, rhs: State) -> Self::Output {
        State {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for State {
    type Output = State;

    fn mul(self, rhs: f64) -> Self::Output {
        State {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
