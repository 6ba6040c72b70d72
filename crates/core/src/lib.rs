//! Core types for the Rössler system.
//!
//! This crate defines the data model that the solvers build on:
//!
//! - [`State`] — a point in phase space, with [`Coordinate`] selecting one
//!   component
//! - [`VectorField`] — a pure map from a state to its instantaneous
//!   derivative
//! - [`Rossler`] — the Rössler equations and their parameters
//! - [`TimeGrid`] — a validated, strictly increasing sequence of sample
//!   instants
//! - [`Trajectory`] — an immutable state sequence aligned with a time grid,
//!   with [`difference`] comparing one coordinate across two trajectories

mod field;
mod grid;
mod rossler;
mod state;
mod trajectory;

pub use field::VectorField;
pub use grid::{TimeGrid, TimeGridError};
pub use rossler::Rossler;
pub use state::{Coordinate, State};
pub use trajectory::{LengthMismatch, Trajectory, difference};
