//! Fixed-step solvers for the Rössler system.
//!
//! - [`euler`] advances any [`VectorField`](rossler_core::VectorField) across
//!   a [`TimeGrid`](rossler_core::TimeGrid) with the forward Euler method
//! - [`divergence`] integrates one system from two nearby initial states and
//!   reports how the trajectories separate over time

pub mod divergence;
pub mod euler;
