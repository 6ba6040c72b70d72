//! Divergence of nearby initial conditions.
//!
//! Integrates the same vector field from two initial states across one shared
//! time grid and compares a chosen coordinate pointwise. For a chaotic system
//! the comparison demonstrates sensitive dependence on initial conditions:
//! the difference grows from the size of the perturbation to the size of the
//! attractor, no matter how small the perturbation was.
//!
//! # Example
//!
//! ```
//! use rossler_solvers::divergence::{self, Config};
//!
//! let pair = divergence::run(Config::default().time_span(0.0, 10.0))?;
//!
//! assert_eq!(pair.difference.len(), pair.grid.len());
//! # Ok::<(), divergence::Error>(())
//! ```

mod config;
mod error;
mod pair;

pub use config::Config;
pub use error::Error;
pub use pair::TrajectoryPair;

use rossler_core::{TimeGrid, difference};

use crate::euler;

/// Runs the configured comparison.
///
/// Both trajectories are integrated with forward Euler on the same uniform
/// grid, so their samples align index for index.
///
/// # Errors
///
/// Returns an error if the configured time span and step do not form a valid
/// grid.
pub fn run(config: Config) -> Result<TrajectoryPair, Error> {
    let grid = TimeGrid::uniform(config.start, config.stop, config.step)?;

    let base = euler::integrate(&config.system, config.initial, &grid);
    let perturbed = euler::integrate(&config.system, config.perturbed, &grid);
    let difference = difference(&base, &perturbed, config.coordinate)?;

    Ok(TrajectoryPair {
        grid,
        base,
        perturbed,
        difference,
    })
}
