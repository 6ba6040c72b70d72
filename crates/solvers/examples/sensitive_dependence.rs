//! # Sensitive Dependence on Initial Conditions
//!
//! Integrates the Rössler system from two initial states separated by `1e-4`
//! and reports how far apart in `x` the trajectories drift.
//!
//! To run this example:
//!
//! ```sh
//! cargo run --example sensitive_dependence --release
//! ```

use rossler_solvers::divergence::{self, Config, TrajectoryPair};

/// Instants at which the separation is reported.
const CHECKPOINTS: [f64; 6] = [0.0, 1.0, 50.0, 100.0, 200.0, 299.0];

fn main() {
    let config = Config::default();
    let pair = divergence::run(config).expect("the canonical configuration is valid");

    println!(
        "Rössler system: a = {}, b = {}, c = {}",
        config.system.a, config.system.b, config.system.c
    );
    println!(
        "Integrated {} samples over [{}, {}) at a step of {}",
        pair.grid.len(),
        config.start,
        config.stop,
        config.step
    );
    println!();

    println!("{:>8}  {:>14}", "time", "|x2 - x1|");
    for &instant in &CHECKPOINTS {
        let index = index_at(&pair, instant);
        println!(
            "{:>8.1}  {:>14.6e}",
            pair.grid.times()[index],
            pair.difference[index].abs()
        );
    }

    println!();
    println!(
        "largest separation over the run: {:.3}",
        pair.max_separation()
    );
}

/// Returns the grid index of the first sample at or after `instant`.
fn index_at(pair: &TrajectoryPair, instant: f64) -> usize {
    let times = pair.grid.times();
    times.partition_point(|&t| t < instant).min(times.len() - 1)
}
