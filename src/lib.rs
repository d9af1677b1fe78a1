//! # SA-VRP
//!
//! A simulated annealing solver for vehicle routing instances.
//!
//! Customers are split into one route per vehicle, and a relocate-one
//! neighborhood is explored under a linearly cooling Metropolis acceptance
//! rule. Every instance is solved under four scenarios: each combination of
//! charging service costs and rounding edge distances. Per scenario, a
//! configurable number of independent runs race and the cheapest final
//! state wins.

pub mod annealing;
pub mod config;
pub mod cost;
pub mod error;
pub mod instance;
pub mod neighborhood;
pub mod solution;
pub mod utils;

use crate::annealing::{Annealer, RunResult};
use crate::config::Config;
use crate::cost::CostPolicy;
use crate::error::Error;
use crate::instance::Instance;
use crate::solution::Solution;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use std::time::Instant;

/// The cheapest outcome of a scenario's runs.
#[derive(Debug, Clone)]
pub struct BestResult {
    pub cost: f64,
    pub solution: Solution,
}

/// Outcome of one scenario, tagged with the policy it was evaluated under.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub policy: CostPolicy,
    pub best: BestResult,
}

/// Drives repeated annealing runs over one instance.
///
/// Every run of every scenario starts from the same seed partition; runs
/// only ever mutate their own clone of it.
pub struct Solver {
    instance: Instance,
    config: Config,
    seed_partition: Solution,
    master_seed: u64,
}

impl Solver {
    /// Create a solver: validate the configuration, build the shared seed
    /// partition and fix the master RNG seed.
    pub fn new(instance: Instance, vehicles: usize, config: Config) -> Result<Self, Error> {
        config.validate()?;
        let seed_partition = Solution::initial(&instance, vehicles)?;
        let master_seed = config.seed.unwrap_or_else(rand::random);

        Ok(Solver {
            instance,
            config,
            seed_partition,
            master_seed,
        })
    }

    /// Get the instance being solved.
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    /// Get the partition every run starts from.
    pub fn seed_partition(&self) -> &Solution {
        &self.seed_partition
    }

    /// Race `config.runs` independent anneals under one policy and keep the
    /// cheapest final state. Later runs must beat the incumbent strictly,
    /// so the earliest of equally cheap runs wins.
    pub fn run_scenario(&self, policy: CostPolicy) -> BestResult {
        let annealer = Annealer::new(&self.instance, &self.config, policy);
        let started = Instant::now();

        let results: Vec<RunResult> = (0..self.config.runs)
            .into_par_iter()
            .map(|run| {
                let mut rng = ChaCha8Rng::seed_from_u64(self.run_seed(policy, run));
                let result = annealer.run(&self.seed_partition, &mut rng);
                debug!(
                    "run {}: cost {:.2} after {} iterations ({} accepted)",
                    run, result.cost, result.iterations, result.accepted
                );
                result
            })
            .collect();

        let winner = results
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.cost < best.cost {
                    candidate
                } else {
                    best
                }
            })
            .expect("runs is validated to be positive");

        info!(
            "scenario service={} rounding={}: best cost {:.2} over {} runs in {}",
            policy.include_service,
            policy.round_distances,
            winner.cost,
            self.config.runs,
            utils::format_duration(started.elapsed())
        );

        BestResult {
            cost: winner.cost,
            solution: winner.solution,
        }
    }

    /// Run all four scenario combinations in reporting order.
    pub fn run_all(&self) -> Vec<ScenarioResult> {
        CostPolicy::all()
            .into_iter()
            .map(|policy| ScenarioResult {
                policy,
                best: self.run_scenario(policy),
            })
            .collect()
    }

    /// Seed for one run, derived from the scenario and the run index alone
    /// so that raising the run count never reshuffles earlier runs.
    fn run_seed(&self, policy: CostPolicy, run: usize) -> u64 {
        let scenario =
            ((policy.include_service as u64) << 1) | policy.round_distances as u64;
        self.master_seed ^ (scenario << 32) ^ run as u64
    }
}
