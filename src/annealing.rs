//! The simulated annealing engine.

use crate::config::Config;
use crate::cost::{solution_cost, CostPolicy};
use crate::instance::Instance;
use crate::neighborhood::relocate_random;
use crate::solution::Solution;
use rand::Rng;

/// Terminal state of a single annealing run.
///
/// This is the solution that happened to be current when the temperature
/// reached the floor, not the best one seen along the way. Callers wanting
/// a best-of view run several independent anneals and compare.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub solution: Solution,
    pub cost: f64,
    pub iterations: u64,
    pub accepted: u64,
}

/// Metropolis acceptance: improving moves always pass; a worsening move
/// passes when the uniform `draw` from `[0, 1)` falls below
/// `exp(-delta / temperature)`.
pub fn accepts(delta: f64, temperature: f64, draw: f64) -> bool {
    delta < 0.0 || draw < (-delta / temperature).exp()
}

/// One annealing run over a fixed instance and cost policy.
pub struct Annealer<'a> {
    instance: &'a Instance,
    config: &'a Config,
    policy: CostPolicy,
}

impl<'a> Annealer<'a> {
    /// Create an annealer for the given instance and policy.
    pub fn new(instance: &'a Instance, config: &'a Config, policy: CostPolicy) -> Self {
        Annealer {
            instance,
            config,
            policy,
        }
    }

    /// Anneal from a clone of `seed` until the temperature reaches the
    /// floor, returning the final state.
    ///
    /// Improving moves are taken without consuming a random draw; only
    /// worsening moves spend one on the acceptance test.
    pub fn run<R: Rng>(&self, seed: &Solution, rng: &mut R) -> RunResult {
        let mut current = seed.clone();
        let mut cost = solution_cost(self.instance, &current, self.policy);
        let mut iterations = 0u64;
        let mut accepted = 0u64;

        let mut temperature = self.config.initial_temperature;
        while temperature > self.config.final_temperature {
            let candidate = relocate_random(&current, rng);
            let candidate_cost = solution_cost(self.instance, &candidate, self.policy);
            let delta = candidate_cost - cost;

            if delta < 0.0 || accepts(delta, temperature, rng.gen::<f64>()) {
                current = candidate;
                cost = candidate_cost;
                accepted += 1;
            }

            temperature -= self.config.cooling_step;
            iterations += 1;
        }

        RunResult {
            solution: current,
            cost,
            iterations,
            accepted,
        }
    }
}
