//! Tour cost evaluation under the two scenario switches.

use crate::instance::{Instance, DEPOT_POSITION};
use crate::solution::{Route, Solution};
use serde::{Deserialize, Serialize};

/// The two independent switches a scenario is evaluated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPolicy {
    /// Charge service costs in addition to travel distance.
    pub include_service: bool,
    /// Round every edge to the nearest integer before accumulating.
    pub round_distances: bool,
}

impl CostPolicy {
    /// All four switch combinations, in reporting order.
    pub fn all() -> [CostPolicy; 4] {
        [
            CostPolicy {
                include_service: false,
                round_distances: false,
            },
            CostPolicy {
                include_service: false,
                round_distances: true,
            },
            CostPolicy {
                include_service: true,
                round_distances: false,
            },
            CostPolicy {
                include_service: true,
                round_distances: true,
            },
        ]
    }
}

/// Calculate the cost of a single route: depot, stops in order, depot.
///
/// With `include_service` set, the depot's own service cost is charged
/// twice per route, once before departure and once after the return.
pub fn route_cost(instance: &Instance, route: &Route, policy: CostPolicy) -> f64 {
    let mut cost = 0.0;
    let mut last = DEPOT_POSITION;

    if policy.include_service {
        cost += instance.depot().service as f64;
    }

    for &stop in &route.stops {
        if policy.include_service {
            cost += instance.customer(stop).service as f64;
        }
        cost += edge_cost(instance, last, stop, policy);
        last = stop;
    }

    if policy.include_service {
        cost += instance.depot().service as f64;
    }

    cost + edge_cost(instance, last, DEPOT_POSITION, policy)
}

/// Calculate the total cost of a solution as the sum of its route costs.
pub fn solution_cost(instance: &Instance, solution: &Solution, policy: CostPolicy) -> f64 {
    solution
        .routes
        .iter()
        .map(|route| route_cost(instance, route, policy))
        .sum()
}

/// Distance of one edge under the rounding switch.
fn edge_cost(instance: &Instance, from: usize, to: usize, policy: CostPolicy) -> f64 {
    let distance = instance.distance(from, to);
    if policy.round_distances {
        distance.round()
    } else {
        distance
    }
}
