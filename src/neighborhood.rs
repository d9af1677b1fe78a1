//! The relocate-one move that drives the annealing search.

use crate::solution::Solution;
use rand::Rng;

/// Produce a neighbor of `solution` by moving one randomly chosen stop to a
/// randomly chosen position, possibly on another route.
///
/// The input is never mutated; routes are cloned up front and the move is
/// applied to the clone. Drawing a singleton source route redraws instead
/// of emptying it, so this only terminates when some route has at least two
/// stops. [`Solution::initial`] guarantees that by requiring more customers
/// than vehicles.
///
/// # Panics
///
/// Panics if a drawn source route is already empty; the partition invariant
/// was broken upstream.
pub fn relocate_random<R: Rng>(solution: &Solution, rng: &mut R) -> Solution {
    let mut routes = solution.routes.clone();
    let route_count = routes.len();

    loop {
        let source = rng.gen_range(0..route_count);
        assert!(!routes[source].is_empty(), "route can never be empty");
        if routes[source].len() == 1 {
            continue;
        }

        let remove_at = rng.gen_range(0..routes[source].len());
        let stop = routes[source].stops.remove(remove_at);

        // insertion bounds are measured after the removal
        let destination = rng.gen_range(0..route_count);
        let insert_at = rng.gen_range(0..=routes[destination].len());
        routes[destination].stops.insert(insert_at, stop);
        break;
    }

    Solution { routes }
}
