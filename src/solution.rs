//! Solution representation: an ordered partition of customers into routes.

use crate::error::Error;
use crate::instance::Instance;
use serde::{Deserialize, Serialize};

/// One vehicle's visit sequence, excluding the implicit depot endpoints.
///
/// Stops are positions into [`Instance::customers`]. Routes are never empty
/// at rest; the relocate operator redraws rather than emptying one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub stops: Vec<usize>,
}

impl Route {
    /// Get the number of stops on the route.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Check if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

/// A complete solution: every non-depot customer on exactly one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub routes: Vec<Route>,
}

impl Solution {
    /// Build the seed partition: customers in index order, split as evenly
    /// as possible across `vehicles` routes.
    ///
    /// Each route takes `round(remaining / routes_left)` customers, so
    /// sizes differ by at most one. Rejects instances without more
    /// customers than vehicles: the relocate operator only terminates once
    /// some route has at least two stops.
    pub fn initial(instance: &Instance, vehicles: usize) -> Result<Self, Error> {
        if vehicles == 0 {
            return Err(Error::Config("vehicle count must be positive".into()));
        }
        let customers = instance.customer_count();
        if customers <= vehicles {
            return Err(Error::TooFewCustomers {
                customers,
                vehicles,
            });
        }

        let mut routes = Vec::with_capacity(vehicles);
        let mut remaining = customers;
        let mut next = 1; // position 0 is the depot

        for vehicle in 0..vehicles {
            let take = (remaining as f64 / (vehicles - vehicle) as f64).round() as usize;
            routes.push(Route {
                stops: (next..next + take).collect(),
            });
            next += take;
            remaining -= take;
        }

        Ok(Solution { routes })
    }

    /// Get the number of routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Get the total number of stops across all routes.
    pub fn stop_count(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }
}
