//! Error types for instance loading and solver configuration.

use thiserror::Error;

/// Errors surfaced while loading an instance or setting up the solver.
///
/// Partition-invariant violations inside the annealing loop are programming
/// errors and panic instead of returning a variant.
#[derive(Debug, Error)]
pub enum Error {
    /// The instance file could not be read.
    #[error("could not read instance: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the instance did not match the section it appeared in.
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// A customer index occurred more than once.
    #[error("customer {customer} appears more than once")]
    DuplicateCustomer { customer: usize },

    /// A customer was declared without a service cost.
    #[error("customer {customer} has no service cost")]
    MissingService { customer: usize },

    /// The depot customer is absent from the instance.
    #[error("instance has no depot (customer {})", crate::instance::DEPOT_INDEX)]
    MissingDepot,

    /// A solver parameter was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Not enough customers to keep every route non-empty while relocating.
    #[error("{customers} customers cannot fill {vehicles} vehicles; need more customers than vehicles")]
    TooFewCustomers { customers: usize, vehicles: usize },
}
