//! Instance definition and data structures for the VRP.
//!
//! Instances come from sectioned text files: a free-form header, then
//! `NODE_COORD_SECTION`, `DEMAND_SECTION` (service costs), `DEPOT_SECTION`
//! and `EOF`. Every marker line advances the parser to the next section;
//! anything after `EOF` is ignored.

use crate::error::Error;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Index of the depot customer. Instances are only accepted when they
/// contain this index, and `DEPOT_SECTION` may name no other.
pub const DEPOT_INDEX: usize = 1;

/// Position of the depot in a validated instance's customer ordering.
pub const DEPOT_POSITION: usize = 0;

/// A customer (or the depot) in the instance.
///
/// Constructed complete: coordinates and service cost are set together, so
/// a customer can never be observed without its service cost. The loader
/// accumulates partial records and only builds `Customer`s once both
/// sections have been read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub index: usize,
    pub x: i64,
    pub y: i64,
    pub service: u64,
}

impl Customer {
    /// Create a new customer.
    pub fn new(index: usize, x: i64, y: i64, service: u64) -> Self {
        Customer {
            index,
            x,
            y,
            service,
        }
    }

    /// Calculate the Euclidean distance to another customer.
    pub fn distance(&self, other: &Customer) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Customers are identified by their index alone.
impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Customer {}

impl std::hash::Hash for Customer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

/// A validated VRP instance.
///
/// Customers are stored sorted by index with the depot at
/// [`DEPOT_POSITION`]; routes and the cost evaluator work with positions
/// into this ordering rather than raw indices.
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    customers: Vec<Customer>,
    distance_matrix: Vec<Vec<f64>>,
}

impl Instance {
    /// Build an instance from complete customer records.
    ///
    /// Sorts by index, checks that indices are unique and that the depot is
    /// present, then precomputes the distance matrix.
    pub fn new(name: impl Into<String>, mut customers: Vec<Customer>) -> Result<Self, Error> {
        customers.sort_by_key(|c| c.index);

        for pair in customers.windows(2) {
            if pair[0].index == pair[1].index {
                return Err(Error::DuplicateCustomer {
                    customer: pair[0].index,
                });
            }
        }
        if customers.first().map(|c| c.index) != Some(DEPOT_INDEX) {
            return Err(Error::MissingDepot);
        }

        let distance_matrix = Self::compute_distance_matrix(&customers);

        Ok(Instance {
            name: name.into(),
            customers,
            distance_matrix,
        })
    }

    /// Load an instance from a sectioned text file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse an instance from sectioned text.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut section = Section::Header;
        let mut name = String::from("unnamed");
        let mut coords: HashMap<usize, (i64, i64)> = HashMap::new();
        let mut services: HashMap<usize, u64> = HashMap::new();
        // order of first appearance, so validation reports the earliest offender
        let mut order: Vec<usize> = Vec::new();

        for (number, raw) in text.lines().enumerate() {
            let line = number + 1;
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }
            if let Some(next) = section.advanced_by(content) {
                section = next;
                continue;
            }

            match section {
                Section::Header => {
                    if let Some((key, value)) = content.split_once(':') {
                        if key.trim() == "NAME" {
                            name = value.trim().to_string();
                        }
                    }
                }
                Section::Coords => {
                    let fields: Vec<&str> = content.split_whitespace().collect();
                    if fields.len() != 3 {
                        return Err(Error::Syntax {
                            line,
                            message: format!("expected `index x y`, got {} fields", fields.len()),
                        });
                    }
                    let index: usize = parse_field(fields[0], line)?;
                    if index < DEPOT_INDEX {
                        return Err(Error::Syntax {
                            line,
                            message: format!("customer index must be at least {DEPOT_INDEX}"),
                        });
                    }
                    let x = parse_field(fields[1], line)?;
                    let y = parse_field(fields[2], line)?;
                    if coords.insert(index, (x, y)).is_some() {
                        return Err(Error::DuplicateCustomer { customer: index });
                    }
                    order.push(index);
                }
                Section::Services => {
                    let fields: Vec<&str> = content.split_whitespace().collect();
                    if fields.len() != 2 {
                        return Err(Error::Syntax {
                            line,
                            message: format!(
                                "expected `index service`, got {} fields",
                                fields.len()
                            ),
                        });
                    }
                    let index: usize = parse_field(fields[0], line)?;
                    if !coords.contains_key(&index) {
                        return Err(Error::Syntax {
                            line,
                            message: format!("service cost for unknown customer {index}"),
                        });
                    }
                    let service = parse_field(fields[1], line)?;
                    // a service cost can only be set once
                    if services.insert(index, service).is_some() {
                        return Err(Error::Syntax {
                            line,
                            message: format!("service cost for customer {index} set twice"),
                        });
                    }
                }
                Section::Depot => {
                    let value: i64 = parse_field(content, line)?;
                    if value != -1 && value != DEPOT_INDEX as i64 {
                        return Err(Error::Syntax {
                            line,
                            message: format!("depot may only be customer {DEPOT_INDEX}"),
                        });
                    }
                }
                Section::Done => {}
            }
        }

        let mut customers = Vec::with_capacity(order.len());
        for index in order {
            let (x, y) = coords[&index];
            let service = services
                .remove(&index)
                .ok_or(Error::MissingService { customer: index })?;
            customers.push(Customer::new(index, x, y, service));
        }

        debug!("parsed instance `{}` with {} records", name, customers.len());
        Self::new(name, customers)
    }

    /// Get the instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get all customers, depot first, sorted by index.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Get the customer at a position in the sorted ordering.
    pub fn customer(&self, position: usize) -> &Customer {
        &self.customers[position]
    }

    /// Get the number of customers (excluding the depot).
    pub fn customer_count(&self) -> usize {
        self.customers.len() - 1
    }

    /// Get the depot customer.
    pub fn depot(&self) -> &Customer {
        &self.customers[DEPOT_POSITION]
    }

    /// Look up the distance between two positions.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Generate the full distance matrix for all customers.
    fn compute_distance_matrix(customers: &[Customer]) -> Vec<Vec<f64>> {
        let n = customers.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = customers[i].distance(&customers[j]);
                }
            }
        }

        matrix
    }
}

/// Parser state. Every section marker line advances to the next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Coords,
    Services,
    Depot,
    Done,
}

impl Section {
    /// The state after `content` if it is a section marker, `None` otherwise.
    fn advanced_by(self, content: &str) -> Option<Section> {
        match content {
            "NODE_COORD_SECTION" | "DEMAND_SECTION" | "DEPOT_SECTION" | "EOF" => {
                Some(match self {
                    Section::Header => Section::Coords,
                    Section::Coords => Section::Services,
                    Section::Services => Section::Depot,
                    Section::Depot | Section::Done => Section::Done,
                })
            }
            _ => None,
        }
    }
}

fn parse_field<T: FromStr>(field: &str, line: usize) -> Result<T, Error> {
    field.parse().map_err(|_| Error::Syntax {
        line,
        message: format!("invalid integer `{field}`"),
    })
}
