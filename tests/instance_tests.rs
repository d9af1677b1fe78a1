//! Unit tests for instance parsing and validation.

use std::collections::HashSet;

use sa_vrp::error::Error;
use sa_vrp::instance::{Customer, Instance, DEPOT_INDEX, DEPOT_POSITION};

/// A small sectioned instance: depot plus three customers on a unit square.
const SAMPLE: &str = "\
NAME : square4
COMMENT : unit square with depot in a corner
TYPE : CVRP
DIMENSION : 4
NODE_COORD_SECTION
1 0 0
2 1 0
3 1 1
4 0 1
DEMAND_SECTION
1 0
2 5
3 7
4 2
DEPOT_SECTION
1
-1
EOF
";

#[test]
fn test_parse_sample() {
    let instance = Instance::parse(SAMPLE).unwrap();

    assert_eq!(instance.name(), "square4");
    assert_eq!(instance.customer_count(), 3);
    assert_eq!(instance.customers().len(), 4);

    // Depot first, customers sorted by index
    assert_eq!(instance.depot().index, DEPOT_INDEX);
    assert_eq!(instance.customer(DEPOT_POSITION).index, 1);
    assert_eq!(instance.customer(2).index, 3);
    assert_eq!((instance.customer(2).x, instance.customer(2).y), (1, 1));
    assert_eq!(instance.customer(2).service, 7);
}

#[test]
fn test_parse_unsorted_input_is_sorted_by_index() {
    let text = "\
NODE_COORD_SECTION
4 0 1
1 0 0
3 1 1
2 1 0
DEMAND_SECTION
4 2
1 0
3 7
2 5
EOF
";
    let instance = Instance::parse(text).unwrap();

    let indices: Vec<usize> = instance.customers().iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4]);
}

#[test]
fn test_parse_ignores_lines_after_eof() {
    let text = format!("{}\nthis is not part of the instance\n99 99\n", SAMPLE);
    let instance = Instance::parse(&text).unwrap();
    assert_eq!(instance.customer_count(), 3);
}

#[test]
fn test_distance_lookup() {
    let instance = Instance::parse(SAMPLE).unwrap();

    // Positions 0..4 are customers 1..4 around the unit square
    assert!((instance.distance(0, 1) - 1.0).abs() < 1e-6);
    assert!((instance.distance(0, 2) - 2.0_f64.sqrt()).abs() < 1e-6);
    assert!((instance.distance(1, 1)).abs() < 1e-6);
    assert_eq!(instance.distance(0, 2), instance.distance(2, 0));
}

#[test]
fn test_parse_rejects_bad_coordinate_arity() {
    let text = "\
NODE_COORD_SECTION
1 0
EOF
";
    match Instance::parse(text) {
        Err(Error::Syntax { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_parse_rejects_non_integer_field() {
    let text = "\
NODE_COORD_SECTION
1 0 zero
EOF
";
    assert!(matches!(
        Instance::parse(text),
        Err(Error::Syntax { line: 2, .. })
    ));
}

#[test]
fn test_parse_rejects_duplicate_coordinates() {
    let text = "\
NODE_COORD_SECTION
1 0 0
2 1 0
2 3 3
EOF
";
    assert!(matches!(
        Instance::parse(text),
        Err(Error::DuplicateCustomer { customer: 2 })
    ));
}

#[test]
fn test_parse_rejects_service_for_unknown_customer() {
    let text = "\
NODE_COORD_SECTION
1 0 0
2 1 0
DEMAND_SECTION
9 4
EOF
";
    assert!(matches!(
        Instance::parse(text),
        Err(Error::Syntax { line: 5, .. })
    ));
}

#[test]
fn test_parse_rejects_second_service_for_same_customer() {
    let text = "\
NODE_COORD_SECTION
1 0 0
2 1 0
DEMAND_SECTION
2 4
2 6
EOF
";
    assert!(matches!(
        Instance::parse(text),
        Err(Error::Syntax { line: 6, .. })
    ));
}

#[test]
fn test_parse_rejects_negative_service() {
    let text = "\
NODE_COORD_SECTION
1 0 0
2 1 0
DEMAND_SECTION
1 0
2 -4
EOF
";
    assert!(matches!(
        Instance::parse(text),
        Err(Error::Syntax { line: 6, .. })
    ));
}

#[test]
fn test_parse_rejects_missing_service() {
    let text = "\
NODE_COORD_SECTION
1 0 0
2 1 0
DEMAND_SECTION
1 0
EOF
";
    assert!(matches!(
        Instance::parse(text),
        Err(Error::MissingService { customer: 2 })
    ));
}

#[test]
fn test_parse_rejects_foreign_depot() {
    let text = "\
NODE_COORD_SECTION
1 0 0
2 1 0
DEMAND_SECTION
1 0
2 4
DEPOT_SECTION
2
EOF
";
    assert!(matches!(
        Instance::parse(text),
        Err(Error::Syntax { line: 8, .. })
    ));
}

#[test]
fn test_parse_rejects_missing_depot() {
    let text = "\
NODE_COORD_SECTION
2 1 0
3 1 1
DEMAND_SECTION
2 4
3 4
EOF
";
    assert!(matches!(Instance::parse(text), Err(Error::MissingDepot)));
}

#[test]
fn test_new_rejects_duplicate_indices() {
    let customers = vec![
        Customer::new(1, 0, 0, 0),
        Customer::new(2, 1, 0, 5),
        Customer::new(2, 0, 1, 5),
    ];
    assert!(matches!(
        Instance::new("dup", customers),
        Err(Error::DuplicateCustomer { customer: 2 })
    ));
}

#[test]
fn test_from_file_roundtrip() {
    let path = std::env::temp_dir().join("sa_vrp_instance_test.vrp");
    std::fs::write(&path, SAMPLE).unwrap();

    let instance = Instance::from_file(&path).unwrap();
    assert_eq!(instance.name(), "square4");
    assert_eq!(instance.customer_count(), 3);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_from_file_missing_path() {
    let result = Instance::from_file("/no/such/instance.vrp");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_customer_identity_is_the_index() {
    // Same index compares equal even when the records disagree otherwise
    let a = Customer::new(3, 0, 0, 10);
    let b = Customer::new(3, 5, 5, 99);
    let c = Customer::new(4, 0, 0, 10);

    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut seen = HashSet::new();
    seen.insert(a);
    assert!(seen.contains(&b));
    assert!(!seen.contains(&c));
}

#[test]
fn test_customer_distance() {
    let a = Customer::new(1, 0, 0, 0);
    let b = Customer::new(2, 3, 4, 0);
    assert!((a.distance(&b) - 5.0).abs() < 1e-6);
    assert!((b.distance(&a) - 5.0).abs() < 1e-6);
}
