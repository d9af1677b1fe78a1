//! Report formatting and output helpers.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use itertools::Itertools;
use serde::Serialize;

use crate::instance::Instance;
use crate::solution::Solution;
use crate::{BestResult, ScenarioResult};

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Render a partition as one `Truck N: ...` line per route, listing the
/// customers by their instance indices.
pub fn format_routes(solution: &Solution, instance: &Instance) -> String {
    solution
        .routes
        .iter()
        .enumerate()
        .map(|(i, route)| {
            let stops = route
                .stops
                .iter()
                .map(|&stop| instance.customer(stop).index)
                .join(" ");
            format!("Truck {}: {}", i + 1, stops)
        })
        .join("\n")
}

/// Render a scenario winner with its cost and truck routes.
pub fn format_best(best: &BestResult, instance: &Instance) -> String {
    format!(
        "best cost = {:.2}, with these truck routes:\n{}",
        best.cost,
        format_routes(&best.solution, instance)
    )
}

/// One scenario's outcome in serializable form.
#[derive(Debug, Serialize)]
pub struct ScenarioReport {
    pub with_service: bool,
    pub with_rounding: bool,
    pub cost: f64,
    pub routes: Vec<Vec<usize>>,
}

/// Convert scenario results to their serializable form, with routes given
/// as external customer indices.
pub fn build_report(results: &[ScenarioResult], instance: &Instance) -> Vec<ScenarioReport> {
    results
        .iter()
        .map(|result| ScenarioReport {
            with_service: result.policy.include_service,
            with_rounding: result.policy.round_distances,
            cost: result.best.cost,
            routes: result
                .best
                .solution
                .routes
                .iter()
                .map(|route| {
                    route
                        .stops
                        .iter()
                        .map(|&stop| instance.customer(stop).index)
                        .collect()
                })
                .collect(),
        })
        .collect()
}

/// Save the four scenario reports to a file.
pub fn save_report<P: AsRef<Path>>(
    results: &[ScenarioResult],
    instance: &Instance,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "Instance: {} ({} customers, {} routes)",
        instance.name(),
        instance.customer_count(),
        results
            .first()
            .map(|r| r.best.solution.route_count())
            .unwrap_or(0)
    )?;

    for result in results {
        writeln!(file)?;
        writeln!(
            file,
            "With service = {}, with rounding = {}",
            result.policy.include_service, result.policy.round_distances
        )?;
        writeln!(file, "{}", format_best(&result.best, instance))?;
    }

    Ok(())
}
