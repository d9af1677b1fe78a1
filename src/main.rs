//! Command-line entry point: load an instance, anneal every scenario
//! combination, and report the best truck routes found for each.

use clap::Parser;
use log::info;
use std::path::PathBuf;

use sa_vrp::config::Config;
use sa_vrp::instance::Instance;
use sa_vrp::utils::{build_report, format_best, save_report};
use sa_vrp::Solver;

#[derive(Parser, Debug)]
#[command(version, about = "Simulated annealing solver for vehicle routing instances")]
struct Args {
    /// Path to the instance file
    instance: PathBuf,

    /// Number of vehicles to route
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    vehicles: u32,

    /// Independent annealing runs per scenario; the cheapest result is kept
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    runs: u32,

    /// Master seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Starting temperature of each run
    #[arg(long, default_value_t = 500.0)]
    initial_temperature: f64,

    /// Temperature floor ending each run
    #[arg(long, default_value_t = 0.0)]
    final_temperature: f64,

    /// Linear temperature decrement per iteration
    #[arg(long, default_value_t = 0.0001)]
    cooling_step: f64,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also write the text report to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let instance = Instance::from_file(&args.instance)?;
    info!(
        "loaded `{}` with {} customers from {}",
        instance.name(),
        instance.customer_count(),
        args.instance.display()
    );

    let mut config = Config::new()
        .with_initial_temperature(args.initial_temperature)
        .with_final_temperature(args.final_temperature)
        .with_cooling_step(args.cooling_step)
        .with_runs(args.runs as usize);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let solver = Solver::new(instance, args.vehicles as usize, config)?;
    let results = solver.run_all();

    if args.json {
        let report = build_report(&results, solver.instance());
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for result in &results {
            println!(
                "With service = {}, with rounding = {}; {}",
                result.policy.include_service,
                result.policy.round_distances,
                format_best(&result.best, solver.instance())
            );
            println!();
        }
    }

    if let Some(path) = &args.output {
        save_report(&results, solver.instance(), path)?;
        info!("report written to {}", path.display());
    }

    Ok(())
}
