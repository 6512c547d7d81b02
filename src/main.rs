//! Command-line entry point for the taboo search solver.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use taboo_tsp::config::{Config, TabooFilter};
use taboo_tsp::utils::{format_closed_tour, save_solution};
use taboo_tsp::TabooSearchSolver;

/// Taboo search for symmetric closed-tour instances.
#[derive(Parser, Debug)]
#[command(name = "taboo_tsp", version, about)]
struct Args {
    /// Path to the JSON cost matrix
    data: PathBuf,

    /// Taboo memory capacity
    #[arg(long, default_value_t = 2)]
    taboo_size: usize,

    /// Number of search iterations
    #[arg(long, default_value_t = 300)]
    iterations: usize,

    /// Seed for the initial solution; drawn at random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Exclude candidates whose leading node is taboo, instead of the
    /// default whole-tour test
    #[arg(long)]
    leading_node_filter: bool,

    /// Write a plain-text report to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let filter = if args.leading_node_filter {
        TabooFilter::LeadingNode
    } else {
        TabooFilter::WholeTour
    };

    let mut config = Config::new()
        .with_taboo_capacity(args.taboo_size)
        .with_filter(filter);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut solver = TabooSearchSolver::from_file(&args.data, config)?;
    println!(
        "Loaded {} nodes from {}",
        solver.matrix.node_count(),
        args.data.display()
    );
    println!(
        "Initial solution: {:?} (seed {})",
        solver.initial_solution.tour, solver.seed
    );

    solver.solve(args.iterations)?;

    for improvement in &solver.improvements {
        println!(
            "Iteration: {} Best neighbor: {:?} Value: {}",
            improvement.iteration, improvement.tour, improvement.cost
        );
    }

    println!("Best tour: {}", format_closed_tour(&solver.best_solution));
    println!("Best cost: {}", solver.best_cost);

    if let Some(path) = &args.output {
        save_solution(&solver, path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
