//! Command-line front end: solve a JSON pathfinding problem with A*.
//!
//! ```text
//! astar [INPUT] [-v...] [--max-ops N]
//! ```
//!
//! Exits with 0 when the search completes (whether or not a route exists)
//! and 1 on a fatal error.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use graph_astar::algorithms::astar::{SearchOptions, SearchStatus};
use graph_astar::utils::problem::Problem;

/// Find a minimum-cost route between two nodes of a weighted directed graph
#[derive(Parser)]
#[command(name = "astar")]
#[command(version)]
#[command(about = "Find a minimum-cost route through a graph using A* search")]
struct Cli {
    /// JSON problem document to solve
    #[arg(default_value = "exampleProblem.json")]
    input: PathBuf,

    /// Give up after expanding this many nodes
    #[arg(long)]
    max_ops: Option<u32>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let problem = Problem::from_path(&cli.input)
        .with_context(|| format!("could not load {}", cli.input.display()))?;

    let mut options = SearchOptions::default();
    if let Some(max_ops) = cli.max_ops {
        options = options.max_ops(max_ops);
    }

    println!("Starting at >{}<", problem.start_node);
    let search_results = problem.solve_with(&options)?;

    match search_results.status() {
        SearchStatus::Found => {
            println!("=============");
            println!("Found path!");
            println!("{}", search_results.path().join(" -> "));
            if let Some(cost) = search_results.cost() {
                println!("Cost: {cost}");
            }
        }
        SearchStatus::OpsExhausted => {
            println!(
                "Gave up after expanding {} nodes without reaching the target.",
                search_results.ops()
            );
        }
        _ => println!("There is no route to the target."),
    }

    Ok(())
}
