//! Command-line driver: builds the initial configuration, runs the selected
//! search strategy, and prints the solution path and program statistics.

use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use pocket_cube::cube::Cube;
use pocket_cube::search::{self, BacktrackOutcome, GraphOutcome, Solution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Breadth-first graph search.
    Breadth,
    /// Best-first graph search ordered by unsolved faces.
    Best,
    /// Iterative-deepening backtracking.
    Backtrack,
}

/// Search for a move sequence that solves a 2x2x2 pocket cube.
#[derive(Debug, Parser)]
#[command(name = "pocket-cube", version)]
struct Cli {
    /// Initial configuration: 24 sticker labels (spaces allowed), or a
    /// number of random scramble moves to apply to the solved cube.
    #[arg(short, long, default_value = "0")]
    config: String,

    /// Search strategy.
    #[arg(short, long, value_enum, default_value_t = Method::Breadth)]
    method: Method,

    /// Initial depth bound for the backtracking strategy.
    #[arg(short, long, default_value_t = 2)]
    depth: usize,

    /// Render every state along the solution path.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let start = if let Ok(n) = cli.config.parse::<usize>() {
        Cube::SOLVED.scramble(n, &mut rand::thread_rng())
    } else {
        match cli.config.parse::<Cube>() {
            Ok(cube) => cube,
            Err(err) => {
                eprintln!("bad --config: {err}");
                return ExitCode::FAILURE;
            }
        }
    };

    println!("initial state: {}", start.config());
    println!("{start}");

    let started = Instant::now();
    match cli.method {
        Method::Breadth | Method::Best => {
            let GraphOutcome { solution, stats } = match cli.method {
                Method::Breadth => search::breadth_first(&start),
                _ => search::best_first(&start),
            };
            let elapsed = started.elapsed();
            match &solution {
                Some(solution) => print_solution(solution, cli.verbose),
                None => println!("no solution within the explored space"),
            }
            println!("---- program statistics ----");
            println!("nodes generated: {}", stats.generated);
            println!("nodes expanded:  {}", stats.expanded);
            println!("runtime: {elapsed:?}");
        }
        Method::Backtrack => {
            let BacktrackOutcome {
                solution,
                bound,
                stats,
            } = search::iterative_deepening(&start, cli.depth);
            let elapsed = started.elapsed();
            print_solution(&solution, cli.verbose);
            println!("---- program statistics ----");
            println!("backtrack calls: {}", stats.calls);
            println!("already visited: {}", stats.already_visited);
            println!("depth exceeded:  {}", stats.depth_exceeded);
            println!("rules exhausted: {}", stats.rules_exhausted);
            println!("final depth bound: {bound}");
            println!("runtime: {elapsed:?}");
        }
    }

    ExitCode::SUCCESS
}

fn print_solution(solution: &Solution, verbose: bool) {
    if solution.is_empty() {
        println!("already solved");
        return;
    }
    println!("solution ({} moves): {solution}", solution.len());
    if verbose {
        for (mv, cube) in &solution.steps {
            println!("{mv}:\n{cube}");
        }
    }
}
