use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use maskdoku::{Block, Col, Grid, Row, Solver, Stats};

/// Solve a 9x9 sudoku read from a puzzle file.
///
/// The file holds 9 rows of 9 whitespace separated integers, 0 marking
/// an empty cell.
#[derive(Parser, Debug)]
#[command(name = "maskdoku", version, about)]
struct Cli {
    /// Path to the puzzle file.
    puzzle: PathBuf,

    /// Print the availability masks built from the givens before
    /// solving.
    #[arg(long)]
    masks: bool,

    /// Print a breakdown of the search statistics after solving.
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.puzzle)
        .with_context(|| format!("failed to read {}", cli.puzzle.display()))?;
    let grid = Grid::from_givens(&text)
        .with_context(|| format!("{} is not a valid puzzle file", cli.puzzle.display()))?;

    let mut solver = Solver::from_grid(&grid)
        .with_context(|| format!("{} is not a valid puzzle", cli.puzzle.display()))?;

    if cli.masks {
        print_masks(&solver);
    }

    let start = Instant::now();
    let outcome = solver.solve();
    let elapsed = start.elapsed();

    match outcome {
        Ok(solution) => {
            println!("{}", solution);
            println!();
            println!(
                "Time to solve: {:?} (search nodes: {})",
                elapsed,
                solver.stats().nodes
            );
            if cli.stats {
                print_stats(solver.stats());
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!(
                "Failed to solve puzzle after {} search nodes: {}",
                solver.stats().nodes,
                err
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

// One line per index: row, column and block mask of the givens, in the
// same 9 bit binary form the masks have internally.
fn print_masks(solver: &Solver) {
    let state = solver.state();
    println!("nr       row       col     block");
    for nr in 0..9 {
        println!(
            "{:2} {:09b} {:09b} {:09b}",
            nr,
            state.unit_mask(Row::new(nr)),
            state.unit_mask(Col::new(nr)),
            state.unit_mask(Block::new(nr)),
        );
    }
    println!();
}

fn print_stats(stats: Stats) {
    println!("nodes:         {}", stats.nodes);
    println!("guesses:       {}", stats.guesses);
    println!("naked singles: {}", stats.naked_singles);
}
