//! Demonstration of the two solving methods
//!
//! Runs AC-3 on its own and then the full backtracking search over the
//! same puzzle, showing how far propagation alone gets.

use sudoku_csp::puzzle::io::parse_puzzle_line;
use sudoku_csp::solver::Domains;
use sudoku_csp::utils::PuzzleFormatter;
use sudoku_csp::{Ac3Propagator, BacktrackingSolver, SolveOutcome};

const PUZZLE: &str =
    "003020600900305001001806400008102900700000008006708200002609500800203009005010300";

fn main() -> anyhow::Result<()> {
    let puzzle = parse_puzzle_line(PUZZLE)?;
    println!("Puzzle:\n{}", PuzzleFormatter::format_grid(&puzzle));

    // AC-3 alone
    let propagator = Ac3Propagator::new();
    let reduced = propagator.propagate(&Domains::from_grid(&puzzle));
    println!("After AC-3: {}", PuzzleFormatter::format_domain_summary(&reduced));
    match propagator.solve(&puzzle) {
        SolveOutcome::Unique(solution) => {
            println!("AC-3 solved it outright:\n{}", PuzzleFormatter::format_grid(&solution));
        }
        outcome => println!("AC-3 alone: {}", outcome),
    }

    // Full backtracking search
    match BacktrackingSolver::new().solve(&puzzle) {
        SolveOutcome::Unique(solution) => {
            println!("Backtracking solution:\n{}", PuzzleFormatter::format_grid(&solution));
        }
        outcome => println!("Backtracking: {}", outcome),
    }

    Ok(())
}
