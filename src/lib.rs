//! Sudoku CSP Solver
//!
//! This library solves 9x9 Sudoku puzzles with two complementary
//! algorithms over a shared constraint graph: AC-3 arc-consistency
//! propagation and depth-first backtracking search with forward
//! checking.

pub mod config;
pub mod puzzle;
pub mod solver;
pub mod utils;

pub use config::{Settings, SolverMethod};
pub use puzzle::{Grid, PuzzleBatch};
pub use solver::{Ac3Propagator, BacktrackingSolver, SolveOutcome, SolveReport};

use anyhow::Result;
use std::time::Instant;

/// Solve every puzzle in the configured batch with the configured method.
///
/// Solved grids are written back into the batch; the returned reports
/// carry the outcome and timing for each puzzle in order.
pub fn solve_batch(settings: &Settings) -> Result<Vec<SolveReport>> {
    let mut batch = PuzzleBatch::from_file(&settings.input.puzzle_file)?;
    Ok(solve_puzzles(&mut batch, settings.solver.method))
}

/// Solve an already-loaded batch, advancing its cursor to the end.
pub fn solve_puzzles(batch: &mut PuzzleBatch, method: SolverMethod) -> Vec<SolveReport> {
    let ac3 = Ac3Propagator::new();
    let backtracking = BacktrackingSolver::new();
    let mut reports = Vec::with_capacity(batch.len());

    loop {
        let puzzle = *batch.current();
        let start = Instant::now();
        let outcome = match method {
            SolverMethod::Ac3 => ac3.solve(&puzzle),
            SolverMethod::Backtracking => backtracking.solve(&puzzle),
        };
        let solve_time = start.elapsed();

        if let Some(solution) = outcome.solution() {
            batch.save(*solution);
        }
        reports.push(SolveReport {
            puzzle_index: batch.cursor(),
            puzzle,
            outcome,
            solve_time,
        });

        if !batch.advance() {
            break;
        }
    }

    reports
}
