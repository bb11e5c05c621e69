//! Solver outcomes and per-puzzle reports

use crate::puzzle::Grid;
use std::fmt;
use std::time::Duration;

/// The result of running a solver over one puzzle.
///
/// `NoUniqueSolution` covers both genuinely ambiguous puzzles and ones
/// the chosen method could not collapse to singletons (AC-3 alone often
/// cannot). `Contradiction` means a candidate set was emptied, so the
/// puzzle as given is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    Unique(Grid),
    NoUniqueSolution,
    Contradiction,
}

impl SolveOutcome {
    pub fn is_unique(&self) -> bool {
        matches!(self, SolveOutcome::Unique(_))
    }

    /// The solved grid, when one was found
    pub fn solution(&self) -> Option<&Grid> {
        match self {
            SolveOutcome::Unique(grid) => Some(grid),
            _ => None,
        }
    }

    /// Short status label for summaries and serialized output
    pub fn status(&self) -> &'static str {
        match self {
            SolveOutcome::Unique(_) => "solved",
            SolveOutcome::NoUniqueSolution => "no unique solution",
            SolveOutcome::Contradiction => "contradiction",
        }
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutcome::Unique(_) => write!(f, "Unique solution found"),
            SolveOutcome::NoUniqueSolution => write!(f, "No unique solution found"),
            SolveOutcome::Contradiction => write!(f, "Puzzle is contradictory"),
        }
    }
}

/// Outcome of one puzzle in a batch run
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub puzzle_index: usize,
    pub puzzle: Grid,
    pub outcome: SolveOutcome,
    pub solve_time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_accessors() {
        let grid = Grid::new();
        let unique = SolveOutcome::Unique(grid);
        assert!(unique.is_unique());
        assert_eq!(unique.solution(), Some(&grid));
        assert_eq!(unique.status(), "solved");

        assert_eq!(SolveOutcome::NoUniqueSolution.solution(), None);
        assert_eq!(SolveOutcome::Contradiction.status(), "contradiction");
    }
}
