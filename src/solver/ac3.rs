//! Arc-consistency propagation (AC-3)
//!
//! Repeatedly revises directed constraint edges until no candidate set
//! can shrink further. Under Sudoku's not-equal constraints an edge
//! `(a, b)` only ever removes a value from `a` when `b` is forced to
//! that value, so propagation amounts to striking forced values off
//! every peer and cascading the consequences.

use super::constraints::ConstraintGraph;
use super::domains::Domains;
use super::outcome::SolveOutcome;
use crate::puzzle::{Cell, Grid};
use std::collections::VecDeque;

/// AC-3 domain-reduction engine
#[derive(Debug, Default)]
pub struct Ac3Propagator {
    graph: ConstraintGraph,
}

impl Ac3Propagator {
    pub fn new() -> Self {
        Self { graph: ConstraintGraph::new() }
    }

    pub fn with_graph(graph: ConstraintGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    /// Run propagation to its fixed point. Always returns a domain map;
    /// the caller is responsible for checking it for emptied sets.
    pub fn propagate(&self, initial: &Domains) -> Domains {
        let mut domains = *initial;

        // Seed with every arc of the graph. Seeding only arcs out of
        // originally-blank cells would also reach the fixed point for
        // consistent inputs, but misses contradictions between two
        // conflicting givens.
        let mut queue: VecDeque<(Cell, Cell)> = Cell::all()
            .flat_map(|cell| self.graph.arcs_from(cell))
            .collect();

        while let Some((constrained, constraining)) = queue.pop_front() {
            if Self::revise(&mut domains, constrained, constraining) {
                // The shrunken domain may force further removals in
                // every cell it constrains.
                queue.extend(self.graph.arcs_into_peers(constrained));
            }
        }

        domains
    }

    /// Remove from `constrained` every value without support in
    /// `constraining`: under the not-equal constraint a value is
    /// supported as long as the other cell can still take any other
    /// value. True if the domain shrank.
    fn revise(domains: &mut Domains, constrained: Cell, constraining: Cell) -> bool {
        let other = domains.get(constraining);
        let mut revised = false;

        for value in domains.get(constrained).iter() {
            let supported = other.iter().any(|candidate| candidate != value);
            if !supported {
                domains.remove(constrained, value);
                revised = true;
            }
        }
        revised
    }

    /// Convenience entry point: propagate from a grid's initial domains
    /// and classify the result.
    pub fn solve(&self, grid: &Grid) -> SolveOutcome {
        let reduced = self.propagate(&Domains::from_grid(grid));

        if reduced.has_contradiction() {
            SolveOutcome::Contradiction
        } else if let Some(solution) = reduced.solved_grid() {
            SolveOutcome::Unique(solution)
        } else {
            SolveOutcome::NoUniqueSolution
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::io::parse_puzzle_line;
    use crate::puzzle::SolutionValidator;

    const EXAMPLE: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const SOLVED: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    #[test]
    fn test_prefilled_grid_passes_through() {
        let solved = parse_puzzle_line(SOLVED).unwrap();
        assert_eq!(Ac3Propagator::new().solve(&solved), SolveOutcome::Unique(solved));
    }

    #[test]
    fn test_propagation_is_idempotent() {
        let grid = parse_puzzle_line(EXAMPLE).unwrap();
        let propagator = Ac3Propagator::new();

        let once = propagator.propagate(&Domains::from_grid(&grid));
        let twice = propagator.propagate(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_propagation_only_shrinks_domains() {
        let grid = parse_puzzle_line(EXAMPLE).unwrap();
        let initial = Domains::from_grid(&grid);
        let reduced = Ac3Propagator::new().propagate(&initial);

        for cell in Cell::all() {
            let before = initial.get(cell);
            let after = reduced.get(cell);
            assert!(after.len() <= before.len());
            assert!(after.iter().all(|v| before.contains(v)));
        }
    }

    #[test]
    fn test_solves_grid_with_isolated_blanks() {
        // Blank nine solved cells, no two sharing a row, column or box;
        // each then has all twenty peers determined and collapses to a
        // singleton in one revision pass.
        let mut line = SOLVED.to_string();
        for index in [0, 12, 24, 28, 40, 52, 56, 68, 80] {
            line.replace_range(index..index + 1, "0");
        }
        let puzzle = parse_puzzle_line(&line).unwrap();

        let outcome = Ac3Propagator::new().solve(&puzzle);
        assert_eq!(outcome, SolveOutcome::Unique(parse_puzzle_line(SOLVED).unwrap()));
    }

    #[test]
    fn test_hard_puzzle_reduces_but_stays_open() {
        let grid = parse_puzzle_line(EXAMPLE).unwrap();
        let propagator = Ac3Propagator::new();
        let reduced = propagator.propagate(&Domains::from_grid(&grid));

        assert!(!reduced.has_contradiction());
        // Whatever AC-3 leaves open must still be fewer cells than the
        // original blanks, and every determined cell must be consistent.
        assert!(reduced.open_cells().len() <= grid.placeholder_count());
        if let Some(solution) = reduced.solved_grid() {
            assert!(SolutionValidator::new().validate(&grid, &solution).is_valid);
        }
    }

    #[test]
    fn test_conflicting_givens_detected() {
        // Two 5s in the first row
        let mut line = "0".repeat(81);
        line.replace_range(0..2, "55");
        let puzzle = parse_puzzle_line(&line).unwrap();

        assert_eq!(Ac3Propagator::new().solve(&puzzle), SolveOutcome::Contradiction);
    }

    #[test]
    fn test_empty_grid_is_not_unique() {
        let empty = parse_puzzle_line(&"0".repeat(81)).unwrap();
        assert_eq!(Ac3Propagator::new().solve(&empty), SolveOutcome::NoUniqueSolution);
    }
}
