//! Depth-first backtracking search with forward checking
//!
//! The search runs AC-3 first to cut the candidate sets down, then
//! walks the remaining open cells in minimum-remaining-values order.
//! Every assignment is forward checked against the 20 peers before
//! recursing; a branch dies as soon as it would empty a peer's domain.
//! Failure travels back up as a plain return value.

use super::ac3::Ac3Propagator;
use super::constraints::ConstraintGraph;
use super::domains::{CandidateSet, Domains};
use super::outcome::SolveOutcome;
use crate::puzzle::{Cell, Grid};

/// DFS Sudoku solver backed by an AC-3 pre-pass
#[derive(Debug, Default)]
pub struct BacktrackingSolver {
    propagator: Ac3Propagator,
}

impl BacktrackingSolver {
    pub fn new() -> Self {
        Self { propagator: Ac3Propagator::new() }
    }

    pub fn with_graph(graph: ConstraintGraph) -> Self {
        Self { propagator: Ac3Propagator::with_graph(graph) }
    }

    pub fn solve(&self, grid: &Grid) -> SolveOutcome {
        let reduced = self.propagator.propagate(&Domains::from_grid(grid));
        if reduced.has_contradiction() {
            return SolveOutcome::Contradiction;
        }

        let open = reduced.open_cells();
        match self.search(&open, &reduced) {
            Some(result) => match result.solved_grid() {
                Some(solution) => SolveOutcome::Unique(solution),
                // Final consistency check: a search result that leaves
                // any domain uncollapsed is reported as ambiguous.
                None => SolveOutcome::NoUniqueSolution,
            },
            None => SolveOutcome::NoUniqueSolution,
        }
    }

    /// Recursive step over the remaining open cells. Returns the
    /// completed domain map on success, `None` to trigger backtracking.
    fn search(&self, open: &[Cell], domains: &Domains) -> Option<Domains> {
        if open.is_empty() {
            return Some(*domains);
        }

        let (selected, cell) = self.select_mrv_cell(open, domains)?;
        let remaining: Vec<Cell> = open
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != selected)
            .map(|(_, &c)| c)
            .collect();

        for value in domains.get(cell).iter() {
            // A determined peer already forced to this value rules the
            // assignment out before any copying happens.
            let locally_inconsistent = self
                .propagator
                .graph()
                .peers(cell)
                .iter()
                .any(|peer| {
                    !remaining.contains(peer)
                        && domains.get(*peer).sole_value() == Some(value)
                });
            if locally_inconsistent {
                continue;
            }

            let Some(child) = self.forward_check(domains, cell, value) else {
                continue;
            };

            if let Some(result) = self.search(&remaining, &child) {
                return Some(result);
            }
        }

        None
    }

    /// Minimum-remaining-values selection with first-found tie-break.
    ///
    /// A cell still holding all nine candidates is untouched by any
    /// given or assignment; if nothing narrower exists the branch
    /// cannot be pinned to a single completion, so selection fails and
    /// the puzzle is reported as ambiguous.
    fn select_mrv_cell(&self, open: &[Cell], domains: &Domains) -> Option<(usize, Cell)> {
        let mut selected = None;
        let mut smallest = 9;

        for (i, &cell) in open.iter().enumerate() {
            let size = domains.get(cell).len();
            if size < smallest {
                smallest = size;
                selected = Some((i, cell));
            }
        }
        selected
    }

    /// Assign `value` to `cell` on a copy of the domains and strike the
    /// value from every peer. `None` when a peer's domain empties.
    fn forward_check(&self, domains: &Domains, cell: Cell, value: u8) -> Option<Domains> {
        let mut child = *domains;
        child.set(cell, CandidateSet::singleton(value));

        for &peer in self.propagator.graph().peers(cell) {
            if child.remove(peer, value) && child.get(peer).is_empty() {
                return None;
            }
        }
        Some(child)
    }
}
