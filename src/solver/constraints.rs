//! The Sudoku constraint graph
//!
//! Each cell is constrained by the 20 other cells sharing its row,
//! column or 3x3 box: 8 row peers, 8 column peers, and the 4 box peers
//! not already counted among them. The peer table is precomputed once;
//! the graph itself carries no mutable state.

use crate::puzzle::Cell;

/// Number of peers constraining every cell
pub const PEERS_PER_CELL: usize = 20;

/// Precomputed peer table for the standard 9x9 constraint graph
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    peers: Vec<Vec<Cell>>,
}

impl ConstraintGraph {
    pub fn new() -> Self {
        let peers = (0..81)
            .map(|index| Self::compute_peers(Cell::from_index(index)))
            .collect();
        Self { peers }
    }

    fn compute_peers(cell: Cell) -> Vec<Cell> {
        let mut peers = Vec::with_capacity(PEERS_PER_CELL);

        for col in 1..=9 {
            if col != cell.col() {
                peers.push(Cell::new(cell.row(), col));
            }
        }
        for row in 1..=9 {
            if row != cell.row() {
                peers.push(Cell::new(row, cell.col()));
            }
        }
        // Box peers sharing neither row nor column, so the row and
        // column passes above never produce duplicates.
        let box_rows = (cell.row() - 1) / 3 * 3 + 1;
        let box_cols = (cell.col() - 1) / 3 * 3 + 1;
        for row in box_rows..box_rows + 3 {
            for col in box_cols..box_cols + 3 {
                if row != cell.row() && col != cell.col() {
                    peers.push(Cell::new(row, col));
                }
            }
        }

        peers
    }

    /// The 20 cells constraining the given cell
    pub fn peers(&self, cell: Cell) -> &[Cell] {
        &self.peers[cell.index()]
    }

    /// Directed constraint edges with `cell` as the constrained side
    pub fn arcs_from(&self, cell: Cell) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.peers(cell).iter().map(move |&peer| (cell, peer))
    }

    /// Directed constraint edges pointing into `cell`'s peers from `cell`,
    /// i.e. the arcs to re-examine after `cell`'s domain shrinks.
    pub fn arcs_into_peers(&self, cell: Cell) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.peers(cell).iter().map(move |&peer| (peer, cell))
    }
}

impl Default for ConstraintGraph {
    fn default() -> Self {
        Self::new()
    }
}
