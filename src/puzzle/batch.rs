//! An explicit batch of puzzles with a cursor
//!
//! The batch owns the puzzle set and tracks which puzzle is current.
//! Solved grids are written back over the current entry, so the batch
//! doubles as the result collection once a run finishes.

use super::{io, Grid};
use anyhow::Result;
use std::path::Path;

/// A set of puzzles worked through one at a time
#[derive(Debug, Clone)]
pub struct PuzzleBatch {
    puzzles: Vec<Grid>,
    cursor: usize,
}

impl PuzzleBatch {
    /// Create a batch from already-parsed grids
    pub fn new(puzzles: Vec<Grid>) -> Result<Self> {
        if puzzles.is_empty() {
            anyhow::bail!("Puzzle batch cannot be empty");
        }
        Ok(Self { puzzles, cursor: 0 })
    }

    /// Load a batch from a puzzle file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(io::load_puzzles_from_file(path)?)
    }

    /// The puzzle the cursor currently points at
    pub fn current(&self) -> &Grid {
        &self.puzzles[self.cursor]
    }

    /// Index of the current puzzle
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Replace the current puzzle with its solved grid
    pub fn save(&mut self, solution: Grid) {
        self.puzzles[self.cursor] = solution;
    }

    /// Move the cursor to the next puzzle; false once the batch is exhausted
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.puzzles.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// All puzzles in the batch, solved entries included
    pub fn puzzles(&self) -> &[Grid] {
        &self.puzzles
    }
}
