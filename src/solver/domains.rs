//! Candidate sets and the per-cell domain map
//!
//! Candidate sets are 9-bit bitsets, one bit per value 1..=9, so the
//! emptiness and singleton checks the solvers lean on are O(1). The
//! full domain map is a flat 81-entry array and cheap to copy, which is
//! what lets the search clone on recurse to keep sibling branches
//! independent.

use crate::puzzle::{Cell, Grid, PLACEHOLDER};

const ALL_VALUES: u16 = 0x1FF;

/// Set of candidate values (1..=9) not yet ruled out for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateSet(u16);

impl CandidateSet {
    /// The empty set: a contradiction marker
    pub const EMPTY: Self = Self(0);

    /// All nine values
    pub fn full() -> Self {
        Self(ALL_VALUES)
    }

    /// A set holding exactly one value
    pub fn singleton(value: u8) -> Self {
        debug_assert!((1..=9).contains(&value));
        Self(1 << (value - 1))
    }

    pub fn contains(self, value: u8) -> bool {
        (1..=9).contains(&value) && self.0 & (1 << (value - 1)) != 0
    }

    /// Remove a value; true if it was present
    pub fn remove(&mut self, value: u8) -> bool {
        let present = self.contains(value);
        if present {
            self.0 &= !(1 << (value - 1));
        }
        present
    }

    pub fn insert(&mut self, value: u8) {
        debug_assert!((1..=9).contains(&value));
        self.0 |= 1 << (value - 1);
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn is_singleton(self) -> bool {
        self.0.count_ones() == 1
    }

    /// The single remaining value, if the set has collapsed to one
    pub fn sole_value(self) -> Option<u8> {
        if self.is_singleton() {
            Some(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Iterate the remaining values in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1..=9).filter(move |&v| self.contains(v))
    }
}

/// Domain map: one candidate set per cell, indexed by `Cell::index()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domains {
    sets: [CandidateSet; 81],
}

impl Domains {
    /// Initialize domains from a grid: full sets for placeholders,
    /// singletons for given values.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut sets = [CandidateSet::full(); 81];
        for cell in Cell::all() {
            let value = grid.get(cell);
            if value != PLACEHOLDER {
                sets[cell.index()] = CandidateSet::singleton(value);
            }
        }
        Self { sets }
    }

    pub fn get(&self, cell: Cell) -> CandidateSet {
        self.sets[cell.index()]
    }

    pub fn set(&mut self, cell: Cell, candidates: CandidateSet) {
        self.sets[cell.index()] = candidates;
    }

    /// Remove a candidate from a cell's set; true if it was present
    pub fn remove(&mut self, cell: Cell, value: u8) -> bool {
        self.sets[cell.index()].remove(value)
    }

    /// Cells whose domain has not collapsed to a single value
    pub fn open_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&c| self.get(c).len() > 1).collect()
    }

    /// True if any cell's domain has been emptied
    pub fn has_contradiction(&self) -> bool {
        self.sets.iter().any(|s| s.is_empty())
    }

    /// Extract a solved grid once every domain is a singleton
    pub fn solved_grid(&self) -> Option<Grid> {
        let mut grid = Grid::new();
        for cell in Cell::all() {
            let value = self.get(cell).sole_value()?;
            // value came out of a candidate set, always in range
            let _ = grid.set(cell, value);
        }
        Some(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::io::parse_puzzle_line;

    #[test]
    fn test_candidate_set_basics() {
        let mut set = CandidateSet::full();
        assert_eq!(set.len(), 9);
        assert!(set.contains(1) && set.contains(9));

        assert!(set.remove(5));
        assert!(!set.remove(5));
        assert_eq!(set.len(), 8);
        assert!(!set.contains(5));

        set.insert(5);
        assert_eq!(set, CandidateSet::full());
    }

    #[test]
    fn test_singleton_and_sole_value() {
        let set = CandidateSet::singleton(7);
        assert!(set.is_singleton());
        assert_eq!(set.sole_value(), Some(7));
        assert_eq!(CandidateSet::full().sole_value(), None);
        assert_eq!(CandidateSet::EMPTY.sole_value(), None);
    }

    #[test]
    fn test_emptying_a_set() {
        let mut set = CandidateSet::singleton(3);
        assert!(set.remove(3));
        assert!(set.is_empty());
        assert_eq!(set, CandidateSet::EMPTY);
    }

    #[test]
    fn test_iter_ascending() {
        let mut set = CandidateSet::EMPTY;
        set.insert(9);
        set.insert(2);
        set.insert(4);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 4, 9]);
    }

    #[test]
    fn test_domains_from_grid() {
        let grid = parse_puzzle_line(
            "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
        )
        .unwrap();
        let domains = Domains::from_grid(&grid);

        assert_eq!(domains.get(Cell::new(1, 3)), CandidateSet::singleton(3));
        assert_eq!(domains.get(Cell::new(1, 1)), CandidateSet::full());
        assert_eq!(domains.open_cells().len(), grid.placeholder_count());
        assert!(!domains.has_contradiction());
        assert!(domains.solved_grid().is_none());
    }

    #[test]
    fn test_solved_grid_extraction() {
        let solved = parse_puzzle_line(
            "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
        )
        .unwrap();
        let domains = Domains::from_grid(&solved);
        assert_eq!(domains.solved_grid(), Some(solved));
    }
}
