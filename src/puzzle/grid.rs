//! Cell positions and the placeholder-aware puzzle grid

use anyhow::Result;
use std::fmt;

/// Value used for cells that have not been filled in yet
pub const PLACEHOLDER: u8 = 0;

/// A cell position on the 9x9 board, with 1-based row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Create a cell position. Row and column must be in `1..=9`.
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((1..=9).contains(&row) && (1..=9).contains(&col));
        Self { row, col }
    }

    /// Reconstruct a cell from its row-major index in `0..81`
    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < 81);
        Self {
            row: (index / 9) as u8 + 1,
            col: (index % 9) as u8 + 1,
        }
    }

    pub fn row(self) -> u8 {
        self.row
    }

    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into flat 81-element storage
    #[inline]
    pub fn index(self) -> usize {
        (self.row as usize - 1) * 9 + (self.col as usize - 1)
    }

    /// Index of the 3x3 box containing this cell, in `0..9` row-major
    pub fn box_index(self) -> usize {
        ((self.row as usize - 1) / 3) * 3 + (self.col as usize - 1) / 3
    }

    /// Iterate over all 81 cell positions in row-major order
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..81).map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 9x9 Sudoku grid with `0` marking placeholder cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    values: [u8; 81],
}

impl Grid {
    /// Create an empty grid (all placeholders)
    pub fn new() -> Self {
        Self { values: [PLACEHOLDER; 81] }
    }

    /// Get the value at a cell; `0` denotes a placeholder
    pub fn get(&self, cell: Cell) -> u8 {
        self.values[cell.index()]
    }

    /// Set the value at a cell
    pub fn set(&mut self, cell: Cell, value: u8) -> Result<()> {
        if value > 9 {
            anyhow::bail!("Value {} out of range for cell {}; expected 0-9", value, cell);
        }
        self.values[cell.index()] = value;
        Ok(())
    }

    /// True if the cell holds a given or solved value rather than a placeholder
    pub fn is_filled(&self, cell: Cell) -> bool {
        self.get(cell) != PLACEHOLDER
    }

    /// True if no placeholder cells remain
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|&v| v != PLACEHOLDER)
    }

    /// Count of placeholder cells
    pub fn placeholder_count(&self) -> usize {
        self.values.iter().filter(|&&v| v == PLACEHOLDER).count()
    }

    /// All cells carrying a filled-in value
    pub fn filled_cells(&self) -> Vec<Cell> {
        Cell::all().filter(|&cell| self.is_filled(cell)).collect()
    }

    /// Render the grid as an 81-character row-major digit line
    pub fn to_line(&self) -> String {
        self.values.iter().map(|v| char::from(b'0' + v)).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=9 {
            for col in 1..=9 {
                let value = self.get(Cell::new(row, col));
                if value == PLACEHOLDER {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", value)?;
                }
                if col < 9 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index_round_trip() {
        for index in 0..81 {
            assert_eq!(Cell::from_index(index).index(), index);
        }
        assert_eq!(Cell::new(1, 1).index(), 0);
        assert_eq!(Cell::new(9, 9).index(), 80);
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Cell::new(1, 1).box_index(), 0);
        assert_eq!(Cell::new(3, 3).box_index(), 0);
        assert_eq!(Cell::new(1, 4).box_index(), 1);
        assert_eq!(Cell::new(5, 5).box_index(), 4);
        assert_eq!(Cell::new(9, 9).box_index(), 8);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new();
        assert!(!grid.is_complete());
        assert_eq!(grid.placeholder_count(), 81);
        assert!(grid.filled_cells().is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new();
        let cell = Cell::new(4, 7);
        grid.set(cell, 5).unwrap();
        assert_eq!(grid.get(cell), 5);
        assert!(grid.is_filled(cell));
        assert_eq!(grid.placeholder_count(), 80);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut grid = Grid::new();
        assert!(grid.set(Cell::new(1, 1), 10).is_err());
    }

    #[test]
    fn test_to_line() {
        let mut grid = Grid::new();
        grid.set(Cell::new(1, 3), 3).unwrap();
        grid.set(Cell::new(9, 7), 3).unwrap();
        let line = grid.to_line();
        assert_eq!(line.len(), 81);
        assert_eq!(&line[0..3], "003");
        assert_eq!(line.chars().nth(78), Some('3'));
    }
}
