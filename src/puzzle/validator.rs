//! Validation of solved Sudoku grids

use super::{Cell, Grid};
use itertools::Itertools;
use std::fmt;

/// Checks solved grids against the all-different rules and the original givens
pub struct SolutionValidator;

/// Result of validating a solved grid
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self { is_valid: true, error_message: None }
    }

    fn invalid(message: String) -> Self {
        Self { is_valid: false, error_message: Some(message) }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            write!(f, "Solution is valid")
        } else {
            write!(
                f,
                "Solution is invalid: {}",
                self.error_message.as_deref().unwrap_or("unknown error")
            )
        }
    }
}

impl SolutionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a solved grid against the puzzle it came from
    pub fn validate(&self, puzzle: &Grid, solution: &Grid) -> ValidationResult {
        if !solution.is_complete() {
            return ValidationResult::invalid(format!(
                "{} cells are still unfilled",
                solution.placeholder_count()
            ));
        }

        // Every given of the original puzzle must survive unchanged
        for cell in puzzle.filled_cells() {
            if puzzle.get(cell) != solution.get(cell) {
                return ValidationResult::invalid(format!(
                    "Given value {} at {} was changed to {}",
                    puzzle.get(cell),
                    cell,
                    solution.get(cell)
                ));
            }
        }

        self.check_units(solution)
    }

    /// Check that every row, column and box holds nine distinct values
    pub fn check_units(&self, solution: &Grid) -> ValidationResult {
        for unit in 1..=9u8 {
            let row = (1..=9).map(|col| Cell::new(unit, col));
            if !row.map(|c| solution.get(c)).all_unique() {
                return ValidationResult::invalid(format!("Row {} contains a duplicate", unit));
            }

            let col = (1..=9).map(|row| Cell::new(row, unit));
            if !col.map(|c| solution.get(c)).all_unique() {
                return ValidationResult::invalid(format!("Column {} contains a duplicate", unit));
            }

            let boxed = Cell::all().filter(|c| c.box_index() == unit as usize - 1);
            if !boxed.map(|c| solution.get(c)).all_unique() {
                return ValidationResult::invalid(format!("Box {} contains a duplicate", unit));
            }
        }
        ValidationResult::ok()
    }
}

impl Default for SolutionValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::io::parse_puzzle_line;

    const PUZZLE: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const SOLUTION: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    #[test]
    fn test_valid_solution() {
        let puzzle = parse_puzzle_line(PUZZLE).unwrap();
        let solution = parse_puzzle_line(SOLUTION).unwrap();
        let result = SolutionValidator::new().validate(&puzzle, &solution);
        assert!(result.is_valid, "{}", result);
    }

    #[test]
    fn test_incomplete_solution_rejected() {
        let puzzle = parse_puzzle_line(PUZZLE).unwrap();
        let result = SolutionValidator::new().validate(&puzzle, &puzzle);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_changed_given_rejected() {
        let puzzle = parse_puzzle_line(PUZZLE).unwrap();
        let mut tampered = parse_puzzle_line(SOLUTION).unwrap();
        // (1, 3) is a given: swap it with another value
        tampered.set(Cell::new(1, 3), 4).unwrap();
        tampered.set(Cell::new(1, 1), 3).unwrap();
        let result = SolutionValidator::new().validate(&puzzle, &tampered);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("Given value"));
    }

    #[test]
    fn test_duplicate_in_row_rejected() {
        let mut solution = parse_puzzle_line(SOLUTION).unwrap();
        solution.set(Cell::new(1, 1), solution.get(Cell::new(1, 9))).unwrap();
        let result = SolutionValidator::new().check_units(&solution);
        assert!(!result.is_valid);
        assert!(result.error_message.unwrap().contains("Row 1"));
    }
}
