//! File I/O for Sudoku puzzle batches
//!
//! Puzzle files hold one puzzle per line: exactly 81 digit characters in
//! row-major order, with '0' marking an unfilled cell.

use super::{Cell, Grid};
use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

/// Errors produced while parsing puzzle text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleParseError {
    #[error("puzzle line has {0} characters, expected 81")]
    WrongLength(usize),

    #[error("invalid character '{ch}' at position {index}; only digits 0-9 are allowed")]
    InvalidCharacter { ch: char, index: usize },

    #[error("puzzle file contains no puzzles")]
    EmptyFile,
}

/// Parse a single 81-character puzzle line into a grid
pub fn parse_puzzle_line(line: &str) -> Result<Grid, PuzzleParseError> {
    let line = line.trim();
    if line.chars().count() != 81 {
        return Err(PuzzleParseError::WrongLength(line.chars().count()));
    }

    let mut grid = Grid::new();
    for (index, ch) in line.chars().enumerate() {
        let digit = ch
            .to_digit(10)
            .ok_or(PuzzleParseError::InvalidCharacter { ch, index })?;
        // set() cannot fail for a decimal digit
        let _ = grid.set(Cell::from_index(index), digit as u8);
    }
    Ok(grid)
}

/// Parse every non-empty line of a puzzle file's contents
pub fn parse_puzzles(content: &str) -> Result<Vec<Grid>, PuzzleParseError> {
    let puzzles = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_puzzle_line)
        .collect::<Result<Vec<_>, _>>()?;

    if puzzles.is_empty() {
        return Err(PuzzleParseError::EmptyFile);
    }
    Ok(puzzles)
}

/// Load a batch of puzzles from a file
pub fn load_puzzles_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Grid>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read puzzle file: {}", path.as_ref().display()))?;

    parse_puzzles(&content)
        .with_context(|| format!("Failed to parse puzzle file: {}", path.as_ref().display()))
}

/// Write a batch of grids to a file, one 81-character line each
pub fn save_puzzles_to_file<P: AsRef<Path>>(grids: &[Grid], path: P) -> Result<()> {
    let content: String = grids.iter().map(|g| g.to_line() + "\n").collect();

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write puzzle file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create an example puzzle file for the `setup` command
pub fn create_example_puzzles<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // A classic unique-solution puzzle followed by an easy one that
    // constraint propagation alone can finish.
    let content = "\
003020600900305001001806400008102900700000008006708200002609500800203009005010300
000260701680070090190004500820100040004602900050003028009300074040050036703018000
";
    std::fs::write(dir.join("puzzles.txt"), content)
        .context("Failed to write puzzles.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const EXAMPLE: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";

    #[test]
    fn test_parse_puzzle_line() {
        let grid = parse_puzzle_line(EXAMPLE).unwrap();
        assert_eq!(grid.get(Cell::new(1, 3)), 3);
        assert_eq!(grid.get(Cell::new(1, 1)), 0);
        assert_eq!(grid.get(Cell::new(2, 1)), 9);
        assert_eq!(grid.to_line(), EXAMPLE);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert_eq!(
            parse_puzzle_line("12345"),
            Err(PuzzleParseError::WrongLength(5))
        );
    }

    #[test]
    fn test_parse_rejects_invalid_character() {
        let mut bad = EXAMPLE.to_string();
        bad.replace_range(40..41, "x");
        assert_eq!(
            parse_puzzle_line(&bad),
            Err(PuzzleParseError::InvalidCharacter { ch: 'x', index: 40 })
        );
    }

    #[test]
    fn test_parse_puzzles_skips_blank_lines() {
        let content = format!("\n{}\n\n{}\n", EXAMPLE, EXAMPLE);
        let puzzles = parse_puzzles(&content).unwrap();
        assert_eq!(puzzles.len(), 2);
    }

    #[test]
    fn test_parse_puzzles_rejects_empty_input() {
        assert_eq!(parse_puzzles("\n\n"), Err(PuzzleParseError::EmptyFile));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("puzzles.txt");

        let original = vec![parse_puzzle_line(EXAMPLE).unwrap()];
        save_puzzles_to_file(&original, &path).unwrap();
        let loaded = load_puzzles_from_file(&path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_create_example_puzzles() {
        let temp_dir = tempdir().unwrap();
        create_example_puzzles(temp_dir.path()).unwrap();

        let puzzles = load_puzzles_from_file(temp_dir.path().join("puzzles.txt")).unwrap();
        assert_eq!(puzzles.len(), 2);
        assert_eq!(puzzles[0].to_line(), EXAMPLE);
    }
}
