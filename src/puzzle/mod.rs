//! Puzzle representation, batch management and I/O

pub mod batch;
pub mod grid;
pub mod io;
pub mod validator;

pub use batch::PuzzleBatch;
pub use grid::{Cell, Grid, PLACEHOLDER};
pub use io::{create_example_puzzles, load_puzzles_from_file, save_puzzles_to_file, PuzzleParseError};
pub use validator::{SolutionValidator, ValidationResult};
