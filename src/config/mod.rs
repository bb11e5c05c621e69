//! Configuration management for the Sudoku solver

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SolverConfig, SolverMethod,
};
