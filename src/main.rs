//! Main CLI application for the Sudoku CSP solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use sudoku_csp::{
    config::{CliOverrides, OutputFormat, Settings, SolverMethod},
    puzzle::{create_example_puzzles, load_puzzles_from_file, SolutionValidator},
    utils::{ColorOutput, PuzzleFormatter},
};

#[derive(Parser)]
#[command(name = "sudoku_csp")]
#[command(about = "Sudoku solver using AC-3 propagation and backtracking search")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a batch of puzzles
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Solving method (overrides config)
        #[arg(short, long)]
        method: Option<SolverMethod>,

        /// Puzzle file (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Print each solved grid, not just the summary
        #[arg(long)]
        show_grids: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and puzzle files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Validate solved grids against the puzzles they came from
    Validate {
        /// File of original puzzles, one 81-character line each
        #[arg(short, long)]
        puzzles: PathBuf,

        /// File of solved grids, in the same order
        #[arg(short, long)]
        solutions: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            method,
            input,
            output,
            format,
            show_grids,
            verbose,
        } => solve_command(config, method, input, output, format, show_grids, verbose),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Validate { puzzles, solutions } => validate_command(puzzles, solutions),
    }
}

fn solve_command(
    config_path: PathBuf,
    method: Option<SolverMethod>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    show_grids: bool,
    verbose: bool,
) -> Result<()> {
    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        method,
        format,
        puzzle_file: input,
        output_file: output,
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Method: {:?}", settings.solver.method);
        println!("  Puzzle file: {}", settings.input.puzzle_file.display());
        println!("  Output file: {}", settings.output.output_file.display());
        println!();
    }

    settings.validate().context("Configuration validation failed")?;

    let start_time = Instant::now();
    let reports = sudoku_csp::solve_batch(&settings).context("Failed to solve puzzle batch")?;
    let total_time = start_time.elapsed();

    if show_grids || verbose {
        for report in &reports {
            println!("{}", PuzzleFormatter::format_report(report));
        }
    }
    println!("{}", PuzzleFormatter::format_summary(&reports));

    let solved = reports.iter().filter(|r| r.outcome.is_unique()).count();
    if solved == reports.len() {
        println!(
            "{}",
            ColorOutput::success(&format!(
                "All {} puzzle(s) solved in {:.3}s",
                reports.len(),
                total_time.as_secs_f64()
            ))
        );
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "{} of {} puzzle(s) left without a unique solution",
                reports.len() - solved,
                reports.len()
            ))
        );
    }

    PuzzleFormatter::save_reports(&reports, &settings.output.output_file, &settings.output.format)
        .context("Failed to save solutions")?;
    println!(
        "{}",
        ColorOutput::info(&format!(
            "Results written to {}",
            settings.output.output_file.display()
        ))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input");
    let output_dir = directory.join("output");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_puzzles(&input_dir).context("Failed to create example puzzles")?;
    println!("Created example puzzles in: {}", input_dir.display());

    println!("{}", ColorOutput::success("Setup complete"));
    println!("\nNext steps:");
    println!("1. Add your puzzles to {}", input_dir.join("puzzles.txt").display());
    println!("2. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn validate_command(puzzles_path: PathBuf, solutions_path: PathBuf) -> Result<()> {
    let puzzles = load_puzzles_from_file(&puzzles_path)
        .with_context(|| format!("Failed to load puzzles from {}", puzzles_path.display()))?;
    let solutions = load_puzzles_from_file(&solutions_path)
        .with_context(|| format!("Failed to load solutions from {}", solutions_path.display()))?;

    if puzzles.len() != solutions.len() {
        anyhow::bail!(
            "Puzzle count ({}) does not match solution count ({})",
            puzzles.len(),
            solutions.len()
        );
    }

    let validator = SolutionValidator::new();
    let mut failures = 0;
    for (index, (puzzle, solution)) in puzzles.iter().zip(&solutions).enumerate() {
        let result = validator.validate(puzzle, solution);
        if result.is_valid {
            println!("Puzzle {}: {}", index + 1, ColorOutput::success("valid"));
        } else {
            failures += 1;
            println!("Puzzle {}: {}", index + 1, ColorOutput::error(&result.to_string()));
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} solutions are invalid", failures, puzzles.len());
    }
    println!("{}", ColorOutput::success("All solutions are valid"));
    Ok(())
}
