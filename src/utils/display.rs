//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::puzzle::{Cell, Grid};
use crate::solver::{Domains, SolveReport};
use anyhow::{Context, Result};
use itertools::Itertools;
use serde::Serialize;
use std::path::Path;

/// Format puzzles, domains and batch results for output
pub struct PuzzleFormatter;

impl PuzzleFormatter {
    /// Format a grid with 3x3 box separators
    pub fn format_grid(grid: &Grid) -> String {
        let mut output = String::new();

        for row in 1..=9u8 {
            if row != 1 && row % 3 == 1 {
                output.push_str("------+-------+------\n");
            }
            for col in 1..=9u8 {
                if col != 1 && col % 3 == 1 {
                    output.push_str("| ");
                }
                let value = grid.get(Cell::new(row, col));
                if value == 0 {
                    output.push_str(". ");
                } else {
                    output.push_str(&format!("{} ", value));
                }
            }
            output.pop();
            output.push('\n');
        }
        output
    }

    /// Summarize how far propagation narrowed a domain map
    pub fn format_domain_summary(domains: &Domains) -> String {
        let open = domains.open_cells();
        let candidates: usize = open.iter().map(|&c| domains.get(c).len()).sum();

        if open.is_empty() {
            "All domains collapsed to singletons".to_string()
        } else {
            format!(
                "{} open cells, {} candidates remaining (narrowest: {})",
                open.len(),
                candidates,
                open.iter().map(|&c| domains.get(c).len()).min().unwrap_or(0)
            )
        }
    }

    /// Format one report for console output
    pub fn format_report(report: &SolveReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "=== Puzzle {} — {} ({:.3}s) ===\n",
            report.puzzle_index + 1,
            report.outcome.status(),
            report.solve_time.as_secs_f64()
        ));
        match report.outcome.solution() {
            Some(solution) => output.push_str(&Self::format_grid(solution)),
            None => output.push_str(&Self::format_grid(&report.puzzle)),
        }
        output
    }

    /// Format a batch of reports as a summary table
    pub fn format_summary(reports: &[SolveReport]) -> String {
        let mut output = String::new();

        output.push_str("Puzzle | Outcome            | Time(ms)\n");
        output.push_str("-------|--------------------|---------\n");
        for report in reports {
            output.push_str(&format!(
                "{:6} | {:18} | {:8}\n",
                report.puzzle_index + 1,
                report.outcome.status(),
                report.solve_time.as_millis()
            ));
        }

        let solved = reports.iter().filter(|r| r.outcome.is_unique()).count();
        output.push_str(&format!("\nSolved {} of {} puzzles\n", solved, reports.len()));
        output
    }

    /// Save reports to a file in the configured format
    pub fn save_reports<P: AsRef<Path>>(
        reports: &[SolveReport],
        path: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let content = match format {
            OutputFormat::Text => reports
                .iter()
                .map(|r| match r.outcome.solution() {
                    Some(solution) => solution.to_line(),
                    None => format!("# puzzle {}: {}", r.puzzle_index + 1, r.outcome.status()),
                })
                .join("\n")
                + "\n",
            OutputFormat::Json => {
                let records: Vec<ReportRecord> = reports.iter().map(ReportRecord::from).collect();
                serde_json::to_string_pretty(&records)
                    .context("Failed to serialize reports to JSON")?
            }
        };

        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write output file: {}", path.as_ref().display()))?;

        Ok(())
    }
}

/// Serialized form of a solve report
#[derive(Debug, Serialize)]
struct ReportRecord {
    puzzle: usize,
    status: String,
    input: String,
    solution: Option<String>,
    solve_time_ms: u64,
}

impl From<&SolveReport> for ReportRecord {
    fn from(report: &SolveReport) -> Self {
        Self {
            puzzle: report.puzzle_index + 1,
            status: report.outcome.status().to_string(),
            input: report.puzzle.to_line(),
            solution: report.outcome.solution().map(Grid::to_line),
            solve_time_ms: report.solve_time.as_millis() as u64,
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
