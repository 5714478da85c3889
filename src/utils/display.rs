//! Display and output formatting utilities

use crate::grid::{Cell, Grid};
use crate::sat::VariableStatistics;
use anyhow::Result;
use serde::Serialize;

/// Format solved grids for display
pub struct SolutionFormatter;

/// JSON shape of a single solution
#[derive(Debug, Serialize)]
struct SolutionRecord<'a> {
    index: usize,
    compact: String,
    rows: &'a Grid,
}

/// JSON shape of a whole solve run
#[derive(Debug, Serialize)]
struct SolveReport<'a> {
    input: &'a Grid,
    solutions: Vec<SolutionRecord<'a>>,
    exhausted: bool,
}

impl SolutionFormatter {
    /// Format a single solution for console output
    pub fn format_solution(index: usize, grid: &Grid) -> String {
        let mut output = String::new();
        output.push_str(&format!("=== Solution {} ===\n", index));
        output.push_str(&Self::format_grid_compact(grid));
        output
    }

    /// Format a grid with one row per line, blocks drawn as shaded cells
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in 0..grid.row_count() {
            for column in 0..grid.column_count() {
                output.push(Self::glyph(grid.cell(row, column)));
            }
            output.push('\n');
        }
        output
    }

    /// Render the input grid and its solutions as a JSON document.
    ///
    /// `exhausted` tells whether the stream ended before the requested count.
    pub fn format_json(input: &Grid, solutions: &[Grid], exhausted: bool) -> Result<String> {
        let report = SolveReport {
            input,
            solutions: solutions
                .iter()
                .enumerate()
                .map(|(i, grid)| SolutionRecord {
                    index: i + 1,
                    compact: grid.to_compact_string(),
                    rows: grid,
                })
                .collect(),
            exhausted,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    /// Summary of the encoding size, shown in verbose mode
    pub fn format_statistics(statistics: &VariableStatistics, clause_count: usize) -> String {
        format!("{}  Clauses: {}\n", statistics, clause_count)
    }

    fn glyph(cell: Cell) -> char {
        match cell {
            Cell::Letter(letter) => letter,
            Cell::Empty => '·',
            Cell::Block => '█',
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
