//! Crossword SAT Solver
//!
//! Fills crossword grids with words from a dictionary by compiling the
//! problem to CNF and enumerating SAT models.

pub mod config;
pub mod crossword;
pub mod dictionary;
pub mod grid;
pub mod sat;
pub mod utils;

pub use config::Settings;
pub use crossword::{Crossword, CrosswordError, CrosswordSolutions};
pub use dictionary::Dictionary;
pub use grid::{Grid, GridError};

use anyhow::{Context, Result};
use sat::AnySolver;

/// Solve `grid` with the dictionary and backend named in `settings`,
/// returning at most `settings.solver.max_solutions` grids.
pub fn solve(settings: &Settings, grid: &str) -> Result<Vec<Grid>> {
    let dictionary = Dictionary::from_file(&settings.dictionary.path)?;
    let crossword = Crossword::parse(grid, dictionary.into_words())
        .context("Failed to create crossword problem")?;

    let solutions = crossword
        .solve_with(AnySolver::new(settings.solver.backend))
        .context("Failed to encode crossword problem")?
        .take(settings.solver.max_solutions)
        .map(|solution| solution.context("Solver failed"))
        .collect::<Result<Vec<_>>>()?;
    Ok(solutions)
}
