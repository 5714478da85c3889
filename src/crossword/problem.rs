//! Crossword problem definition

use super::CrosswordSolutions;
use crate::grid::{Grid, GridError};
use crate::sat::variables::MAX_VARIABLE;
use crate::sat::{
    CadicalSolver, Configurer, Constraints, EncodingError, Solver, SolverError, Variables,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrosswordError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error("problem needs {0} variables, more than a solver literal can address")]
    TooManyVariables(usize),
}

/// A grid to fill and the words it may be filled with
#[derive(Debug, Clone)]
pub struct Crossword {
    grid: Grid,
    words: Vec<String>,
    variables: Variables,
}

impl Crossword {
    /// Create a crossword from raw cell symbols
    pub fn new(cells: Vec<Vec<char>>, words: Vec<String>) -> Result<Self, CrosswordError> {
        Self::with_grid(Grid::new(cells)?, words)
    }

    /// Create a crossword from the comma-separated grid notation
    pub fn parse(grid: &str, words: Vec<String>) -> Result<Self, CrosswordError> {
        Self::with_grid(Grid::parse(grid)?, words)
    }

    /// Create a crossword from an already validated grid
    pub fn with_grid(grid: Grid, words: Vec<String>) -> Result<Self, CrosswordError> {
        let variables = Variables::new(&grid, words.len());
        if variables.count() > MAX_VARIABLE {
            return Err(CrosswordError::TooManyVariables(variables.count()));
        }
        Ok(Self {
            grid,
            words,
            variables,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Add the whole problem to a solver configurer.
    ///
    /// Only cell variables are declared relevant; slot variables are
    /// internal to the encoding.
    pub fn configure<C: Configurer + ?Sized>(&self, configurer: &mut C) -> Result<(), EncodingError> {
        configurer.allocate_variables(self.variables.count());
        configurer.set_relevant_variables(&self.variables.cells());

        Constraints::new(&self.grid, &self.variables, &self.words).add_all_to(configurer)?;

        log::debug!(
            "Encoded {}x{} grid with {} slots and {} words into {} variables",
            self.grid.row_count(),
            self.grid.column_count(),
            self.grid.slot_count(),
            self.words.len(),
            self.variables.count()
        );
        Ok(())
    }

    /// Solve with the default backend
    pub fn solve(&self) -> Result<CrosswordSolutions<'_, CadicalSolver>, CrosswordError> {
        self.solve_with(CadicalSolver::new())
    }

    /// Solve with the given backend, which the solution stream takes over
    pub fn solve_with<S: Solver>(&self, mut solver: S) -> Result<CrosswordSolutions<'_, S>, CrosswordError> {
        self.configure(&mut solver)?;
        Ok(CrosswordSolutions::new(&self.variables, solver.solutions()))
    }
}
