//! Stream of solved crossword grids

use crate::grid::Grid;
use crate::sat::{Solutions, Solver, SolverError, Variables};
use std::iter::FusedIterator;

/// Lazily solved grids; each pull runs one SAT call.
///
/// Grids are distinct. Their order depends on the backend.
pub struct CrosswordSolutions<'a, S: Solver> {
    variables: &'a Variables,
    models: Solutions<S>,
}

impl<'a, S: Solver> CrosswordSolutions<'a, S> {
    pub(crate) fn new(variables: &'a Variables, models: Solutions<S>) -> Self {
        Self { variables, models }
    }

    /// The backend driving this stream
    pub fn solver(&self) -> &S {
        self.models.solver()
    }
}

impl<S: Solver> Iterator for CrosswordSolutions<'_, S> {
    type Item = Result<Grid, SolverError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.models
            .next()
            .map(|model| model.map(|model| self.variables.decode(&model)))
    }
}

impl<S: Solver> FusedIterator for CrosswordSolutions<'_, S> {}
