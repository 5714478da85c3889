//! Solver contract and lazy model enumeration

use super::configurer::{literal, Configurer, Literal, Variable};
use std::fmt;
use std::iter::FusedIterator;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error("SAT backend failure: {0}")]
    Backend(String),
}

/// Counters collected across solve calls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolverStatistics {
    pub variable_count: usize,
    pub clause_count: usize,
    pub solve_calls: usize,
    pub solve_time: Duration,
}

impl fmt::Display for SolverStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solver Statistics:")?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Clauses: {}", self.clause_count)?;
        writeln!(f, "  Solve calls: {}", self.solve_calls)?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        Ok(())
    }
}

/// A satisfying assignment, restricted to the reported variables.
///
/// Values are stored as literals, in the order the variables were declared
/// relevant (or `1..=n` when no declaration was made).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    literals: Vec<Literal>,
}

impl Model {
    pub fn from_literals(literals: Vec<Literal>) -> Self {
        Self { literals }
    }

    /// Model over variables `1..=values.len()`
    pub fn from_values(values: &[bool]) -> Self {
        let literals: Vec<Literal> = values
            .iter()
            .zip(1..)
            .map(|(&value, variable)| if value { variable } else { -variable })
            .collect();
        Self { literals }
    }

    /// Value of the `index`-th reported variable
    pub fn value(&self, index: usize) -> bool {
        self.literals[index] > 0
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Clause forbidding this exact assignment
    pub fn blocking_clause(&self) -> Vec<Literal> {
        self.literals.iter().map(|&lit| -lit).collect()
    }
}

/// A SAT backend.
///
/// Implementors provide a single decision call over the clauses added so far;
/// enumeration of further models is built on top of it by [`Solutions`].
pub trait Solver: Configurer {
    /// Decides the current clause set. `Ok(None)` means unsatisfiable.
    fn solve(&mut self) -> Result<Option<Model>, SolverError>;

    /// Forbids the given model from being found again.
    fn block(&mut self, model: &Model) {
        self.add_clause(&model.blocking_clause());
    }

    /// Lazily enumerates distinct models, one SAT call per pull.
    fn solutions(self) -> Solutions<Self>
    where
        Self: Sized,
    {
        Solutions::new(self)
    }
}

/// Iterator over the models of a solver.
///
/// Each `next` blocks the previously returned model, then solves again.
/// Dropping the iterator drops the solver and its resources.
pub struct Solutions<S: Solver> {
    solver: S,
    last: Option<Model>,
    exhausted: bool,
}

impl<S: Solver> Solutions<S> {
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            last: None,
            exhausted: false,
        }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }
}

impl<S: Solver> Iterator for Solutions<S> {
    type Item = Result<Model, SolverError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if let Some(previous) = self.last.take() {
            self.solver.block(&previous);
        }
        match self.solver.solve() {
            Ok(Some(model)) => {
                self.last = Some(model.clone());
                Some(Ok(model))
            }
            Ok(None) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                self.exhausted = true;
                Some(Err(e))
            }
        }
    }
}

impl<S: Solver> FusedIterator for Solutions<S> {}

/// Builds a model from a backend's per-variable values.
///
/// `max_variable` bounds the variables the backend knows about; anything
/// above it was never constrained and reads as false.
pub(crate) fn extract_model(
    relevant: Option<&[Variable]>,
    max_variable: Variable,
    value: impl Fn(Variable) -> bool,
) -> Model {
    let read = |variable: Variable| {
        let lit = literal(variable);
        if variable <= max_variable && value(variable) {
            lit
        } else {
            -lit
        }
    };
    let literals = match relevant {
        Some(variables) => variables.iter().map(|&variable| read(variable)).collect(),
        None => (1..=max_variable).map(read).collect(),
    };
    Model::from_literals(literals)
}
