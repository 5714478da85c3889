//! In-memory clause sink with DIMACS CNF export

use super::configurer::{variable_of, Configurer, Literal, Variable};
use std::io::{self, Write};

/// Records every primitive clause it receives.
#[derive(Debug, Clone, Default)]
pub struct ClauseRecorder {
    clauses: Vec<Vec<Literal>>,
    allocated: usize,
    relevant_variables: Vec<Variable>,
}

impl ClauseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }

    pub fn relevant_variables(&self) -> &[Variable] {
        &self.relevant_variables
    }

    /// Declared variable count, or the highest variable seen if larger
    pub fn variable_count(&self) -> usize {
        let highest = self
            .clauses
            .iter()
            .flatten()
            .map(|&lit| variable_of(lit) as usize)
            .max()
            .unwrap_or(0);
        highest.max(self.allocated)
    }

    /// Write the recorded problem in DIMACS CNF format
    pub fn write_dimacs<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "p cnf {} {}", self.variable_count(), self.clauses.len())?;
        for clause in &self.clauses {
            for lit in clause {
                write!(writer, "{} ", lit)?;
            }
            writeln!(writer, "0")?;
        }
        writer.flush()
    }
}

impl Configurer for ClauseRecorder {
    fn add_clause(&mut self, literals: &[Literal]) {
        self.clauses.push(literals.to_vec());
    }

    fn allocate_variables(&mut self, count: usize) {
        self.allocated = count;
    }

    fn set_relevant_variables(&mut self, variables: &[Variable]) {
        self.relevant_variables = variables.to_vec();
    }
}
