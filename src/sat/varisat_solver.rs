//! SAT backend using Varisat

use super::configurer::{variable_of, Configurer, Literal, Variable};
use super::solver::{extract_model, Model, Solver, SolverError, SolverStatistics};
use std::time::Instant;
use varisat::{ExtendFormula, Lit};

/// SAT solver wrapper for Varisat
pub struct VarisatSolver {
    solver: varisat::Solver<'static>,
    relevant_variables: Option<Vec<Variable>>,
    variable_count: Variable,
    clause_count: usize,
    statistics: SolverStatistics,
    buffer: Vec<Lit>,
}

impl VarisatSolver {
    pub fn new() -> Self {
        Self {
            solver: varisat::Solver::new(),
            relevant_variables: None,
            variable_count: 0,
            clause_count: 0,
            statistics: SolverStatistics::default(),
            buffer: Vec::new(),
        }
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count as usize
    }

    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    pub fn statistics(&self) -> SolverStatistics {
        SolverStatistics {
            variable_count: self.variable_count(),
            clause_count: self.clause_count,
            ..self.statistics.clone()
        }
    }
}

impl Default for VarisatSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurer for VarisatSolver {
    fn add_clause(&mut self, literals: &[Literal]) {
        self.buffer.clear();
        for &lit in literals {
            self.variable_count = self.variable_count.max(variable_of(lit));
            self.buffer.push(Lit::from_dimacs(lit as isize));
        }
        self.solver.add_clause(&self.buffer);
        self.clause_count += 1;
    }

    fn set_relevant_variables(&mut self, variables: &[Variable]) {
        self.relevant_variables = Some(variables.to_vec());
    }
}

impl Solver for VarisatSolver {
    fn solve(&mut self) -> Result<Option<Model>, SolverError> {
        let start_time = Instant::now();
        let result = self.solver.solve();
        self.statistics.solve_calls += 1;
        self.statistics.solve_time += start_time.elapsed();

        let satisfiable = result.map_err(|e| SolverError::Backend(e.to_string()))?;
        log::trace!(
            "varisat: solve #{} returned {} in {:.3}s",
            self.statistics.solve_calls,
            satisfiable,
            start_time.elapsed().as_secs_f64()
        );
        if !satisfiable {
            return Ok(None);
        }

        let assignment = self
            .solver
            .model()
            .ok_or_else(|| SolverError::Backend("Varisat reported SAT without a model".to_string()))?;
        let mut values = vec![false; self.variable_count as usize + 1];
        for lit in assignment {
            let variable = lit.var().to_dimacs() as usize;
            if variable < values.len() {
                values[variable] = lit.is_positive();
            }
        }

        Ok(Some(extract_model(
            self.relevant_variables.as_deref(),
            self.variable_count,
            |variable| values[variable as usize],
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_satisfiable() {
        let mut solver = VarisatSolver::new();
        solver.add_clause(&[1, 2]);
        solver.add_clause(&[-1, 2]);

        let model = solver.solve().unwrap().unwrap();
        assert!(model.value(1));
        assert_eq!(solver.clause_count(), 2);
        assert_eq!(solver.variable_count(), 2);
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = VarisatSolver::new();
        solver.add_clause(&[1]);
        solver.add_clause(&[-1]);
        assert!(solver.solve().unwrap().is_none());
        assert_eq!(solver.statistics().solve_calls, 1);
        assert_eq!(solver.statistics().clause_count, 2);
    }

    #[test]
    fn test_enumerates_relevant_models_only() {
        let mut solver = VarisatSolver::new();
        // x3 is free scaffolding; only x1 and x2 are reported.
        solver.add_clause(&[1, 2]);
        solver.add_clause(&[3, -3]);
        solver.set_relevant_variables(&[1, 2]);

        let mut models: Vec<_> = solver
            .solutions()
            .map(|model| model.unwrap().literals().to_vec())
            .collect();
        models.sort();
        assert_eq!(models, vec![vec![-1, 2], vec![1, -2], vec![1, 2]]);
    }
}
