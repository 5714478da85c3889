//! SAT backend using CaDiCaL

use super::configurer::{variable_of, Configurer, Literal, Variable};
use super::solver::{extract_model, Model, Solver, SolverError, SolverStatistics};
use std::time::Instant;

/// SAT solver wrapper for CaDiCaL
pub struct CadicalSolver {
    solver: cadical::Solver,
    relevant_variables: Option<Vec<Variable>>,
    variable_count: Variable,
    clause_count: usize,
    statistics: SolverStatistics,
}

impl CadicalSolver {
    pub fn new() -> Self {
        Self {
            solver: cadical::Solver::new(),
            relevant_variables: None,
            variable_count: 0,
            clause_count: 0,
            statistics: SolverStatistics::default(),
        }
    }

    /// Highest variable referenced by a clause so far
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

impl Default for CadicalSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Configurer for CadicalSolver {
    fn add_clause(&mut self, literals: &[Literal]) {
        for &lit in literals {
            self.variable_count = self.variable_count.max(variable_of(lit));
        }
        self.solver.add_clause(literals.iter().copied());
        self.clause_count += 1;
    }

    fn allocate_variables(&mut self, count: usize) {
        log::trace!("cadical: expecting {} variables", count);
    }

    fn set_relevant_variables(&mut self, variables: &[Variable]) {
        self.relevant_variables = Some(variables.to_vec());
    }
}

impl Solver for CadicalSolver {
    fn solve(&mut self) -> Result<Option<Model>, SolverError> {
        let start_time = Instant::now();
        let result = self.solver.solve();
        self.statistics.solve_calls += 1;
        self.statistics.solve_time += start_time.elapsed();
        log::trace!(
            "cadical: solve #{} returned {:?} in {:.3}s",
            self.statistics.solve_calls,
            result,
            start_time.elapsed().as_secs_f64()
        );

        match result {
            Some(true) => {
                let solver = &self.solver;
                Ok(Some(extract_model(
                    self.relevant_variables.as_deref(),
                    self.variable_count,
                    |variable| solver.value(variable as i32).unwrap_or(false),
                )))
            }
            Some(false) => Ok(None),
            None => Err(SolverError::Backend(
                "CaDiCaL returned an unknown result".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_creation() {
        let solver = CadicalSolver::new();
        assert_eq!(solver.variable_count(), 0);
        assert_eq!(solver.clause_count(), 0);
    }

    #[test]
    fn test_simple_satisfiable() {
        let mut solver = CadicalSolver::new();
        // (x1 ∨ x2) ∧ (¬x1 ∨ x2)
        solver.add_clause(&[1, 2]);
        solver.add_clause(&[-1, 2]);

        let model = solver.solve().unwrap().unwrap();
        assert_eq!(model.len(), 2);
        assert!(model.value(1));
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = CadicalSolver::new();
        solver.add_clause(&[1]);
        solver.add_clause(&[-1]);
        assert!(solver.solve().unwrap().is_none());
        assert_eq!(solver.statistics().solve_calls, 1);
    }

    #[test]
    fn test_relevant_variables_order() {
        let mut solver = CadicalSolver::new();
        solver.add_clause(&[3]);
        solver.add_clause(&[-1]);
        solver.add_clause(&[2, 1]);
        solver.set_relevant_variables(&[3, 1]);

        let model = solver.solve().unwrap().unwrap();
        assert_eq!(model.literals(), &[3, -1]);
    }

    #[test]
    fn test_enumerates_all_models() {
        let mut solver = CadicalSolver::new();
        solver.add_clause(&[1, 2]);
        let mut models: Vec<_> = solver
            .solutions()
            .map(|model| model.unwrap().literals().to_vec())
            .collect();
        models.sort();
        assert_eq!(models, vec![vec![-1, 2], vec![1, -2], vec![1, 2]]);
    }

    #[test]
    fn test_variable_count_tracking() {
        let mut solver = CadicalSolver::new();
        solver.add_clause(&[1, -5, 3]);
        assert_eq!(solver.variable_count(), 5);
        solver.add_clause(&[2, -7]);
        assert_eq!(solver.variable_count(), 7);
        assert_eq!(solver.statistics().clause_count, 2);
        assert_eq!(solver.statistics().variable_count, 7);
    }
}
