//! Factory for creating SAT solver instances based on configuration

use super::cadical_solver::CadicalSolver;
use super::configurer::{Configurer, Literal, Variable};
use super::solver::{Model, Solver, SolverError, SolverStatistics};
use super::varisat_solver::VarisatSolver;
use crate::config::SolverBackend;

/// Solver dispatching to the backend chosen at runtime
pub enum AnySolver {
    Cadical(CadicalSolver),
    Varisat(VarisatSolver),
}

impl AnySolver {
    pub fn new(backend: SolverBackend) -> Self {
        match backend {
            SolverBackend::Cadical => AnySolver::Cadical(CadicalSolver::new()),
            SolverBackend::Varisat => AnySolver::Varisat(VarisatSolver::new()),
        }
    }

    pub fn backend(&self) -> SolverBackend {
        match self {
            AnySolver::Cadical(_) => SolverBackend::Cadical,
            AnySolver::Varisat(_) => SolverBackend::Varisat,
        }
    }

    pub fn variable_count(&self) -> usize {
        match self {
            AnySolver::Cadical(solver) => solver.variable_count(),
            AnySolver::Varisat(solver) => solver.variable_count(),
        }
    }

    pub fn clause_count(&self) -> usize {
        match self {
            AnySolver::Cadical(solver) => solver.clause_count(),
            AnySolver::Varisat(solver) => solver.clause_count(),
        }
    }

    pub fn statistics(&self) -> SolverStatistics {
        match self {
            AnySolver::Cadical(solver) => solver.statistics(),
            AnySolver::Varisat(solver) => solver.statistics(),
        }
    }
}

impl Default for AnySolver {
    fn default() -> Self {
        AnySolver::new(SolverBackend::default())
    }
}

// Every method is forwarded so backend overrides of the defaults still apply.
impl Configurer for AnySolver {
    fn add_clause(&mut self, literals: &[Literal]) {
        match self {
            AnySolver::Cadical(solver) => solver.add_clause(literals),
            AnySolver::Varisat(solver) => solver.add_clause(literals),
        }
    }

    fn allocate_variables(&mut self, count: usize) {
        match self {
            AnySolver::Cadical(solver) => solver.allocate_variables(count),
            AnySolver::Varisat(solver) => solver.allocate_variables(count),
        }
    }

    fn set_relevant_variables(&mut self, variables: &[Variable]) {
        match self {
            AnySolver::Cadical(solver) => solver.set_relevant_variables(variables),
            AnySolver::Varisat(solver) => solver.set_relevant_variables(variables),
        }
    }

    fn add_exactly_one(&mut self, literals: &[Literal]) {
        match self {
            AnySolver::Cadical(solver) => solver.add_exactly_one(literals),
            AnySolver::Varisat(solver) => solver.add_exactly_one(literals),
        }
    }

    fn add_at_most_one(&mut self, literals: &[Literal]) {
        match self {
            AnySolver::Cadical(solver) => solver.add_at_most_one(literals),
            AnySolver::Varisat(solver) => solver.add_at_most_one(literals),
        }
    }

    fn add_and(&mut self, literal: Literal, conjunction: &[Literal]) {
        match self {
            AnySolver::Cadical(solver) => solver.add_and(literal, conjunction),
            AnySolver::Varisat(solver) => solver.add_and(literal, conjunction),
        }
    }
}

impl Solver for AnySolver {
    fn solve(&mut self) -> Result<Option<Model>, SolverError> {
        match self {
            AnySolver::Cadical(solver) => solver.solve(),
            AnySolver::Varisat(solver) => solver.solve(),
        }
    }

    fn block(&mut self, model: &Model) {
        match self {
            AnySolver::Cadical(solver) => solver.block(model),
            AnySolver::Varisat(solver) => solver.block(model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_creation() {
        for backend in [SolverBackend::Cadical, SolverBackend::Varisat] {
            let solver = AnySolver::new(backend);
            assert_eq!(solver.backend(), backend);
            assert_eq!(solver.variable_count(), 0);
            assert_eq!(solver.clause_count(), 0);
        }
        assert_eq!(AnySolver::default().backend(), SolverBackend::Cadical);
    }

    #[test]
    fn test_simple_satisfiable() {
        for backend in [SolverBackend::Cadical, SolverBackend::Varisat] {
            let mut solver = AnySolver::new(backend);
            solver.add_clause(&[1]);
            let model = solver.solve().unwrap().unwrap();
            assert!(model.value(0), "{:?}", backend);
        }
    }

    #[test]
    fn test_unsatisfiable() {
        for backend in [SolverBackend::Cadical, SolverBackend::Varisat] {
            let mut solver = AnySolver::new(backend);
            solver.add_clause(&[1]);
            solver.add_clause(&[-1]);
            assert!(solver.solve().unwrap().is_none(), "{:?}", backend);
        }
    }

    #[test]
    fn test_exactly_one_enumeration() {
        for backend in [SolverBackend::Cadical, SolverBackend::Varisat] {
            let mut solver = AnySolver::new(backend);
            solver.add_exactly_one(&[1, 2, 3]);
            let mut solutions = solver.solutions();
            assert_eq!(solutions.by_ref().count(), 3, "{:?}", backend);

            // Three models, then the call that proves no fourth exists.
            let statistics = solutions.solver().statistics();
            assert_eq!(statistics.solve_calls, 4, "{:?}", backend);
            assert_eq!(statistics.clause_count, 4 + 3, "{:?}", backend);
        }
    }
}
