//! SAT encoding of crossword problems and pluggable solver backends

pub mod cadical_solver;
pub mod configurer;
pub mod constraints;
pub mod recorder;
pub mod solver;
pub mod solver_factory;
pub mod variables;
pub mod varisat_solver;

pub use cadical_solver::CadicalSolver;
pub use configurer::{literal, variable_of, Configurer, Literal, Variable};
pub use constraints::{Constraints, EncodingError};
pub use recorder::ClauseRecorder;
pub use solver::{Model, Solutions, Solver, SolverError, SolverStatistics};
pub use solver_factory::AnySolver;
pub use variables::{block_index, cell_value_count, VariableStatistics, Variables};
pub use varisat_solver::VarisatSolver;
