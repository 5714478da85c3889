//! Crossword problem definition, solution stream and validation

pub mod problem;
pub mod solutions;
pub mod validator;

pub use problem::{Crossword, CrosswordError};
pub use solutions::CrosswordSolutions;
pub use validator::{SolutionValidator, ValidationResult};
