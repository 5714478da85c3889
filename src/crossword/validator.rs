//! Solution validation for crossword problems

use crate::grid::{Cell, Grid};
use std::collections::HashSet;
use std::fmt;

/// Checks solved grids against the input grid and word list
pub struct SolutionValidator<'a> {
    input: &'a Grid,
    words: HashSet<&'a str>,
}

/// Result of validating a solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl<'a> SolutionValidator<'a> {
    pub fn new(input: &'a Grid, words: &'a [String]) -> Self {
        Self {
            input,
            words: words.iter().map(String::as_str).collect(),
        }
    }

    /// Validate that `solution` is a complete filling of the input grid
    pub fn validate(&self, solution: &Grid) -> ValidationResult {
        let mut errors = Vec::new();

        if solution.row_count() != self.input.row_count()
            || solution.column_count() != self.input.column_count()
        {
            errors.push(format!(
                "Solution is {}x{}, expected {}x{}",
                solution.row_count(),
                solution.column_count(),
                self.input.row_count(),
                self.input.column_count()
            ));
            return ValidationResult::from_errors(errors);
        }

        for row in 0..self.input.row_count() {
            for column in 0..self.input.column_count() {
                let expected = self.input.cell(row, column);
                let actual = solution.cell(row, column);
                match (expected, actual) {
                    (_, Cell::Empty) => {
                        errors.push(format!("Cell ({}, {}) is not filled", row, column));
                    }
                    (Cell::Empty, Cell::Block) => {
                        errors.push(format!("Cell ({}, {}) became a block", row, column));
                    }
                    (Cell::Empty, Cell::Letter(_)) => {}
                    (expected, actual) if expected != actual => {
                        errors.push(format!(
                            "Prefilled cell ({}, {}) changed from '{}' to '{}'",
                            row,
                            column,
                            expected.symbol(),
                            actual.symbol()
                        ));
                    }
                    _ => {}
                }
            }
        }

        if errors.is_empty() {
            for slot in self.input.slots() {
                let word: String = slot
                    .positions()
                    .map(|position| solution.letter_at(position.row, position.column))
                    .collect();
                if !self.words.contains(word.as_str()) {
                    errors.push(format!("Word {} is not in the word list", word));
                }
            }
        }

        ValidationResult::from_errors(errors)
    }
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            return writeln!(f, "Validation: OK");
        }
        writeln!(f, "Validation: {} error(s)", self.errors.len())?;
        for error in &self.errors {
            writeln!(f, "  - {}", error)?;
        }
        Ok(())
    }
}
