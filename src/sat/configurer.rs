//! Clause-building contract shared by every SAT backend
//!
//! A backend only has to accept plain disjunctive clauses; the higher-level
//! clause kinds are decomposed by default methods, which a backend may
//! override when it supports them natively.

use itertools::Itertools;

/// A boolean unknown. Variables are strictly positive; 0 is invalid.
pub type Variable = u32;

/// A variable with a polarity: `v` asserts the variable, `-v` its negation.
pub type Literal = i32;

/// Positive literal of a variable
#[inline]
pub fn literal(variable: Variable) -> Literal {
    debug_assert!(variable > 0, "variable 0 is invalid");
    variable as Literal
}

/// Variable referenced by a literal
#[inline]
pub fn variable_of(literal: Literal) -> Variable {
    literal.unsigned_abs()
}

pub trait Configurer {
    /// Adds an at-least-one clause, i.e. the disjunction of the literals.
    fn add_clause(&mut self, literals: &[Literal]);

    /// Hint about the total number of variables of the problem.
    fn allocate_variables(&mut self, _count: usize) {}

    /// Declares which variables models must report, in this order.
    /// Without a declaration every variable is reported.
    fn set_relevant_variables(&mut self, _variables: &[Variable]) {}

    /// Exactly one of the literals holds.
    fn add_exactly_one(&mut self, literals: &[Literal]) {
        self.add_clause(literals);
        self.add_at_most_one(literals);
    }

    /// At most one of the literals holds (pairwise encoding).
    fn add_at_most_one(&mut self, literals: &[Literal]) {
        for (&first, &second) in literals.iter().tuple_combinations() {
            self.add_clause(&[-first, -second]);
        }
    }

    /// `literal ⇔ conjunction[0] ∧ conjunction[1] ∧ … ∧ conjunction[n]`
    ///
    /// Emitted as `(¬literal ∨ cᵢ)` for each `cᵢ`, then
    /// `(¬c₀ ∨ ¬c₁ ∨ … ∨ ¬cₙ ∨ literal)`.
    fn add_and(&mut self, literal: Literal, conjunction: &[Literal]) {
        let mut last_clause = Vec::with_capacity(conjunction.len() + 1);
        for &conjunct in conjunction {
            self.add_clause(&[-literal, conjunct]);
            last_clause.push(-conjunct);
        }
        last_clause.push(literal);
        self.add_clause(&last_clause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Keeps primitive clauses only, so the default decompositions show through.
    #[derive(Default)]
    struct Clauses(Vec<Vec<Literal>>);

    impl Configurer for Clauses {
        fn add_clause(&mut self, literals: &[Literal]) {
            self.0.push(literals.to_vec());
        }
    }

    #[test]
    fn test_add_exactly_one() {
        let mut clauses = Clauses::default();
        clauses.add_exactly_one(&[1, 2, 3]);
        assert_eq!(clauses.0, vec![vec![1, 2, 3], vec![-1, -2], vec![-1, -3], vec![-2, -3]]);
    }

    #[test]
    fn test_add_at_most_one() {
        let mut clauses = Clauses::default();
        clauses.add_at_most_one(&[1, 2, 3]);
        assert_eq!(clauses.0, vec![vec![-1, -2], vec![-1, -3], vec![-2, -3]]);
    }

    #[test]
    fn test_add_at_most_one_single_literal() {
        let mut clauses = Clauses::default();
        clauses.add_at_most_one(&[7]);
        assert!(clauses.0.is_empty());
    }

    #[test]
    fn test_add_and() {
        let mut clauses = Clauses::default();
        clauses.add_and(10, &[1, 2, 3]);
        assert_eq!(
            clauses.0,
            vec![vec![-10, 1], vec![-10, 2], vec![-10, 3], vec![-1, -2, -3, 10]]
        );
    }

    #[test]
    fn test_add_and_with_negative_literals() {
        let mut clauses = Clauses::default();
        clauses.add_and(42, &[-1, 6, -7]);
        assert_eq!(
            clauses.0,
            vec![vec![-42, -1], vec![-42, 6], vec![-42, -7], vec![1, -6, 7, 42]]
        );
    }

    #[test]
    fn test_literal_helpers() {
        assert_eq!(literal(5), 5);
        assert_eq!(variable_of(-5), 5);
        assert_eq!(variable_of(5), 5);
    }
}
