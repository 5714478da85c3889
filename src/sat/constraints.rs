//! Constraint generation for the crossword SAT encoding
//!
//! The constraints are:
//!
//! - each cell holds exactly one letter of the alphabet, or a block;
//! - each slot holds exactly one word of the word list, where a slot
//!   variable, i.e. a (slot, word) pair, is equivalent to the conjunction of
//!   the cell variables spelling that word across the slot;
//! - prefilled cells keep their content.
//!
//! Clauses are pushed to the configurer as they are generated; the full
//! clause set is never held in memory.

use super::configurer::{literal, Configurer, Literal};
use super::variables::{block_index, cell_value_count, Variables};
use crate::grid::{alphabet, Cell, Grid, Slot};
use thiserror::Error;

/// Most slots are no longer than this.
const CELL_LITERALS_BUFFER_CAPACITY: usize = 20;

/// Raised when a candidate word cannot be encoded
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unsupported character '{character}' in word \"{word}\"")]
    UnsupportedCharacter { word: String, character: char },
}

/// Generates the clauses of a crossword problem
pub struct Constraints<'a> {
    grid: &'a Grid,
    variables: &'a Variables,
    words: &'a [String],
}

impl<'a> Constraints<'a> {
    pub fn new(grid: &'a Grid, variables: &'a Variables, words: &'a [String]) -> Self {
        Self {
            grid,
            variables,
            words,
        }
    }

    /// Add every constraint family to the configurer
    pub fn add_all_to<C: Configurer + ?Sized>(&self, configurer: &mut C) -> Result<(), EncodingError> {
        self.add_one_value_per_cell_to(configurer);
        self.add_one_word_per_slot_to(configurer)?;
        self.add_prefilled_cells_to(configurer)
    }

    /// Each cell holds exactly one letter or a block.
    pub fn add_one_value_per_cell_to<C: Configurer + ?Sized>(&self, configurer: &mut C) {
        let mut literals: Vec<Literal> = Vec::with_capacity(cell_value_count());
        for row in 0..self.grid.row_count() {
            for column in 0..self.grid.column_count() {
                literals.extend(
                    (0..cell_value_count()).map(|value| literal(self.variables.cell(row, column, value))),
                );
                configurer.add_exactly_one(&literals);
                literals.clear();
            }
        }
    }

    /// Each slot holds exactly one word whose letters match its cells.
    ///
    /// Words whose length differs from the slot's are skipped.
    pub fn add_one_word_per_slot_to<C: Configurer + ?Sized>(
        &self,
        configurer: &mut C,
    ) -> Result<(), EncodingError> {
        let mut slot_literals: Vec<Literal> = Vec::new();
        let mut cell_literals: Vec<Literal> = Vec::with_capacity(CELL_LITERALS_BUFFER_CAPACITY);
        for (slot_index, slot) in self.grid.slots().iter().enumerate() {
            for (word_index, word) in self.words.iter().enumerate() {
                if word.chars().count() != slot.len() {
                    continue;
                }
                let slot_literal = literal(self.variables.slot(slot_index, word_index));
                self.fill_cell_literals(&mut cell_literals, slot, word)?;
                configurer.add_and(slot_literal, &cell_literals);
                slot_literals.push(slot_literal);
                cell_literals.clear();
            }
            if slot_literals.is_empty() {
                log::debug!("no word fits slot #{} ({:?})", slot_index, slot);
            }
            configurer.add_exactly_one(&slot_literals);
            slot_literals.clear();
        }
        Ok(())
    }

    /// Cell literals whose conjunction spells `word` across `slot`
    fn fill_cell_literals(
        &self,
        cell_literals: &mut Vec<Literal>,
        slot: &Slot,
        word: &str,
    ) -> Result<(), EncodingError> {
        for (position, letter) in slot.positions().zip(word.chars()) {
            let letter_index =
                alphabet::index_of(letter).ok_or_else(|| EncodingError::UnsupportedCharacter {
                    word: word.to_string(),
                    character: letter,
                })?;
            cell_literals.push(literal(self.variables.cell(
                position.row,
                position.column,
                letter_index,
            )));
        }
        Ok(())
    }

    /// Prefilled letters and blocks are kept; empty cells may not become blocks.
    pub fn add_prefilled_cells_to<C: Configurer + ?Sized>(
        &self,
        configurer: &mut C,
    ) -> Result<(), EncodingError> {
        for row in 0..self.grid.row_count() {
            for column in 0..self.grid.column_count() {
                let block = literal(self.variables.cell(row, column, block_index()));
                let pinned = match self.grid.cell(row, column) {
                    Cell::Empty => -block,
                    Cell::Block => block,
                    Cell::Letter(letter) => {
                        let index = alphabet::index_of(letter).ok_or_else(|| {
                            EncodingError::UnsupportedCharacter {
                                word: letter.to_string(),
                                character: letter,
                            }
                        })?;
                        literal(self.variables.cell(row, column, index))
                    }
                };
                configurer.add_clause(&[pinned]);
            }
        }
        Ok(())
    }
}
