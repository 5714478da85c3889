//! Numbering of the crossword problem's boolean variables
//!
//! Two families share one dense range starting at 1:
//!
//! - cell variables, one per (cell, value) where value is a letter index or
//!   the block index, packed row-major then value-major;
//! - slot variables, one per (slot, word), placed right after the last cell
//!   variable and packed slot-major then word-major.

use super::configurer::Variable;
use super::solver::Model;
use crate::grid::{alphabet, Cell, Grid};
use std::fmt;

/// Number of values a cell of a solved grid can take: every letter, or a block.
pub const fn cell_value_count() -> usize {
    alphabet::size() + 1
}

/// Value index standing for a block.
pub const fn block_index() -> usize {
    alphabet::size()
}

/// Maps problem entities to SAT variables and back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variables {
    rows: usize,
    columns: usize,
    slot_count: usize,
    word_count: usize,
}

impl Variables {
    pub fn new(grid: &Grid, word_count: usize) -> Self {
        Self {
            rows: grid.row_count(),
            columns: grid.column_count(),
            slot_count: grid.slot_count(),
            word_count,
        }
    }

    /// Variable meaning "cell (row, column) holds `value`"
    pub fn cell(&self, row: usize, column: usize, value: usize) -> Variable {
        debug_assert!(row < self.rows && column < self.columns && value < cell_value_count());
        let index = (row * self.columns + column) * cell_value_count() + value;
        to_variable(index + 1)
    }

    /// All cell variables, in increasing order
    pub fn cells(&self) -> Vec<Variable> {
        (1..=self.cell_variable_count()).map(to_variable).collect()
    }

    /// Variable meaning "slot `slot_index` holds word `word_index`"
    pub fn slot(&self, slot_index: usize, word_index: usize) -> Variable {
        debug_assert!(slot_index < self.slot_count && word_index < self.word_count);
        let index = self.cell_variable_count() + slot_index * self.word_count + word_index;
        to_variable(index + 1)
    }

    pub fn cell_variable_count(&self) -> usize {
        self.rows * self.columns * cell_value_count()
    }

    pub fn slot_variable_count(&self) -> usize {
        self.slot_count * self.word_count
    }

    pub fn count(&self) -> usize {
        self.cell_variable_count() + self.slot_variable_count()
    }

    /// Translate a model over the cell variables back into a grid.
    ///
    /// The model must report cell variables in increasing order, as
    /// returned by [`Variables::cells`]. A cell with no true value decodes
    /// as empty.
    pub fn decode(&self, model: &Model) -> Grid {
        let mut cells = Vec::with_capacity(self.rows * self.columns);
        for row in 0..self.rows {
            for column in 0..self.columns {
                let value = (0..cell_value_count())
                    .find(|&value| model.value(self.cell(row, column, value) as usize - 1));
                let cell = match value {
                    Some(value) if value == block_index() => Cell::Block,
                    Some(value) => alphabet::letter_at(value).map_or(Cell::Empty, Cell::Letter),
                    None => Cell::Empty,
                };
                cells.push(cell);
            }
        }
        Grid::from_cells(self.rows, self.columns, cells)
    }

    pub fn statistics(&self) -> VariableStatistics {
        VariableStatistics {
            total_variables: self.count(),
            cell_variables: self.cell_variable_count(),
            slot_variables: self.slot_variable_count(),
        }
    }
}

/// Largest variable representable as a positive [`Literal`](super::Literal).
pub const MAX_VARIABLE: usize = i32::MAX as usize;

#[inline]
fn to_variable(index: usize) -> Variable {
    debug_assert!(index <= MAX_VARIABLE);
    index as Variable
}

/// Statistics about variable usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStatistics {
    pub total_variables: usize,
    pub cell_variables: usize,
    pub slot_variables: usize,
}

impl fmt::Display for VariableStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Variable Statistics:")?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Cell variables: {}", self.cell_variables)?;
        writeln!(f, "  Slot variables: {}", self.slot_variables)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn empty_3x3() -> Grid {
        Grid::parse("...,...,...").unwrap()
    }

    #[test]
    fn test_cell_variables() {
        let variables = Variables::new(&empty_3x3(), 100_000);

        assert_eq!(variables.cell(0, 0, 0), 1);
        assert_eq!(variables.cell(0, 0, 1), 2);
        assert_eq!(variables.cell(0, 0, 26), 27);

        assert_eq!(variables.cell(0, 1, 0), 28);
        assert_eq!(variables.cell(0, 1, 1), 29);
        assert_eq!(variables.cell(0, 1, 26), 54);

        assert_eq!(variables.cell(2, 2, 26), 243);
    }

    #[test]
    fn test_slot_variables() {
        let variables = Variables::new(&empty_3x3(), 100_000);

        assert_eq!(variables.slot(0, 0), 244);
        assert_eq!(variables.slot(0, 1), 245);
        assert_eq!(variables.slot(0, 99_999), 100_243);

        assert_eq!(variables.slot(1, 0), 100_244);
        assert_eq!(variables.slot(1, 1), 100_245);

        assert_eq!(variables.slot(5, 99_999), 600_243);
    }

    #[test]
    fn test_counts() {
        let variables = Variables::new(&empty_3x3(), 100_000);
        assert_eq!(variables.cell_variable_count(), 243);
        assert_eq!(variables.slot_variable_count(), 600_000);
        assert_eq!(variables.count(), 600_243);
        assert_eq!(variables.cells().len(), 243);

        let stats = variables.statistics();
        assert_eq!(stats.total_variables, 600_243);
        assert!(stats.to_string().contains("Slot variables: 600000"));
    }

    #[test]
    fn test_numbering_is_dense_and_injective() {
        let grid = Grid::parse("..#,...").unwrap();
        let word_count = 4;
        let variables = Variables::new(&grid, word_count);

        let mut seen = HashSet::new();
        for row in 0..grid.row_count() {
            for column in 0..grid.column_count() {
                for value in 0..cell_value_count() {
                    assert!(seen.insert(variables.cell(row, column, value)));
                }
            }
        }
        for slot in 0..grid.slot_count() {
            for word in 0..word_count {
                assert!(seen.insert(variables.slot(slot, word)));
            }
        }

        let expected: HashSet<Variable> = (1..=variables.count() as Variable).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_decode() {
        let grid = Grid::parse("...,.#.,...").unwrap();
        let variables = Variables::new(&grid, 1);

        // Per cell: index of the true value.
        let chosen = [0, 0, 0, 1, block_index(), 1, 2, 2, 2];
        let mut values = Vec::new();
        for &value in &chosen {
            for candidate in 0..cell_value_count() {
                values.push(candidate == value);
            }
        }

        let solved = variables.decode(&Model::from_values(&values));
        assert_eq!(solved, Grid::parse("AAA,B#B,CCC").unwrap());
    }

    #[test]
    fn test_decode_empty_grid() {
        let grid = Grid::new(Vec::new()).unwrap();
        let variables = Variables::new(&grid, 3);
        assert_eq!(variables.count(), 0);
        assert_eq!(variables.decode(&Model::from_values(&[])), grid);
    }
}
