//! Crossword grid representation and slot extraction

use super::alphabet;
use super::slot::{Slot, SLOT_MIN_LENGTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Symbol of an empty cell.
pub const CELL_EMPTY: char = '.';
/// Symbol of a block (shaded cell).
pub const CELL_BLOCK: char = '#';
/// Row separator of the compact grid notation.
pub const ROW_SEPARATOR: char = ',';

/// Errors raised while validating grid input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("inconsistent number of columns: row #{row} has {columns} columns but row #0 has {expected}")]
    InconsistentRowLength {
        row: usize,
        columns: usize,
        expected: usize,
    },
    #[error("invalid value at row #{row}, column #{column}: {symbol}")]
    InvalidSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
}

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Letter(char),
    Empty,
    Block,
}

impl Cell {
    /// Interprets a raw symbol, returning `None` for anything outside
    /// the alphabet, `.` and `#`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            CELL_EMPTY => Some(Cell::Empty),
            CELL_BLOCK => Some(Cell::Block),
            letter if alphabet::contains(letter) => Some(Cell::Letter(letter)),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Letter(letter) => letter,
            Cell::Empty => CELL_EMPTY,
            Cell::Block => CELL_BLOCK,
        }
    }
}

/// A rectangular, immutable crossword grid
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid from raw cell symbols, validating shape and content
    pub fn new(cells: Vec<Vec<char>>) -> Result<Self, GridError> {
        let rows = cells.len();
        let columns = cells.first().map_or(0, Vec::len);

        let mut flat_cells = Vec::with_capacity(rows * columns);
        for (row_index, row) in cells.iter().enumerate() {
            if row.len() != columns {
                return Err(GridError::InconsistentRowLength {
                    row: row_index,
                    columns: row.len(),
                    expected: columns,
                });
            }
            for (column_index, &symbol) in row.iter().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(GridError::InvalidSymbol {
                    row: row_index,
                    column: column_index,
                    symbol,
                })?;
                flat_cells.push(cell);
            }
        }

        Ok(Self {
            rows,
            columns,
            cells: flat_cells,
        })
    }

    /// Parse the compact notation, e.g. `"A..,.#.,..."`
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows = text
            .split(ROW_SEPARATOR)
            .map(|row| row.trim().chars().collect())
            .collect();
        Self::new(rows)
    }

    /// Build a grid from already-validated cells (used when decoding models)
    pub(crate) fn from_cells(rows: usize, columns: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self { rows, columns, cells }
    }

    #[inline]
    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Cell at the given coordinates. Panics when out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    /// Symbol at the given coordinates: a letter, `.` or `#`.
    pub fn letter_at(&self, row: usize, column: usize) -> char {
        self.cell(row, column).symbol()
    }

    /// All slots: across slots row by row, then down slots column by column.
    ///
    /// Slot order determines slot variable numbering.
    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = self.across_slots();
        slots.extend(self.down_slots());
        slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots().len()
    }

    fn across_slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        for row in 0..self.rows {
            let mut start = 0;
            for column in 0..self.columns {
                if self.cell(row, column) == Cell::Block {
                    if column - start >= SLOT_MIN_LENGTH {
                        slots.push(Slot::across(start, column, row));
                    }
                    start = column + 1;
                }
            }
            if self.columns.saturating_sub(start) >= SLOT_MIN_LENGTH {
                slots.push(Slot::across(start, self.columns, row));
            }
        }
        slots
    }

    fn down_slots(&self) -> Vec<Slot> {
        let mut slots = Vec::new();
        for column in 0..self.columns {
            let mut start = 0;
            for row in 0..self.rows {
                if self.cell(row, column) == Cell::Block {
                    if row - start >= SLOT_MIN_LENGTH {
                        slots.push(Slot::down(start, row, column));
                    }
                    start = row + 1;
                }
            }
            if self.rows.saturating_sub(start) >= SLOT_MIN_LENGTH {
                slots.push(Slot::down(start, self.rows, column));
            }
        }
        slots
    }

    /// Rows as strings of cell symbols
    pub fn to_rows(&self) -> Vec<String> {
        if self.columns == 0 {
            return vec![String::new(); self.rows];
        }
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    /// Render in the compact notation accepted by [`Grid::parse`]
    pub fn to_compact_string(&self) -> String {
        self.to_rows().join(&ROW_SEPARATOR.to_string())
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Grid::new(rows.iter().map(|row| row.chars().collect()).collect())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::new(rows.iter().map(|row| row.chars().collect()).collect()).unwrap()
    }

    #[test]
    fn test_inconsistent_length() {
        let err = Grid::new(vec![vec!['A', 'B', 'C'], vec!['.', '#']]).unwrap_err();
        assert_eq!(
            err,
            GridError::InconsistentRowLength { row: 1, columns: 2, expected: 3 }
        );
        assert_eq!(
            err.to_string(),
            "inconsistent number of columns: row #1 has 2 columns but row #0 has 3"
        );
    }

    #[test]
    fn test_invalid_symbol() {
        let err = Grid::new(vec![vec!['A', 'B', 'C'], vec!['.', '#', '@']]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value at row #1, column #2: @");
    }

    #[test]
    fn test_lowercase_is_invalid() {
        assert!(matches!(
            Grid::parse("ab,.."),
            Err(GridError::InvalidSymbol { row: 0, column: 0, symbol: 'a' })
        ));
    }

    #[test]
    fn test_dimensions() {
        let grid = grid(&["A", "B"]);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 1);
        assert_eq!(grid.letter_at(1, 0), 'B');
        assert_eq!(grid.cell(0, 0), Cell::Letter('A'));
    }

    #[test]
    fn test_slots_simple() {
        let grid = grid(&["...", "...", "..."]);
        assert_eq!(
            grid.slots(),
            vec![
                Slot::across(0, 3, 0),
                Slot::across(0, 3, 1),
                Slot::across(0, 3, 2),
                Slot::down(0, 3, 0),
                Slot::down(0, 3, 1),
                Slot::down(0, 3, 2),
            ]
        );
        assert!(grid.slots().iter().all(|slot| slot.len() == 3));
    }

    #[test]
    fn test_slots_asymmetrical() {
        let grid = grid(&["...", "..."]);
        assert_eq!(
            grid.slots(),
            vec![
                Slot::across(0, 3, 0),
                Slot::across(0, 3, 1),
                Slot::down(0, 2, 0),
                Slot::down(0, 2, 1),
                Slot::down(0, 2, 2),
            ]
        );
    }

    #[test]
    fn test_slots_with_blocks() {
        // Single-cell runs next to blocks are not slots.
        let grid = grid(&[".#.", "...", "..#"]);
        assert_eq!(
            grid.slots(),
            vec![
                Slot::across(0, 3, 1),
                Slot::across(0, 2, 2),
                Slot::down(0, 3, 0),
                Slot::down(1, 3, 1),
                Slot::down(0, 2, 2),
            ]
        );
    }

    #[test]
    fn test_slots_empty_grid() {
        let grid = Grid::new(Vec::new()).unwrap();
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.column_count(), 0);
        assert!(grid.slots().is_empty());
    }

    #[test]
    fn test_parse_and_compact_round_trip() {
        let grid = Grid::parse("AB#,...,#.C").unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.cell(0, 2), Cell::Block);
        assert_eq!(grid.cell(1, 1), Cell::Empty);
        assert_eq!(grid.to_compact_string(), "AB#,...,#.C");
        assert_eq!(grid.to_string(), "AB#\n...\n#.C\n");
    }

    #[test]
    fn test_serde_as_rows() {
        let grid = Grid::parse("AB,#C").unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r##"["AB","#C"]"##);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid>(r#"["AB","C"]"#).is_err());
    }
}
