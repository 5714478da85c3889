//! Word-bearing runs of cells

/// Shortest run of cells that is considered a slot.
pub const SLOT_MIN_LENGTH: usize = 2;

/// A cell coordinate, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

/// A contiguous run of non-block cells in one direction.
///
/// `start..end` spans columns for an across slot and rows for a down slot;
/// `offset` is the fixed row (across) or column (down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    start: usize,
    end: usize,
    offset: usize,
    direction: Direction,
}

impl Slot {
    pub fn across(start_column: usize, end_column: usize, row: usize) -> Self {
        Self::new(start_column, end_column, row, Direction::Across)
    }

    pub fn down(start_row: usize, end_row: usize, column: usize) -> Self {
        Self::new(start_row, end_row, column, Direction::Down)
    }

    fn new(start: usize, end: usize, offset: usize, direction: Direction) -> Self {
        debug_assert!(end >= start + SLOT_MIN_LENGTH, "slot shorter than {}", SLOT_MIN_LENGTH);
        Self { start, end, offset, direction }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell positions covered by this slot, in reading order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (self.start..self.end).map(move |i| match self.direction {
            Direction::Across => Position::new(self.offset, i),
            Direction::Down => Position::new(i, self.offset),
        })
    }
}
