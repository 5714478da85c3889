//! Crossword grid, alphabet and slot extraction

pub mod alphabet;
pub mod grid;
pub mod io;
pub mod slot;

pub use grid::{Cell, Grid, GridError, CELL_BLOCK, CELL_EMPTY};
pub use io::{load_grid_from_file, parse_grid_from_string, save_grid_to_file};
pub use slot::{Direction, Position, Slot, SLOT_MIN_LENGTH};
