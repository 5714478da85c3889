//! File I/O for crossword grids

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a grid from a text file.
///
/// The file holds one row per line (blank lines ignored), or a single line
/// in the comma-separated notation.
pub fn load_grid_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read grid file: {}", path.as_ref().display()))?;

    parse_grid_from_string(&content)
        .with_context(|| format!("Failed to parse grid from file: {}", path.as_ref().display()))
}

/// Parse a grid written either one row per line or comma-separated
pub fn parse_grid_from_string(content: &str) -> Result<Grid> {
    let rows: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let grid = match rows.as_slice() {
        [] => anyhow::bail!("Grid file is empty or contains no valid rows"),
        [single] => Grid::parse(single)?,
        _ => Grid::new(rows.iter().map(|row| row.chars().collect()).collect())?,
    };
    Ok(grid)
}

/// Save a grid to a text file, one row per line
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, grid.to_string())
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}
