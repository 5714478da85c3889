//! Configuration management for the crossword solver

pub mod settings;

pub use settings::{
    CliOverrides, DictionaryConfig, OutputConfig, OutputFormat, Settings, SolverBackend,
    SolverConfig,
};
