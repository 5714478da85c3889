//! Main CLI application for the crossword SAT solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossword_sat::{
    config::{CliOverrides, OutputFormat, Settings, SolverBackend},
    crossword::{Crossword, SolutionValidator},
    dictionary::Dictionary,
    grid::{load_grid_from_file, save_grid_to_file, Grid},
    sat::{AnySolver, ClauseRecorder},
    utils::{ColorOutput, SolutionFormatter},
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

const SAMPLE_WORDS: &str = "\
AAA
BBB
CDE
ABC
ABD
ABE
AB
BA
CB
";

#[derive(Parser)]
#[command(name = "crossword_sat")]
#[command(about = "Crossword SAT Solver")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill a crossword grid
    Solve {
        /// Grid as comma-separated rows (e.g. "A..,.#.,...") or a grid file
        grid: String,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Number of solutions to print (overrides config)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Solver backend (overrides config)
        #[arg(short, long, value_enum)]
        solver: Option<SolverBackend>,

        /// Dictionary file, one word per line (overrides config)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Directory to save each solution grid in
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Write the compiled problem as a DIMACS CNF file
    Encode {
        /// Grid as comma-separated rows or a grid file
        grid: String,

        /// Output CNF file
        #[arg(short, long)]
        output: PathBuf,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Dictionary file (overrides config)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,
    },

    /// Create a default configuration and a sample dictionary
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Solve { verbose: true, .. });
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Solve {
            grid,
            config,
            count,
            solver,
            dictionary,
            format,
            output,
            verbose,
        } => {
            let overrides = CliOverrides {
                backend: solver,
                max_solutions: count,
                dictionary,
                format,
            };
            solve_command(&grid, &config, &overrides, output.as_deref(), verbose)
        }
        Commands::Encode {
            grid,
            output,
            config,
            dictionary,
        } => encode_command(&grid, &config, dictionary, &output),
        Commands::Setup { directory, force } => setup_command(&directory, force),
    }
}

fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        log::warn!("Config file {} not found, using defaults", config_path.display());
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;
    Ok(settings)
}

/// A grid argument is either a path to a grid file or the grid itself.
fn read_grid(argument: &str) -> Result<Grid> {
    let path = Path::new(argument);
    if path.is_file() {
        return load_grid_from_file(path);
    }
    Grid::parse(argument).with_context(|| format!("Invalid grid: {}", argument))
}

fn load_crossword(grid: &str, settings: &Settings) -> Result<Crossword> {
    let grid = read_grid(grid)?;
    let dictionary = Dictionary::from_file(&settings.dictionary.path)?;
    Crossword::with_grid(grid, dictionary.into_words()).context("Failed to create crossword problem")
}

fn solve_command(
    grid: &str,
    config_path: &Path,
    overrides: &CliOverrides,
    output_dir: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let text = settings.output.format == OutputFormat::Text;

    let crossword = load_crossword(grid, &settings)?;
    let validator = SolutionValidator::new(crossword.grid(), crossword.words());

    if verbose && text {
        println!("Configuration:");
        println!("  Backend: {:?}", settings.solver.backend);
        println!("  Max solutions: {}", settings.solver.max_solutions);
        println!("  Dictionary: {}", settings.dictionary.path.display());
        println!();
    }

    let start_time = Instant::now();
    let mut solutions = crossword
        .solve_with(AnySolver::new(settings.solver.backend))
        .context("Failed to encode crossword problem")?;

    if verbose && text {
        println!(
            "{}",
            SolutionFormatter::format_statistics(
                &crossword.variables().statistics(),
                solutions.solver().clause_count()
            )
        );
    }

    let mut found = Vec::new();
    let mut exhausted = false;
    while found.len() < settings.solver.max_solutions {
        let Some(solution) = solutions.next() else {
            exhausted = true;
            break;
        };
        let solution = solution.context("Solver failed")?;

        let validation = validator.validate(&solution);
        if !validation.is_valid {
            eprintln!(
                "{}",
                ColorOutput::error(&format!(
                    "Solution {} rejected by validation:\n{}",
                    found.len() + 1,
                    validation
                ))
            );
        }
        if text {
            println!("{}", SolutionFormatter::format_solution(found.len() + 1, &solution));
        }
        found.push(solution);
    }

    match settings.output.format {
        OutputFormat::Text => {
            if exhausted && found.is_empty() {
                println!("{}", ColorOutput::warning("No solution found."));
            } else if exhausted {
                println!("{}", ColorOutput::warning("No more solution."));
            }
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Found {} solution(s) in {:.3}s",
                    found.len(),
                    start_time.elapsed().as_secs_f64()
                ))
            );
            if verbose {
                print!("\n{}", solutions.solver().statistics());
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                SolutionFormatter::format_json(crossword.grid(), &found, exhausted)?
            );
        }
    }

    if let Some(output_dir) = output_dir {
        save_solutions(&found, output_dir)?;
        if text {
            println!("Solutions saved to {}", output_dir.display());
        }
    }

    Ok(())
}

fn save_solutions(solutions: &[Grid], output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create directory {}", output_dir.display()))?;
    for (i, solution) in solutions.iter().enumerate() {
        let path = output_dir.join(format!("solution_{:03}.txt", i + 1));
        save_grid_to_file(solution, path).context("Failed to save solution")?;
    }
    Ok(())
}

fn encode_command(
    grid: &str,
    config_path: &Path,
    dictionary: Option<PathBuf>,
    output: &Path,
) -> Result<()> {
    let overrides = CliOverrides {
        dictionary,
        ..CliOverrides::default()
    };
    let settings = load_settings(config_path, &overrides)?;
    let crossword = load_crossword(grid, &settings)?;

    let mut recorder = ClauseRecorder::new();
    crossword
        .configure(&mut recorder)
        .context("Failed to encode crossword problem")?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    recorder
        .write_dimacs(BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Wrote {} variables and {} clauses to {}",
            recorder.variable_count(),
            recorder.clauses().len(),
            output.display()
        ))
    );
    Ok(())
}

fn setup_command(directory: &Path, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let dictionary_dir = directory.join("dictionaries");
    let dictionary_path = dictionary_dir.join("words.txt");
    if !dictionary_path.exists() || force {
        std::fs::create_dir_all(&dictionary_dir)
            .with_context(|| format!("Failed to create directory {}", dictionary_dir.display()))?;
        std::fs::write(&dictionary_path, SAMPLE_WORDS)
            .with_context(|| format!("Failed to write {}", dictionary_path.display()))?;
        println!("Created: {}", dictionary_path.display());
    } else {
        println!("Skipped: {} (already exists)", dictionary_path.display());
    }

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Replace {} with a real word list", dictionary_path.display());
    println!("2. Run: crossword_sat solve \"A..,...,...\" -n 5");

    Ok(())
}
