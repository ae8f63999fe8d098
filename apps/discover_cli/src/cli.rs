//! Command-line interface for the algebraic-structure discovery engine.
//!
//! # Architecture
//!
//! The CLI is built on [`clap`] derive macros. Each [`Commands`] variant
//! maps to a handler function that drives `discover_pipeline` and prints
//! its result as JSON.
//!
//! # Examples
//!
//! ```bash
//! discover list-structures
//! discover explore --base group --depth 2 --top-n 5
//! discover inspect group
//! discover report --base semigroup monoid --depth 1
//! ```

use std::fmt;

use clap::{Parser, Subcommand};

use discover_ast::Signature;
use discover_moves::MoveKind;
use discover_model::Z3Backend;
use discover_pipeline::{CancellationFlag, PipelineConfig};

use crate::catalog;

/// Errors surfaced at the CLI boundary, distinct from the library
/// crates' [`discover_base::DiscoverError`] — these are about argument
/// validation, not algebraic structures.
#[derive(Debug)]
pub enum CliError {
    /// Bad arguments: an unknown base structure, an unknown move name, a
    /// non-positive depth, or an empty seed set.
    Config(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Command-line interface for the `discover` tool.
#[derive(Parser)]
#[command(name = "discover")]
#[command(about = "Explore algebraic structures by moves and finite models", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands, per the programmatic API's CLI surface.
#[derive(Subcommand)]
pub enum Commands {
    /// List every signature in the built-in seed catalog.
    ///
    /// # Example
    ///
    /// ```bash
    /// discover list-structures
    /// ```
    ListStructures,

    /// Explore from one or more seed structures, printing every
    /// discovery as a JSON array.
    ///
    /// # Example
    ///
    /// ```bash
    /// discover explore --base group --depth 2 --moves dualize,complete
    /// ```
    Explore(ExploreArgs),

    /// Print the full signature of one catalog entry.
    ///
    /// # Example
    ///
    /// ```bash
    /// discover inspect group
    /// ```
    Inspect {
        /// The catalog entry's name.
        name: String,
    },

    /// Run an exploration and print a ranked, human-readable summary
    /// instead of raw JSON.
    ///
    /// # Example
    ///
    /// ```bash
    /// discover report --base semigroup monoid --depth 1 --top-n 5
    /// ```
    Report(ExploreArgs),

    /// Delegate a discovery to an autonomous agent controller.
    ///
    /// Not implemented: the LLM agent controller and its tool dispatch
    /// are an external collaborator, out of this crate's scope.
    Agent,
}

/// Shared flags for `explore` and `report`: base structures, allowed
/// moves, depth, model size range, score threshold, top-N, and workers.
#[derive(clap::Args)]
pub struct ExploreArgs {
    /// Seed structure names from the catalog. Defaults to every catalog
    /// entry if omitted.
    #[arg(long = "base", num_args = 1..)]
    pub base: Vec<String>,

    /// Comma-separated move names to allow (e.g. `dualize,complete`).
    /// Defaults to every move.
    #[arg(long)]
    pub moves: Option<String>,

    /// How many move-engine rounds to run.
    #[arg(long, default_value_t = 2)]
    pub depth: usize,

    /// Smallest domain size the model finder sweeps.
    #[arg(long = "min-size", default_value_t = 2)]
    pub min_size: usize,

    /// Largest domain size the model finder sweeps.
    #[arg(long = "max-size", default_value_t = 4)]
    pub max_size: usize,

    /// Model-count cap per size.
    #[arg(long = "max-models", default_value_t = 5)]
    pub max_models: usize,

    /// Per-solver-call timeout, in milliseconds.
    #[arg(long = "timeout-ms", default_value_t = 5_000)]
    pub timeout_ms: u64,

    /// Minimum cheap structural score a candidate must reach to survive
    /// the first pass.
    #[arg(long, default_value_t = 0.0)]
    pub threshold: f64,

    /// How many structural survivors proceed to model-checking.
    #[arg(long = "top-n", default_value_t = 20)]
    pub top_n: usize,

    /// Worker count for the optional parallel model-checking pass.
    #[arg(long)]
    pub workers: Option<usize>,
}

fn parse_moves(raw: &Option<String>) -> Result<Vec<MoveKind>, CliError> {
    let Some(raw) = raw else {
        return Ok(MoveKind::ALL.to_vec());
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| match name.to_ascii_lowercase().as_str() {
            "abstract" => Ok(MoveKind::Abstract),
            "dualize" => Ok(MoveKind::Dualize),
            "complete" => Ok(MoveKind::Complete),
            "quotient" => Ok(MoveKind::Quotient),
            "internalize" => Ok(MoveKind::Internalize),
            "transfer" => Ok(MoveKind::Transfer),
            "deform" => Ok(MoveKind::Deform),
            "self_distrib" | "self-distrib" => Ok(MoveKind::SelfDistrib),
            other => Err(CliError::Config(format!("unknown move name '{other}'"))),
        })
        .collect()
}

fn resolve_seeds(names: &[String]) -> Result<Vec<Signature>, CliError> {
    if names.is_empty() {
        return Ok(catalog::all());
    }
    names
        .iter()
        .map(|name| catalog::find(name).ok_or_else(|| CliError::Config(format!("unknown base structure '{name}'"))))
        .collect()
}

fn build_config(args: &ExploreArgs) -> Result<PipelineConfig, CliError> {
    if args.depth == 0 {
        return Err(CliError::Config("depth must be at least 1".to_string()));
    }
    if args.min_size == 0 || args.min_size > args.max_size {
        return Err(CliError::Config("min-size must be >= 1 and <= max-size".to_string()));
    }
    Ok(PipelineConfig {
        depth: args.depth,
        allowed_moves: parse_moves(&args.moves)?,
        min_model_size: args.min_size,
        max_model_size: args.max_size,
        max_models_per_size: args.max_models,
        solver_timeout_ms: args.timeout_ms,
        structural_threshold: args.threshold,
        top_n: args.top_n,
        workers: args.workers,
        weights: discover_score::Weights::default(),
    })
}

/// Parse CLI arguments and execute the corresponding command.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ListStructures => cmd_list_structures(),
        Commands::Explore(args) => cmd_explore(args),
        Commands::Inspect { name } => cmd_inspect(&name),
        Commands::Report(args) => cmd_report(args),
        Commands::Agent => cmd_agent(),
    }
}

fn cmd_list_structures() -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<&str> = catalog::all().iter().map(|sig| sig.name.as_str()).collect();
    println!("{}", serde_json::to_string_pretty(&names)?);
    Ok(())
}

fn cmd_inspect(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let sig = catalog::find(name).ok_or_else(|| CliError::Config(format!("unknown base structure '{name}'")))?;
    println!("{}", serde_json::to_string_pretty(&sig)?);
    Ok(())
}

fn cmd_explore(args: ExploreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let seeds = resolve_seeds(&args.base)?;
    let config = build_config(&args)?;
    let discoveries = discover_pipeline::run(seeds, &config, &Z3Backend, &CancellationFlag::new());
    let dicts: Vec<_> = discoveries.iter().map(|d| d.to_dict()).collect();
    println!("{}", serde_json::to_string_pretty(&dicts)?);
    Ok(())
}

fn cmd_report(args: ExploreArgs) -> Result<(), Box<dyn std::error::Error>> {
    let seeds = resolve_seeds(&args.base)?;
    let config = build_config(&args)?;
    let discoveries = discover_pipeline::run(seeds, &config, &Z3Backend, &CancellationFlag::new());

    if discoveries.is_empty() {
        println!("No discoveries survived the run.");
        return Ok(());
    }

    println!("{:<4} {:<24} {:>8} {:<18} {}", "#", "name", "score", "fingerprint", "derivation");
    for (rank, discovery) in discoveries.iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>8.3} {:<18} {}",
            rank + 1,
            discovery.name,
            discovery.score,
            discovery.fingerprint,
            discovery.derivation_chain.join(" -> "),
        );
    }
    Ok(())
}

fn cmd_agent() -> Result<(), Box<dyn std::error::Error>> {
    Err(Box::new(CliError::Config(
        "the agent command requires an external LLM agent collaborator, not implemented in this crate".to_string(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_moves_defaults_to_every_move() {
        assert_eq!(parse_moves(&None).unwrap(), MoveKind::ALL.to_vec());
    }

    #[test]
    fn parse_moves_rejects_unknown_names() {
        assert!(parse_moves(&Some("not_a_move".to_string())).is_err());
    }

    #[test]
    fn parse_moves_accepts_a_comma_separated_list() {
        let moves = parse_moves(&Some("dualize, complete".to_string())).unwrap();
        assert_eq!(moves, vec![MoveKind::Dualize, MoveKind::Complete]);
    }

    #[test]
    fn resolve_seeds_defaults_to_the_full_catalog() {
        assert_eq!(resolve_seeds(&[]).unwrap().len(), catalog::all().len());
    }

    #[test]
    fn resolve_seeds_rejects_unknown_names() {
        assert!(resolve_seeds(&["not_a_structure".to_string()]).is_err());
    }

    #[test]
    fn build_config_rejects_zero_depth() {
        let args = ExploreArgs {
            base: Vec::new(),
            moves: None,
            depth: 0,
            min_size: 2,
            max_size: 4,
            max_models: 5,
            timeout_ms: 1000,
            threshold: 0.0,
            top_n: 10,
            workers: None,
        };
        assert!(build_config(&args).is_err());
    }
}
