//! Archgate CLI - Command-line interface for the architecture governance gate
//!
//! This CLI provides operators and planners with a terminal interface to:
//! - Evaluate a candidate architecture contract and obtain its verdict
//! - Look up the `schema_version` contracts must declare
//! - Inspect the governance version and the authority it binds
//! - Print the reviewer rule table
//!
//! Exit codes: `0` authority granted (or informational command succeeded),
//! `1` plan rejected, `2` fatal error.

use std::ffi::OsString;
use std::path::PathBuf;

use archgate_engine::{EngineConfig, RuleSource, DEFAULT_MANIFEST_PATH};
use archgate_reviewer::DEFAULT_MAX_DEPTH;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod output;

pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Exit code for fatal errors.
pub const EXIT_FATAL: u8 = 2;

/// Archgate CLI application
#[derive(Parser)]
#[command(name = "archgate")]
#[command(about = "Archgate - deterministic governance gate for architecture contracts", long_about = None)]
#[command(version)]
struct Cli {
    /// Governance manifest path
    #[arg(short, long, env = "ARCHGATE_MANIFEST", default_value = DEFAULT_MANIFEST_PATH, global = true)]
    manifest: PathBuf,

    /// Reviewer rule file whose raw text is bound into the governance version
    /// (default: the built-in rule table)
    #[arg(short, long, env = "ARCHGATE_RULES", global = true)]
    rules: Option<PathBuf>,

    /// Maximum nesting depth inspected before failing closed
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    max_depth: usize,

    /// Output format (json, yaml, table)
    #[arg(short, long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        let rule_source = match &self.rules {
            Some(path) => RuleSource::File(path.clone()),
            None => RuleSource::Builtin,
        };
        EngineConfig::new(&self.manifest)
            .with_rule_source(rule_source)
            .with_max_depth(self.max_depth)
    }
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Evaluate a plan (JSON file, or `-` for stdin) and print its verdict
    Evaluate {
        /// Path to the candidate architecture contract
        plan: PathBuf,
    },

    /// Print the schema_version every contract must declare
    SchemaVersion,

    /// Show the governance version and the authority it binds
    Info,

    /// Show the reviewer rule table
    Rules,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<u8> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator. Returns the process exit code.
pub fn run_with_args<I, T>(args: I) -> CliResult<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Logs go to stderr so stdout carries only the verdict.
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    let config = cli.engine_config();
    match &cli.command {
        Commands::Evaluate { plan } => commands::evaluate::execute(plan, &config, cli.output),
        Commands::SchemaVersion => commands::info::schema_version(cli.output),
        Commands::Info => commands::info::show_info(&config, cli.output),
        Commands::Rules => {
            commands::rules::execute(cli.rules.as_deref(), cli.max_depth, cli.output)
        }
    }
}
