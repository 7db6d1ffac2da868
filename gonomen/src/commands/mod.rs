mod check;
mod completions;
mod fmt;
mod name;
mod plan;
mod resolve;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fmt::FmtCommand;
use gonomen_manifest::Manifest;
use name::NameCommand;
use plan::PlanCommand;
use resolve::TypeCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gonomen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the manifest at `config`, or ./gonomen.toml when present, or defaults.
pub(crate) fn load_manifest(config: Option<&Path>) -> Manifest {
    Manifest::load_or_default(config, Path::new(".")).unwrap_or_exit()
}

#[derive(Parser)]
#[command(name = "gonomen")]
#[command(version)]
#[command(about = "Go naming and type mapping for API code generation")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Name(cmd) => cmd.run(),
            Commands::Type(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Plan(cmd) => cmd.run(),
            Commands::Fmt(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a raw schema name to a Go identifier or file name
    Name(NameCommand),

    /// Resolve a schema type (JSON) to a Go type expression
    Type(TypeCommand),

    /// Validate gonomen.toml
    Check(CheckCommand),

    /// Print model and operation plans as JSON
    Plan(PlanCommand),

    /// Run the configured formatter on generated Go files
    Fmt(FmtCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Shared `--config` argument.
#[derive(clap::Args, Debug, Clone, Default)]
pub(crate) struct ConfigArg {
    /// Path to gonomen.toml (defaults to ./gonomen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigArg {
    pub fn load(&self) -> Manifest {
        load_manifest(self.config.as_deref())
    }
}
