use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gloss_config::GlossConfig;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `gloss` binary.
#[derive(Debug, Parser)]
#[command(name = "gloss", version, about = "gloss - glossary validation and publication")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve global flags against configured defaults.
    #[must_use]
    pub fn global_flags(&self, config: &GlossConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| config.general.default_format.into()),
            quiet: self.quiet,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a glossary document's schema and consistency
    Validate(ValidateArgs),
    /// Score terms and list their badges
    Score(ScoreArgs),
    /// Write the versioned publication document
    Export(ExportArgs),
    /// Print a JSON Schema, or list the available schemas
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Glossary document (JSON)
    pub input: PathBuf,

    /// Previously published snapshot or export to check slug stability against
    #[arg(long)]
    pub base: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Glossary document (JSON)
    pub input: PathBuf,

    /// Only score this slug
    #[arg(long)]
    pub slug: Option<String>,

    /// Include per-component points
    #[arg(long)]
    pub breakdown: bool,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Glossary document (JSON)
    pub input: PathBuf,

    /// Output path for the export document
    #[arg(short, long)]
    pub out: PathBuf,

    /// Previously published export, used as the slug-stability base and for --only-if-new
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Indent the output
    #[arg(long)]
    pub pretty: bool,

    /// Version identifier (defaults to `export.version`)
    #[arg(long)]
    pub release: Option<String>,

    /// Skip the export unless a new slug was added since --previous
    #[arg(long)]
    pub only_if_new: bool,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Schema name; omit to list all
    pub name: Option<String>,
}
