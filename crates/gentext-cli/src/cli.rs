use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use gentext_types::DiffMode;

#[derive(Parser)]
#[command(
    name = "gentext",
    about = "Highlight where generated text differs from its reference",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff a candidate string against a reference string
    Diff(DiffArgs),
    /// Show the alignment opcodes of two strings
    Opcodes(OpcodesArgs),
    /// Render a generated-text field document
    Field(FieldArgs),
    /// Render every generated-text output of a prediction document
    Predictions(PredictionsArgs),
    /// Print the effective configuration
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub reference: String,
    pub candidate: String,
    /// Granularity: none, word or character
    #[arg(short, long)]
    pub mode: Option<DiffMode>,
}

#[derive(Args)]
pub struct OpcodesArgs {
    pub a: String,
    pub b: String,
    #[arg(short, long)]
    pub mode: Option<DiffMode>,
}

#[derive(Args)]
pub struct FieldArgs {
    pub path: PathBuf,
    #[arg(short, long)]
    pub mode: Option<DiffMode>,
    /// Candidate to diff, overriding the document's selection
    #[arg(short, long)]
    pub select: Option<usize>,
}

#[derive(Args)]
pub struct PredictionsArgs {
    pub path: PathBuf,
    #[arg(short, long)]
    pub mode: Option<DiffMode>,
}

#[derive(Args)]
pub struct ConfigArgs {}
