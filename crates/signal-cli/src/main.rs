use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use signal_core::{Ontology, PredictionPolicy};
use std::path::{Path, PathBuf};

mod commands;
mod logging;

/// Signal — compare a résumé against a job description through a keyword ontology.
#[derive(Parser, Debug)]
#[command(name = "signal", version, about)]
pub struct Cli {
    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Ontology JSON file
    #[arg(long, global = true, env = "SIGNAL_ONTOLOGY", default_value = "ontology.json")]
    ontology: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a résumé against a job description
    Analyze(AnalyzeArgs),
    /// Rate how many ontology domains a résumé touches
    Strength(StrengthArgs),
    /// Show ontology statistics
    Inspect,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Plain-text résumé
    #[arg(long)]
    resume: PathBuf,

    /// Plain-text job description
    #[arg(long)]
    job: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// How the occupational group is predicted
    #[arg(long, value_enum, default_value_t = Policy::JobVocabulary)]
    policy: Policy,

    /// Split long glued words using the ontology vocabulary
    #[arg(long)]
    segment: bool,
}

#[derive(Args, Debug)]
pub struct StrengthArgs {
    /// Plain-text résumé
    #[arg(long)]
    resume: PathBuf,

    /// Plain-text job description
    #[arg(long)]
    job: PathBuf,

    /// Scoring config JSON file with composite weights
    #[arg(long, env = "SIGNAL_CONFIG")]
    config: Option<PathBuf>,

    /// Weight of the résumé length term (overrides the config file)
    #[arg(long)]
    mli_weight: Option<f64>,

    /// Weight of the matched-domain share (overrides the config file)
    #[arg(long)]
    strength_weight: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    format: ReportFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
    Jsonl,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    JobVocabulary,
    ResumeRefined,
}

impl From<Policy> for PredictionPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::JobVocabulary => PredictionPolicy::JobVocabulary,
            Policy::ResumeRefined => PredictionPolicy::ResumeRefined,
        }
    }
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn ontology_path(&self) -> &Path {
        &self.ontology
    }

    /// Load the ontology, failing the whole command if it is unusable.
    pub fn load_ontology(&self) -> Result<Ontology> {
        Ontology::load(&self.ontology)
            .with_context(|| format!("ontology unavailable ({})", self.ontology.display()))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    match &cli.command {
        Command::Analyze(args) => commands::analyze::run(&cli, args),
        Command::Strength(args) => commands::strength::run(&cli, args),
        Command::Inspect => commands::inspect::run(&cli),
    }
}
