use crate::commands::analyze::read_text;
use crate::{Cli, ReportFormat, StrengthArgs};
use anyhow::{Context, Result};
use signal_core::{ScoringConfig, StrengthWeights};
use signal_render::{render_strength_human, render_strength_json};
use signal_score::StrengthScorer;

/// Config file weights with any command-line overrides applied.
fn resolve_weights(args: &StrengthArgs) -> Result<StrengthWeights> {
    let config = match &args.config {
        Some(path) => ScoringConfig::load(path)
            .with_context(|| format!("invalid scoring config ({})", path.display()))?,
        None => ScoringConfig::default(),
    };

    let mut weights = config.weights;
    if let Some(mli) = args.mli_weight {
        weights.mli = mli;
    }
    if let Some(strength) = args.strength_weight {
        weights.signal_strength = strength;
    }
    weights.validate()?;
    Ok(weights)
}

pub fn run(cli: &Cli, args: &StrengthArgs) -> Result<()> {
    let ontology = cli.load_ontology()?;
    let weights = resolve_weights(args)?;

    if !cli.is_quiet() {
        eprintln!(
            "Scoring {} against {} ({} domains, weights: mli {}, signal strength {})...",
            args.resume.display(),
            args.job.display(),
            ontology.domain_count(),
            weights.mli,
            weights.signal_strength,
        );
    }

    let resume_text = read_text(&args.resume);
    let job_text = read_text(&args.job);

    let report = StrengthScorer::new(&ontology)
        .weights(weights)
        .score(&resume_text, &job_text);

    let output = match args.format {
        ReportFormat::Human => render_strength_human(&report)?,
        ReportFormat::Json => render_strength_json(&report)?,
    };
    print!("{output}");

    Ok(())
}
