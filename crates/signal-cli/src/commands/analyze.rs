use crate::{AnalyzeArgs, Cli, OutputFormat};
use anyhow::Result;
use signal_core::PredictionPolicy;
use signal_render::{JsonlWriter, render_human, render_json};
use signal_score::Analyzer;
use std::path::Path;

/// Read an extracted text file. Failures yield empty text, which the
/// analyzer reports as insufficient input.
pub(crate) fn read_text(path: &Path) -> String {
    match std::fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "could not read document");
            String::new()
        }
    }
}

pub fn run(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let ontology = cli.load_ontology()?;
    let policy = PredictionPolicy::from(args.policy);

    if !cli.is_quiet() {
        eprintln!(
            "Analyzing {} against {} ({} domains, {} groups, policy: {policy})...",
            args.resume.display(),
            args.job.display(),
            ontology.domain_count(),
            ontology.group_count(),
        );
    }

    let resume_text = read_text(&args.resume);
    let job_text = read_text(&args.job);

    let analyzer = Analyzer::new(&ontology)
        .policy(policy)
        .segmentation(args.segment);

    let Some(result) = analyzer.analyze(&resume_text, &job_text) else {
        if !cli.is_quiet() {
            eprintln!("Insufficient input: the résumé or job description has no usable text.");
        }
        return Ok(());
    };

    let output = match args.format {
        OutputFormat::Human => render_human(&result)?,
        OutputFormat::Json => render_json(&result)?,
        OutputFormat::Jsonl => JsonlWriter::new().policy(policy).render(&result)?,
    };
    print!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_text_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_text(&dir.path().join("missing.txt")), "");
    }

    #[test]
    fn read_text_tolerates_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        std::fs::write(&path, b"AWS \xff Kubernetes").unwrap();
        let text = read_text(&path);
        assert!(text.starts_with("AWS "));
        assert!(text.ends_with(" Kubernetes"));
    }
}
