use crate::round1;
use serde::Serialize;
use signal_core::{AnalysisResult, PredictionPolicy};
use std::io::Write;

/// Writes an analysis as a JSONL signal table: a header line, one line per
/// scored domain, then a footer with the aggregate scores.
pub struct JsonlWriter {
    policy: PredictionPolicy,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'static str,
    policy: &'static str,
    predicted_group: Option<&'a str>,
    critical_domains: &'a [String],
    suggested_titles: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DomainEntry<'a> {
    domain: &'a str,
    score: f64,
    critical: bool,
    missing: &'a [String],
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    scored_domains: usize,
    total_gaps: usize,
    overall_score: f64,
    trust_score: f64,
    visibility_score: f64,
}

impl JsonlWriter {
    pub fn new() -> Self {
        Self {
            policy: PredictionPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: PredictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Render the analysis as a JSONL string.
    pub fn render(&self, result: &AnalysisResult) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, result)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(&self, writer: &mut dyn Write, result: &AnalysisResult) -> anyhow::Result<()> {
        // Header
        let header = Header {
            version: "0.1",
            policy: self.policy.as_str(),
            predicted_group: result.predicted_group.as_deref(),
            critical_domains: &result.critical_domains,
            suggested_titles: &result.suggested_titles,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        // Domain entries
        for (domain, score) in &result.domain_scores {
            let entry = DomainEntry {
                domain,
                score: round1(*score),
                critical: result.is_critical(domain),
                missing: result.gaps_for(domain),
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        // Footer
        let footer = Footer {
            scored_domains: result.domain_scores.len(),
            total_gaps: result.gap_count(),
            overall_score: round1(result.overall_score),
            trust_score: round1(result.trust_score),
            visibility_score: round1(result.visibility_score),
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}

impl Default for JsonlWriter {
    fn default() -> Self {
        Self::new()
    }
}
