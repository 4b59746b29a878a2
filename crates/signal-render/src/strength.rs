use crate::round1;
use signal_core::StrengthReport;
use std::fmt::Write;

const DOMAIN_COLUMN: usize = 32;

/// Plain-text signal-strength report. Domains the job never mentions are
/// left out of the table.
pub fn render_strength_human(report: &StrengthReport) -> anyhow::Result<String> {
    let mut out = String::new();

    writeln!(out, "Signal strength score: {:.1}%", round1(report.score))?;
    writeln!(
        out,
        "Domains matched:       {} of {} ({:.1}%)",
        report.matched_domains,
        report.domains.len(),
        round1(report.signal_strength * 100.0)
    )?;
    writeln!(
        out,
        "Resume length:         {} words (factor {:.1})",
        report.resume_words, report.mli
    )?;
    writeln!(out)?;

    let relevant: Vec<_> = report
        .domains
        .iter()
        .filter(|d| !d.job_phrases.is_empty())
        .collect();
    if relevant.is_empty() {
        writeln!(out, "No ontology phrases found in the job description.")?;
        return Ok(out);
    }

    writeln!(out, "{:<DOMAIN_COLUMN$} {:>6}  Missing", "Domain", "Match")?;
    for d in relevant {
        writeln!(
            out,
            "{:<DOMAIN_COLUMN$} {:>5.1}%  {}",
            d.domain,
            round1(d.match_ratio * 100.0),
            d.missing.join(", ")
        )?;
    }

    Ok(out.trim_end().to_string() + "\n")
}

/// Pretty-printed JSON of the report. Ratios keep two decimals, the score one.
pub fn render_strength_json(report: &StrengthReport) -> anyhow::Result<String> {
    let mut rounded = report.clone();
    for d in &mut rounded.domains {
        d.match_ratio = round2(d.match_ratio);
    }
    rounded.signal_strength = round2(rounded.signal_strength);
    rounded.score = round1(rounded.score);

    let mut json = serde_json::to_string_pretty(&rounded)?;
    json.push('\n');
    Ok(json)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
