use crate::round1;
use signal_core::AnalysisResult;
use std::fmt::Write;

/// Width of the domain column before it starts to push the score column right.
const DOMAIN_COLUMN: usize = 32;

/// Plain-text report for terminals.
///
/// Critical domains (those of the predicted group) are marked with `*`.
pub fn render_human(result: &AnalysisResult) -> anyhow::Result<String> {
    let mut out = String::new();

    let group = result.predicted_group.as_deref().unwrap_or("(none)");
    writeln!(out, "Predicted group:  {group}")?;
    if !result.suggested_titles.is_empty() {
        writeln!(out, "Suggested titles: {}", result.suggested_titles.join(", "))?;
    }
    writeln!(out, "Overall match:    {:.1}%", round1(result.overall_score))?;
    writeln!(out, "Trust score:      {:.1}%", round1(result.trust_score))?;
    writeln!(out, "Visibility score: {:.1}%", round1(result.visibility_score))?;
    writeln!(out)?;

    if result.domain_scores.is_empty() {
        writeln!(out, "No signal domains matched the job description.")?;
        return Ok(out);
    }

    writeln!(out, "  {:<DOMAIN_COLUMN$} {:>6}  Missing", "Domain", "Score")?;
    for (domain, score) in &result.domain_scores {
        let marker = if result.is_critical(domain) { '*' } else { ' ' };
        let missing = result.gaps_for(domain).join(", ");
        writeln!(
            out,
            "{marker} {domain:<DOMAIN_COLUMN$} {:>5.1}%  {missing}",
            round1(*score)
        )?;
    }

    Ok(out.trim_end().to_string() + "\n")
}
