use crate::round1;
use signal_core::AnalysisResult;

/// Pretty-printed JSON of the whole analysis, scores rounded to one decimal.
pub fn render_json(result: &AnalysisResult) -> anyhow::Result<String> {
    let mut rounded = result.clone();
    for score in rounded.domain_scores.values_mut() {
        *score = round1(*score);
    }
    rounded.overall_score = round1(rounded.overall_score);
    rounded.trust_score = round1(rounded.trust_score);
    rounded.visibility_score = round1(rounded.visibility_score);

    let mut json = serde_json::to_string_pretty(&rounded)?;
    json.push('\n');
    Ok(json)
}
