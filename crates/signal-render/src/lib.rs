//! JSONL, JSON, and human-readable rendering of analysis results and
//! signal-strength reports.

mod human;
mod json;
mod jsonl;
mod strength;

pub use human::render_human;
pub use json::render_json;
pub use jsonl::JsonlWriter;
pub use strength::{render_strength_human, render_strength_json};

/// Round a percentage to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use signal_core::AnalysisResult;

    pub(crate) fn sample_result() -> AnalysisResult {
        let mut domain_scores = IndexMap::new();
        domain_scores.insert("cloud".to_string(), 100.0 / 3.0);
        domain_scores.insert("data".to_string(), 100.0);

        let mut domain_gaps = IndexMap::new();
        domain_gaps.insert(
            "cloud".to_string(),
            vec!["azure".to_string(), "deployment".to_string()],
        );

        AnalysisResult {
            predicted_group: Some("Cloud Engineer".to_string()),
            critical_domains: vec!["cloud".to_string()],
            suggested_titles: vec!["Cloud Engineer".to_string(), "Platform Engineer".to_string()],
            domain_scores,
            domain_gaps,
            overall_score: 60.0,
            trust_score: 100.0 / 3.0,
            visibility_score: 0.0,
        }
    }

    #[test]
    fn round1_keeps_one_decimal() {
        assert_eq!(round1(33.333_333), 33.3);
        assert_eq!(round1(66.666_666), 66.7);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(100.0), 100.0);
    }
}
