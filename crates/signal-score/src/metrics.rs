use crate::domain::{DomainMatch, percentage};
use signal_core::TokenSet;
use std::collections::BTreeSet;

/// A domain counts toward visibility when its score is strictly above this.
pub const VISIBILITY_THRESHOLD: f64 = 40.0;

/// Whole-document scores derived from the per-domain matches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateMetrics {
    pub overall: f64,
    pub trust: f64,
    pub visibility: f64,
}

impl AggregateMetrics {
    pub fn compute(matches: &[DomainMatch<'_>], resume: &TokenSet, critical_domains: &[String]) -> Self {
        Self {
            overall: overall_score(matches, resume),
            trust: trust_score(matches, critical_domains),
            visibility: visibility_score(matches),
        }
    }
}

/// Share of all job-relevant keywords (across scored domains) found in the résumé.
pub fn overall_score(matches: &[DomainMatch<'_>], resume: &TokenSet) -> f64 {
    let relevant: BTreeSet<&str> = matches
        .iter()
        .flat_map(|m| m.jd_keywords.iter().copied())
        .collect();
    let found = relevant.iter().filter(|kw| resume.contains(kw)).count();
    percentage(found, relevant.len())
}

/// Mean score over the scored domains that belong to the predicted group.
///
/// Critical domains the job description never touches are not counted.
pub fn trust_score(matches: &[DomainMatch<'_>], critical_domains: &[String]) -> f64 {
    let scores: Vec<f64> = matches
        .iter()
        .filter(|m| critical_domains.iter().any(|d| d == m.domain))
        .map(|m| m.score)
        .collect();
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Ratio of well-covered domains to gap volume, over domains that have gaps.
///
/// Each gapped domain adds `gaps + 1` to the denominator and one hit to the
/// numerator if its score is above [`VISIBILITY_THRESHOLD`].
pub fn visibility_score(matches: &[DomainMatch<'_>]) -> f64 {
    let mut hits = 0usize;
    let mut total = 0usize;
    for m in matches.iter().filter(|m| m.has_gap()) {
        total += m.gaps.len() + 1;
        if m.score > VISIBILITY_THRESHOLD {
            hits += 1;
        }
    }
    percentage(hits, total)
}
