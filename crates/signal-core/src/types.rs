use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Normalized bag of words extracted from one document.
///
/// Every token is lowercase and longer than two characters. Order carries no
/// meaning; use [`TokenSet::to_sorted_vec`] when a stable listing is needed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet(HashSet<String>);

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Insert a token. Returns `false` if it was already present.
    pub fn insert(&mut self, token: String) -> bool {
        self.0.insert(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Tokens in ascending order.
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.0.iter().cloned().collect();
        tokens.sort();
        tokens
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl Extend<String> for TokenSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

/// How the best-fit occupational group is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PredictionPolicy {
    /// Count job description words that belong to the group's vocabulary.
    #[default]
    JobVocabulary,
    /// Count résumé words among the job-relevant part of the group's vocabulary.
    ResumeRefined,
}

impl PredictionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionPolicy::JobVocabulary => "job-vocabulary",
            PredictionPolicy::ResumeRefined => "resume-refined",
        }
    }
}

impl fmt::Display for PredictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing one résumé against one job description.
///
/// Scores are percentages in `[0, 100]` kept at full precision; rounding is
/// left to whoever presents them. Domain maps follow ontology order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub predicted_group: Option<String>,
    pub critical_domains: Vec<String>,
    pub suggested_titles: Vec<String>,
    pub domain_scores: IndexMap<String, f64>,
    pub domain_gaps: IndexMap<String, Vec<String>>,
    pub overall_score: f64,
    pub trust_score: f64,
    pub visibility_score: f64,
}

impl AnalysisResult {
    /// Whether `domain` belongs to the predicted group.
    pub fn is_critical(&self, domain: &str) -> bool {
        self.critical_domains.iter().any(|d| d == domain)
    }

    /// Total number of missing keywords across all domains.
    pub fn gap_count(&self) -> usize {
        self.domain_gaps.values().map(Vec::len).sum()
    }

    pub fn gaps_for(&self, domain: &str) -> &[String] {
        self.domain_gaps
            .get(domain)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Phrase-level coverage of one domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCoverage {
    pub domain: String,
    /// Domain phrases found in the job description, in ontology order.
    pub job_phrases: Vec<String>,
    /// Domain phrases found in the résumé, in ontology order.
    pub resume_phrases: Vec<String>,
    /// Job phrases absent from the résumé.
    pub missing: Vec<String>,
    /// Share of job phrases also found in the résumé, in `[0, 1]`.
    pub match_ratio: f64,
}

/// Signal-strength composite for one résumé / job description pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Every ontology domain, in ontology order.
    pub domains: Vec<DomainCoverage>,
    /// Domains with a match ratio above zero.
    pub matched_domains: usize,
    /// `matched_domains` over the number of ontology domains, in `[0, 1]`.
    pub signal_strength: f64,
    /// Whitespace-separated words in the résumé.
    pub resume_words: usize,
    /// Résumé length term: full for long résumés, half otherwise.
    pub mli: f64,
    /// Weighted composite as a percentage in `[0, 100]`.
    pub score: f64,
}
