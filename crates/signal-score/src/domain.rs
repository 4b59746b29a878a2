use signal_core::{Ontology, SignalDomain, TokenSet};
use std::collections::BTreeSet;

/// How well the résumé covers one domain's job-description keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainMatch<'a> {
    pub domain: &'a str,
    /// Domain keywords that appear in the job description.
    pub jd_keywords: BTreeSet<&'a str>,
    /// How many of `jd_keywords` the résumé also contains.
    pub matched: usize,
    /// `matched / jd_keywords.len() * 100`, unrounded.
    pub score: f64,
    /// Job-description keywords missing from the résumé, ascending.
    pub gaps: Vec<&'a str>,
}

impl DomainMatch<'_> {
    pub fn has_gap(&self) -> bool {
        !self.gaps.is_empty()
    }
}

/// Per-domain keyword overlap between a résumé and a job description.
pub struct DomainScorer<'a> {
    ontology: &'a Ontology,
}

impl<'a> DomainScorer<'a> {
    pub fn new(ontology: &'a Ontology) -> Self {
        Self { ontology }
    }

    /// Score every domain the job description touches, in ontology order.
    ///
    /// Domains with no keyword in the job description are left out entirely.
    pub fn score(&self, resume: &TokenSet, job: &TokenSet) -> Vec<DomainMatch<'a>> {
        self.ontology
            .domains()
            .filter_map(|domain| score_domain(domain, resume, job))
            .collect()
    }
}

/// Score a single domain. `None` when the job description has none of its keywords.
pub fn score_domain<'a>(
    domain: &'a SignalDomain,
    resume: &TokenSet,
    job: &TokenSet,
) -> Option<DomainMatch<'a>> {
    let jd_keywords: BTreeSet<&str> = domain
        .keywords()
        .iter()
        .map(String::as_str)
        .filter(|kw| job.contains(kw))
        .collect();
    if jd_keywords.is_empty() {
        return None;
    }

    // BTreeSet iteration is ascending, so gaps come out sorted.
    let gaps: Vec<&str> = jd_keywords
        .iter()
        .copied()
        .filter(|kw| !resume.contains(kw))
        .collect();
    let matched = jd_keywords.len() - gaps.len();

    Some(DomainMatch {
        domain: domain.name(),
        score: percentage(matched, jd_keywords.len()),
        jd_keywords,
        matched,
        gaps,
    })
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
