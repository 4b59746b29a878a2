use crate::domain::percentage;
use regex::Regex;
use signal_core::{DomainCoverage, Ontology, SignalDomain, StrengthReport, StrengthWeights};
use std::sync::LazyLock;

/// Résumés with at least this many words get the full length term.
pub const MLI_WORD_THRESHOLD: usize = 300;

const MLI_FULL: f64 = 1.0;
const MLI_SHORT: f64 = 0.5;

/// Runs of anything that is not a letter or a digit.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{Alphabetic}\p{N}]+").expect("non-word pattern"));

/// Lowercase words joined by single spaces, padded with a space on each side.
///
/// A phrase matches a document when its padded form is a substring of the
/// document's padded form, so "aws" never matches inside "laws".
fn padded_words(text: &str) -> String {
    let lower = text.to_lowercase();
    let spaced = NON_WORD.replace_all(&lower, " ");
    format!(" {} ", spaced.trim())
}

/// Phrase-level matcher behind the signal-strength composite.
///
/// Unlike [`DomainScorer`](crate::DomainScorer), which compares normalized
/// word sets, this matches whole ontology phrases (terms and aliases) against
/// the raw texts and rates the résumé by how many domains it touches.
pub struct StrengthScorer<'a> {
    ontology: &'a Ontology,
    weights: StrengthWeights,
}

impl<'a> StrengthScorer<'a> {
    pub fn new(ontology: &'a Ontology) -> Self {
        Self {
            ontology,
            weights: StrengthWeights::default(),
        }
    }

    pub fn weights(mut self, weights: StrengthWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn score(&self, resume_text: &str, job_text: &str) -> StrengthReport {
        let resume = padded_words(resume_text);
        let job = padded_words(job_text);

        let domains: Vec<DomainCoverage> = self
            .ontology
            .domains()
            .map(|domain| coverage(domain, &resume, &job))
            .collect();
        let matched_domains = domains.iter().filter(|d| d.match_ratio > 0.0).count();
        let signal_strength = percentage(matched_domains, domains.len()) / 100.0;

        let resume_words = resume_text.split_whitespace().count();
        let mli = if resume_words >= MLI_WORD_THRESHOLD {
            MLI_FULL
        } else {
            MLI_SHORT
        };

        let total = self.weights.total();
        let score = if total > 0.0 {
            100.0 * (self.weights.signal_strength * signal_strength + self.weights.mli * mli)
                / total
        } else {
            0.0
        };

        tracing::debug!(matched_domains, resume_words, score, "signal strength computed");

        StrengthReport {
            domains,
            matched_domains,
            signal_strength,
            resume_words,
            mli,
            score,
        }
    }
}

fn coverage(domain: &SignalDomain, resume: &str, job: &str) -> DomainCoverage {
    let mut job_phrases = Vec::new();
    let mut resume_phrases = Vec::new();
    let mut missing = Vec::new();

    for phrase in domain.phrases() {
        let key = padded_words(phrase);
        if key.trim().is_empty() {
            continue;
        }
        let in_job = job.contains(&key);
        let in_resume = resume.contains(&key);
        if in_resume {
            resume_phrases.push(phrase.clone());
        }
        if in_job {
            job_phrases.push(phrase.clone());
            if !in_resume {
                missing.push(phrase.clone());
            }
        }
    }

    let found = job_phrases.len() - missing.len();
    DomainCoverage {
        domain: domain.name().to_string(),
        match_ratio: percentage(found, job_phrases.len()) / 100.0,
        job_phrases,
        resume_phrases,
        missing,
    }
}
