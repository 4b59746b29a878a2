//! Normalization, domain scoring, category prediction, aggregate metrics,
//! and the phrase-level signal-strength composite.

mod analyzer;
mod category;
mod domain;
mod metrics;
mod normalizer;
mod segment;
mod strength;

pub use analyzer::{Analyzer, AnalyzerConfig, analyze};
pub use category::{CategoryPredictor, GroupScore};
pub use domain::{DomainMatch, DomainScorer, score_domain};
pub use metrics::{
    AggregateMetrics, VISIBILITY_THRESHOLD, overall_score, trust_score, visibility_score,
};
pub use normalizer::{Normalizer, is_reachable, normalize};
pub use segment::Segmenter;
pub use strength::{MLI_WORD_THRESHOLD, StrengthScorer};
