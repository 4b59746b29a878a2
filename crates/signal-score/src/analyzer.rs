use crate::category::CategoryPredictor;
use crate::domain::DomainScorer;
use crate::metrics::AggregateMetrics;
use crate::normalizer::Normalizer;
use crate::segment::Segmenter;
use indexmap::IndexMap;
use signal_core::{AnalysisResult, Ontology, PredictionPolicy, SignalError, TokenSet};

/// Knobs for an [`Analyzer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub policy: PredictionPolicy,
    /// Split long glued tokens into ontology/base vocabulary words.
    pub segmentation: bool,
}

/// Runs the full pipeline for one résumé / job description pair:
/// normalize both texts, score domains, predict the occupational group,
/// then derive overall, trust and visibility scores.
///
/// Holds only a shared reference to the ontology, so any number of analyzers
/// can run concurrently over the same ontology.
pub struct Analyzer<'a> {
    ontology: &'a Ontology,
    policy: PredictionPolicy,
    normalizer: Normalizer,
}

impl<'a> Analyzer<'a> {
    pub fn new(ontology: &'a Ontology) -> Self {
        Self {
            ontology,
            policy: PredictionPolicy::default(),
            normalizer: Normalizer::new(),
        }
    }

    pub fn policy(mut self, policy: PredictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable segmentation over the base vocabulary plus the ontology's keywords.
    pub fn segmentation(mut self, enabled: bool) -> Self {
        self.normalizer = if enabled {
            Normalizer::new().with_segmenter(Segmenter::for_ontology(self.ontology))
        } else {
            Normalizer::new()
        };
        self
    }

    pub fn config(self, config: AnalyzerConfig) -> Self {
        self.policy(config.policy).segmentation(config.segmentation)
    }

    /// Analyze raw texts. `None` when either text yields no tokens.
    pub fn analyze(&self, resume_text: &str, job_text: &str) -> Option<AnalysisResult> {
        let resume = self.normalizer.normalize(resume_text);
        let job = self.normalizer.normalize(job_text);
        tracing::debug!(
            resume_tokens = resume.len(),
            job_tokens = job.len(),
            "normalized documents"
        );
        self.analyze_tokens(&resume, &job)
    }

    /// Analyze already-normalized token sets. `None` when either set is empty.
    pub fn analyze_tokens(&self, resume: &TokenSet, job: &TokenSet) -> Option<AnalysisResult> {
        if resume.is_empty() || job.is_empty() {
            tracing::debug!("insufficient input, skipping analysis");
            return None;
        }

        let matches = DomainScorer::new(self.ontology).score(resume, job);
        let group = CategoryPredictor::new(self.ontology)
            .policy(self.policy)
            .predict(resume, job);

        let critical_domains: Vec<String> =
            group.map(|g| g.domains().to_vec()).unwrap_or_default();
        let suggested_titles: Vec<String> =
            group.map(|g| g.example_titles().to_vec()).unwrap_or_default();

        let metrics = AggregateMetrics::compute(&matches, resume, &critical_domains);

        let mut domain_scores = IndexMap::with_capacity(matches.len());
        let mut domain_gaps = IndexMap::new();
        for m in &matches {
            domain_scores.insert(m.domain.to_string(), m.score);
            if m.has_gap() {
                domain_gaps.insert(
                    m.domain.to_string(),
                    m.gaps.iter().map(|g| g.to_string()).collect(),
                );
            }
        }

        tracing::debug!(
            scored_domains = domain_scores.len(),
            gapped_domains = domain_gaps.len(),
            overall = metrics.overall,
            "analysis complete"
        );

        Some(AnalysisResult {
            predicted_group: group.map(|g| g.name().to_string()),
            critical_domains,
            suggested_titles,
            domain_scores,
            domain_gaps,
            overall_score: metrics.overall,
            trust_score: metrics.trust,
            visibility_score: metrics.visibility,
        })
    }
}

/// Analyze with an optional ontology, refusing to run without one.
///
/// `Ok(None)` means the input texts were insufficient.
pub fn analyze(
    ontology: Option<&Ontology>,
    resume_text: &str,
    job_text: &str,
) -> Result<Option<AnalysisResult>, SignalError> {
    let ontology = ontology.ok_or(SignalError::OntologyUnavailable)?;
    Ok(Analyzer::new(ontology).analyze(resume_text, job_text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cloud_ontology() -> Ontology {
        Ontology::builder()
            .domain("cloud", ["aws", "azure deployment"])
            .group("Cloud Engineer", ["cloud"], ["Cloud Engineer", "Platform Engineer"])
            .build()
    }

    fn sample_ontology() -> Ontology {
        Ontology::builder()
            .domain("cloud", ["aws", "azure deployment", "kubernetes"])
            .domain("data", ["spark", "kafka streaming", "warehouse"])
            .domain("delivery", ["agile", "scrum", "stakeholder management"])
            .group("Cloud Engineer", ["cloud", "delivery"], ["Cloud Engineer"])
            .group("Data Engineer", ["data", "cloud"], ["Data Engineer"])
            .build()
    }

    #[test]
    fn cloud_scenario() {
        let ontology = cloud_ontology();
        let result = Analyzer::new(&ontology)
            .analyze(
                "Experienced with AWS services.",
                "We need AWS and Azure deployment experience.",
            )
            .unwrap();

        assert_eq!(result.predicted_group.as_deref(), Some("Cloud Engineer"));
        assert_eq!(result.critical_domains, vec!["cloud"]);
        assert_eq!(result.suggested_titles, vec!["Cloud Engineer", "Platform Engineer"]);
        assert!((result.domain_scores["cloud"] - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.domain_gaps["cloud"], vec!["azure", "deployment"]);
        assert!((result.overall_score - 100.0 / 3.0).abs() < 1e-9);
        assert!((result.trust_score - 100.0 / 3.0).abs() < 1e-9);
        // 33.3 is not above 40: zero hits over (2 + 1)
        assert_eq!(result.visibility_score, 0.0);
    }

    #[test]
    fn job_without_known_keywords() {
        let ontology = sample_ontology();
        let result = Analyzer::new(&ontology)
            .analyze("Gardener with pruning skills", "Looking for a gardener")
            .unwrap();

        assert!(result.domain_scores.is_empty());
        assert!(result.domain_gaps.is_empty());
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.trust_score, 0.0);
        assert_eq!(result.visibility_score, 0.0);
        assert_eq!(result.predicted_group.as_deref(), Some("Cloud Engineer"));
    }

    #[test]
    fn no_groups_means_no_prediction() {
        let ontology = Ontology::builder().domain("cloud", ["aws"]).build();
        let result = Analyzer::new(&ontology).analyze("aws", "aws").unwrap();
        assert!(result.predicted_group.is_none());
        assert!(result.critical_domains.is_empty());
        assert!(result.suggested_titles.is_empty());
        assert_eq!(result.trust_score, 0.0);
        assert_eq!(result.overall_score, 100.0);
    }

    #[test]
    fn identical_documents_score_full() {
        let ontology = sample_ontology();
        let text = "Agile data engineer: Spark, Kafka streaming, AWS, Kubernetes, warehouse.";
        let result = Analyzer::new(&ontology).analyze(text, text).unwrap();

        assert_eq!(result.overall_score, 100.0);
        assert!(result.domain_gaps.is_empty());
        assert!(result.domain_scores.values().all(|s| *s == 100.0));
        assert_eq!(result.predicted_group.as_deref(), Some("Data Engineer"));
        assert_eq!(result.trust_score, 100.0);
    }

    #[test]
    fn empty_text_is_insufficient_input() {
        let ontology = sample_ontology();
        let analyzer = Analyzer::new(&ontology);
        assert!(analyzer.analyze("", "aws").is_none());
        assert!(analyzer.analyze("aws", "").is_none());
        assert!(analyzer.analyze("1 2 3", "aws").is_none());
    }

    #[test]
    fn missing_ontology_is_refused() {
        let err = analyze(None, "aws", "aws").unwrap_err();
        assert!(matches!(err, SignalError::OntologyUnavailable));
    }

    #[test]
    fn free_function_delegates() {
        let ontology = cloud_ontology();
        let result = analyze(Some(&ontology), "aws", "aws azure").unwrap().unwrap();
        assert_eq!(result.overall_score, 50.0);
        assert!(analyze(Some(&ontology), "", "aws").unwrap().is_none());
    }

    #[test]
    fn domain_maps_follow_ontology_order() {
        let ontology = sample_ontology();
        let result = Analyzer::new(&ontology)
            .analyze("nothing relevant here", "scrum spark aws")
            .unwrap();
        let order: Vec<&str> = result.domain_scores.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["cloud", "data", "delivery"]);
        let gap_order: Vec<&str> = result.domain_gaps.keys().map(String::as_str).collect();
        assert_eq!(gap_order, order);
    }

    #[test]
    fn segmentation_recovers_glued_keywords() {
        let ontology = sample_ontology();
        let job = "stakeholder management and kafka streaming";
        let glued_resume = "stakeholdermanagement kafkastreaming";

        let plain = Analyzer::new(&ontology).analyze(glued_resume, job).unwrap();
        assert_eq!(plain.overall_score, 0.0);

        let segmented = Analyzer::new(&ontology)
            .segmentation(true)
            .analyze(glued_resume, job)
            .unwrap();
        assert_eq!(segmented.overall_score, 100.0);
    }

    #[test]
    fn config_applies_policy() {
        let ontology = sample_ontology();
        let config = AnalyzerConfig {
            policy: PredictionPolicy::ResumeRefined,
            segmentation: false,
        };
        // Job leans cloud+delivery, résumé only shares the data terms.
        let result = Analyzer::new(&ontology)
            .config(config)
            .analyze("spark", "aws kubernetes agile spark")
            .unwrap();
        assert_eq!(result.predicted_group.as_deref(), Some("Data Engineer"));

        let default = Analyzer::new(&ontology)
            .analyze("spark", "aws kubernetes agile spark")
            .unwrap();
        assert_eq!(default.predicted_group.as_deref(), Some("Cloud Engineer"));
    }

    #[test]
    fn concurrent_analyses_share_one_ontology() {
        let ontology = sample_ontology();
        let results: Vec<Option<AnalysisResult>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| Analyzer::new(&ontology).analyze("aws spark", "aws spark agile"))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        for result in &results {
            assert_eq!(result, &results[0]);
        }
    }
}
