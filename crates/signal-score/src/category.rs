use signal_core::{OccupationalGroup, Ontology, PredictionPolicy, TokenSet};

/// One occupational group and its keyword-overlap score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupScore<'a> {
    pub group: &'a OccupationalGroup,
    pub score: usize,
}

/// Picks the occupational group that best fits a job description.
///
/// Each group's vocabulary is the union of its domains' keywords. Under
/// [`PredictionPolicy::JobVocabulary`] a group scores one point per
/// job-description token in that vocabulary; under
/// [`PredictionPolicy::ResumeRefined`] only tokens the résumé shares count.
/// The first group in ontology order wins ties.
pub struct CategoryPredictor<'a> {
    ontology: &'a Ontology,
    policy: PredictionPolicy,
}

impl<'a> CategoryPredictor<'a> {
    pub fn new(ontology: &'a Ontology) -> Self {
        Self {
            ontology,
            policy: PredictionPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: PredictionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Score every group, in ontology order.
    pub fn rank(&self, resume: &TokenSet, job: &TokenSet) -> Vec<GroupScore<'a>> {
        self.ontology
            .groups()
            .map(|group| {
                let keywords = self.ontology.group_keywords(group);
                let score = keywords
                    .iter()
                    .filter(|kw| job.contains(kw))
                    .filter(|kw| match self.policy {
                        PredictionPolicy::JobVocabulary => true,
                        PredictionPolicy::ResumeRefined => resume.contains(kw),
                    })
                    .count();
                GroupScore { group, score }
            })
            .collect()
    }

    /// Best-scoring group, or `None` when the ontology has no groups.
    pub fn predict(&self, resume: &TokenSet, job: &TokenSet) -> Option<&'a OccupationalGroup> {
        let mut best: Option<GroupScore<'a>> = None;
        for candidate in self.rank(resume, job) {
            if best.as_ref().is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }

        let best = best?;
        tracing::debug!(
            group = best.group.name(),
            score = best.score,
            policy = %self.policy,
            "predicted occupational group"
        );
        Some(best.group)
    }
}
