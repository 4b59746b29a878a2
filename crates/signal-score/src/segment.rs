use signal_core::Ontology;
use std::collections::HashSet;

/// Only tokens longer than this are candidates for segmentation.
const MIN_SEGMENT_CHARS: usize = 10;

/// Words that commonly end up glued together when résumés and job postings
/// lose their spacing during PDF extraction.
const BASE_VOCABULARY: &[&str] = &[
    "agile", "analysis", "analyst", "analytics", "and", "application", "architecture", "business",
    "change", "client", "cloud", "communication", "compliance", "continuous", "cross", "customer",
    "data", "delivery", "design", "development", "digital", "engineer", "engineering",
    "enterprise", "for", "functional", "governance", "improvement", "infrastructure",
    "integration", "leadership", "learning", "machine", "management", "manager", "of", "office",
    "operations", "performance", "planning", "platform", "portfolio", "process", "product",
    "program", "project", "quality", "requirements", "risk", "security", "senior", "service",
    "software", "solutions", "stakeholder", "strategic", "strategy", "systems", "team",
    "technical", "technology", "the", "to", "transformation", "with",
];

/// Greedy dictionary segmenter for long tokens with no spaces left in them.
///
/// "stakeholdermanagement" becomes ["stakeholder", "management"] when both
/// words are in the vocabulary. Longer prefixes are tried first; a token that
/// cannot be covered completely by vocabulary words is left alone.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    vocabulary: HashSet<String>,
    max_word_len: usize,
}

impl Segmenter {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segmenter = Self::default();
        segmenter.extend(words);
        segmenter
    }

    /// Segmenter over the built-in vocabulary.
    pub fn with_base_vocabulary() -> Self {
        Self::new(BASE_VOCABULARY)
    }

    /// Built-in vocabulary plus every keyword of `ontology`.
    pub fn for_ontology(ontology: &Ontology) -> Self {
        let mut segmenter = Self::with_base_vocabulary();
        segmenter.extend(ontology.vocabulary());
        segmenter
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().to_lowercase();
            if word.is_empty() {
                continue;
            }
            self.max_word_len = self.max_word_len.max(word.len());
            self.vocabulary.insert(word);
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Split `token` into vocabulary words.
    ///
    /// Returns `None` for short tokens and for tokens with no full cover.
    pub fn segment(&self, token: &str) -> Option<Vec<String>> {
        if token.chars().count() <= MIN_SEGMENT_CHARS {
            return None;
        }

        let next = self.cover(token);
        let mut parts = Vec::new();
        let mut start = 0;
        while start < token.len() {
            let end = next[start]?;
            parts.push(token[start..end].to_string());
            start = end;
        }
        Some(parts)
    }

    /// For every byte offset, where the chosen word starting there ends.
    ///
    /// Filled right to left so each offset only consults offsets after it.
    /// `None` means `token[start..]` has no full cover. Only words up to
    /// `max_word_len` bytes long are tried, longest first.
    fn cover(&self, token: &str) -> Vec<Option<usize>> {
        let len = token.len();
        let mut next: Vec<Option<usize>> = vec![None; len + 1];

        for start in (0..len).rev() {
            if !token.is_char_boundary(start) {
                continue;
            }
            let limit = len.min(start + self.max_word_len);
            let chosen = (start + 1..=limit).rev().find(|&end| {
                token.is_char_boundary(end)
                    && (end == len || next[end].is_some())
                    && self.vocabulary.contains(&token[start..end])
            });
            next[start] = chosen;
        }
        next
    }
}
