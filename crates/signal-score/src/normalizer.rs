use crate::segment::Segmenter;
use regex::Regex;
use signal_core::TokenSet;
use std::sync::LazyLock;

/// Tokens must be longer than this many characters to survive.
const MIN_TOKEN_CHARS: usize = 2;

/// Lowercase letter immediately followed by an uppercase one ("wordOne").
static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("case boundary pattern"));

/// URLs with any scheme, and anything shaped like an email address.
///
/// The scheme starts at a word boundary and has no `.` or `-`, so a word
/// glued to the front of a URL by punctuation survives.
static LINK_OR_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-z][a-z0-9+]*://\S+|\S+@\S+").expect("link pattern")
});

/// ASCII punctuation and digits.
static PUNCT_OR_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[[:punct:]0-9]").expect("punctuation pattern"));

/// Turns raw extracted document text into a [`TokenSet`].
///
/// Steps, in order:
/// 1. split glued camel-case words ("wordOne" -> "word One")
/// 2. lowercase
/// 3. drop URLs and email addresses
/// 4. drop ASCII punctuation and digits
/// 5. split on whitespace, keep tokens longer than two characters
///
/// With a [`Segmenter`] attached, long tokens that are really several
/// vocabulary words run together are split into those words.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    segmenter: Option<Segmenter>,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_segmenter(mut self, segmenter: Segmenter) -> Self {
        self.segmenter = Some(segmenter);
        self
    }

    pub fn normalize(&self, text: &str) -> TokenSet {
        let spaced = CASE_BOUNDARY.replace_all(text, "${1} ${2}");
        let lower = spaced.to_lowercase();
        let unlinked = LINK_OR_EMAIL.replace_all(&lower, "");
        let cleaned = PUNCT_OR_DIGIT.replace_all(&unlinked, "");

        let mut tokens = TokenSet::new();
        for word in cleaned.split_whitespace() {
            match self.segmenter.as_ref().and_then(|s| s.segment(word)) {
                Some(parts) => tokens.extend(parts.into_iter().filter(|p| is_kept(p))),
                None if is_kept(word) => {
                    tokens.insert(word.to_string());
                }
                None => {}
            }
        }
        tokens
    }
}

/// Normalize with the default settings (no segmentation).
pub fn normalize(text: &str) -> TokenSet {
    Normalizer::new().normalize(text)
}

/// Whether normalizing `keyword` on its own yields exactly that keyword.
///
/// Ontology keywords that fail this (digits, punctuation, two letters or
/// fewer, uppercase) can never match a normalized document.
pub fn is_reachable(keyword: &str) -> bool {
    let tokens = normalize(keyword);
    tokens.len() == 1 && tokens.contains(keyword)
}

fn is_kept(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_CHARS
}
