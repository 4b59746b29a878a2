use crate::SignalError;
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// A named competency area and the keyword phrases that signal it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalDomain {
    name: String,
    phrases: Vec<String>,
    keywords: BTreeSet<String>,
}

impl SignalDomain {
    pub fn new(name: impl Into<String>, phrases: Vec<String>) -> Self {
        let keywords = phrases
            .iter()
            .flat_map(|phrase| {
                phrase
                    .to_lowercase()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self {
            name: name.into(),
            phrases,
            keywords,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phrases as written in the ontology, in source order.
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// Individual lowercase words of every phrase.
    pub fn keywords(&self) -> &BTreeSet<String> {
        &self.keywords
    }
}

/// A job-category bucket tied to a subset of signal domains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationalGroup {
    name: String,
    domains: Vec<String>,
    example_titles: Vec<String>,
}

impl OccupationalGroup {
    pub fn new(name: impl Into<String>, domains: Vec<String>, example_titles: Vec<String>) -> Self {
        Self {
            name: name.into(),
            domains,
            example_titles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn example_titles(&self) -> &[String] {
        &self.example_titles
    }
}

/// Immutable domain and group tables.
///
/// Built once (usually from a JSON file) and then shared by reference with
/// every analysis. Both tables keep the order of the source document, which
/// decides tie-breaks during category prediction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ontology {
    domains: IndexMap<String, SignalDomain>,
    groups: IndexMap<String, OccupationalGroup>,
}

#[derive(Deserialize)]
struct RawOntology {
    #[serde(rename = "SignalDomains")]
    signal_domains: IndexMap<String, RawDomain>,
    #[serde(rename = "SOC_Groups")]
    soc_groups: IndexMap<String, RawGroup>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDomain {
    Phrases(Vec<String>),
    Detailed {
        terms: Vec<String>,
        #[serde(default)]
        aliases: Vec<String>,
    },
}

impl RawDomain {
    fn into_phrases(self) -> Vec<String> {
        match self {
            RawDomain::Phrases(phrases) => phrases,
            RawDomain::Detailed { mut terms, aliases } => {
                terms.extend(aliases);
                terms
            }
        }
    }
}

#[derive(Deserialize)]
struct RawGroup {
    signal_domains: Vec<String>,
    #[serde(default)]
    example_titles: Vec<String>,
}

impl Ontology {
    pub fn builder() -> OntologyBuilder {
        OntologyBuilder::default()
    }

    /// Parse an ontology from JSON text. A leading byte-order mark is ignored.
    pub fn from_json_str(json: &str) -> Result<Self, SignalError> {
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        let raw: RawOntology = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, SignalError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    /// Load and validate an ontology file.
    pub fn load(path: &Path) -> Result<Self, SignalError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SignalError::Io(format!("{}: {e}", path.display())))?;
        let ontology = Self::from_json_str(&json).map_err(|e| match e {
            SignalError::Ontology(msg) => SignalError::Ontology(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        tracing::debug!(
            path = %path.display(),
            domains = ontology.domain_count(),
            groups = ontology.group_count(),
            "ontology loaded"
        );
        Ok(ontology)
    }

    fn from_raw(raw: RawOntology) -> Self {
        let mut builder = Self::builder();
        for (name, domain) in raw.signal_domains {
            builder = builder.domain(name, domain.into_phrases());
        }
        for (name, group) in raw.soc_groups {
            builder = builder.group(name, group.signal_domains, group.example_titles);
        }
        builder.build()
    }

    pub fn domain(&self, name: &str) -> Option<&SignalDomain> {
        self.domains.get(name)
    }

    pub fn domains(&self) -> impl Iterator<Item = &SignalDomain> {
        self.domains.values()
    }

    pub fn group(&self, name: &str) -> Option<&OccupationalGroup> {
        self.groups.get(name)
    }

    pub fn groups(&self) -> impl Iterator<Item = &OccupationalGroup> {
        self.groups.values()
    }

    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Union of the keyword sets of the group's domains.
    ///
    /// Domains missing from the domain table contribute nothing.
    pub fn group_keywords(&self, group: &OccupationalGroup) -> BTreeSet<&str> {
        group
            .domains()
            .iter()
            .filter_map(|name| self.domains.get(name))
            .flat_map(|domain| domain.keywords().iter().map(String::as_str))
            .collect()
    }

    /// Every distinct keyword across all domains.
    pub fn vocabulary(&self) -> BTreeSet<&str> {
        self.domains
            .values()
            .flat_map(|domain| domain.keywords().iter().map(String::as_str))
            .collect()
    }

    /// `(group, domain)` pairs where the group names a domain that does not exist.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        let domains = &self.domains;
        self.groups
            .values()
            .flat_map(move |group| {
                group
                    .domains()
                    .iter()
                    .filter(move |name| !domains.contains_key(name.as_str()))
                    .map(move |name| (group.name(), name.as_str()))
            })
            .collect()
    }
}

/// Incremental constructor for [`Ontology`].
///
/// Re-adding a domain or group with an existing name replaces it in place.
#[derive(Debug, Default)]
pub struct OntologyBuilder {
    domains: IndexMap<String, SignalDomain>,
    groups: IndexMap<String, OccupationalGroup>,
}

impl OntologyBuilder {
    pub fn domain<I, S>(mut self, name: impl Into<String>, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let phrases = phrases.into_iter().map(Into::into).collect();
        self.domains
            .insert(name.clone(), SignalDomain::new(name, phrases));
        self
    }

    pub fn group<D, T, S1, S2>(mut self, name: impl Into<String>, domains: D, titles: T) -> Self
    where
        D: IntoIterator<Item = S1>,
        T: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
    {
        let name = name.into();
        let group = OccupationalGroup::new(
            name.clone(),
            domains.into_iter().map(Into::into).collect(),
            titles.into_iter().map(Into::into).collect(),
        );
        self.groups.insert(name, group);
        self
    }

    pub fn build(self) -> Ontology {
        let ontology = Ontology {
            domains: self.domains,
            groups: self.groups,
        };
        for (group, domain) in ontology.dangling_references() {
            tracing::warn!(group, domain, "group references unknown signal domain");
        }
        ontology
    }
}
