//! Signal core domain types, ontology store, and errors.

mod config;
mod error;
mod ontology;
mod types;

pub use config::{ScoringConfig, StrengthWeights};
pub use error::SignalError;
pub use ontology::{OccupationalGroup, Ontology, OntologyBuilder, SignalDomain};
pub use types::{AnalysisResult, DomainCoverage, PredictionPolicy, StrengthReport, TokenSet};
