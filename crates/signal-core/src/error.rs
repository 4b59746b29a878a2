/// Errors that can occur in Signal operations.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("ontology error: {0}")]
    Ontology(String),

    #[error("ontology unavailable")]
    OntologyUnavailable,

    #[error("config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for SignalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SignalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Ontology(err.to_string())
    }
}
