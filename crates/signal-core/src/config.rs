use crate::SignalError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weights of the two terms in the signal-strength composite.
///
/// The composite is divided by the weight sum, so weights need not add up
/// to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrengthWeights {
    /// Weight of the résumé length term.
    pub mli: f64,
    /// Weight of the share of domains with any matched phrase.
    pub signal_strength: f64,
}

impl Default for StrengthWeights {
    fn default() -> Self {
        Self {
            mli: 0.4,
            signal_strength: 0.6,
        }
    }
}

impl StrengthWeights {
    pub fn total(&self) -> f64 {
        self.mli + self.signal_strength
    }

    /// Weights must be finite, non-negative, and not both zero.
    pub fn validate(&self) -> Result<(), SignalError> {
        for (name, value) in [("mli", self.mli), ("signal_strength", self.signal_strength)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SignalError::Config(format!(
                    "weight {name} must be a non-negative number, got {value}"
                )));
            }
        }
        if self.total() <= 0.0 {
            return Err(SignalError::Config("weights must not all be zero".into()));
        }
        Ok(())
    }
}

/// Scoring settings read from a JSON file.
///
/// ```json
/// { "weights": { "mli": 0.4, "signal_strength": 0.6 } }
/// ```
///
/// Missing fields take their defaults; unknown fields are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    pub weights: StrengthWeights,
}

impl ScoringConfig {
    pub fn from_json_str(json: &str) -> Result<Self, SignalError> {
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        let config: Self =
            serde_json::from_str(json).map_err(|e| SignalError::Config(e.to_string()))?;
        config.weights.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, SignalError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| SignalError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json).map_err(|err| match err {
            SignalError::Config(msg) => SignalError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }
}
