use crate::error::EvalError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Odkiaľ sa berie vstup pre ROC-AUC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScoreMode {
    /// ROC-AUC sa nepočíta
    #[serde(rename = "skip")]
    Skip,
    /// Použije sa decision_function modelu
    #[serde(rename = "yes", alias = "decision_function")]
    #[default]
    DecisionFunction,
    /// Použije sa predict_proba, stĺpec pozitívnej triedy
    #[serde(rename = "no", alias = "predict_proba")]
    PredictProba,
}

impl ScoreMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreMode::Skip => "skip",
            ScoreMode::DecisionFunction => "yes",
            ScoreMode::PredictProba => "no",
        }
    }
}

impl FromStr for ScoreMode {
    type Err = EvalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "skip" => Ok(ScoreMode::Skip),
            "yes" | "decision_function" => Ok(ScoreMode::DecisionFunction),
            "no" | "predict_proba" => Ok(ScoreMode::PredictProba),
            _ => Err(EvalError::InvalidScoreMode(value.to_string())),
        }
    }
}

impl fmt::Display for ScoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
