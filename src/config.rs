use crate::error::Result;
use crate::evaluation::ScoreMode;
use serde::{Deserialize, Serialize};

/// Konfigurácia evaluátora
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Zdroj skóre pre ROC-AUC
    pub score_mode: ScoreMode,
    /// Zobraziť confusion matrix a ROC krivku po výpočte
    pub render: bool,
    /// Prepíše názov modelu v reporte
    pub model_name: Option<String>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            score_mode: ScoreMode::DecisionFunction,
            render: true,
            model_name: None,
        }
    }
}

impl EvaluatorConfig {
    pub fn new(score_mode: ScoreMode) -> Self {
        Self {
            score_mode,
            ..Self::default()
        }
    }

    /// Bez vykresľovania, napr. pre testy alebo batch porovnanie modelov
    pub fn headless(score_mode: ScoreMode) -> Self {
        Self {
            score_mode,
            render: false,
            model_name: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    #[test]
    fn missing_fields_use_defaults() {
        let config = EvaluatorConfig::from_json("{}").unwrap();
        assert_eq!(config, EvaluatorConfig::default());
        assert!(config.render);
    }

    #[test]
    fn parses_short_mode_names() {
        let config =
            EvaluatorConfig::from_json(r#"{"score_mode": "no", "render": false}"#).unwrap();
        assert_eq!(config.score_mode, ScoreMode::PredictProba);
        assert!(!config.render);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = EvaluatorConfig::from_json(r#"{"score_mode": "maybe"}"#).unwrap_err();
        assert!(matches!(err, EvalError::Config(_)));
    }
}
