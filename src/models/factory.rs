use super::{ITrainable, KnnClassifier, LogRegClassifier};
use crate::error::{EvalError, Result};

/// Factory pre vytváranie klasifikátorov podľa názvu
pub struct ClassifierFactory;

impl ClassifierFactory {
    /// Vytvorí klasifikátor na základe názvu
    pub fn create(model_type: &str) -> Result<Box<dyn ITrainable>> {
        match model_type {
            "logreg" | "logistic_regression" => Ok(Box::new(LogRegClassifier::new())),
            "knn" => Ok(Box::new(KnnClassifier::new())),
            _ => Err(EvalError::InvalidParameter {
                name: "model".to_string(),
                reason: format!("unknown model '{}'", model_type),
            }),
        }
    }

    /// Vráti zoznam všetkých dostupných modelov
    pub fn available_models() -> Vec<&'static str> {
        vec!["logreg", "knn"]
    }

    /// Ktoré zdroje skóre pre ROC-AUC model podporuje
    pub fn get_model_description(model_type: &str) -> Option<&'static str> {
        match model_type {
            "logreg" => Some("Logistic Regression - predict, decision_function, predict_proba"),
            "knn" => Some("K-Nearest Neighbors - predict only"),
            _ => None,
        }
    }
}
