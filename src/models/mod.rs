use crate::error::{EvalError, Result};
use crate::evaluation::metrics::{check_lengths, check_non_empty, validate_binary};
use smartcore::linalg::basic::matrix::DenseMatrix;

pub mod factory;
pub mod knn;
pub mod logreg;

pub use factory::ClassifierFactory;
pub use knn::KnnClassifier;
pub use logreg::LogRegClassifier;

/// Natrénovaný binárny klasifikátor, ktorý sa dá vyhodnotiť.
///
/// `predict` je povinný. `decision_function` a `predict_proba` nie každý
/// model podporuje, predvolene vracajú `EvalError::Unsupported`.
pub trait IClassifier {
    fn get_name(&self) -> &str;

    /// Predikcia tried 0.0 / 1.0 pre každý riadok
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>;

    /// Neohraničené skóre, vyššie = pozitívna trieda
    fn decision_function(&self, _x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        Err(EvalError::Unsupported {
            model: self.get_name().to_string(),
            capability: "decision_function",
        })
    }

    /// Pravdepodobnosti tried, matica n x 2 (stĺpec 1 = trieda 1)
    fn predict_proba(&self, _x: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        Err(EvalError::Unsupported {
            model: self.get_name().to_string(),
            capability: "predict_proba",
        })
    }
}

/// Klasifikátor, ktorý sa dá konfigurovať a trénovať
pub trait ITrainable: IClassifier {
    fn train(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()>;

    fn get_supported_params(&self) -> Vec<&str>;

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Skontroluje binárne labely a prevedie ich na triedy pre smartcore
pub(crate) fn to_class_labels(x: &DenseMatrix<f64>, y: &[f64]) -> Result<Vec<i32>> {
    use smartcore::linalg::basic::arrays::Array;

    check_non_empty("y_train", y)?;
    check_lengths("y_train rows", x.shape().0, y.len())?;
    validate_binary("y_train", y)?;
    Ok(y.iter().map(|v| *v as i32).collect())
}

pub(crate) fn invalid_param(name: &str, reason: &str) -> EvalError {
    EvalError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
