use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::neighbors::knn_classifier::{KNNClassifier, KNNClassifierParameters};
use super::{invalid_param, to_class_labels, IClassifier, ITrainable};
use crate::error::{EvalError, Result};

/// KNN vie iba predict, decision_function ani predict_proba nemá
pub struct KnnClassifier
{
    model: Option<KNNClassifier<f64, i32, DenseMatrix<f64>, Vec<i32>, Euclidian<f64>>>,
    k: usize,
}

impl KnnClassifier
{
    pub fn new() -> Self
    {
        Self { model: None, k: 3 }
    }
}

impl Default for KnnClassifier
{
    fn default() -> Self
    {
        Self::new()
    }
}

impl IClassifier for KnnClassifier
{
    fn get_name(&self) -> &str { "K-Nearest Neighbors" }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>
    {
        let model = self.model
            .as_ref()
            .ok_or_else(|| EvalError::NotFitted(self.get_name().to_string()))?;
        let labels = model.predict(x)?;
        Ok(labels.into_iter().map(f64::from).collect())
    }
}

impl ITrainable for KnnClassifier
{
    fn train(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()>
    {
        let labels = to_class_labels(x, y)?;
        let params = KNNClassifierParameters::default().with_k(self.k);
        self.model = Some(KNNClassifier::fit(x, &labels, params)?);
        Ok(())
    }

    fn get_supported_params(&self) -> Vec<&str>
    {
        vec!["k"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>
    {
        match key {
            "k" => {
                let new_k = value.parse::<usize>()
                    .map_err(|_| invalid_param(key, "K must be a number"))?;
                if new_k == 0 {
                    return Err(invalid_param(key, "K must be at least 1"));
                }
                self.k = new_k;
                Ok(())
            }
            _ => Err(invalid_param(key, "unknown parameter for KNN")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_but_has_no_scores() {
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![0.0],
            vec![0.1],
            vec![0.2],
            vec![5.0],
            vec![5.1],
            vec![5.2],
        ])
        .unwrap();
        let y = vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0];

        let mut model = KnnClassifier::new();
        model.train(&x, &y).unwrap();

        assert_eq!(model.predict(&x).unwrap(), y);
        assert!(matches!(
            model.decision_function(&x),
            Err(EvalError::Unsupported { capability: "decision_function", .. })
        ));
        assert!(matches!(
            model.predict_proba(&x),
            Err(EvalError::Unsupported { capability: "predict_proba", .. })
        ));
    }

    #[test]
    fn k_must_be_positive() {
        let mut model = KnnClassifier::new();
        assert!(model.set_param("k", "0").is_err());
        assert!(model.set_param("k", "five").is_err());
        assert!(model.set_param("k", "5").is_ok());
        assert_eq!(model.get_supported_params(), vec!["k"]);
    }
}
