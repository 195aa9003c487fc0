use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};
use super::{invalid_param, to_class_labels, IClassifier, ITrainable};
use crate::error::{EvalError, Result};

pub struct LogRegClassifier {
    model: Option<LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>>,
    alpha: f64,
}

impl LogRegClassifier {
    pub fn new() -> Self {
        Self {
            model: None,
            alpha: 0.0,
        }
    }

    fn fitted(&self) -> Result<&LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>> {
        self.model
            .as_ref()
            .ok_or_else(|| EvalError::NotFitted(self.get_name().to_string()))
    }
}

impl Default for LogRegClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl IClassifier for LogRegClassifier {
    fn get_name(&self) -> &str {
        "Logistic Regression"
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let labels = self.fitted()?.predict(x)?;
        Ok(labels.into_iter().map(f64::from).collect())
    }

    /// x·w + b, rovnaká hodnota, ktorú smartcore prahuje sigmoidom
    fn decision_function(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let model = self.fitted()?;
        let weights: Vec<f64> = model.coefficients().iterator(0).copied().collect();
        let intercept = *model.intercept().get((0, 0));

        let (rows, cols) = x.shape();
        if weights.len() != cols {
            return Err(EvalError::Model(format!(
                "expected {} binary coefficients, model has {}",
                cols,
                weights.len()
            )));
        }

        Ok((0..rows)
            .map(|i| {
                (0..cols)
                    .map(|j| *x.get((i, j)) * weights[j])
                    .sum::<f64>()
                    + intercept
            })
            .collect())
    }

    fn predict_proba(&self, x: &DenseMatrix<f64>) -> Result<DenseMatrix<f64>> {
        let rows: Vec<Vec<f64>> = self
            .decision_function(x)?
            .into_iter()
            .map(|z| {
                let p = sigmoid(z);
                vec![1.0 - p, p]
            })
            .collect();
        Ok(DenseMatrix::from_2d_vec(&rows)?)
    }
}

impl ITrainable for LogRegClassifier {
    fn train(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()> {
        let labels = to_class_labels(x, y)?;

        let mut params = LogisticRegressionParameters::default();
        params.alpha = self.alpha;

        self.model = Some(LogisticRegression::fit(x, &labels, params)?);
        Ok(())
    }

    fn get_supported_params(&self) -> Vec<&str> {
        vec!["alpha"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "alpha" => {
                let alpha: f64 = value
                    .parse()
                    .map_err(|_| invalid_param(key, "alpha must be a decimal number"))?;
                if alpha < 0.0 {
                    return Err(invalid_param(key, "alpha must not be negative"));
                }
                self.alpha = alpha;
                Ok(())
            }
            _ => Err(invalid_param(key, "unknown parameter for Logistic Regression")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable() -> (DenseMatrix<f64>, Vec<f64>) {
        let x = DenseMatrix::from_2d_vec(&vec![
            vec![0.0, 0.1],
            vec![0.2, 0.0],
            vec![0.3, 0.4],
            vec![0.1, 0.3],
            vec![3.0, 3.1],
            vec![3.2, 2.9],
            vec![2.8, 3.3],
            vec![3.5, 3.0],
        ])
        .unwrap();
        let y = vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0];
        (x, y)
    }

    #[test]
    fn untrained_model_reports_not_fitted() {
        let (x, _) = separable();
        let model = LogRegClassifier::new();
        assert!(matches!(model.predict(&x), Err(EvalError::NotFitted(_))));
    }

    #[test]
    fn scores_agree_with_predictions() {
        let (x, y) = separable();
        let mut model = LogRegClassifier::new();
        model.set_param("alpha", "0.1").unwrap();
        model.train(&x, &y).unwrap();

        let preds = model.predict(&x).unwrap();
        let decision = model.decision_function(&x).unwrap();
        let proba = model.predict_proba(&x).unwrap();

        assert_eq!(preds.len(), 8);
        assert_eq!(proba.shape(), (8, 2));
        for i in 0..8 {
            let p1 = *proba.get((i, 1));
            assert!((0.0..=1.0).contains(&p1));
            assert!((p1 + *proba.get((i, 0)) - 1.0).abs() < 1e-12);
            assert_eq!(preds[i] == 1.0, decision[i] > 0.0);
        }
    }

    #[test]
    fn rejects_bad_alpha() {
        let mut model = LogRegClassifier::new();
        assert!(model.set_param("alpha", "abc").is_err());
        assert!(model.set_param("alpha", "-1").is_err());
        assert!(model.set_param("k", "3").is_err());
        assert!(model.set_param("alpha", "0.5").is_ok());
    }

    #[test]
    fn rejects_non_binary_training_labels() {
        let (x, mut y) = separable();
        y[0] = 2.0;
        let mut model = LogRegClassifier::new();
        assert!(matches!(
            model.train(&x, &y),
            Err(EvalError::NonBinaryLabel { .. })
        ));
    }
}
