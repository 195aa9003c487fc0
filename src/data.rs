use crate::error::{EvalError, Result};
use crate::evaluation::metrics::{check_lengths, check_non_empty};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Trénovacia a testovacia sada (features + labely)
#[derive(Debug, Clone)]
pub struct DataSplit {
    pub x_train: DenseMatrix<f64>,
    pub x_test: DenseMatrix<f64>,
    pub y_train: Vec<f64>,
    pub y_test: Vec<f64>,
}

impl DataSplit {
    /// Skontroluje, že počet riadkov sedí s počtom labelov
    pub fn new(
        x_train: DenseMatrix<f64>,
        x_test: DenseMatrix<f64>,
        y_train: Vec<f64>,
        y_test: Vec<f64>,
    ) -> Result<Self> {
        check_non_empty("y_train", &y_train)?;
        check_non_empty("y_test", &y_test)?;
        check_lengths("x_train rows", y_train.len(), x_train.shape().0)?;
        check_lengths("x_test rows", y_test.len(), x_test.shape().0)?;

        Ok(Self {
            x_train,
            x_test,
            y_train,
            y_test,
        })
    }

    pub fn num_features(&self) -> usize {
        self.x_train.shape().1
    }

    pub fn train_size(&self) -> usize {
        self.y_train.len()
    }

    pub fn test_size(&self) -> usize {
        self.y_test.len()
    }
}

/// Jednoduchý split bez miešania: prvých `train_ratio` riadkov ide do train
pub fn train_test_split(x: &DenseMatrix<f64>, y: &[f64], train_ratio: f64) -> Result<DataSplit> {
    if !(train_ratio > 0.0 && train_ratio < 1.0) {
        return Err(EvalError::InvalidParameter {
            name: "train_ratio".to_string(),
            reason: format!("must be between 0 and 1, got {}", train_ratio),
        });
    }

    let (total_samples, num_features) = x.shape();
    check_lengths("x rows", y.len(), total_samples)?;

    let train_size = (total_samples as f64 * train_ratio) as usize;
    if train_size == 0 || train_size == total_samples {
        return Err(EvalError::InvalidParameter {
            name: "train_ratio".to_string(),
            reason: format!(
                "{} of {} samples leaves one side of the split empty",
                train_ratio, total_samples
            ),
        });
    }

    let rows = |range: std::ops::Range<usize>| -> Vec<Vec<f64>> {
        range
            .map(|i| (0..num_features).map(|j| *x.get((i, j))).collect())
            .collect()
    };

    let x_train = DenseMatrix::from_2d_vec(&rows(0..train_size))?;
    let x_test = DenseMatrix::from_2d_vec(&rows(train_size..total_samples))?;

    DataSplit::new(
        x_train,
        x_test,
        y[..train_size].to_vec(),
        y[train_size..].to_vec(),
    )
}
