use super::roc::RocCurve;
use crate::error::{EvalError, Result};
use serde::Serialize;
use smartcore::metrics::accuracy;

/// Confusion matrix pre binárnu klasifikáciu
/// Rozloženie [[TN, FP], [FN, TP]], riadky = skutočný label, stĺpce = predikcia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ConfusionMatrix {
    pub tn: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
    pub tp: usize,
}

impl ConfusionMatrix {
    /// Spočíta TN, FP, FN, TP z labelov a predikcií
    pub fn from_labels(what: &'static str, y_true: &[f64], y_pred: &[f64]) -> Result<Self> {
        check_non_empty(what, y_true)?;
        check_lengths(what, y_true.len(), y_pred.len())?;
        validate_binary(what, y_true)?;
        validate_binary("predictions", y_pred)?;

        let mut matrix = ConfusionMatrix::default();
        for (t, p) in y_true.iter().zip(y_pred.iter()) {
            match (*t == 1.0, *p == 1.0) {
                (true, true) => matrix.tp += 1,
                (false, false) => matrix.tn += 1,
                (false, true) => matrix.fp += 1,
                (true, false) => matrix.fn_ += 1,
            }
        }
        Ok(matrix)
    }

    pub fn as_grid(&self) -> [[usize; 2]; 2] {
        [[self.tn, self.fp], [self.fn_, self.tp]]
    }

    pub fn total(&self) -> usize {
        self.tn + self.fp + self.fn_ + self.tp
    }

    pub fn max_count(&self) -> usize {
        self.tn.max(self.fp).max(self.fn_).max(self.tp)
    }

    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    /// Recall = sensitivity
    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    pub fn specificity(&self) -> f64 {
        ratio(self.tn, self.tn + self.fp)
    }

    /// F1 pre pozitívnu triedu, 0.0 ak nie je žiadny pozitívny label ani predikcia
    pub fn f1(&self) -> f64 {
        ratio(2 * self.tp, 2 * self.tp + self.fp + self.fn_)
    }

    /// Matthews Correlation Coefficient
    pub fn mcc(&self) -> f64 {
        let (tp, tn, fp, fn_) = (
            self.tp as f64,
            self.tn as f64,
            self.fp as f64,
            self.fn_ as f64,
        );
        let denom = ((tp + fp) * (tp + fn_) * (tn + fp) * (tn + fn_)).sqrt();
        if denom > 0.0 {
            (tp * tn - fp * fn_) / denom
        } else {
            0.0
        }
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

/// Metriky jedného splitu (train alebo test)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitScores {
    pub accuracy: f64,
    pub f1: f64,
    /// None ak sa ROC-AUC nepočítalo (ScoreMode::Skip)
    pub roc_auc: Option<f64>,
}

impl SplitScores {
    pub fn compute(
        what: &'static str,
        y_true: &[f64],
        y_pred: &[f64],
        score: Option<&[f64]>,
    ) -> Result<Self> {
        let accuracy = accuracy_score(what, y_true, y_pred)?;
        let f1 = f1_score(what, y_true, y_pred)?;
        let roc_auc = match score {
            Some(score) => Some(roc_auc(what, y_true, score)?),
            None => None,
        };

        Ok(Self {
            accuracy,
            f1,
            roc_auc,
        })
    }
}

/// Podiel správnych predikcií
pub fn accuracy_score(what: &'static str, y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    check_non_empty(what, y_true)?;
    check_lengths(what, y_true.len(), y_pred.len())?;
    validate_binary(what, y_true)?;
    validate_binary("predictions", y_pred)?;

    // smartcore accuracy chce Ord labely
    let y_true_vec: Vec<i32> = y_true.iter().map(|v| *v as i32).collect();
    let y_pred_vec: Vec<i32> = y_pred.iter().map(|v| *v as i32).collect();
    Ok(accuracy(&y_true_vec, &y_pred_vec))
}

/// F1 skóre pre pozitívnu triedu (binary averaging)
pub fn f1_score(what: &'static str, y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    Ok(ConfusionMatrix::from_labels(what, y_true, y_pred)?.f1())
}

/// ROC-AUC zo spojitého skóre, plocha pod ROC krivkou.
/// Rovnaké skóre pozitívneho a negatívneho príkladu sa ráta ako 0.5.
pub fn roc_auc(what: &'static str, y_true: &[f64], score: &[f64]) -> Result<f64> {
    check_roc_input(what, y_true, score)?;
    Ok(RocCurve::compute(y_true, score)?.auc)
}

/// Overí vstup pre ROC-AUC aj ROC krivku
pub(crate) fn check_roc_input(what: &'static str, y_true: &[f64], score: &[f64]) -> Result<()> {
    check_non_empty(what, y_true)?;
    check_lengths(what, y_true.len(), score.len())?;
    validate_binary(what, y_true)?;

    if let Some((index, value)) = score.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(EvalError::NonFiniteScore {
            index,
            value: *value,
        });
    }

    let positives = y_true.iter().filter(|t| **t == 1.0).count();
    if positives == 0 || positives == y_true.len() {
        return Err(EvalError::SingleClass(what));
    }
    Ok(())
}

pub(crate) fn check_non_empty(what: &'static str, values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(EvalError::EmptyInput(what));
    }
    Ok(())
}

pub(crate) fn check_lengths(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(EvalError::LengthMismatch {
            what,
            expected,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn validate_binary(what: &'static str, values: &[f64]) -> Result<()> {
    match values
        .iter()
        .enumerate()
        .find(|(_, v)| **v != 0.0 && **v != 1.0)
    {
        Some((index, value)) => Err(EvalError::NonBinaryLabel {
            what,
            index,
            value: *value,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reference_accuracy_and_f1() {
        let y_true = [0.0, 1.0, 1.0, 0.0];
        let y_pred = [0.0, 1.0, 0.0, 0.0];

        assert_relative_eq!(accuracy_score("y_test", &y_true, &y_pred).unwrap(), 0.75);
        assert_relative_eq!(
            f1_score("y_test", &y_true, &y_pred).unwrap(),
            2.0 / 3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn confusion_matrix_layout() {
        let y_true = [0.0, 1.0, 1.0, 0.0, 1.0];
        let y_pred = [1.0, 1.0, 0.0, 0.0, 1.0];
        let cm = ConfusionMatrix::from_labels("y_test", &y_true, &y_pred).unwrap();

        assert_eq!(cm.as_grid(), [[1, 1], [1, 2]]);
        assert_eq!(cm.total(), 5);
        assert_eq!(cm.max_count(), 2);
        assert_relative_eq!(cm.precision(), 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(cm.recall(), 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(cm.specificity(), 0.5);
    }

    #[test]
    fn f1_is_zero_without_positives() {
        let y_true = [0.0, 0.0, 0.0];
        let y_pred = [0.0, 0.0, 0.0];
        assert_eq!(f1_score("y_train", &y_true, &y_pred).unwrap(), 0.0);
    }

    #[test]
    fn mcc_perfect_and_inverse() {
        let y = [0.0, 1.0, 0.0, 1.0];
        let inverse = [1.0, 0.0, 1.0, 0.0];
        let perfect = ConfusionMatrix::from_labels("y", &y, &y).unwrap();
        let wrong = ConfusionMatrix::from_labels("y", &y, &inverse).unwrap();
        assert_relative_eq!(perfect.mcc(), 1.0);
        assert_relative_eq!(wrong.mcc(), -1.0);
    }

    #[test]
    fn roc_auc_distinct_scores() {
        let y_true = [0.0, 0.0, 1.0, 1.0];
        let score = [0.1, 0.4, 0.35, 0.8];
        assert_relative_eq!(roc_auc("y_test", &y_true, &score).unwrap(), 0.75);
    }

    #[test]
    fn roc_auc_with_tied_scores_apart() {
        // páry (pozitívny, negatívny): 0.9 vyhrá dvakrát, 0.4 remizuje s 0.4 a prehrá s 0.6
        let y_true = [0.0, 1.0, 1.0, 0.0];
        let score = [0.4, 0.9, 0.4, 0.6];
        assert_relative_eq!(roc_auc("y_test", &y_true, &score).unwrap(), 0.625);
    }

    #[test]
    fn roc_auc_matches_plotted_curve() {
        let y_true = [1.0, 0.0, 1.0, 0.0, 1.0, 0.0];
        let score = [0.7, 0.7, 0.2, 0.5, 0.5, 0.2];
        let curve = RocCurve::compute(&y_true, &score).unwrap();
        assert_relative_eq!(roc_auc("y_test", &y_true, &score).unwrap(), curve.auc);
        assert_relative_eq!(curve.auc, 0.5);
    }

    #[test]
    fn accuracy_rejects_non_binary_predictions() {
        let err = accuracy_score("y_test", &[0.0, 1.0], &[0.0, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::NonBinaryLabel {
                what: "predictions",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn roc_auc_rejects_single_class() {
        let err = roc_auc("y_train", &[1.0, 1.0], &[0.2, 0.7]).unwrap_err();
        assert!(matches!(err, EvalError::SingleClass("y_train")));
    }

    #[test]
    fn roc_auc_rejects_nan_score() {
        let err = roc_auc("y_test", &[0.0, 1.0], &[0.2, f64::NAN]).unwrap_err();
        assert!(matches!(err, EvalError::NonFiniteScore { index: 1, .. }));
    }

    #[test]
    fn rejects_non_binary_labels() {
        let err = f1_score("y_test", &[0.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::NonBinaryLabel {
                what: "y_test",
                index: 1,
                ..
            }
        ));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = accuracy_score("y_test", &[0.0, 1.0, 1.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            EvalError::LengthMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_split() {
        let err = accuracy_score("y_train", &[], &[]).unwrap_err();
        assert!(matches!(err, EvalError::EmptyInput("y_train")));
    }

    #[test]
    fn split_scores_without_score_skip_roc() {
        let scores =
            SplitScores::compute("y_test", &[0.0, 1.0], &[0.0, 1.0], None).unwrap();
        assert_eq!(scores.roc_auc, None);
        assert_relative_eq!(scores.accuracy, 1.0);
        assert_relative_eq!(scores.f1, 1.0);
    }
}
