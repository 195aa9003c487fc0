use super::metrics::check_roc_input;
use crate::error::Result;
use serde::Serialize;

/// Bod ROC krivky pri danom prahu
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub threshold: f64,
    pub fpr: f64,
    pub tpr: f64,
}

/// ROC krivka testovacieho splitu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    pub points: Vec<RocPoint>,
    /// Plocha pod krivkou (lichobežníkové pravidlo)
    pub auc: f64,
}

impl RocCurve {
    /// Vypočíta krivku zo skóre, jeden bod na každý rozdielny prah.
    /// Začína v (0, 0) s prahom +inf a končí v (1, 1).
    pub fn compute(y_true: &[f64], score: &[f64]) -> Result<Self> {
        check_roc_input("roc curve", y_true, score)?;

        let positives = y_true.iter().filter(|t| **t == 1.0).count() as f64;
        let negatives = y_true.len() as f64 - positives;

        let mut order: Vec<usize> = (0..score.len()).collect();
        order.sort_by(|&a, &b| {
            score[b]
                .partial_cmp(&score[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut points = vec![RocPoint {
            threshold: f64::INFINITY,
            fpr: 0.0,
            tpr: 0.0,
        }];
        let (mut tp, mut fp) = (0.0, 0.0);

        for (pos, &idx) in order.iter().enumerate() {
            if y_true[idx] == 1.0 {
                tp += 1.0;
            } else {
                fp += 1.0;
            }

            // Rovnaké skóre zdieľajú jeden bod
            let last_of_threshold = order
                .get(pos + 1)
                .map_or(true, |&next| score[next] != score[idx]);
            if last_of_threshold {
                points.push(RocPoint {
                    threshold: score[idx],
                    fpr: fp / negatives,
                    tpr: tp / positives,
                });
            }
        }

        let auc = points
            .windows(2)
            .map(|w| (w[1].fpr - w[0].fpr) * (w[1].tpr + w[0].tpr) / 2.0)
            .sum();

        Ok(Self { points, auc })
    }

    /// Body ako (fpr, tpr) pre graf
    pub fn xy(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.fpr, p.tpr)).collect()
    }
}
