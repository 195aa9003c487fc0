use super::metrics::{ConfusionMatrix, SplitScores};
use super::roc::RocCurve;
use super::ScoreMode;
use serde::Serialize;
use std::io::Write;

/// Podklady pre grafy testovacieho splitu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestFigures {
    pub confusion_matrix: ConfusionMatrix,
    /// None pri ScoreMode::Skip
    pub roc_curve: Option<RocCurve>,
}

/// Výsledok jednej evaluácie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub model_name: String,
    pub score_mode: ScoreMode,
    pub train: SplitScores,
    pub test: SplitScores,
    pub figures: TestFigures,
}

const RULE: &str = "-*-*-*-*-*-*-*-*";

/// Vypíše blok skóre jedného splitu, riadok ROC-AUC iba ak bol vypočítaný
fn write_split_scores<W: Write>(out: &mut W, title: &str, scores: &SplitScores) -> std::io::Result<()> {
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Accuracy: {:?}", scores.accuracy)?;
    writeln!(out, "F1 Score: {:?}", scores.f1)?;
    if let Some(roc_auc) = scores.roc_auc {
        writeln!(out, "ROC-AUC: {:?}", roc_auc)?;
    }
    Ok(())
}

/// Dva prázdne riadky medzi train a test blokom
fn write_separator<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out)
}

/// Celý textový výstup: "Training Scores", oddeľovač, "Testing Scores"
pub fn write_evaluation<W: Write>(out: &mut W, evaluation: &Evaluation) -> std::io::Result<()> {
    write_split_scores(out, "Training Scores", &evaluation.train)?;
    write_separator(out)?;
    write_split_scores(out, "Testing Scores", &evaluation.test)?;
    out.flush()
}

/// Metriky v zoznamoch pre porovnanie modelov.
///
/// Z jednej evaluácie vznikne bundle s jednoprvkovými zoznamami. Ak volajúci
/// posiela ten istý bundle cez viac volaní `record`, zoznamy sa hromadia.
/// ROC-AUC zoznamy obsahujú iba evaluácie, ktoré ROC-AUC počítali.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricBundle {
    pub models: Vec<String>,
    pub train_acc: Vec<f64>,
    pub test_acc: Vec<f64>,
    pub train_f1: Vec<f64>,
    pub test_f1: Vec<f64>,
    pub train_roc_auc: Vec<f64>,
    pub test_roc_auc: Vec<f64>,
}

impl MetricBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, evaluation: &Evaluation) {
        self.models.push(evaluation.model_name.clone());
        self.train_acc.push(evaluation.train.accuracy);
        self.test_acc.push(evaluation.test.accuracy);
        self.train_f1.push(evaluation.train.f1);
        self.test_f1.push(evaluation.test.f1);
        self.train_roc_auc.extend(evaluation.train.roc_auc);
        self.test_roc_auc.extend(evaluation.test.roc_auc);
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// (train_acc, test_acc, train_f1, test_f1, train_roc_auc, test_roc_auc)
    #[allow(clippy::type_complexity)]
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            self.train_acc,
            self.test_acc,
            self.train_f1,
            self.test_f1,
            self.train_roc_auc,
            self.test_roc_auc,
        )
    }
}

impl From<&Evaluation> for MetricBundle {
    fn from(evaluation: &Evaluation) -> Self {
        let mut bundle = MetricBundle::new();
        bundle.record(evaluation);
        bundle
    }
}
