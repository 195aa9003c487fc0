use super::metrics::{ConfusionMatrix, SplitScores};
use super::report::{write_evaluation, Evaluation, MetricBundle, TestFigures};
use super::roc::RocCurve;
use super::ScoreMode;
use crate::config::EvaluatorConfig;
use crate::data::DataSplit;
use crate::display::{NoopRenderer, Renderer, TerminalRenderer};
use crate::error::{EvalError, Result};
use crate::models::IClassifier;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::io::{self, Write};
use tracing::{debug, info};

/// Vyhodnotí natrénovaný klasifikátor na train aj test splite.
///
/// Počíta accuracy, F1 a ROC-AUC, vypisuje ich a testovací split
/// posiela rendereru (confusion matrix + ROC krivka).
pub struct ModelEvaluator {
    config: EvaluatorConfig,
    renderer: Box<dyn Renderer>,
}

impl ModelEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        let renderer: Box<dyn Renderer> = if config.render {
            Box::new(TerminalRenderer::new())
        } else {
            Box::new(NoopRenderer)
        };
        Self { config, renderer }
    }

    /// Nahradí renderer zvolený podľa `config.render`
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Evaluácia s výpisom na stdout
    pub fn evaluate<M: IClassifier + ?Sized>(&mut self, model: &M, split: &DataSplit) -> Result<Evaluation> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.evaluate_to(model, split, &mut out)
    }

    pub fn evaluate_to<M, W>(&mut self, model: &M, split: &DataSplit, out: &mut W) -> Result<Evaluation>
    where
        M: IClassifier + ?Sized,
        W: Write,
    {
        let mode = self.config.score_mode;
        let model_name = self
            .config
            .model_name
            .clone()
            .unwrap_or_else(|| model.get_name().to_string());
        debug!(
            model = %model_name,
            score_mode = %mode,
            train = split.train_size(),
            test = split.test_size(),
            "evaluating classifier"
        );

        let y_train_preds = model.predict(&split.x_train)?;
        let y_test_preds = model.predict(&split.x_test)?;

        let train_score = score_for(model, &split.x_train, mode)?;
        let test_score = score_for(model, &split.x_test, mode)?;

        let train = SplitScores::compute("y_train", &split.y_train, &y_train_preds, train_score.as_deref())?;
        let test = SplitScores::compute("y_test", &split.y_test, &y_test_preds, test_score.as_deref())?;

        let figures = TestFigures {
            confusion_matrix: ConfusionMatrix::from_labels("y_test", &split.y_test, &y_test_preds)?,
            roc_curve: test_score
                .as_deref()
                .map(|score| RocCurve::compute(&split.y_test, score))
                .transpose()?,
        };

        info!(
            model = %model_name,
            train_accuracy = train.accuracy,
            test_accuracy = test.accuracy,
            test_f1 = test.f1,
            test_roc_auc = ?test.roc_auc,
            "evaluation finished"
        );

        let evaluation = Evaluation {
            model_name,
            score_mode: mode,
            train,
            test,
            figures,
        };
        write_evaluation(out, &evaluation)?;

        self.renderer.render(&evaluation.model_name, &evaluation.figures)?;
        Ok(evaluation)
    }
}

/// Skóre pre ROC-AUC podľa režimu, None pri Skip
fn score_for<M: IClassifier + ?Sized>(
    model: &M,
    x: &DenseMatrix<f64>,
    mode: ScoreMode,
) -> Result<Option<Vec<f64>>> {
    match mode {
        ScoreMode::Skip => Ok(None),
        ScoreMode::DecisionFunction => Ok(Some(model.decision_function(x)?)),
        ScoreMode::PredictProba => Ok(Some(positive_class_column(&model.predict_proba(x)?)?)),
    }
}

/// Stĺpec 1 z predict_proba (pravdepodobnosť triedy 1)
fn positive_class_column(proba: &DenseMatrix<f64>) -> Result<Vec<f64>> {
    let (rows, cols) = proba.shape();
    if cols != 2 {
        return Err(EvalError::ProbaShape(cols));
    }
    Ok((0..rows).map(|i| *proba.get((i, 1))).collect())
}

/// Evaluácia s vykreslením a výpisom na stdout, vracia jednoprvkové zoznamy
/// (train_acc, test_acc, train_f1, test_f1, train_roc_auc, test_roc_auc).
/// Pri `ScoreMode::Skip` sú ROC-AUC zoznamy prázdne.
pub fn evaluate<M: IClassifier + ?Sized>(
    model: &M,
    x_train: &DenseMatrix<f64>,
    x_test: &DenseMatrix<f64>,
    y_train: &[f64],
    y_test: &[f64],
    score_mode: ScoreMode,
) -> Result<MetricBundle> {
    let split = DataSplit::new(x_train.clone(), x_test.clone(), y_train.to_vec(), y_test.to_vec())?;
    let evaluation = ModelEvaluator::new(EvaluatorConfig::new(score_mode)).evaluate(model, &split)?;
    Ok(MetricBundle::from(&evaluation))
}
