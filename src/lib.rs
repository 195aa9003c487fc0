//! Vyhodnotenie binárneho klasifikátora na trénovacích a testovacích dátach:
//! accuracy, F1, ROC-AUC, confusion matrix a ROC krivka.

pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod evaluation;
pub mod models;

pub use config::EvaluatorConfig;
pub use data::{train_test_split, DataSplit};
pub use display::{NoopRenderer, Renderer, TerminalRenderer};
pub use error::{EvalError, Result};
pub use evaluation::{
    evaluate, ConfusionMatrix, Evaluation, MetricBundle, ModelEvaluator, RocCurve, ScoreMode,
    SplitScores, TestFigures,
};
pub use models::{ClassifierFactory, IClassifier, ITrainable, KnnClassifier, LogRegClassifier};
