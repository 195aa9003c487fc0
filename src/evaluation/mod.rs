pub mod evaluator;
pub mod metrics;
pub mod report;
pub mod roc;
pub mod score_mode;

pub use evaluator::{evaluate, ModelEvaluator};
pub use metrics::{ConfusionMatrix, SplitScores};
pub use report::{Evaluation, MetricBundle, TestFigures};
pub use roc::{RocCurve, RocPoint};
pub use score_mode::ScoreMode;
