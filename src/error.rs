//! Chybové typy pre evaluáciu klasifikátorov.

use thiserror::Error;

/// Chyby, ktoré môžu nastať pri evaluácii modelu.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Neplatná hodnota pre výber skóre pre ROC-AUC.
    #[error("The value for score mode should be 'skip', 'yes' or 'no', got '{0}'")]
    InvalidScoreMode(String),

    /// Model nepodporuje požadovanú operáciu.
    #[error("Model '{model}' does not support {capability}")]
    Unsupported {
        model: String,
        capability: &'static str,
    },

    /// Model ešte nebol natrénovaný.
    #[error("Model '{0}' has not been trained")]
    NotFitted(String),

    /// Prázdna sada dát.
    #[error("Empty input: {0}")]
    EmptyInput(&'static str),

    /// Nezhodné dĺžky vstupov.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Label alebo predikcia mimo {0, 1}.
    #[error("{what} must be binary 0/1, found {value} at index {index}")]
    NonBinaryLabel {
        what: &'static str,
        index: usize,
        value: f64,
    },

    /// ROC-AUC potrebuje obe triedy.
    #[error("ROC-AUC needs both classes in {0}, only one is present")]
    SingleClass(&'static str),

    /// Skóre je NaN alebo nekonečno.
    #[error("Score at index {index} is not finite ({value})")]
    NonFiniteScore { index: usize, value: f64 },

    /// predict_proba nevrátil maticu s dvomi stĺpcami.
    #[error("predict_proba must return 2 columns, got {0}")]
    ProbaShape(usize),

    /// Neplatný parameter modelu alebo splitu.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Chyba z knižnice smartcore.
    #[error("Model error: {0}")]
    Model(String),

    /// Chyba pri vykresľovaní.
    #[error("Render failed: {0}")]
    Render(String),

    /// Chyba pri parsovaní konfigurácie.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Chyba pri zápise výstupu.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<smartcore::error::Failed> for EvalError {
    fn from(err: smartcore::error::Failed) -> Self {
        EvalError::Model(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EvalError>;
