use std::{error::Error, fmt, io, path::PathBuf};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, MlError>;

/// Errors produced while loading, scoring or querying a yield model.
#[derive(Debug)]
pub enum MlError {
    /// The dataset is empty or one of its records is malformed.
    InvalidInput(String),

    /// Sweep bounds that cannot produce an ascending sequence of points.
    InvalidRange { start: f64, end: f64, step: f64 },

    /// The underlying model failed to produce a prediction.
    ModelInference(String),

    /// A shape invariant was violated (e.g. mismatched lengths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "predictions").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// A model artifact was read but does not describe a usable model.
    InvalidModel(String),

    /// A model artifact or dataset file could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl MlError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for MlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            MlError::InvalidRange { start, end, step } => write!(
                f,
                "invalid range: start={start}, end={end}, step={step} (need start < end and a positive step giving distinct points)"
            ),
            MlError::ModelInference(msg) => write!(f, "model inference failed: {msg}"),
            MlError::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            MlError::InvalidModel(msg) => write!(f, "invalid model: {msg}"),
            MlError::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
        }
    }
}

impl Error for MlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MlError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
