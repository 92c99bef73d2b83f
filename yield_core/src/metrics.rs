use std::fmt;

use crate::{Dataset, MlError, Model, Result};

/// Coefficient of determination (R²) of a model over a dataset.
///
/// Lies in (−∞, 1.0]: 1.0 is a perfect fit, 0.0 is no better than predicting
/// the mean label, and negative values are worse than the mean.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AccuracyScore(f64);

impl AccuracyScore {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<AccuracyScore> for f64 {
    fn from(score: AccuracyScore) -> Self {
        score.0
    }
}

impl fmt::Display for AccuracyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Goodness-of-fit diagnostics computed from one pass of predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    pub r2: AccuracyScore,
    /// Root mean squared error, in yield units.
    pub rmse: f64,
    /// Mean absolute error, in yield units.
    pub mae: f64,
    /// Number of records the model was scored on.
    pub samples: usize,
}

/// Scores `model` against every record of `dataset`.
///
/// # Errors
/// Returns `MlError::InvalidInput` if the dataset is empty, or the first
/// error the model raises.
pub fn evaluate<M: Model>(model: &M, dataset: &Dataset) -> Result<AccuracyScore> {
    fit_report(model, dataset).map(|report| report.r2)
}

/// Scores `model` against `dataset`, also reporting absolute error measures.
///
/// # Errors
/// Same as [`evaluate`].
pub fn fit_report<M: Model>(model: &M, dataset: &Dataset) -> Result<FitReport> {
    if dataset.is_empty() {
        return Err(MlError::InvalidInput(
            "cannot score a model on an empty dataset".into(),
        ));
    }

    let predicted = model.predict_many(dataset.iter().map(|r| &r.covariates))?;
    let observed = dataset.labels();
    let r2 = r2_score(&observed, &predicted)?;

    let n = observed.len() as f64;
    let (sq, abs) = observed
        .iter()
        .zip(&predicted)
        .map(|(y, y_pred)| y - y_pred)
        .fold((0.0, 0.0), |(sq, abs), e| (sq + e * e, abs + e.abs()));

    let report = FitReport {
        r2,
        rmse: (sq / n).sqrt(),
        mae: abs / n,
        samples: dataset.len(),
    };

    log::info!(
        "scored model on {} record(s): r2={:.4}, rmse={:.4}, mae={:.4}",
        report.samples,
        report.r2.value(),
        report.rmse,
        report.mae
    );

    Ok(report)
}

/// Computes `1 - SS_res / SS_tot` between observed and predicted values.
///
/// When every observed value is identical `SS_tot` is zero and the ratio is
/// undefined: the score is then 1.0 for an exact fit and 0.0 otherwise.
///
/// # Errors
/// Returns `MlError::InvalidInput` if `observed` is empty, and
/// `MlError::ShapeMismatch` if the slices have different lengths.
pub fn r2_score(observed: &[f64], predicted: &[f64]) -> Result<AccuracyScore> {
    if observed.is_empty() {
        return Err(MlError::InvalidInput(
            "cannot compute r2 over zero samples".into(),
        ));
    }

    if predicted.len() != observed.len() {
        return Err(MlError::ShapeMismatch {
            what: "predictions",
            got: predicted.len(),
            expected: observed.len(),
        });
    }

    let mean = observed.iter().sum::<f64>() / observed.len() as f64;
    let ss_tot: f64 = observed.iter().map(|y| (y - mean).powi(2)).sum();
    let ss_res: f64 = observed
        .iter()
        .zip(predicted)
        .map(|(y, y_pred)| (y - y_pred).powi(2))
        .sum();

    if ss_tot == 0.0 {
        log::warn!("observed values have zero variance, r2 falls back to an exact-fit check");
        let score = if ss_res == 0.0 { 1.0 } else { 0.0 };
        return Ok(AccuracyScore(score));
    }

    Ok(AccuracyScore(1.0 - ss_res / ss_tot))
}
