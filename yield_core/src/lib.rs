//! Yield model scoring and pH sweeps.
//!
//! The crate loads a fitted regression model and a labeled dataset, scores
//! the model with the coefficient of determination, and predicts the yield
//! across a range of soil acidity for fixed climate inputs.

pub mod artifact;
mod covariates;
mod data;
mod error;
pub mod metrics;
mod model;
pub mod regressor;
pub mod sweep;

pub use artifact::{load_model, ModelArtifact};
pub use covariates::{Climate, Covariates};
pub use data::{Dataset, Record, LABEL_COLUMN};
pub use error::{MlError, Result};
pub use metrics::{evaluate, fit_report, r2_score, AccuracyScore, FitReport};
pub use model::Model;
pub use regressor::YieldModel;
pub use sweep::{point, sweep, sweep_with, SweepPoint, SweepRange, SweepResult};
