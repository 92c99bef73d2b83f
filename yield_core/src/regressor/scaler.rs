use crate::{Covariates, MlError, Result};

/// Per-feature standardization applied before the regressor: `(x - mean) / scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    mean: [f64; Covariates::LEN],
    scale: [f64; Covariates::LEN],
}

impl Scaler {
    /// Creates a new `Scaler`.
    ///
    /// # Errors
    /// Returns `MlError::InvalidModel` if any scale is zero or any value is not
    /// finite.
    pub fn new(mean: [f64; Covariates::LEN], scale: [f64; Covariates::LEN]) -> Result<Self> {
        let names = Covariates::FEATURES;

        for ((name, m), s) in names.iter().zip(mean).zip(scale) {
            if !m.is_finite() || !s.is_finite() || s == 0.0 {
                return Err(MlError::InvalidModel(format!(
                    "scaler for {name} has mean={m}, scale={s}"
                )));
            }
        }

        Ok(Self { mean, scale })
    }

    pub fn transform(&self, mut features: [f64; Covariates::LEN]) -> [f64; Covariates::LEN] {
        for ((x, m), s) in features.iter_mut().zip(self.mean).zip(self.scale) {
            *x = (*x - m) / s;
        }

        features
    }
}
