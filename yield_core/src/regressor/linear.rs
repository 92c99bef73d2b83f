use crate::Covariates;

/// An ordinary least-squares style regressor: `y = intercept + Σ wᵢ·xᵢ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    intercept: f64,
    coefficients: [f64; Covariates::LEN],
}

impl Linear {
    /// Creates a new `Linear` regressor.
    ///
    /// `coefficients` follow the order of [`Covariates::FEATURES`].
    pub fn new(intercept: f64, coefficients: [f64; Covariates::LEN]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    pub fn forward(&self, features: &[f64; Covariates::LEN]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }
}
