mod activation;
mod dense;
mod linear;
mod scaler;
mod sequential;

pub use activation::ActFn;
pub use dense::Dense;
pub use linear::Linear;
pub use scaler::Scaler;
pub use sequential::Sequential;

use ndarray::ArrayView1;

use crate::{Covariates, MlError, Model, Result};

/// The regressor families a model artifact can describe.
#[derive(Debug, Clone)]
pub enum Regressor {
    Linear(Linear),
    Sequential(Sequential),
}

impl Regressor {
    pub fn kind(&self) -> &'static str {
        match self {
            Regressor::Linear(_) => "linear",
            Regressor::Sequential(_) => "sequential",
        }
    }

    pub fn forward(&self, features: &[f64; Covariates::LEN]) -> f64 {
        match self {
            Regressor::Linear(r) => r.forward(features),
            Regressor::Sequential(r) => r.forward(ArrayView1::from(&features[..])),
        }
    }
}

/// A fitted yield model: optional feature standardization followed by a
/// regressor.
#[derive(Debug, Clone)]
pub struct YieldModel {
    scaler: Option<Scaler>,
    regressor: Regressor,
}

impl YieldModel {
    pub fn new(scaler: Option<Scaler>, regressor: Regressor) -> Self {
        Self { scaler, regressor }
    }

    pub fn regressor(&self) -> &Regressor {
        &self.regressor
    }

    pub fn is_scaled(&self) -> bool {
        self.scaler.is_some()
    }
}

impl From<Regressor> for YieldModel {
    fn from(regressor: Regressor) -> Self {
        Self::new(None, regressor)
    }
}

impl Model for YieldModel {
    fn predict(&self, x: &Covariates) -> Result<f64> {
        let mut features = x.to_array();
        if let Some(scaler) = &self.scaler {
            features = scaler.transform(features);
        }

        let y = self.regressor.forward(&features);
        if !y.is_finite() {
            return Err(MlError::ModelInference(format!(
                "{} regressor produced {y} for {x:?}",
                self.regressor.kind()
            )));
        }

        Ok(y)
    }
}
