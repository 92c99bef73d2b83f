use ndarray::{Array1, ArrayView1};

use super::Dense;
use crate::{Covariates, MlError, Result};

/// A feed-forward regressor: information flows through its dense layers in
/// order and the single output unit is the prediction.
#[derive(Debug, Clone)]
pub struct Sequential {
    layers: Vec<Dense>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Errors
    /// Returns `MlError::InvalidModel` if there are no layers, the first layer
    /// does not take one input per covariate, adjacent layers disagree on their
    /// dimensions, or the last layer has more than one output.
    pub fn new<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Dense>,
    {
        let layers: Vec<Dense> = layers.into_iter().collect();

        let (Some(first), Some(last)) = (layers.first(), layers.last()) else {
            return Err(MlError::InvalidModel(
                "model must have at least one layer".into(),
            ));
        };

        let (n_in, _) = first.dim();
        if n_in != Covariates::LEN {
            return Err(MlError::InvalidModel(format!(
                "first layer takes {n_in} inputs, expected {}",
                Covariates::LEN
            )));
        }

        // Adjacent layers must have compatible dimensions: prev.m == next.n
        for (i, pair) in layers.windows(2).enumerate() {
            let (_, prev_m) = pair[0].dim();
            let (curr_n, _) = pair[1].dim();
            if prev_m != curr_n {
                return Err(MlError::InvalidModel(format!(
                    "layer {}: input size ({curr_n}) does not match previous layer output size ({prev_m})",
                    i + 1
                )));
            }
        }

        let (_, n_out) = last.dim();
        if n_out != 1 {
            return Err(MlError::InvalidModel(format!(
                "last layer has {n_out} outputs, expected 1"
            )));
        }

        Ok(Self { layers })
    }

    /// Makes a forward pass through the network.
    pub fn forward(&self, x: ArrayView1<f64>) -> f64 {
        let mut a: Array1<f64> = x.to_owned();

        for layer in &self.layers {
            a = layer.forward(a.view());
        }

        a[0]
    }
}
