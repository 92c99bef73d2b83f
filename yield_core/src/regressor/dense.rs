use ndarray::{Array1, Array2, ArrayView1};

use super::ActFn;
use crate::{MlError, Result};

/// A fully connected layer: `a = act(x · W + b)`.
///
/// Weights are stored as `(dim_in, dim_out)`.
#[derive(Debug, Clone)]
pub struct Dense {
    weights: Array2<f64>,
    biases: Array1<f64>,
    act_fn: Option<ActFn>,
}

impl Dense {
    /// Creates a new `Dense` layer.
    ///
    /// # Errors
    /// Returns `MlError::ShapeMismatch` if `biases` does not have one entry per
    /// output column of `weights`.
    pub fn new(weights: Array2<f64>, biases: Array1<f64>, act_fn: Option<ActFn>) -> Result<Self> {
        if biases.len() != weights.ncols() {
            return Err(MlError::ShapeMismatch {
                what: "biases",
                got: biases.len(),
                expected: weights.ncols(),
            });
        }

        Ok(Self {
            weights,
            biases,
            act_fn,
        })
    }

    /// Returns `(dim_in, dim_out)`.
    pub fn dim(&self) -> (usize, usize) {
        self.weights.dim()
    }

    pub fn forward(&self, x: ArrayView1<f64>) -> Array1<f64> {
        let z = x.dot(&self.weights) + &self.biases;

        match self.act_fn {
            Some(act_fn) => z.mapv_into(|z| act_fn.f(z)),
            None => z,
        }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn forward_is_affine_without_activation() {
        let layer = Dense::new(array![[1.0, 2.0], [3.0, 4.0]], array![0.5, -1.0], None).unwrap();
        let out = layer.forward(array![1.0, 1.0].view());

        assert_eq!(out, array![4.5, 5.0]);
    }

    #[test]
    fn forward_applies_activation() {
        let layer = Dense::new(array![[1.0], [-1.0]], array![0.0], Some(ActFn::Relu)).unwrap();

        assert_eq!(layer.forward(array![1.0, 3.0].view()), array![0.0]);
        assert_eq!(layer.forward(array![3.0, 1.0].view()), array![2.0]);
    }

    #[test]
    fn rejects_bias_length_mismatch() {
        let err = Dense::new(array![[1.0, 2.0]], array![0.0], None).unwrap_err();
        assert!(matches!(
            err,
            MlError::ShapeMismatch {
                what: "biases",
                got: 1,
                expected: 2
            }
        ));
    }
}
