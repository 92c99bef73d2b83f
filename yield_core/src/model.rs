use crate::{Covariates, Result};

/// A fitted regression model mapping covariates to a yield estimate.
///
/// A `Model` only evaluates a function. It does not:
/// - own or read datasets,
/// - train or update itself,
/// - keep state between calls.
///
/// Implementations must be side-effect free so that the accuracy evaluation
/// and the pH sweep can share one instance for the lifetime of the process.
pub trait Model {
    /// Predicts the yield for a single set of covariates.
    ///
    /// # Errors
    /// Returns `MlError::ModelInference` if the model cannot produce a finite
    /// prediction for `x`.
    fn predict(&self, x: &Covariates) -> Result<f64>;

    /// Predicts the yield for each input, in order.
    ///
    /// Stops at the first failure.
    ///
    /// # Errors
    /// Propagates the first error returned by [`Model::predict`].
    fn predict_many<'a, I>(&self, xs: I) -> Result<Vec<f64>>
    where
        I: IntoIterator<Item = &'a Covariates>,
        Self: Sized,
    {
        xs.into_iter().map(|x| self.predict(x)).collect()
    }
}
