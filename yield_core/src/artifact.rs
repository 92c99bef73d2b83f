//! On-disk description of a fitted yield model.
//!
//! An artifact is a JSON document such as:
//!
//! ```json
//! {
//!   "scaler": { "mean": [1000.0, 22.0, 75.0, 6.0], "scale": [250.0, 4.0, 12.0, 0.3] },
//!   "model": {
//!     "linear": {
//!       "intercept": 4.2,
//!       "coefficients": { "rainfall": 0.3, "temperature": 0.1, "humidity": 0.05, "ph": -0.2 }
//!     }
//!   }
//! }
//! ```
//!
//! Linear coefficients are keyed by covariate name, never by position.

use std::{collections::BTreeMap, fs, path::Path};

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::{
    regressor::{ActFn, Dense, Linear, Regressor, Scaler, Sequential, YieldModel},
    Covariates, MlError, Result,
};

/// The specification for the `ActFn` enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnSpec {
    Sigmoid { amp: f64 },
    Relu,
}

/// The specification for a `Dense` layer, weights laid out as `(dim_in, dim_out)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerSpec {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
    #[serde(default)]
    pub act_fn: Option<ActFnSpec>,
}

/// The specification for the `Regressor` enum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressorSpec {
    Linear {
        intercept: f64,
        coefficients: BTreeMap<String, f64>,
    },
    Sequential {
        layers: Vec<LayerSpec>,
    },
}

/// The specification for the `Scaler` struct.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScalerSpec {
    pub mean: [f64; Covariates::LEN],
    pub scale: [f64; Covariates::LEN],
}

/// A serialized yield model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default)]
    pub scaler: Option<ScalerSpec>,
    pub model: RegressorSpec,
}

impl ModelArtifact {
    /// Parses an artifact from its JSON text.
    ///
    /// # Errors
    /// Returns `MlError::InvalidModel` if the text is not a valid artifact.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| MlError::InvalidModel(format!("invalid JSON: {e}")))
    }

    /// Reads an artifact from disk.
    ///
    /// # Errors
    /// Returns `MlError::Io` if the file cannot be read, or `MlError::InvalidModel`
    /// if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MlError::io(path, e))?;
        Self::from_json_str(&content)
    }

    /// Validates the artifact and turns it into a usable model.
    ///
    /// # Errors
    /// Returns `MlError::InvalidModel` if any dimension or value is invalid.
    pub fn build(self) -> Result<YieldModel> {
        let scaler = self
            .scaler
            .map(|spec| Scaler::new(spec.mean, spec.scale))
            .transpose()?;

        let regressor = match self.model {
            RegressorSpec::Linear {
                intercept,
                coefficients,
            } => Regressor::Linear(build_linear(intercept, &coefficients)?),
            RegressorSpec::Sequential { layers } => Regressor::Sequential(build_sequential(layers)?),
        };

        Ok(YieldModel::new(scaler, regressor))
    }
}

/// Loads and builds the model stored at `path`.
///
/// # Errors
/// See [`ModelArtifact::load`] and [`ModelArtifact::build`].
pub fn load_model(path: impl AsRef<Path>) -> Result<YieldModel> {
    let path = path.as_ref();
    let model = ModelArtifact::load(path)?.build()?;

    log::info!(
        "loaded {} model from '{}' (scaled: {})",
        model.regressor().kind(),
        path.display(),
        model.is_scaled()
    );

    Ok(model)
}

fn build_linear(intercept: f64, coefficients: &BTreeMap<String, f64>) -> Result<Linear> {
    if let Some(unknown) = coefficients
        .keys()
        .find(|name| !Covariates::FEATURES.contains(&name.as_str()))
    {
        return Err(MlError::InvalidModel(format!(
            "unknown covariate in coefficients: {unknown}"
        )));
    }

    let mut weights = [0.0; Covariates::LEN];
    for (w, name) in weights.iter_mut().zip(Covariates::FEATURES) {
        *w = *coefficients
            .get(name)
            .ok_or_else(|| MlError::InvalidModel(format!("missing coefficient for {name}")))?;
    }

    if !intercept.is_finite() || weights.iter().any(|w| !w.is_finite()) {
        return Err(MlError::InvalidModel(
            "linear parameters must be finite".into(),
        ));
    }

    Ok(Linear::new(intercept, weights))
}

fn build_sequential(layers: Vec<LayerSpec>) -> Result<Sequential> {
    let dense = layers
        .into_iter()
        .enumerate()
        .map(|(i, spec)| build_dense(i, spec))
        .collect::<Result<Vec<_>>>()?;

    Sequential::new(dense)
}

fn build_dense(idx: usize, spec: LayerSpec) -> Result<Dense> {
    let ctx = |msg: String| MlError::InvalidModel(format!("layer {idx}: {msg}"));

    let n = spec.weights.len();
    let m = spec.weights.first().map_or(0, Vec::len);
    if n == 0 || m == 0 {
        return Err(ctx("weights must not be empty".into()));
    }

    if let Some((row, w)) = spec.weights.iter().enumerate().find(|(_, w)| w.len() != m) {
        return Err(ctx(format!(
            "weight row {row} has {} columns, expected {m}",
            w.len()
        )));
    }

    let flat: Vec<f64> = spec.weights.into_iter().flatten().collect();
    if flat.iter().chain(&spec.biases).any(|v| !v.is_finite()) {
        return Err(ctx("parameters must be finite".into()));
    }

    let weights = Array2::from_shape_vec((n, m), flat).map_err(|e| ctx(e.to_string()))?;
    let biases = Array1::from(spec.biases);
    let act_fn = spec.act_fn.map(|act| match act {
        ActFnSpec::Sigmoid { amp } => ActFn::sigmoid(amp),
        ActFnSpec::Relu => ActFn::Relu,
    });

    Dense::new(weights, biases, act_fn).map_err(|e| ctx(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Model;

    const LINEAR: &str = r#"{
        "model": {
            "linear": {
                "intercept": 1.0,
                "coefficients": { "ph": 10.0, "humidity": 0.0, "temperature": 0.0, "rainfall": 0.001 }
            }
        }
    }"#;

    #[test]
    fn builds_linear_model_by_coefficient_name() {
        let model = ModelArtifact::from_json_str(LINEAR).unwrap().build().unwrap();
        let y = model.predict(&Covariates::new(1000.0, 22.0, 75.0, 6.0)).unwrap();

        assert_eq!(model.regressor().kind(), "linear");
        assert!(!model.is_scaled());
        assert!((y - 62.0).abs() < 1e-9);
    }

    #[test]
    fn builds_scaled_sequential_model() {
        let json = r#"{
            "scaler": { "mean": [0, 0, 0, 0], "scale": [1, 1, 1, 2] },
            "model": {
                "sequential": {
                    "layers": [
                        { "weights": [[1, 0], [0, 1], [0, 0], [1, 1]], "biases": [0, 0], "act_fn": "relu" },
                        { "weights": [[1], [1]], "biases": [0.5] }
                    ]
                }
            }
        }"#;

        let model = ModelArtifact::from_json_str(json).unwrap().build().unwrap();
        let y = model.predict(&Covariates::new(1.0, 2.0, 3.0, 4.0)).unwrap();

        // ph scales to 2: hidden = [1 + 2, 2 + 2], output = 3 + 4 + 0.5
        assert_eq!(model.regressor().kind(), "sequential");
        assert!(model.is_scaled());
        assert_eq!(y, 7.5);
    }

    #[test]
    fn parses_sigmoid_activation() {
        let json = r#"{
            "model": { "sequential": { "layers": [
                { "weights": [[0], [0], [0], [0]], "biases": [0], "act_fn": { "sigmoid": { "amp": 8.0 } } }
            ] } }
        }"#;

        let model = ModelArtifact::from_json_str(json).unwrap().build().unwrap();
        assert_eq!(model.predict(&Covariates::new(1.0, 1.0, 1.0, 1.0)).unwrap(), 4.0);
    }

    #[test]
    fn rejects_missing_coefficient() {
        let json = r#"{ "model": { "linear": { "intercept": 0, "coefficients": { "rainfall": 1 } } } }"#;
        let err = ModelArtifact::from_json_str(json).unwrap().build().unwrap_err();

        assert!(matches!(err, MlError::InvalidModel(ref msg) if msg.contains("temperature")));
    }

    #[test]
    fn rejects_unknown_coefficient() {
        let json = r#"{ "model": { "linear": { "intercept": 0, "coefficients": {
            "rainfall": 1, "temperature": 1, "humidity": 1, "ph": 1, "wind": 1 } } } }"#;
        let err = ModelArtifact::from_json_str(json).unwrap().build().unwrap_err();

        assert!(matches!(err, MlError::InvalidModel(ref msg) if msg.contains("wind")));
    }

    #[test]
    fn rejects_ragged_weights() {
        let json = r#"{ "model": { "sequential": { "layers": [
            { "weights": [[1], [1, 2], [1], [1]], "biases": [0] }
        ] } } }"#;
        let err = ModelArtifact::from_json_str(json).unwrap().build().unwrap_err();

        assert!(matches!(err, MlError::InvalidModel(ref msg) if msg.starts_with("layer 0")));
    }

    #[test]
    fn rejects_bias_mismatch() {
        let json = r#"{ "model": { "sequential": { "layers": [
            { "weights": [[1], [1], [1], [1]], "biases": [0, 0] }
        ] } } }"#;

        assert!(matches!(
            ModelArtifact::from_json_str(json).unwrap().build(),
            Err(MlError::InvalidModel(_))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ModelArtifact::from_json_str("{ \"model\": "),
            Err(MlError::InvalidModel(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_model("/definitely/not/here/model.json").unwrap_err();
        assert!(matches!(err, MlError::Io { .. }));
    }
}
