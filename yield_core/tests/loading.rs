use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use yield_core::{
    evaluate, fit_report, load_model, point, sweep, Climate, Dataset, MlError, SweepRange,
};

/// A scratch directory removed when dropped.
struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("yield_core-{name}-{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn write(&self, file: &str, content: &str) -> PathBuf {
        let path = self.0.join(file);
        fs::write(&path, content).unwrap();
        path
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

// yield = 1 + 0.002 * rainfall + 0.05 * temperature + 0.01 * humidity - (ph - 6.0)
const MODEL: &str = r#"{
    "model": {
        "linear": {
            "intercept": 7.0,
            "coefficients": { "rainfall": 0.002, "temperature": 0.05, "humidity": 0.01, "ph": -1.0 }
        }
    }
}"#;

const DATA: &str = "\
rainfall,temperature,humidity,ph,yield
1000,22,75,6.0,4.85
1200,24,80,5.8,5.55
800,18,60,6.2,3.8
1500,28,95,5.5,7.35
";

#[test]
fn loads_model_and_dataset_then_scores() {
    let scratch = Scratch::new("score");
    let model = load_model(scratch.write("rice_model.json", MODEL)).unwrap();
    let dataset = Dataset::load(scratch.write("rice_data.csv", DATA)).unwrap();

    assert_eq!(dataset.len(), 4);

    let score = evaluate(&model, &dataset).unwrap().value();
    assert!(score > 0.9 && score <= 1.0, "unexpected r2 {score}");

    let report = fit_report(&model, &dataset).unwrap();
    assert_eq!(report.r2.value(), score);
    assert_eq!(report.samples, 4);
    assert!(report.rmse >= report.mae);
}

#[test]
fn sweep_and_headline_from_loaded_model() {
    let scratch = Scratch::new("sweep");
    let model = load_model(scratch.write("rice_model.json", MODEL)).unwrap();
    let climate = Climate::new(1000.0, 22.0, 75.0);

    let curve = sweep(&model, climate, SweepRange::default()).unwrap();
    let headline = point(&model, climate, 6.0).unwrap();

    assert_eq!(curve.len(), 9);
    // acidity has a negative coefficient: the curve falls monotonically.
    assert!(curve
        .points()
        .windows(2)
        .all(|w| w[0].predicted_yield > w[1].predicted_yield));
    assert!((headline - 4.85).abs() < 1e-9);
}

#[test]
fn missing_files_are_io_errors() {
    let scratch = Scratch::new("missing");

    let err = Dataset::load(scratch.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, MlError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));

    let err = load_model(scratch.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, MlError::Io { .. }));
}

#[test]
fn dataset_missing_label_column_is_invalid_input() {
    let scratch = Scratch::new("label");
    let path = scratch.write("bad.csv", "rainfall,temperature,humidity,ph\n1000,22,75,6.0\n");

    let err = Dataset::load(path).unwrap_err();
    assert!(matches!(err, MlError::InvalidInput(ref msg) if msg.contains("yield")));
}

#[test]
fn malformed_model_is_invalid_model() {
    let scratch = Scratch::new("model");
    let path = scratch.write("bad.json", r#"{ "model": { "forest": {} } }"#);

    assert!(matches!(load_model(path), Err(MlError::InvalidModel(_))));
}

#[test]
fn bundled_sample_files_fit_well() {
    let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
    let model = load_model(data_dir.join("rice_model.json")).unwrap();
    let dataset = Dataset::load(data_dir.join("rice_data.csv")).unwrap();

    let report = fit_report(&model, &dataset).unwrap();
    assert_eq!(report.samples, 24);
    assert!(report.r2.value() > 0.95);

    // the scaler centres on the default climate, so the headline is the intercept.
    let headline = point(&model, Climate::new(1000.0, 22.0, 75.0), 6.0).unwrap();
    assert!((headline - 4.5).abs() < 1e-9);
}
