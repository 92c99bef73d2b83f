use yield_core::sweep::{DEFAULT_PH_END, DEFAULT_PH_START, DEFAULT_PH_STEP, REFERENCE_PH};

/// Bounds, starting value and keyboard increment of one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderDraft {
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

impl SliderDraft {
    pub const fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            min,
            max,
            default,
            step,
        }
    }
}

/// The pH sweep drawn on the chart and the acidity of the headline prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepDraft {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub reference: f64,
}

/// Application settings parsed from rice-yield.json.
#[derive(Debug, Clone, PartialEq)]
pub struct AppDraft {
    pub model_path: String,
    pub data_path: String,
    pub log_path: String,
    pub rainfall: SliderDraft,
    pub temperature: SliderDraft,
    pub humidity: SliderDraft,
    pub sweep: SweepDraft,
}

pub const DEFAULT_MODEL_PATH: &str = "rice_model.json";
pub const DEFAULT_DATA_PATH: &str = "rice_data.csv";
pub const DEFAULT_LOG_PATH: &str = "rice-yield.log";

pub const DEFAULT_RAINFALL: SliderDraft = SliderDraft::new(500.0, 1500.0, 1000.0, 1.0);
pub const DEFAULT_TEMPERATURE: SliderDraft = SliderDraft::new(15.0, 30.0, 22.0, 0.1);
pub const DEFAULT_HUMIDITY: SliderDraft = SliderDraft::new(50.0, 100.0, 75.0, 0.5);

impl Default for SweepDraft {
    fn default() -> Self {
        Self {
            start: DEFAULT_PH_START,
            end: DEFAULT_PH_END,
            step: DEFAULT_PH_STEP,
            reference: REFERENCE_PH,
        }
    }
}

impl Default for AppDraft {
    fn default() -> Self {
        Self {
            model_path: DEFAULT_MODEL_PATH.into(),
            data_path: DEFAULT_DATA_PATH.into(),
            log_path: DEFAULT_LOG_PATH.into(),
            rainfall: DEFAULT_RAINFALL,
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
            sweep: SweepDraft::default(),
        }
    }
}
