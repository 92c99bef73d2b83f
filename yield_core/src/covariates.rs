/// The four inputs a yield model consumes.
///
/// Models never see a positional tuple: every caller goes through this record,
/// and [`Covariates::to_array`] is the only place the feature order is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Covariates {
    /// Precipitation, in millimetres.
    pub rainfall: f64,
    /// Mean temperature, in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, in percent.
    pub humidity: f64,
    /// Soil acidity.
    pub ph: f64,
}

impl Covariates {
    /// Feature names in the order used by [`Covariates::to_array`].
    pub const FEATURES: [&'static str; 4] = ["rainfall", "temperature", "humidity", "ph"];

    /// Number of covariates a model receives.
    pub const LEN: usize = Self::FEATURES.len();

    pub fn new(rainfall: f64, temperature: f64, humidity: f64, ph: f64) -> Self {
        Self {
            rainfall,
            temperature,
            humidity,
            ph,
        }
    }

    /// Returns the covariates in canonical feature order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.rainfall, self.temperature, self.humidity, self.ph]
    }
}

/// The three covariates held fixed while the soil acidity is swept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Climate {
    pub rainfall: f64,
    pub temperature: f64,
    pub humidity: f64,
}

impl Climate {
    pub fn new(rainfall: f64, temperature: f64, humidity: f64) -> Self {
        Self {
            rainfall,
            temperature,
            humidity,
        }
    }

    /// Completes this climate with a soil acidity value.
    pub fn at_ph(&self, ph: f64) -> Covariates {
        Covariates {
            rainfall: self.rainfall,
            temperature: self.temperature,
            humidity: self.humidity,
            ph,
        }
    }
}
