use yield_core::{
    fit_report, load_model, point, sweep, Climate, Dataset, FitReport, MlError, SweepRange,
    SweepResult, YieldModel,
};

use super::model::{Slider, SliderKind};
use crate::config::builder::Settings;

/// The headline prediction and the pH curve for the current slider values.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub headline: f64,
    pub curve: SweepResult,
}

/// Everything the dashboard shows: the loaded model, its fit on the
/// historical data, the climate sliders and the forecast they produce.
///
/// The forecast is recomputed from scratch whenever a slider value changes;
/// the previous one is discarded, never merged.
pub struct Session {
    model: YieldModel,
    fit: FitReport,
    sliders: [Slider; 3],
    selected: usize,
    sweep_range: SweepRange,
    reference_ph: f64,
    forecast: Result<Forecast, String>,
}

impl Session {
    /// Loads the model and the dataset named in `settings` and scores the model.
    ///
    /// # Errors
    /// Returns the first loading or scoring error.
    pub fn load(settings: &Settings) -> Result<Self, MlError> {
        let model = load_model(&settings.model_path)?;
        let dataset = Dataset::load(&settings.data_path)?;
        let fit = fit_report(&model, &dataset)?;

        Ok(Self::new(model, fit, settings))
    }

    /// Creates a session around an already loaded model.
    pub fn new(model: YieldModel, fit: FitReport, settings: &Settings) -> Self {
        let mut session = Self {
            model,
            fit,
            sliders: settings.sliders.clone(),
            selected: 0,
            sweep_range: settings.sweep,
            reference_ph: settings.reference_ph,
            forecast: Err("not computed yet".into()),
        };
        session.recompute();
        session
    }

    pub fn model(&self) -> &YieldModel {
        &self.model
    }

    pub fn fit(&self) -> &FitReport {
        &self.fit
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn sweep_range(&self) -> SweepRange {
        self.sweep_range
    }

    pub fn reference_ph(&self) -> f64 {
        self.reference_ph
    }

    pub fn forecast(&self) -> Result<&Forecast, &str> {
        self.forecast.as_ref().map_err(String::as_str)
    }

    /// The climate described by the current slider values.
    pub fn climate(&self) -> Climate {
        let value = |kind: SliderKind| {
            self.sliders
                .iter()
                .find(|s| s.kind == kind)
                .map_or(0.0, Slider::value)
        };

        Climate::new(
            value(SliderKind::Rainfall),
            value(SliderKind::Temperature),
            value(SliderKind::Humidity),
        )
    }

    pub fn select_next(&mut self) {
        if self.selected < self.sliders.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Moves the selected slider and refreshes the forecast if its value changed.
    pub fn nudge_selected(&mut self, steps: i32) {
        if self.sliders[self.selected].nudge(steps) {
            self.recompute();
        }
    }

    /// Puts every slider back to its default and refreshes the forecast if needed.
    pub fn reset(&mut self) {
        let changed = self
            .sliders
            .iter_mut()
            .fold(false, |changed, s| s.reset() || changed);

        if changed {
            self.recompute();
        }
    }

    fn recompute(&mut self) {
        let climate = self.climate();

        let forecast = sweep(&self.model, climate, self.sweep_range).and_then(|curve| {
            let headline = point(&self.model, climate, self.reference_ph)?;
            Ok(Forecast { headline, curve })
        });

        self.forecast = forecast.map_err(|e| {
            log::error!("forecast failed for {climate:?}: {e}");
            e.to_string()
        });
    }
}
