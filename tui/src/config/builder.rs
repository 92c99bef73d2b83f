use std::path::PathBuf;

use yield_core::SweepRange;

use super::model::{AppDraft, SliderDraft};
use crate::state::model::{Slider, SliderKind};

/// Validated settings the dashboard is started with.
#[derive(Debug, Clone)]
pub struct Settings {
    pub model_path: PathBuf,
    pub data_path: PathBuf,
    pub log_path: PathBuf,
    pub sliders: [Slider; 3],
    pub sweep: SweepRange,
    pub reference_ph: f64,
}

/// Converts an [`AppDraft`] into [`Settings`].
///
/// # Errors
/// Returns a human-readable error if any value is invalid.
pub fn build(draft: &AppDraft) -> Result<Settings, String> {
    let sweep = SweepRange::new(draft.sweep.start, draft.sweep.end, draft.sweep.step)
        .map_err(|e| format!("sweep: {e}"))?;

    if !draft.sweep.reference.is_finite() {
        return Err("sweep.reference must be a finite number".into());
    }

    for (name, path) in [
        ("model_path", &draft.model_path),
        ("data_path", &draft.data_path),
        ("log_path", &draft.log_path),
    ] {
        if path.trim().is_empty() {
            return Err(format!("{name} must not be empty"));
        }
    }

    Ok(Settings {
        model_path: PathBuf::from(draft.model_path.trim()),
        data_path: PathBuf::from(draft.data_path.trim()),
        log_path: PathBuf::from(draft.log_path.trim()),
        sliders: [
            build_slider(SliderKind::Rainfall, draft.rainfall)?,
            build_slider(SliderKind::Temperature, draft.temperature)?,
            build_slider(SliderKind::Humidity, draft.humidity)?,
        ],
        sweep,
        reference_ph: draft.sweep.reference,
    })
}

fn build_slider(kind: SliderKind, d: SliderDraft) -> Result<Slider, String> {
    let name = kind.key();

    if ![d.min, d.max, d.default, d.step].iter().all(|v| v.is_finite()) {
        return Err(format!("{name}: values must be finite numbers"));
    }
    if d.min >= d.max {
        return Err(format!("{name}: min ({}) must be below max ({})", d.min, d.max));
    }
    if d.default < d.min || d.default > d.max {
        return Err(format!(
            "{name}: default ({}) must lie within [{}, {}]",
            d.default, d.min, d.max
        ));
    }
    if d.step <= 0.0 || d.step > d.max - d.min {
        return Err(format!(
            "{name}: step ({}) must be positive and no wider than the range",
            d.step
        ));
    }

    Ok(Slider::new(kind, d.min, d.max, d.default, d.step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::SweepDraft;

    #[test]
    fn defaults_build() {
        let settings = build(&AppDraft::default()).unwrap();

        assert_eq!(settings.sweep.len(), 9);
        assert_eq!(settings.reference_ph, 6.0);
        assert_eq!(settings.model_path, PathBuf::from("rice_model.json"));
        assert_eq!(settings.sliders[0].kind, SliderKind::Rainfall);
        assert_eq!(settings.sliders[0].value(), 1000.0);
        assert_eq!(settings.sliders[1].value(), 22.0);
        assert_eq!(settings.sliders[2].value(), 75.0);
    }

    #[test]
    fn rainfall_moves_in_whole_millimetres() {
        let mut settings = build(&AppDraft::default()).unwrap();
        let rainfall = &mut settings.sliders[0];

        assert_eq!(rainfall.step, 1.0);
        assert!(rainfall.nudge(1));
        assert_eq!(rainfall.value(), 1001.0);
        assert_eq!(rainfall.decimals(), 0);
    }

    #[test]
    fn rejects_oversized_sweep() {
        let draft = AppDraft {
            sweep: SweepDraft {
                start: -1e308,
                end: 1e308,
                step: 1.0,
                reference: 6.0,
            },
            ..AppDraft::default()
        };

        let err = build(&draft).unwrap_err();
        assert!(err.starts_with("sweep: invalid range"));
    }

    #[test]
    fn rejects_inverted_sweep() {
        let draft = AppDraft {
            sweep: SweepDraft {
                start: 6.2,
                end: 5.4,
                ..SweepDraft::default()
            },
            ..AppDraft::default()
        };

        assert!(build(&draft).unwrap_err().starts_with("sweep: invalid range"));
    }

    #[test]
    fn rejects_bad_sliders() {
        let cases = [
            SliderDraft::new(10.0, 10.0, 10.0, 1.0),
            SliderDraft::new(0.0, 10.0, 11.0, 1.0),
            SliderDraft::new(0.0, 10.0, 5.0, 0.0),
            SliderDraft::new(0.0, 10.0, 5.0, 20.0),
            SliderDraft::new(0.0, f64::NAN, 5.0, 1.0),
        ];

        for humidity in cases {
            let draft = AppDraft {
                humidity,
                ..AppDraft::default()
            };
            assert!(build(&draft).unwrap_err().starts_with("humidity"));
        }
    }

    #[test]
    fn rejects_blank_paths() {
        let draft = AppDraft {
            data_path: "  ".into(),
            ..AppDraft::default()
        };

        assert_eq!(build(&draft).unwrap_err(), "data_path must not be empty");
    }
}
