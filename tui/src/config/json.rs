use std::path::Path;

use super::model::{AppDraft, SliderDraft, SweepDraft};

/// Loads an [`AppDraft`] from a JSON file, falling back to the defaults when
/// the file does not exist.
///
/// # Errors
/// Returns a human-readable string if the file exists but cannot be read or parsed.
pub fn load_or_default(path: &Path) -> Result<AppDraft, String> {
    if !path.exists() {
        log::debug!("no config at '{}', using defaults", path.display());
        return Ok(AppDraft::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;

    parse(&content)
}

/// Parses an [`AppDraft`] from JSON text. Every key is optional.
///
/// # Errors
/// Returns a human-readable string if the text is not a JSON object or a
/// present key has the wrong type.
pub fn parse(content: &str) -> Result<AppDraft, String> {
    let val: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

    if !val.is_object() {
        return Err("config must be a JSON object".into());
    }

    let defaults = AppDraft::default();

    let string = |key: &str, default: &str| -> Result<String, String> {
        match &val[key] {
            serde_json::Value::Null => Ok(default.to_string()),
            v => v
                .as_str()
                .map(|s| s.to_string())
                .ok_or_else(|| format!("{key} must be a string")),
        }
    };

    Ok(AppDraft {
        model_path: string("model_path", &defaults.model_path)?,
        data_path: string("data_path", &defaults.data_path)?,
        log_path: string("log_path", &defaults.log_path)?,
        rainfall: parse_slider(&val["rainfall"], "rainfall", defaults.rainfall)?,
        temperature: parse_slider(&val["temperature"], "temperature", defaults.temperature)?,
        humidity: parse_slider(&val["humidity"], "humidity", defaults.humidity)?,
        sweep: parse_sweep(&val["sweep"], defaults.sweep)?,
    })
}

fn number(val: &serde_json::Value, key: &str, ctx: &str, default: f64) -> Result<f64, String> {
    match &val[key] {
        serde_json::Value::Null => Ok(default),
        v => v
            .as_f64()
            .ok_or_else(|| format!("{ctx}.{key} must be a number")),
    }
}

fn parse_slider(
    val: &serde_json::Value,
    ctx: &str,
    default: SliderDraft,
) -> Result<SliderDraft, String> {
    if val.is_null() {
        return Ok(default);
    }
    if !val.is_object() {
        return Err(format!("{ctx} must be an object"));
    }

    Ok(SliderDraft {
        min: number(val, "min", ctx, default.min)?,
        max: number(val, "max", ctx, default.max)?,
        default: number(val, "default", ctx, default.default)?,
        step: number(val, "step", ctx, default.step)?,
    })
}

fn parse_sweep(val: &serde_json::Value, default: SweepDraft) -> Result<SweepDraft, String> {
    if val.is_null() {
        return Ok(default);
    }
    if !val.is_object() {
        return Err("sweep must be an object".into());
    }

    Ok(SweepDraft {
        start: number(val, "start", "sweep", default.start)?,
        end: number(val, "end", "sweep", default.end)?,
        step: number(val, "step", "sweep", default.step)?,
        reference: number(val, "reference", "sweep", default.reference)?,
    })
}
