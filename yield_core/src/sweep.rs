use crate::{Climate, MlError, Model, Result};

/// Lowest soil acidity swept by default.
pub const DEFAULT_PH_START: f64 = 5.4;
/// Highest soil acidity swept by default.
pub const DEFAULT_PH_END: f64 = 6.2;
/// Default distance between swept acidity values.
pub const DEFAULT_PH_STEP: f64 = 0.1;
/// Acidity used for the headline prediction.
pub const REFERENCE_PH: f64 = 6.0;

/// Slack, in units of `step`, absorbed when counting sweep points so that an
/// endpoint like 6.2 is not lost to `(6.2 - 5.4) / 0.1 == 7.999…`.
const STEP_TOLERANCE: f64 = 1e-9;

/// Upper bound on the number of points a single sweep may produce.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// An inclusive, ascending range of acidity values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    start: f64,
    end: f64,
    step: f64,
    len: usize,
}

impl SweepRange {
    /// Creates a new `SweepRange`.
    ///
    /// # Errors
    /// Returns `MlError::InvalidRange` if any bound is not finite, if
    /// `end <= start` or if `step <= 0`. Ranges that would produce more than
    /// [`MAX_SWEEP_POINTS`] points, or whose step is too small to separate
    /// consecutive values at this magnitude, are rejected the same way.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        let invalid = || MlError::InvalidRange { start, end, step };

        let finite = start.is_finite() && end.is_finite() && step.is_finite();
        if !finite || end <= start || step <= 0.0 {
            return Err(invalid());
        }

        let count = ((end - start) / step + STEP_TOLERANCE).floor();
        if !count.is_finite() || count >= MAX_SWEEP_POINTS as f64 {
            return Err(invalid());
        }

        let range = Self {
            start,
            end,
            step,
            len: count as usize + 1,
        };

        let ascending = range
            .values()
            .zip(range.values().skip(1))
            .all(|(a, b)| a < b);
        if !ascending {
            return Err(invalid());
        }

        Ok(range)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the number of points the range produces.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A valid range always contains at least its start.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Generates `start, start + step, …` up to the last value within one
    /// step of `end`.
    ///
    /// Values are computed as `start + i * step` rather than accumulated, so
    /// rounding error does not grow along the sweep.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + i as f64 * self.step)
    }
}

impl Default for SweepRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_PH_START,
            end: DEFAULT_PH_END,
            step: DEFAULT_PH_STEP,
            len: 9,
        }
    }
}

/// One point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub ph: f64,
    pub predicted_yield: f64,
}

/// Predictions across a sweep, ordered by ascending acidity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepResult {
    points: Vec<SweepPoint>,
}

impl SweepResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &SweepPoint> {
        self.points.iter()
    }

    /// Returns `(ph, predicted_yield)` pairs, ready to be plotted.
    pub fn as_xy(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.ph, p.predicted_yield))
            .collect()
    }

    /// Returns the point with the highest predicted yield, the first one on ties.
    pub fn peak(&self) -> Option<SweepPoint> {
        self.points.iter().copied().fold(None, |best, p| match best {
            Some(b) if b.predicted_yield >= p.predicted_yield => Some(b),
            _ => Some(p),
        })
    }

    /// Returns the lowest and highest predicted yields.
    pub fn yield_bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |bounds, p| {
            let y = p.predicted_yield;
            Some(match bounds {
                Some((lo, hi)) => (f64::min(lo, y), f64::max(hi, y)),
                None => (y, y),
            })
        })
    }
}

/// Predicts the yield at every acidity value of `range`, holding `climate` fixed.
///
/// The model is invoked once per point, in ascending order.
///
/// # Errors
/// Returns the first error the model raises; no point is skipped or replaced.
pub fn sweep<M: Model>(model: &M, climate: Climate, range: SweepRange) -> Result<SweepResult> {
    let points = range
        .values()
        .map(|ph| {
            model
                .predict(&climate.at_ph(ph))
                .map(|predicted_yield| SweepPoint { ph, predicted_yield })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!(
        "swept {} point(s) over ph {}..={} for {climate:?}",
        points.len(),
        range.start(),
        range.end()
    );

    Ok(SweepResult { points })
}

/// Positional form of [`sweep`]: validates the bounds, then sweeps.
///
/// # Errors
/// Returns `MlError::InvalidRange` for malformed bounds, otherwise the same
/// errors as [`sweep`].
pub fn sweep_with<M: Model>(
    model: &M,
    rainfall: f64,
    temperature: f64,
    humidity: f64,
    range_start: f64,
    range_end: f64,
    step: f64,
) -> Result<SweepResult> {
    let range = SweepRange::new(range_start, range_end, step)?;
    sweep(model, Climate::new(rainfall, temperature, humidity), range)
}

/// Predicts the yield at a single acidity value.
///
/// The model receives exactly `(climate, reference_ph)`.
///
/// # Errors
/// Propagates the model's error.
pub fn point<M: Model>(model: &M, climate: Climate, reference_ph: f64) -> Result<f64> {
    model.predict(&climate.at_ph(reference_ph))
}
