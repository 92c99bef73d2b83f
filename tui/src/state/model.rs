/// The climate inputs a user controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKind {
    Rainfall,
    Temperature,
    Humidity,
}

impl SliderKind {
    /// Config key and log name.
    pub fn key(self) -> &'static str {
        match self {
            SliderKind::Rainfall => "rainfall",
            SliderKind::Temperature => "temperature",
            SliderKind::Humidity => "humidity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SliderKind::Rainfall => "Rainfall",
            SliderKind::Temperature => "Temperature",
            SliderKind::Humidity => "Humidity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SliderKind::Rainfall => "mm",
            SliderKind::Temperature => "°C",
            SliderKind::Humidity => "%",
        }
    }
}

/// A bounded numeric input moved in fixed increments.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    pub kind: SliderKind,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    value: f64,
}

impl Slider {
    pub fn new(kind: SliderKind, min: f64, max: f64, default: f64, step: f64) -> Self {
        Self {
            kind,
            min,
            max,
            default,
            step,
            value: default,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Position of the value within `[min, max]`, in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Number of decimals needed to show one step.
    pub fn decimals(&self) -> usize {
        let mut decimals = 0;
        let mut step = self.step;
        while decimals < 4 && (step - step.round()).abs() > 1e-9 {
            step *= 10.0;
            decimals += 1;
        }
        decimals
    }

    /// Moves the value by `steps` increments, clamped to the bounds.
    ///
    /// Values stay on the grid `default + k * step` so repeated nudges do not
    /// drift.
    ///
    /// # Returns
    /// `true` if the value changed.
    pub fn nudge(&mut self, steps: i32) -> bool {
        let k = ((self.value - self.default) / self.step).round() + f64::from(steps);
        let next = (self.default + k * self.step).clamp(self.min, self.max);

        let changed = next != self.value;
        self.value = next;
        changed
    }

    /// Restores the default value.
    ///
    /// # Returns
    /// `true` if the value changed.
    pub fn reset(&mut self) -> bool {
        let changed = self.value != self.default;
        self.value = self.default;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temperature() -> Slider {
        Slider::new(SliderKind::Temperature, 15.0, 30.0, 22.0, 0.1)
    }

    #[test]
    fn starts_at_default() {
        let s = temperature();
        assert_eq!(s.value(), 22.0);
        assert!((s.ratio() - 7.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn nudge_stays_on_grid() {
        let mut s = temperature();
        for _ in 0..30 {
            s.nudge(1);
        }
        for _ in 0..10 {
            s.nudge(-1);
        }

        assert!((s.value() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn nudge_clamps_to_bounds() {
        let mut s = temperature();

        assert!(s.nudge(1_000));
        assert_eq!(s.value(), 30.0);
        assert!(!s.nudge(1));
        assert_eq!(s.ratio(), 1.0);

        assert!(s.nudge(-10_000));
        assert_eq!(s.value(), 15.0);
        assert_eq!(s.ratio(), 0.0);
    }

    #[test]
    fn reset_reports_change() {
        let mut s = temperature();
        assert!(!s.reset());

        s.nudge(5);
        assert!(s.reset());
        assert_eq!(s.value(), 22.0);
    }

    #[test]
    fn decimals_follow_step() {
        assert_eq!(temperature().decimals(), 1);
        assert_eq!(Slider::new(SliderKind::Rainfall, 500.0, 1500.0, 1000.0, 10.0).decimals(), 0);
        assert_eq!(Slider::new(SliderKind::Humidity, 50.0, 100.0, 75.0, 0.25).decimals(), 2);
    }
}
