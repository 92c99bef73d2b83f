/// Activation applied element-wise after a dense layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActFn {
    /// Logistic function scaled by `amp`.
    Sigmoid { amp: f64 },
    Relu,
}
use ActFn::*;

impl ActFn {
    pub fn sigmoid(amp: f64) -> Self {
        Sigmoid { amp }
    }

    pub fn f(&self, z: f64) -> f64 {
        match *self {
            Sigmoid { amp } => amp / (1. + (-z).exp()),
            Relu => z.max(0.),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_half_amplitude() {
        let act = ActFn::sigmoid(4.0);
        assert_eq!(act.f(0.0), 2.0);
        assert!(act.f(50.0) > 3.999);
        assert!(act.f(-50.0) < 0.001);
    }

    #[test]
    fn relu_clamps_negatives() {
        assert_eq!(Relu.f(-3.0), 0.0);
        assert_eq!(Relu.f(2.5), 2.5);
    }
}
