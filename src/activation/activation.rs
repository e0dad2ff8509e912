use crate::math::decimal::Dec;
use serde::{Deserialize, Serialize};

/// Nonlinearity applied to every non-input neuron.
///
/// Only the logistic sigmoid is used by this system; it stays an enum so the
/// activation is injected at construction alongside the error metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
}

impl ActivationFunction {
    /// Element-wise activation of a pre-activation value.
    pub fn function(&self, x: &Dec) -> Dec {
        match self {
            ActivationFunction::Sigmoid => x.sigmoid(),
        }
    }

    /// Derivative evaluated from the **already-computed activation**, not
    /// from the pre-activation: the backward pass only ever sees neurons
    /// whose forward value is current, and for the sigmoid
    /// `σ'(z) = a * (1 - a)` needs nothing else.
    pub fn derivative(&self, activation: &Dec) -> Dec {
        match self {
            ActivationFunction::Sigmoid => {
                let one_minus = &Dec::one() - activation;
                activation * &one_minus
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::decimal::dec;

    #[test]
    fn sigmoid_derivative_from_activation() {
        let act = ActivationFunction::Sigmoid;
        // a * (1 - a) at a = 0.5 peaks at 0.25.
        assert_eq!(act.derivative(&dec("0.5")), dec("0.25"));
        assert_eq!(act.derivative(&dec("0.2")), dec("0.16"));
        // Saturated activations kill the gradient.
        assert_eq!(act.derivative(&Dec::one()), Dec::zero());
        assert_eq!(act.derivative(&Dec::zero()), Dec::zero());
    }

    #[test]
    fn function_matches_adapter_sigmoid() {
        let act = ActivationFunction::Sigmoid;
        assert_eq!(act.function(&Dec::zero()), dec("0.5"));
    }
}
