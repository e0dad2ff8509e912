use crate::layers::dense::Neuron;
use crate::math::decimal::{dec, Dec};
use crate::metric::margin::MarginClampedMetric;
use crate::metric::winner::WinnerTakeAllMetric;
use serde::{Deserialize, Serialize};

/// The "low" class marker: dark pixels decode to it and binary targets use
/// it as the low class.
pub fn low_marker() -> Dec {
    dec("0.2")
}

/// The "high" class marker, counterpart of [`low_marker`].
pub fn high_marker() -> Dec {
    dec("0.8")
}

/// Selects which error metric the network compares its output layer with.
///
/// - `MarginClamped`    — binary-target problems (e.g. XOR); the target
///   vector must match the output layer length.
/// - `WinnerTakeAll`    — multi-class problems (e.g. digit recognition);
///   the target is a single-element vector holding the class label.
///
/// Neither is a smooth loss on purpose: both suppress the gradient once a
/// sample is good enough, which converges faster on these tasks than MSE
/// fighting the sigmoid's saturation tails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorMetric {
    MarginClamped,
    WinnerTakeAll,
}

impl ErrorMetric {
    /// Signed per-output errors for one sample.
    pub fn errors(&self, outputs: &[Neuron], targets: &[Dec]) -> Vec<Dec> {
        match self {
            ErrorMetric::MarginClamped => MarginClampedMetric::errors(outputs, targets),
            ErrorMetric::WinnerTakeAll => WinnerTakeAllMetric::errors(outputs, targets),
        }
    }
}
