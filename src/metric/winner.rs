use crate::layers::dense::Neuron;
use crate::math::decimal::Dec;
use crate::metric::metric_type::{high_marker, low_marker};

pub struct WinnerTakeAllMetric;

impl WinnerTakeAllMetric {
    /// Multi-class error against a single-element target holding the class
    /// label (rounded to the nearest integer).
    ///
    /// If the output with the maximum activation already is the expected
    /// class, every error is zero and the sample triggers no weight update.
    /// Otherwise each output is pulled toward its marker (`high_marker` for
    /// the expected class, `low_marker` elsewhere) with a one-sided clamp:
    /// outputs already past their marker contribute nothing. No ±1 margin
    /// correction here, unlike the margin-clamped metric.
    pub fn errors(outputs: &[Neuron], targets: &[Dec]) -> Vec<Dec> {
        assert_eq!(
            targets.len(),
            1,
            "winner-take-all expects a single-element class-label target, got {}",
            targets.len()
        );
        assert!(!outputs.is_empty(), "output layer must not be empty");

        let label = targets[0].round_to_i64();
        assert!(
            label >= 0 && (label as usize) < outputs.len(),
            "class label {} outside output range 0..{}",
            label,
            outputs.len()
        );
        let expected = label as usize;

        if argmax(outputs) == expected {
            return vec![Dec::zero(); outputs.len()];
        }

        let low = low_marker();
        let high = high_marker();
        outputs
            .iter()
            .enumerate()
            .map(|(i, neuron)| {
                let marker = if i == expected { &high } else { &low };
                let raw = marker - &neuron.activation;
                if i == expected {
                    raw.max(Dec::zero())
                } else {
                    raw.min(Dec::zero())
                }
            })
            .collect()
    }
}

/// Index of the maximum activation; the earliest index wins ties.
fn argmax(outputs: &[Neuron]) -> usize {
    let mut best = 0;
    for i in 1..outputs.len() {
        if outputs[i].activation > outputs[best].activation {
            best = i;
        }
    }
    best
}
