use crate::layers::dense::Neuron;
use crate::math::decimal::Dec;
use crate::metric::metric_type::low_marker;

pub struct MarginClampedMetric;

impl MarginClampedMetric {
    /// Per-output error `target - activation`, clamped one-sided per class
    /// and pushed past the margin by exactly 1 when still non-zero.
    ///
    /// Low-class outputs: error is clamped to `<= 0`; any remainder is
    /// decremented by 1. High-class outputs are symmetric. An output that
    /// already sits on the right side of its marker contributes exactly
    /// zero, so satisfied outputs stop producing gradient.
    pub fn errors(outputs: &[Neuron], targets: &[Dec]) -> Vec<Dec> {
        assert_eq!(
            outputs.len(),
            targets.len(),
            "target length {} does not match output layer size {}",
            targets.len(),
            outputs.len()
        );

        let low = low_marker();
        let one = Dec::one();

        outputs
            .iter()
            .zip(targets.iter())
            .map(|(neuron, target)| {
                let raw = target - &neuron.activation;
                if *target == low {
                    let clamped = raw.min(Dec::zero());
                    if clamped.is_zero() {
                        clamped
                    } else {
                        &clamped - &one
                    }
                } else {
                    let clamped = raw.max(Dec::zero());
                    if clamped.is_zero() {
                        clamped
                    } else {
                        &clamped + &one
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::decimal::dec;
    use crate::metric::metric_type::high_marker;

    fn out(activation: &str) -> Neuron {
        Neuron {
            pre_activation: Dec::zero(),
            activation: dec(activation),
        }
    }

    #[test]
    fn low_target_already_below_marker_is_zero() {
        // activation < target (0.2): raw error positive, clamped to 0.
        let errors = MarginClampedMetric::errors(&[out("0.1")], &[low_marker()]);
        assert_eq!(errors, vec![Dec::zero()]);
    }

    #[test]
    fn low_target_overshoot_is_corrected_by_one() {
        // activation 0.6 > target 0.2: raw -0.4, stays negative, minus 1.
        let errors = MarginClampedMetric::errors(&[out("0.6")], &[low_marker()]);
        assert_eq!(errors, vec![dec("-1.4")]);
        assert!(errors[0] < Dec::zero());
    }

    #[test]
    fn high_target_already_above_marker_is_zero() {
        let errors = MarginClampedMetric::errors(&[out("0.9")], &[high_marker()]);
        assert_eq!(errors, vec![Dec::zero()]);
    }

    #[test]
    fn high_target_undershoot_is_corrected_by_one() {
        // activation 0.5 < target 0.8: raw 0.3, stays positive, plus 1.
        let errors = MarginClampedMetric::errors(&[out("0.5")], &[high_marker()]);
        assert_eq!(errors, vec![dec("1.3")]);
    }

    #[test]
    fn exact_hit_contributes_zero() {
        let errors = MarginClampedMetric::errors(&[out("0.2")], &[low_marker()]);
        assert_eq!(errors, vec![Dec::zero()]);
    }

    #[test]
    #[should_panic(expected = "does not match output layer size")]
    fn rejects_length_mismatch() {
        MarginClampedMetric::errors(&[out("0.5")], &[low_marker(), high_marker()]);
    }
}
