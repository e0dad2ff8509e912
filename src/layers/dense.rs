use crate::activation::activation::ActivationFunction;
use crate::math::decimal::{Dec, WORKING_PRECISION};
use rand::Rng;

/// Per-neuron state, fully recomputed on every forward pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    /// Weighted sum plus bias, before the nonlinearity. Conventionally zero
    /// for input-layer neurons.
    pub pre_activation: Dec,
    /// Output of the nonlinearity (or the raw input for layer 0).
    pub activation: Dec,
}

impl Neuron {
    pub fn zeroed() -> Neuron {
        Neuron {
            pre_activation: Dec::zero(),
            activation: Dec::zero(),
        }
    }
}

/// Fully-connected weight table for one transition between consecutive
/// layers.
///
/// `rows` has `sources + 1` rows of `destinations` columns each; the extra
/// row at index `sources` holds the bias term of every destination neuron.
/// The shape is fixed at construction and never resized.
#[derive(Debug, Clone)]
pub struct WeightTable {
    pub sources: usize,
    pub destinations: usize,
    pub rows: Vec<Vec<Dec>>,
}

impl WeightTable {
    /// Builds a table with every entry (bias row included) drawn uniformly
    /// from `[-0.5, 0.5)`.
    pub fn random(sources: usize, destinations: usize, rng: &mut impl Rng) -> WeightTable {
        let rows = (0..=sources)
            .map(|_| {
                (0..destinations)
                    .map(|_| {
                        // Rounded to the working precision up front so the
                        // initial weights sit on the same policy as every
                        // later update.
                        Dec::from_f64(rng.gen_range(-0.5..0.5))
                            .expect("uniform draw is always finite")
                            .round_to(WORKING_PRECISION)
                    })
                    .collect()
            })
            .collect();

        WeightTable {
            sources,
            destinations,
            rows,
        }
    }

    /// Index of the bias row.
    pub fn bias_row(&self) -> usize {
        self.sources
    }

    /// Computes the destination layer from the source layer:
    /// `pre = bias + Σ weight[left][right] * source[left].activation`, then
    /// `activation = activator(pre)`. Destination neurons carry no
    /// inter-dependency, so only the caller's layer ordering matters.
    pub fn feed(&self, sources: &[Neuron], activator: &ActivationFunction, dest: &mut [Neuron]) {
        assert_eq!(sources.len(), self.sources, "source layer size mismatch");
        assert_eq!(dest.len(), self.destinations, "destination layer size mismatch");

        for right in 0..self.destinations {
            let mut pre = self.rows[self.bias_row()][right].clone();
            for (left, source) in sources.iter().enumerate() {
                pre += &(&self.rows[left][right] * &source.activation);
            }
            dest[right].activation = activator.function(&pre);
            dest[right].pre_activation = pre;
        }
    }
}
