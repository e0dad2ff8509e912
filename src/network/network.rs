use crate::activation::activation::ActivationFunction;
use crate::layers::dense::{Neuron, WeightTable};
use crate::math::decimal::Dec;
use crate::metric::metric_type::ErrorMetric;
use rand::Rng;

/// Multilayer feedforward network over decimal scalars.
///
/// Owns one weight table per layer transition and one neuron buffer per
/// layer; both are shaped by the topology at construction and never resized.
/// The error metric is injected and consulted by `compute_error`/`train`.
pub struct Network {
    topology: Vec<usize>,
    pub weights: Vec<WeightTable>,
    neurons: Vec<Vec<Neuron>>,
    pub activator: ActivationFunction,
    pub metric: ErrorMetric,
}

impl Network {
    /// Builds a network with thread-rng weight initialization.
    pub fn new(topology: Vec<usize>, activator: ActivationFunction, metric: ErrorMetric) -> Network {
        Network::with_rng(topology, activator, metric, &mut rand::thread_rng())
    }

    /// Builds a network drawing its initial weights from `rng`, so
    /// construction is reproducible under a seeded generator.
    pub fn with_rng(
        topology: Vec<usize>,
        activator: ActivationFunction,
        metric: ErrorMetric,
        rng: &mut impl Rng,
    ) -> Network {
        assert!(topology.len() >= 2, "topology needs at least input and output layers");
        assert!(topology.iter().all(|&size| size > 0), "layer sizes must be positive");

        let weights = topology
            .windows(2)
            .map(|pair| WeightTable::random(pair[0], pair[1], rng))
            .collect();
        let neurons = topology
            .iter()
            .map(|&size| vec![Neuron::zeroed(); size])
            .collect();

        Network {
            topology,
            weights,
            neurons,
            activator,
            metric,
        }
    }

    pub fn topology(&self) -> &[usize] {
        &self.topology
    }

    /// Output-layer neurons as of the last forward pass.
    pub fn output(&self) -> &[Neuron] {
        &self.neurons[self.topology.len() - 1]
    }

    /// Forward propagation. Copies `input` into the input layer (its
    /// pre-activation is zeroed by convention), then feeds every transition
    /// strictly in topological order, so a layer's activations are complete
    /// before the next layer reads them. Returns the output layer.
    ///
    /// # Panics
    /// If `input` does not match the input layer size (contract violation).
    pub fn forward(&mut self, input: &[Dec]) -> &[Neuron] {
        assert_eq!(
            input.len(),
            self.topology[0],
            "input length {} does not match input layer size {}",
            input.len(),
            self.topology[0]
        );

        for (neuron, value) in self.neurons[0].iter_mut().zip(input) {
            neuron.pre_activation = Dec::zero();
            neuron.activation = value.clone();
        }

        for i in 0..self.topology.len() - 1 {
            let (sources, rest) = self.neurons.split_at_mut(i + 1);
            self.weights[i].feed(&sources[i], &self.activator, &mut rest[0]);
        }

        self.output()
    }

    /// Forward pass followed by the injected error metric.
    pub fn compute_error(&mut self, input: &[Dec], target: &[Dec]) -> Vec<Dec> {
        self.forward(input);
        let output = &self.neurons[self.topology.len() - 1];
        self.metric.errors(output, target)
    }

    /// One backward pass: computes the output error, then walks the
    /// transitions from output to input, propagating the error and updating
    /// every weight (bias row included) by
    /// `lr * error[right] * σ'(dest activation) * source activation`.
    ///
    /// Each weight is read for the propagated-error sum before it is
    /// updated, so the error arriving at layer `i` never sees layer `i`'s
    /// fresh weights. The returned vector is the output-layer error from
    /// before any mutation.
    pub fn train(&mut self, input: &[Dec], target: &[Dec], learning_rate: &Dec) -> Vec<Dec> {
        let output_error = self.compute_error(input, target);

        let mut error = output_error.clone();
        for i in (0..self.topology.len() - 1).rev() {
            let sources = self.topology[i];
            let destinations = self.topology[i + 1];

            // σ'(a) per destination, from the forward-computed activations.
            let slopes: Vec<Dec> = (0..destinations)
                .map(|right| self.activator.derivative(&self.neurons[i + 1][right].activation))
                .collect();

            let mut propagated = vec![Dec::zero(); sources];
            let table = &mut self.weights[i];
            for left in 0..=sources {
                let bias = left == sources;
                for right in 0..destinations {
                    if !bias {
                        // Pre-update weight, by construction of this loop.
                        propagated[left] += &(&table.rows[left][right] * &error[right]);
                    }
                    let source_activation = if bias {
                        Dec::one()
                    } else {
                        self.neurons[i][left].activation.clone()
                    };
                    let step = &(&(learning_rate * &error[right]) * &slopes[right]) * &source_activation;
                    table.rows[left][right] += &step;
                }
            }
            error = propagated;
        }

        output_error
    }
}
