pub mod dense;

pub use dense::{Neuron, WeightTable};
