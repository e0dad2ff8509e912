pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod metric;
pub mod dataset;
pub mod train;

// Convenience re-exports
pub use math::decimal::{dec, Dec};
pub use activation::activation::ActivationFunction;
pub use layers::dense::{Neuron, WeightTable};
pub use network::network::Network;
pub use metric::magnitude::magnitude;
pub use metric::metric_type::{high_marker, low_marker, ErrorMetric};
pub use dataset::sample::Sample;
pub use train::epoch_stats::EpochStats;
pub use train::train_config::TrainConfig;
pub use train::trainer::{train_until_converged, TrainOutcome, TrainReport};
