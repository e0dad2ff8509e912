use crate::math::decimal::Dec;
use crate::train::epoch_stats::EpochStats;
use std::sync::mpsc;

/// Configuration for a `train_until_converged` run.
///
/// # Fields
/// - `learning_rate` — step scale applied to every weight update
/// - `threshold`     — training stops once the epoch error drops to or
///                     below this value
/// - `max_epochs`    — hard upper bound on epochs; required, because a
///                     threshold the network cannot reach would otherwise
///                     loop forever
/// - `progress_tx`   — optional channel sender; one `EpochStats` is sent
///                     per completed epoch
pub struct TrainConfig {
    pub learning_rate: Dec,
    pub threshold: Dec,
    pub max_epochs: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(learning_rate: Dec, threshold: Dec, max_epochs: usize) -> Self {
        TrainConfig {
            learning_rate,
            threshold,
            max_epochs,
            progress_tx: None,
        }
    }
}
