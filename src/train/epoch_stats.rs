use crate::math::decimal::Dec;
use serde::{Deserialize, Serialize};

/// Per-epoch record emitted by `train_until_converged`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the driver
/// sends one `EpochStats` at the end of every completed epoch. Receivers are
/// purely observational — a dropped or full receiver never affects training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Root-sum-of-squares of all per-sample error magnitudes this epoch,
    /// divided by the total sample count (training + control).
    pub epoch_error: Dec,
}
