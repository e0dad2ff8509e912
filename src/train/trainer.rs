use crate::dataset::sample::Sample;
use crate::math::decimal::Dec;
use crate::metric::magnitude::magnitude;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Terminal state of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainOutcome {
    /// The epoch error dropped to or below the threshold.
    Converged,
    /// `max_epochs` elapsed first. A normal outcome, not an error — the
    /// caller decides whether to retry with a different configuration.
    ThresholdNotReached,
}

/// What a training run ended with.
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub outcome: TrainOutcome,
    /// Completed epochs.
    pub epochs: usize,
    /// Epoch error of the last completed epoch.
    pub final_error: Dec,
}

/// Runs epochs until the epoch error reaches `config.threshold` or
/// `config.max_epochs` elapse.
///
/// Each epoch trains on every training sample in order (mutating weights)
/// and then evaluates every control sample (no mutation), recording the
/// root-sum-of-squares magnitude of each sample's error vector. The epoch
/// error is the magnitude of those magnitudes divided by the total sample
/// count.
///
/// # Panics
/// Panics if the training set is empty or `max_epochs` is zero.
pub fn train_until_converged(
    network: &mut Network,
    training: &[Sample],
    control: &[Sample],
    config: &TrainConfig,
) -> TrainReport {
    assert!(!training.is_empty(), "training set must not be empty");
    assert!(config.max_epochs > 0, "max_epochs must be at least 1");

    let total = Dec::from_usize(training.len() + control.len());
    let mut magnitudes = Vec::with_capacity(training.len() + control.len());
    let mut epoch_error = Dec::zero();

    for epoch in 1..=config.max_epochs {
        magnitudes.clear();

        for sample in training {
            let error = network.train(&sample.input, &sample.target, &config.learning_rate);
            magnitudes.push(magnitude(&error));
        }
        for sample in control {
            let error = network.compute_error(&sample.input, &sample.target);
            magnitudes.push(magnitude(&error));
        }

        epoch_error = &magnitude(&magnitudes) / &total;

        if let Some(ref tx) = config.progress_tx {
            // Observational only; a dropped receiver never stops training.
            let _ = tx.send(EpochStats {
                epoch,
                epoch_error: epoch_error.clone(),
            });
        }

        if epoch_error <= config.threshold {
            return TrainReport {
                outcome: TrainOutcome::Converged,
                epochs: epoch,
                final_error: epoch_error,
            };
        }
    }

    TrainReport {
        outcome: TrainOutcome::ThresholdNotReached,
        epochs: config.max_epochs,
        final_error: epoch_error,
    }
}
