/// XOR demo: topology [2, 2, 1], margin-clamped error metric.
///
/// The four samples use the 0.2/0.8 class markers instead of 0/1 so both
/// classes sit inside the sigmoid's responsive range. Training runs until
/// the epoch error drops below 1e-7 (or the epoch bound is hit).
///
/// Run with:
///   cargo run --example xor --release

use decimal_nn::{
    dec, high_marker, low_marker, train_until_converged, ActivationFunction, ErrorMetric,
    Network, Sample, TrainConfig, TrainOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::mpsc;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut network = Network::with_rng(
        vec![2, 2, 1],
        ActivationFunction::Sigmoid,
        ErrorMetric::MarginClamped,
        &mut rng,
    );

    let lo = low_marker();
    let hi = high_marker();
    let samples = vec![
        Sample::new(vec![lo.clone(), lo.clone()], vec![lo.clone()]),
        Sample::new(vec![lo.clone(), hi.clone()], vec![hi.clone()]),
        Sample::new(vec![hi.clone(), lo.clone()], vec![hi.clone()]),
        Sample::new(vec![hi.clone(), hi.clone()], vec![lo.clone()]),
    ];

    let (tx, rx) = mpsc::channel();
    let mut config = TrainConfig::new(dec("0.5"), dec("1e-7"), 50_000);
    config.progress_tx = Some(tx);

    let report = train_until_converged(&mut network, &samples, &[], &config);
    drop(config);

    // Single-threaded run: the per-epoch stats were queued on the channel
    // during training; print a sampling of them now.
    let history: Vec<_> = rx.iter().collect();
    let stride = (history.len() / 10).max(1);
    for stats in history.iter().step_by(stride) {
        println!("epoch {:>6}  error {}", stats.epoch, stats.epoch_error);
    }

    match report.outcome {
        TrainOutcome::Converged => {
            println!("\nconverged after {} epochs (error {})", report.epochs, report.final_error)
        }
        TrainOutcome::ThresholdNotReached => {
            println!("\nstopped at the epoch bound ({} epochs, error {})", report.epochs, report.final_error)
        }
    }

    println!("\n{:>12}  {:>8}  {:>10}", "input", "target", "output");
    for sample in &samples {
        let output = network.forward(&sample.input)[0].activation.clone();
        println!(
            "{:>12}  {:>8}  {:>10}",
            format!("({}, {})", sample.input[0], sample.input[1]),
            sample.target[0].to_string(),
            output.to_string(),
        );
    }
}
