/// Digit-recognition demo: topology [24, 10], winner-take-all error metric.
///
/// Expects 4×6-pixel bitmap files under demos/digits/, each named with its
/// class label as the first character (e.g. `3.bmp`, `3_0.bmp`, ...). Every
/// image decodes to a 24-element vector of the 0.2/0.8 intensity levels.
///
/// Training uses a learning rate of 10 and a threshold of 0: the
/// winner-take-all metric returns all-zero errors once every sample
/// classifies correctly, so zero is reachable.
///
/// Run with:
///   cargo run --example digits --release

use decimal_nn::dataset::bitmap::{load_digit_set, render_digit};
use decimal_nn::{
    dec, train_until_converged, ActivationFunction, ErrorMetric, Network, TrainConfig,
    TrainOutcome,
};
use std::path::Path;
use std::process::exit;

fn main() {
    let digit_dir = Path::new("demos/digits");
    let samples = match load_digit_set(digit_dir) {
        Ok(samples) if !samples.is_empty() => samples,
        Ok(_) => {
            eprintln!("No digit bitmaps found under {}.", digit_dir.display());
            eprintln!("Place 4x6 .bmp/.png files there, named `<digit>*.bmp`.");
            exit(1);
        }
        Err(e) => {
            eprintln!("Cannot load digit set from {}: {}", digit_dir.display(), e);
            exit(1);
        }
    };

    println!("Loaded {} digit samples:\n", samples.len());
    for sample in &samples {
        println!("label {}", sample.target[0]);
        println!("{}", render_digit(&sample.input));
    }

    let mut network = Network::new(
        vec![24, 10],
        ActivationFunction::Sigmoid,
        ErrorMetric::WinnerTakeAll,
    );

    let config = TrainConfig::new(dec("10"), dec("0"), 10_000);
    let report = train_until_converged(&mut network, &samples, &[], &config);

    match report.outcome {
        TrainOutcome::Converged => println!("converged after {} epochs", report.epochs),
        TrainOutcome::ThresholdNotReached => println!(
            "stopped at the epoch bound ({} epochs, error {})",
            report.epochs, report.final_error
        ),
    }

    println!("\n{:>8}  {:>10}", "label", "predicted");
    for sample in &samples {
        let output = network.forward(&sample.input);
        let mut best = 0;
        for i in 1..output.len() {
            if output[i].activation > output[best].activation {
                best = i;
            }
        }
        println!("{:>8}  {:>10}", sample.target[0].to_string(), best);
    }
}
