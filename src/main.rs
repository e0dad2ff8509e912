// This binary crate is intentionally minimal.
// All network logic lives in the library (src/lib.rs and its modules).
// The demo scenarios are selected by which example you run:
//   cargo run --example xor
//   cargo run --example digits
fn main() {
    println!("decimal-nn: a multilayer perceptron on arbitrary-precision decimals.");
    println!("Run `cargo run --example xor` or `cargo run --example digits`.");
}
