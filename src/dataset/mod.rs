pub mod bitmap;
pub mod sample;

pub use bitmap::{decode_digit, load_digit_set, render_digit};
pub use sample::Sample;
