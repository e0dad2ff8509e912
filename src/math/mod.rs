pub mod decimal;

pub use decimal::{dec, Dec, SIGMOID_PRECISION, WORKING_PRECISION};
