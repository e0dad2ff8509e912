use crate::math::decimal::Dec;
use serde::{Deserialize, Serialize};

/// One training or control sample: an input vector sized to the input layer
/// and a target vector in whatever shape the error metric expects.
/// Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<Dec>,
    pub target: Vec<Dec>,
}

impl Sample {
    pub fn new(input: Vec<Dec>, target: Vec<Dec>) -> Sample {
        Sample { input, target }
    }
}
