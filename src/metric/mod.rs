pub mod magnitude;
pub mod margin;
pub mod metric_type;
pub mod winner;

pub use magnitude::magnitude;
pub use margin::MarginClampedMetric;
pub use metric_type::{high_marker, low_marker, ErrorMetric};
pub use winner::WinnerTakeAllMetric;
