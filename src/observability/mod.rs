//! Observability for rosterdb
//!
//! - Structured JSON logs, one line per event
//! - Monotonic operation counters

mod logger;
mod metrics;

pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
