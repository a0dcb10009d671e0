//! Metrics collection abstraction for the page guard.
//!
//! Backends (prometheus, statsd, ...) implement [`MetricsBackend`] and are
//! injected into the controller at build time.
mod backend;
pub use backend::{DismissCause, GuardStage, MetricsBackend, MetricsHandle};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
