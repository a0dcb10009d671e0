//! Prometheus metrics backend for the page guard.
//!
//! Provides a [`PrometheusMetrics`] implementation of
//! [`pageguard_core::MetricsBackend`] that exposes guard activity in
//! Prometheus format.
//!
//! ## Metrics
//! - `pageguard_notices_dismissed_total{cause}` - Counter
//! - `pageguard_notice_visible_seconds{cause}` - Histogram
//! - `pageguard_submits_guarded_total{op}` - Counter
//! - `pageguard_guard_errors_total{stage}` - Counter
//!
//! ## Exposition
//! This crate does NOT provide an HTTP `/metrics` endpoint. Use the
//! application's existing HTTP framework and encode via
//! [`prometheus::TextEncoder`]:
//!
//! ```rust
//! use pageguard_prometheus::{Encoder, PrometheusMetrics, TextEncoder};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let mut buffer = Vec::new();
//! TextEncoder::new().encode(&metrics.gather(), &mut buffer)?;
//! # Ok(())
//! # }
//! ```

mod backend;
pub use backend::PrometheusMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
