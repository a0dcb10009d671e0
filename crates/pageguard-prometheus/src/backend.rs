use std::sync::Arc;

use prometheus::{CounterVec, HistogramVec, Opts, Registry, proto::MetricFamily};

use pageguard_core::{DismissCause, GuardStage, MetricsBackend};

/// Prometheus metrics backend for the page guard.
///
/// Implements [`MetricsBackend`]; gathered families can be scraped via any
/// HTTP endpoint the application already exposes.
///
/// ## Label cardinality
/// All labels are bounded:
/// - `cause`: "timer", "manual"
/// - `op`: the small set of form operations rendered on a page
/// - `stage`: "dismiss", "guard", "confirm", "unlock"
#[derive(Clone)]
pub struct PrometheusMetrics {
    notices_dismissed: CounterVec,
    notice_visible: HistogramVec,
    submits_guarded: CounterVec,
    guard_errors: CounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    /// Create a metrics backend registered on a custom registry.
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let notices_dismissed = CounterVec::new(
            Opts::new(
                "notices_dismissed_total",
                "Total number of notices removed from the page",
            )
            .namespace("pageguard"),
            &["cause"],
        )?;
        registry.register(Box::new(notices_dismissed.clone()))?;

        let notice_visible = HistogramVec::new(
            prometheus::HistogramOpts::new(
                "notice_visible_seconds",
                "How long notices stayed visible before removal",
            )
            .namespace("pageguard")
            .buckets(vec![0.5, 1.0, 2.0, 5.0, 5.5, 10.0, 30.0]),
            &["cause"],
        )?;
        registry.register(Box::new(notice_visible.clone()))?;

        let submits_guarded = CounterVec::new(
            Opts::new(
                "submits_guarded_total",
                "Total number of submit controls disabled during submission",
            )
            .namespace("pageguard"),
            &["op"],
        )?;
        registry.register(Box::new(submits_guarded.clone()))?;

        let guard_errors = CounterVec::new(
            Opts::new(
                "guard_errors_total",
                "Total errors absorbed by guard steps (submission never blocked)",
            )
            .namespace("pageguard"),
            &["stage"],
        )?;
        registry.register(Box::new(guard_errors.clone()))?;

        Ok(Self {
            notices_dismissed,
            notice_visible,
            submits_guarded,
            guard_errors,
            registry,
        })
    }

    /// Create a metrics backend with its own registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    /// Gather all metric families for exposition.
    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    /// Reference to the underlying registry, for registering custom metrics
    /// alongside the guard's.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_notice_dismissed(&self, cause: DismissCause, visible_ms: u64) {
        self.notices_dismissed
            .with_label_values(&[cause.as_label()])
            .inc();

        let visible_seconds = visible_ms as f64 / 1000.0;
        self.notice_visible
            .with_label_values(&[cause.as_label()])
            .observe(visible_seconds);
    }

    fn record_submit_guarded(&self, op: &str) {
        self.submits_guarded.with_label_values(&[op]).inc();
    }

    fn record_guard_error(&self, stage: GuardStage) {
        self.guard_errors
            .with_label_values(&[stage.as_label()])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_create_prometheus_metrics() {
        let _metrics = PrometheusMetrics::new().expect("failed to create metrics");
    }

    #[test]
    fn dismissals_update_counter_and_histogram() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_notice_dismissed(DismissCause::Timer, 5_300);
        metrics.record_notice_dismissed(DismissCause::Timer, 5_120);
        metrics.record_notice_dismissed(DismissCause::Manual, 1_300);

        let families = metrics.gather();

        let dismissed = families
            .iter()
            .find(|f| f.name() == "pageguard_notices_dismissed_total")
            .expect("dismissed counter not found");
        assert_eq!(dismissed.get_metric().len(), 2);

        let visible = families
            .iter()
            .find(|f| f.name() == "pageguard_notice_visible_seconds")
            .expect("visible histogram not found");
        assert_eq!(visible.get_metric().len(), 2);
    }

    #[test]
    fn guarded_submits_increment_per_op() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_submit_guarded("withdraw");
        metrics.record_submit_guarded("withdraw");
        metrics.record_submit_guarded("harvest");

        let families = metrics.gather();
        let guarded = families
            .iter()
            .find(|f| f.name() == "pageguard_submits_guarded_total")
            .expect("guarded counter not found");

        assert_eq!(guarded.get_metric().len(), 2);
    }

    #[test]
    fn guard_errors_increment_per_stage() {
        let metrics = PrometheusMetrics::new().unwrap();

        metrics.record_guard_error(GuardStage::Confirm);
        metrics.record_guard_error(GuardStage::Confirm);
        metrics.record_guard_error(GuardStage::Dismiss);

        let families = metrics.gather();
        let errors = families
            .iter()
            .find(|f| f.name() == "pageguard_guard_errors_total")
            .expect("errors counter not found");

        assert_eq!(errors.get_metric().len(), 2);
    }

    #[test]
    fn can_use_custom_registry() {
        let registry = Arc::new(Registry::new());
        let metrics = PrometheusMetrics::new_with_registry(registry.clone()).unwrap();

        metrics.record_submit_guarded("end_turn");
        assert!(!registry.gather().is_empty());
    }
}
