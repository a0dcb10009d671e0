use crate::metrics::backend::{DismissCause, GuardStage, MetricsBackend};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_notice_dismissed(&self, _: DismissCause, _: u64) {}

    #[inline(always)]
    fn record_submit_guarded(&self, _: &str) {}

    #[inline(always)]
    fn record_guard_error(&self, _: GuardStage) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }

    #[test]
    fn noop_can_be_called_repeatedly() {
        let metrics = NoOpMetrics;
        for _ in 0..100 {
            metrics.record_notice_dismissed(DismissCause::Timer, 5_000);
            metrics.record_submit_guarded("withdraw");
            metrics.record_guard_error(GuardStage::Confirm);
        }
    }
}
