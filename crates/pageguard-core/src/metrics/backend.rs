use std::sync::Arc;

/// How a notice left the page, for metrics classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissCause {
    /// The auto-dismissal timer expired.
    Timer,
    /// The user activated the notice's close control.
    Manual,
}

impl DismissCause {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            DismissCause::Timer => "timer",
            DismissCause::Manual => "manual",
        }
    }
}

/// Guard step in which an error was absorbed.
///
/// Guard-step failures never block the primary user action; this label
/// records where they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardStage {
    /// Fading out / removing a notice.
    Dismiss,
    /// Applying the busy state to a submit control.
    Guard,
    /// Presenting the confirmation prompt.
    Confirm,
    /// Re-enabling a stuck submit control.
    Unlock,
}

impl GuardStage {
    /// Return label value for metrics.
    #[inline]
    pub fn as_label(&self) -> &'static str {
        match self {
            GuardStage::Dismiss => "dismiss",
            GuardStage::Guard => "guard",
            GuardStage::Confirm => "confirm",
            GuardStage::Unlock => "unlock",
        }
    }
}

/// Backend metrics collection interface.
///
/// Implementations are injected into [`crate::PageGuard`] at build time and
/// called from the controller's own context; they must not block.
pub trait MetricsBackend: Send + Sync + 'static {
    /// Record a removed notice.
    ///
    /// # Arguments
    /// - `cause`: timer expiry or manual close
    /// - `visible_ms`: how long the notice stayed on the page
    fn record_notice_dismissed(&self, cause: DismissCause, visible_ms: u64);

    /// Record a submit control marked busy.
    ///
    /// # Arguments
    /// - `op`: targeted operation (bounded label set)
    fn record_submit_guarded(&self, op: &str);

    /// Record an error absorbed by a guard step.
    ///
    /// Separate from user declines, which are not errors.
    ///
    /// # Arguments
    /// - `stage`: where the error was absorbed
    fn record_guard_error(&self, stage: GuardStage);
}

/// Shared handle to a metrics backend.
pub type MetricsHandle = Arc<dyn MetricsBackend>;

#[cfg(test)]
mod tests {
    use super::{DismissCause, GuardStage};

    #[test]
    fn labels_are_stable() {
        assert_eq!(DismissCause::Timer.as_label(), "timer");
        assert_eq!(DismissCause::Manual.as_label(), "manual");

        assert_eq!(GuardStage::Dismiss.as_label(), "dismiss");
        assert_eq!(GuardStage::Guard.as_label(), "guard");
        assert_eq!(GuardStage::Confirm.as_label(), "confirm");
        assert_eq!(GuardStage::Unlock.as_label(), "unlock");
    }
}
