//! Guard lifecycle events fanned out to registered subscribers.
use async_trait::async_trait;

use pageguard_model::{ActionOp, DelayMs, FormId, NoticeId};

use crate::metrics::DismissCause;

/// Lifecycle event emitted by the controller.
///
/// Events carry enough structured context for logging and diagnostics;
/// they never carry view handles.
#[derive(Debug, Clone)]
pub enum GuardEvent {
    /// A dismissal timer was scheduled for a notice.
    DismissScheduled { notice: NoticeId, delay_ms: DelayMs },

    /// A notice finished its fade and was removed.
    NoticeDismissed { notice: NoticeId, cause: DismissCause },

    /// Removing a notice failed; sibling notices are unaffected.
    DismissFailed { notice: NoticeId, reason: String },

    /// A submit control was marked busy and disabled.
    SubmitGuarded { form: FormId, op: ActionOp },

    /// A submit arrived while the control was absent, disabled or already busy.
    SubmitIgnored { form: FormId },

    /// Applying the busy state failed; the submission proceeds anyway.
    GuardFailed { form: FormId, reason: String },

    /// The user accepted the destructive-action prompt.
    ConfirmAccepted { form: FormId },

    /// The user declined the destructive-action prompt.
    ConfirmDeclined { form: FormId },

    /// Showing the prompt failed; the submission proceeds anyway.
    ConfirmFailed { form: FormId, reason: String },

    /// The safety timer re-enabled a stuck submit control.
    SafetyUnlocked { form: FormId },

    /// The safety timer could not re-enable the control.
    UnlockFailed { form: FormId, reason: String },

    /// The controller detached and cancelled outstanding timers.
    Detached,
}

/// Receiver of guard lifecycle events.
///
/// Subscribers observe; they must never influence the guarded action.
/// Fan-out is awaited in registration order inside the controller's
/// single-threaded context, so handlers should return promptly.
#[async_trait]
pub trait Subscribe: Send + Sync {
    /// Handle a single event.
    async fn on_event(&self, event: &GuardEvent);

    /// Subscriber name used in logs and diagnostics.
    fn name(&self) -> &'static str;
}
