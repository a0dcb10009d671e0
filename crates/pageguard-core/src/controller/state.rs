use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use pageguard_model::{ActionOp, NoticeKind};

/// Dismissal lifecycle of a single notice.
///
/// `Visible → Fading → Removed`, entered from `Visible` by timer expiry or
/// manual close. `Removed` is terminal; re-dismissing is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeState {
    Visible,
    Fading,
    Removed,
}

/// Per-notice bookkeeping held by the controller.
pub(crate) struct NoticeEntry {
    pub kind: NoticeKind,
    pub state: NoticeState,
    /// Cancels the pending auto-dismiss timer, if one was scheduled.
    pub timer: Option<CancellationToken>,
    pub shown_at: Instant,
}

impl NoticeEntry {
    pub fn new(kind: NoticeKind, timer: Option<CancellationToken>, shown_at: Instant) -> Self {
        Self {
            kind,
            state: NoticeState::Visible,
            timer,
            shown_at,
        }
    }
}

/// Submission lifecycle of a single action form.
///
/// `Idle → Submitting` on submit; the safety timer (defensive policy)
/// forces `Submitting → Idle` if nothing else ends the lifecycle first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SubmitState {
    Idle,
    Submitting,
}

/// Per-form bookkeeping held by the controller.
pub(crate) struct FormEntry {
    pub op: ActionOp,
    pub state: SubmitState,
    /// Cancels the pending safety-unlock timer, if one was scheduled.
    pub unlock: Option<CancellationToken>,
}

impl FormEntry {
    pub fn new(op: ActionOp) -> Self {
        Self {
            op,
            state: SubmitState::Idle,
            unlock: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn notice_entry_starts_visible() {
        let entry = NoticeEntry::new(NoticeKind::Danger, None, Instant::now());

        assert_eq!(entry.state, NoticeState::Visible);
        assert!(entry.timer.is_none());
    }

    #[tokio::test]
    async fn form_entry_starts_idle_without_unlock_timer() {
        let entry = FormEntry::new(ActionOp::Withdraw);

        assert_eq!(entry.state, SubmitState::Idle);
        assert!(entry.unlock.is_none());
        assert_eq!(entry.op, ActionOp::Withdraw);
    }
}
