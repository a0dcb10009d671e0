//! Page guard controller: wires transient UI safety behaviors onto a view.
//!
//! One controller instance serves one page lifecycle:
//! - [`PageGuard::attach`] scans the view and schedules auto-dismissal
//!   timers for non-informational notices;
//! - [`PageGuard::close_notice`] handles a notice's close control;
//! - [`PageGuard::submit`] intercepts form submissions (confirmation gate,
//!   busy guard, safety unlock);
//! - [`PageGuard::detach`] cancels outstanding timers for clean teardown.
//!
//! Failures in any guard step are absorbed, logged and reported through
//! events; only an explicit user decline cancels a submission.
mod state;
use state::{FormEntry, NoticeEntry, NoticeState, SubmitState};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, trace, warn};

use pageguard_model::{ConfirmPrompt, FormId, NoticeId};

use crate::error::CoreError;
use crate::events::{GuardEvent, Subscribe};
use crate::metrics::{DismissCause, GuardStage, MetricsHandle, noop_metrics};
use crate::policy::GuardPolicy;
use crate::view::{PageView, ViewError};

/// Outcome of intercepting a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the default submission proceed.
    Proceed,
    /// Cancel the default submission (the user declined the confirmation).
    Cancel,
}

impl SubmitDecision {
    /// Whether the default submission was cancelled.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SubmitDecision::Cancel)
    }
}

struct Inner {
    notices: HashMap<NoticeId, NoticeEntry>,
    forms: HashMap<FormId, FormEntry>,
    /// Parent token for every timer spawned in the current lifecycle.
    lifecycle: CancellationToken,
    attached: bool,
}

/// Controller attaching transient UI safety behaviors to a loaded page.
///
/// Constructed once per page lifecycle via [`PageGuard::builder`]; the view
/// is injected, so the controller can be driven by a real page bridge or a
/// test double alike.
pub struct PageGuard {
    view: Arc<dyn PageView>,
    policy: GuardPolicy,
    subscribers: Vec<Arc<dyn Subscribe>>,
    metrics: MetricsHandle,
    inner: Mutex<Inner>,
}

/// Builder for [`PageGuard`].
pub struct PageGuardBuilder {
    view: Arc<dyn PageView>,
    policy: GuardPolicy,
    subscribers: Vec<Arc<dyn Subscribe>>,
    metrics: MetricsHandle,
}

impl PageGuardBuilder {
    /// Set the guard policy. Defaults to [`GuardPolicy::defensive`].
    pub fn with_policy(mut self, policy: GuardPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register event subscribers.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Set the metrics backend. Defaults to the no-op backend.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    /// Build the controller.
    pub fn build(self) -> Arc<PageGuard> {
        Arc::new(PageGuard {
            view: self.view,
            policy: self.policy,
            subscribers: self.subscribers,
            metrics: self.metrics,
            inner: Mutex::new(Inner {
                notices: HashMap::new(),
                forms: HashMap::new(),
                lifecycle: CancellationToken::new(),
                attached: false,
            }),
        })
    }
}

impl PageGuard {
    /// Start building a controller over the given view.
    pub fn builder(view: Arc<dyn PageView>) -> PageGuardBuilder {
        PageGuardBuilder {
            view,
            policy: GuardPolicy::default(),
            subscribers: Vec::new(),
            metrics: noop_metrics(),
        }
    }

    /// The policy this controller runs with.
    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    /// Attach to the page: register forms and schedule dismissal timers.
    ///
    /// Scans the view once. Every notice whose kind is not informational
    /// gets a cancellable auto-dismiss timer; every state-changing (POST)
    /// form is registered for submit guarding. A failure while handling
    /// one element never prevents siblings from being processed.
    #[instrument(level = "debug", skip(self))]
    pub async fn attach(self: &Arc<Self>) -> Result<(), CoreError> {
        let notices = self.view.notices();
        let forms = self.view.forms();
        let now = Instant::now();

        let mut scheduled = Vec::new();
        {
            let mut inner = self.lock();
            if inner.attached {
                return Err(CoreError::AlreadyAttached);
            }
            inner.attached = true;
            inner.lifecycle = CancellationToken::new();

            for spec in &notices {
                let timer = if spec.auto_dismiss() {
                    let token = inner.lifecycle.child_token();
                    scheduled.push((spec.id.clone(), token.clone()));
                    Some(token)
                } else {
                    trace!(notice = %spec.id, "informational notice, no timer");
                    None
                };
                inner
                    .notices
                    .insert(spec.id.clone(), NoticeEntry::new(spec.kind, timer, now));
            }

            for spec in &forms {
                if !spec.guarded() {
                    trace!(form = %spec.id, method = %spec.method, "form is not state-changing, skipping");
                    continue;
                }
                inner
                    .forms
                    .insert(spec.id.clone(), FormEntry::new(spec.op.clone()));
            }
        }

        let timer_count = scheduled.len();
        for (id, token) in scheduled {
            self.spawn_dismiss_timer(id.clone(), token);
            self.emit(GuardEvent::DismissScheduled {
                notice: id,
                delay_ms: self.policy.dismiss_after_ms,
            })
            .await;
        }

        info!(
            notices = notices.len(),
            timers = timer_count,
            forms = forms.len(),
            "page guard attached"
        );
        Ok(())
    }

    /// Detach from the page: cancel outstanding timers and clear state.
    ///
    /// Safe to call more than once; a later [`attach`](Self::attach)
    /// starts a fresh lifecycle.
    #[instrument(level = "debug", skip(self))]
    pub async fn detach(self: &Arc<Self>) {
        let was_attached = {
            let mut inner = self.lock();
            let was = inner.attached;
            inner.attached = false;
            inner.lifecycle.cancel();
            inner.notices.clear();
            inner.forms.clear();
            was
        };

        if was_attached {
            self.emit(GuardEvent::Detached).await;
            debug!("page guard detached");
        }
    }

    /// Manual dismissal from a notice's close control.
    ///
    /// Removes the notice immediately regardless of the pending timer.
    /// Closing an already-removed or unknown notice is a no-op.
    #[instrument(level = "debug", skip(self, id), fields(notice = %id))]
    pub async fn close_notice(self: &Arc<Self>, id: &NoticeId) {
        self.dismiss(id, DismissCause::Manual).await;
    }

    /// Intercept a form submission.
    ///
    /// Destructive operations go through the blocking confirmation first;
    /// an explicit decline is the only path that cancels the submission.
    /// Everything else — prompt failures, guard failures, unknown forms —
    /// fails open.
    #[instrument(level = "debug", skip(self, id), fields(form = %id))]
    pub async fn submit(self: &Arc<Self>, id: &FormId) -> SubmitDecision {
        let op = {
            let inner = self.lock();
            match inner.forms.get(id) {
                Some(entry) => entry.op.clone(),
                None => {
                    trace!("form is not guarded, submission proceeds untouched");
                    return SubmitDecision::Proceed;
                }
            }
        };

        if let Some(prompt) = ConfirmPrompt::for_op(&op) {
            match self.view.confirm(&prompt) {
                Ok(true) => {
                    self.emit(GuardEvent::ConfirmAccepted { form: id.clone() })
                        .await;
                }
                Ok(false) => {
                    debug!(op = %op, "user declined destructive action");
                    self.emit(GuardEvent::ConfirmDeclined { form: id.clone() })
                        .await;
                    return SubmitDecision::Cancel;
                }
                Err(e) => {
                    warn!(op = %op, error = %e, "confirmation prompt failed, submission proceeds");
                    self.metrics.record_guard_error(GuardStage::Confirm);
                    self.emit(GuardEvent::ConfirmFailed {
                        form: id.clone(),
                        reason: e.to_string(),
                    })
                    .await;
                }
            }
        }

        self.apply_guard(id).await;
        SubmitDecision::Proceed
    }

    /// Mark the submit control busy and arm the safety-unlock timer.
    ///
    /// Never blocks the submission: every failure here is absorbed.
    async fn apply_guard(self: &Arc<Self>, id: &FormId) {
        let idle = {
            let inner = self.lock();
            matches!(
                inner.forms.get(id).map(|f| f.state),
                Some(SubmitState::Idle)
            )
        };
        if !idle {
            debug!("submit control already busy, ignoring duplicate submission");
            self.emit(GuardEvent::SubmitIgnored { form: id.clone() })
                .await;
            return;
        }

        match self.view.submit_enabled(id) {
            Ok(true) => {}
            Ok(false) => {
                debug!("submit control absent or disabled, nothing to guard");
                self.emit(GuardEvent::SubmitIgnored { form: id.clone() })
                    .await;
                return;
            }
            Err(e) => {
                self.guard_failed(id, &e).await;
                return;
            }
        }

        if let Err(e) = self.view.set_submit_busy(id, true) {
            self.guard_failed(id, &e).await;
            return;
        }

        let (op, unlock) = {
            let mut inner = self.lock();
            let token = self
                .policy
                .safety_unlock()
                .map(|_| inner.lifecycle.child_token());
            match inner.forms.get_mut(id) {
                Some(entry) => {
                    entry.state = SubmitState::Submitting;
                    entry.unlock = token.clone();
                    (entry.op.clone(), token)
                }
                // page mutated underneath us; nothing left to guard
                None => return,
            }
        };

        self.metrics.record_submit_guarded(op.as_str());
        self.emit(GuardEvent::SubmitGuarded {
            form: id.clone(),
            op,
        })
        .await;

        if let (Some(token), Some(delay)) = (unlock, self.policy.safety_unlock()) {
            self.spawn_unlock_timer(id.clone(), delay, token);
        }
    }

    async fn guard_failed(self: &Arc<Self>, id: &FormId, e: &ViewError) {
        warn!(error = %e, "failed to apply submit guard, submission proceeds");
        self.metrics.record_guard_error(GuardStage::Guard);
        self.emit(GuardEvent::GuardFailed {
            form: id.clone(),
            reason: e.to_string(),
        })
        .await;
    }

    fn spawn_dismiss_timer(self: &Arc<Self>, id: NoticeId, cancel: CancellationToken) {
        let guard = Arc::clone(self);
        let delay = self.policy.dismiss_after();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    trace!(notice = %id, "dismiss timer cancelled");
                }
                _ = time::sleep(delay) => {
                    guard.dismiss(&id, DismissCause::Timer).await;
                }
            }
        });
    }

    fn spawn_unlock_timer(
        self: &Arc<Self>,
        id: FormId,
        delay: std::time::Duration,
        cancel: CancellationToken,
    ) {
        let guard = Arc::clone(self);
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    trace!(form = %id, "safety-unlock timer cancelled");
                }
                _ = time::sleep(delay) => {
                    guard.safety_unlock(&id).await;
                }
            }
        });
    }

    /// Fade a notice out and remove it, exactly once per notice.
    ///
    /// Shared by the timer path and the manual close path; the state
    /// machine decides which of the two wins a race. On removal failure
    /// the notice returns to `Visible` so a later close can retry.
    async fn dismiss(self: &Arc<Self>, id: &NoticeId, cause: DismissCause) {
        let shown_at = {
            let mut inner = self.lock();
            match inner.notices.get_mut(id) {
                Some(entry) if entry.state == NoticeState::Visible => {
                    entry.state = NoticeState::Fading;
                    if let Some(token) = entry.timer.take() {
                        token.cancel();
                    }
                    trace!(notice = %id, kind = %entry.kind, "notice fading");
                    entry.shown_at
                }
                _ => {
                    trace!(notice = %id, "notice already dismissed or unknown");
                    return;
                }
            }
        };

        if let Err(e) = self.fade_out(id).await {
            warn!(notice = %id, error = %e, "failed to dismiss notice");
            self.metrics.record_guard_error(GuardStage::Dismiss);
            {
                let mut inner = self.lock();
                if let Some(entry) = inner.notices.get_mut(id) {
                    entry.state = NoticeState::Visible;
                }
            }
            self.emit(GuardEvent::DismissFailed {
                notice: id.clone(),
                reason: e.to_string(),
            })
            .await;
            return;
        }

        let visible_ms = shown_at.elapsed().as_millis() as u64;
        {
            let mut inner = self.lock();
            if let Some(entry) = inner.notices.get_mut(id) {
                entry.state = NoticeState::Removed;
            }
        }

        self.metrics.record_notice_dismissed(cause, visible_ms);
        self.emit(GuardEvent::NoticeDismissed {
            notice: id.clone(),
            cause,
        })
        .await;
    }

    async fn fade_out(&self, id: &NoticeId) -> Result<(), ViewError> {
        self.view.begin_fade(id)?;
        time::sleep(self.policy.fade()).await;
        self.view.remove_notice(id)
    }

    /// Force a stuck submit control back to the enabled state.
    async fn safety_unlock(self: &Arc<Self>, id: &FormId) {
        let still_submitting = {
            let mut inner = self.lock();
            match inner.forms.get_mut(id) {
                Some(entry) if entry.state == SubmitState::Submitting => {
                    entry.state = SubmitState::Idle;
                    entry.unlock = None;
                    true
                }
                _ => false,
            }
        };
        if !still_submitting {
            return;
        }

        match self.view.set_submit_busy(id, false) {
            Ok(()) => {
                info!(form = %id, "safety unlock re-enabled submit control");
                self.emit(GuardEvent::SafetyUnlocked { form: id.clone() })
                    .await;
            }
            Err(e) => {
                warn!(form = %id, error = %e, "safety unlock failed");
                self.metrics.record_guard_error(GuardStage::Unlock);
                self.emit(GuardEvent::UnlockFailed {
                    form: id.clone(),
                    reason: e.to_string(),
                })
                .await;
            }
        }
    }

    async fn emit(&self, event: GuardEvent) {
        for subscriber in &self.subscribers {
            subscriber.on_event(&event).await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
