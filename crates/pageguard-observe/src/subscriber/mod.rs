#![cfg(feature = "subscriber")]

//! Event logging subscriber for the page guard.
//!
//! Maps guard lifecycle events to structured tracing logs with appropriate
//! severity levels, so a page session can be reconstructed from logs alone.

use async_trait::async_trait;

use pageguard_core::events::{GuardEvent, Subscribe};
use tracing::{debug, error, info, trace, warn};

/// Subscriber that logs every guard event using the tracing framework.
#[derive(Default)]
pub struct Subscriber;

#[async_trait]
impl Subscribe for Subscriber {
    async fn on_event(&self, event: &GuardEvent) {
        log_event(event);
    }

    fn name(&self) -> &'static str {
        "guard-subscriber"
    }
}

/// Logs an event with the appropriate tracing level and structured fields.
fn log_event(event: &GuardEvent) {
    let msg = message_for(event);

    match event {
        // Routine scheduling — trace level
        GuardEvent::DismissScheduled { notice, delay_ms } => {
            trace!(notice = %notice, delay_ms, "{msg}")
        }

        // Notice lifecycle
        GuardEvent::NoticeDismissed { notice, cause } => {
            debug!(notice = %notice, cause = cause.as_label(), "{msg}")
        }
        GuardEvent::DismissFailed { notice, reason } => {
            warn!(notice = %notice, reason = %reason, "{msg}")
        }

        // Submit guarding
        GuardEvent::SubmitGuarded { form, op } => info!(form = %form, op = %op, "{msg}"),
        GuardEvent::SubmitIgnored { form } => debug!(form = %form, "{msg}"),
        GuardEvent::GuardFailed { form, reason } => {
            warn!(form = %form, reason = %reason, "{msg}")
        }

        // Confirmation gate — user decisions are info, failures warn
        GuardEvent::ConfirmAccepted { form } => info!(form = %form, "{msg}"),
        GuardEvent::ConfirmDeclined { form } => info!(form = %form, "{msg}"),
        GuardEvent::ConfirmFailed { form, reason } => {
            warn!(form = %form, reason = %reason, "{msg}")
        }

        // Safety unlock — firing at all means a request hung
        GuardEvent::SafetyUnlocked { form } => warn!(form = %form, "{msg}"),
        GuardEvent::UnlockFailed { form, reason } => {
            error!(form = %form, reason = %reason, "{msg}")
        }

        GuardEvent::Detached => debug!("{msg}"),
    }
}

/// Returns a human-readable description for each event.
///
/// These are the primary log messages; structured fields carry the context.
#[inline]
fn message_for(event: &GuardEvent) -> &'static str {
    match event {
        GuardEvent::DismissScheduled { .. } => "dismissal timer scheduled",
        GuardEvent::NoticeDismissed { .. } => "notice removed from page",
        GuardEvent::DismissFailed { .. } => "notice removal failed (siblings unaffected)",
        GuardEvent::SubmitGuarded { .. } => "submit control disabled for the duration of the request",
        GuardEvent::SubmitIgnored { .. } => "duplicate or unguardable submission ignored",
        GuardEvent::GuardFailed { .. } => "submit guard failed (submission proceeds)",
        GuardEvent::ConfirmAccepted { .. } => "destructive action confirmed by user",
        GuardEvent::ConfirmDeclined { .. } => "destructive action declined by user",
        GuardEvent::ConfirmFailed { .. } => "confirmation prompt failed (submission proceeds)",
        GuardEvent::SafetyUnlocked { .. } => "stuck submit control re-enabled by safety timer",
        GuardEvent::UnlockFailed { .. } => "safety unlock could not re-enable the control",
        GuardEvent::Detached => "controller detached, timers cancelled",
    }
}
