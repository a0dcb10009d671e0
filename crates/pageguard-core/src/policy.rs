use std::time::Duration;

use serde::{Deserialize, Serialize};

use pageguard_model::{DISMISS_DELAY_MS, FADE_MS, SAFETY_UNLOCK_MS};

/// Timing policy for one controller lifecycle.
///
/// The default policy is the defensive variant: stuck submit controls are
/// re-enabled after [`SAFETY_UNLOCK_MS`]. [`GuardPolicy::basic`] disables
/// the safety timer, matching the minimal page script. Failures in guard
/// steps never block the submission under either policy; only an explicit
/// user decline does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GuardPolicy {
    /// Delay before a non-informational notice is auto-dismissed.
    pub dismiss_after_ms: u64,

    /// Opacity fade duration preceding removal.
    pub fade_ms: u64,

    /// Interval after which a submit control still in the busy state is
    /// forcibly re-enabled. `None` disables the safety timer.
    pub safety_unlock_ms: Option<u64>,
}

impl GuardPolicy {
    /// Defensive policy (same as `Default`).
    pub fn defensive() -> Self {
        Self::default()
    }

    /// Baseline policy without the safety-unlock timer.
    pub fn basic() -> Self {
        Self {
            safety_unlock_ms: None,
            ..Self::default()
        }
    }

    /// Auto-dismiss delay as a [`Duration`].
    #[inline]
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }

    /// Fade duration as a [`Duration`].
    #[inline]
    pub fn fade(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }

    /// Safety-unlock interval as a [`Duration`], if enabled.
    #[inline]
    pub fn safety_unlock(&self) -> Option<Duration> {
        self.safety_unlock_ms.map(Duration::from_millis)
    }
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            dismiss_after_ms: DISMISS_DELAY_MS,
            fade_ms: FADE_MS,
            safety_unlock_ms: Some(SAFETY_UNLOCK_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GuardPolicy;
    use std::time::Duration;

    #[test]
    fn default_is_defensive() {
        let policy = GuardPolicy::default();

        assert_eq!(policy.dismiss_after(), Duration::from_secs(5));
        assert_eq!(policy.fade(), Duration::from_millis(300));
        assert_eq!(policy.safety_unlock(), Some(Duration::from_secs(10)));
        assert_eq!(policy, GuardPolicy::defensive());
    }

    #[test]
    fn basic_disables_safety_unlock_only() {
        let policy = GuardPolicy::basic();

        assert_eq!(policy.safety_unlock(), None);
        assert_eq!(policy.dismiss_after_ms, GuardPolicy::default().dismiss_after_ms);
        assert_eq!(policy.fade_ms, GuardPolicy::default().fade_ms);
    }

    #[test]
    fn serde_uses_defaults_for_missing_fields() {
        let policy: GuardPolicy = serde_json::from_str("{}").unwrap();
        assert_eq!(policy, GuardPolicy::default());
    }

    #[test]
    fn serde_roundtrip() {
        let policy = GuardPolicy {
            dismiss_after_ms: 2_000,
            fade_ms: 100,
            safety_unlock_ms: None,
        };

        let json = serde_json::to_string(&policy).unwrap();
        let back: GuardPolicy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, policy);
    }
}
