mod id;
pub use id::{FormId, NoticeId};

mod constants;
pub use constants::{DISMISS_DELAY_MS, FADE_MS, SAFETY_UNLOCK_MS};

/// Delay value in milliseconds.
///
/// Used in guard policies and events where an explicit interval is required.
pub type DelayMs = u64;
