//! Well-known timing constants shared by the controller and its tests.
//!
//! Keeping them here avoids scattering magic intervals throughout the codebase.

/// Delay before a non-informational notice is dismissed automatically.
pub const DISMISS_DELAY_MS: u64 = 5_000;

/// Duration of the opacity fade that precedes removing a notice.
pub const FADE_MS: u64 = 300;

/// Interval after which a submit control stuck in the busy state is
/// forcibly re-enabled (defensive policy only).
pub const SAFETY_UNLOCK_MS: u64 = 10_000;
