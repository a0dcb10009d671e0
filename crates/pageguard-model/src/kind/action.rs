use std::fmt;

use serde::{Deserialize, Serialize};

/// Typed operation identifier carried by an action form.
///
/// The renderer passes this as a data attribute, replacing the old
/// substring match against the form's action URL. [`ActionOp::from_target`]
/// keeps that match as a fallback for markup that has not been migrated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOp {
    /// Withdraw support from the alliance. Destructive; requires confirmation.
    Withdraw,
    /// Advance to the next turn.
    EndTurn,
    /// Resolve a pending choice event.
    Choice,
    /// Any other state-changing operation (harvest, fortify, build, ...).
    Other(String),
}

impl ActionOp {
    /// Returns the operation as a string usable in logs and metric labels.
    pub fn as_str(&self) -> &str {
        match self {
            ActionOp::Withdraw => "withdraw",
            ActionOp::EndTurn => "end_turn",
            ActionOp::Choice => "choice",
            ActionOp::Other(s) => s.as_str(),
        }
    }

    /// Whether this operation needs an explicit user confirmation before
    /// the submission may proceed.
    #[inline]
    pub fn is_destructive(&self) -> bool {
        matches!(self, ActionOp::Withdraw)
    }

    /// Classify an operation from a form's action target.
    ///
    /// Fallback for legacy markup: matches well-known substrings of the
    /// action URL, the way the page script used to identify the withdraw
    /// form.
    pub fn from_target(target: &str) -> Self {
        if target.contains("withdraw") {
            ActionOp::Withdraw
        } else if target.contains("end_turn") {
            ActionOp::EndTurn
        } else if target.contains("choice") {
            ActionOp::Choice
        } else {
            ActionOp::Other(target.to_string())
        }
    }
}

impl fmt::Display for ActionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::ActionOp;

    #[test]
    fn withdraw_is_the_only_destructive_op() {
        assert!(ActionOp::Withdraw.is_destructive());
        assert!(!ActionOp::EndTurn.is_destructive());
        assert!(!ActionOp::Choice.is_destructive());
        assert!(!ActionOp::Other("harvest".into()).is_destructive());
    }

    #[test]
    fn from_target_matches_known_substrings() {
        assert_eq!(ActionOp::from_target("/alliance/withdraw"), ActionOp::Withdraw);
        assert_eq!(ActionOp::from_target("/end_turn"), ActionOp::EndTurn);
        assert_eq!(ActionOp::from_target("/choice"), ActionOp::Choice);
        assert_eq!(
            ActionOp::from_target("/action"),
            ActionOp::Other("/action".into())
        );
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ActionOp::EndTurn.to_string(), "end_turn");
        assert_eq!(ActionOp::Other("fortify".into()).to_string(), "fortify");
    }

    #[test]
    fn serde_roundtrip_for_unit_and_payload_variants() {
        for op in [
            ActionOp::Withdraw,
            ActionOp::Choice,
            ActionOp::Other("build_mine".into()),
        ] {
            let json = serde_json::to_string(&op).unwrap();
            let back: ActionOp = serde_json::from_str(&json).unwrap();
            assert_eq!(back, op, "serde roundtrip failed for {op}");
        }
    }
}
