use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ActionOp;

/// Signed change applied to a named counter when an action resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectDelta {
    /// Counter the action affects (e.g. "Military").
    pub counter: String,
    /// Signed amount added to the counter.
    pub delta: i32,
}

impl fmt::Display for EffectDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+} {}", self.delta, self.counter)
    }
}

/// Blocking confirmation shown before a destructive form submission.
///
/// [`fmt::Display`] renders the exact prompt text shown to the user; the
/// wording of [`ConfirmPrompt::withdraw`] is part of the behavioral
/// contract and must not drift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPrompt {
    /// Headline naming the action.
    pub title: String,
    /// Consequences listed under "This will:".
    pub effects: Vec<EffectDelta>,
    /// Final question the user answers.
    pub question: String,
}

impl ConfirmPrompt {
    /// Build a prompt with no effects listed yet.
    pub fn new(title: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            effects: Vec::new(),
            question: question.into(),
        }
    }

    /// Append a consequence line.
    pub fn with_effect(mut self, counter: impl Into<String>, delta: i32) -> Self {
        self.effects.push(EffectDelta {
            counter: counter.into(),
            delta,
        });
        self
    }

    /// Prompt shown before withdrawing support from the alliance.
    pub fn withdraw() -> Self {
        Self::new("⚠️ Withdraw from Alliance?", "Continue?")
            .with_effect("Military", 10)
            .with_effect("Stability", -15)
            .with_effect("Prestige", -10)
            .with_effect("Collapse", 5)
    }

    /// The prompt guarding the given operation, if it needs one.
    pub fn for_op(op: &ActionOp) -> Option<Self> {
        match op {
            ActionOp::Withdraw => Some(Self::withdraw()),
            _ => None,
        }
    }
}

impl fmt::Display for ConfirmPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\nThis will:", self.title)?;
        for effect in &self.effects {
            write!(f, "\n{effect}")?;
        }
        write!(f, "\n\n{}", self.question)
    }
}
