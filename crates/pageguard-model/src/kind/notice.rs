use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Severity tag the renderer attaches to a notice.
///
/// Mirrors the message severities produced by the game server
/// (`success`, `warning`, `danger`, `info`, `secondary`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    /// Purely informational message; exempt from auto-dismissal.
    Info,
    /// A successful action.
    Success,
    /// Something needs attention but nothing failed.
    Warning,
    /// A failed or rejected action.
    Danger,
    /// Low-priority side note (e.g. a cancelled action).
    Secondary,
}

impl NoticeKind {
    /// Returns the kind as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Info => "info",
            NoticeKind::Success => "success",
            NoticeKind::Warning => "warning",
            NoticeKind::Danger => "danger",
            NoticeKind::Secondary => "secondary",
        }
    }

    /// Whether this notice is exempt from the auto-dismissal timer.
    ///
    /// Only `Info` notices stay on the page until the user closes them.
    #[inline]
    pub fn is_informational(&self) -> bool {
        matches!(self, NoticeKind::Info)
    }
}

impl Default for NoticeKind {
    fn default() -> Self {
        NoticeKind::Info
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoticeKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(NoticeKind::Info),
            "success" => Ok(NoticeKind::Success),
            "warning" => Ok(NoticeKind::Warning),
            "danger" => Ok(NoticeKind::Danger),
            "secondary" => Ok(NoticeKind::Secondary),
            _ => Err(ModelError::UnknownNoticeKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NoticeKind;
    use crate::ModelError;

    #[test]
    fn only_info_is_informational() {
        assert!(NoticeKind::Info.is_informational());

        for kind in [
            NoticeKind::Success,
            NoticeKind::Warning,
            NoticeKind::Danger,
            NoticeKind::Secondary,
        ] {
            assert!(!kind.is_informational(), "{kind} must be auto-dismissed");
        }
    }

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("DANGER".parse::<NoticeKind>().unwrap(), NoticeKind::Danger);
        assert_eq!(" info ".parse::<NoticeKind>().unwrap(), NoticeKind::Info);
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = "primary".parse::<NoticeKind>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownNoticeKind(s) if s == "primary"));
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&NoticeKind::Warning).unwrap();
        assert_eq!(json, r#""warning""#);

        let back: NoticeKind = serde_json::from_str(r#""secondary""#).unwrap();
        assert_eq!(back, NoticeKind::Secondary);
    }
}
