use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::logger::LoggerError;

/// Output format for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum LoggerFormat {
    /// Human-readable text logs (default).
    Text,
    /// Structured JSON logs for machines / log collectors.
    Json,
    /// systemd-journald output; init fails outside Linux.
    Journald,
}

impl Default for LoggerFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl FromStr for LoggerFormat {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "journald" | "journal" => Ok(Self::Journald),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LoggerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoggerFormat::Text => "text",
            LoggerFormat::Json => "json",
            LoggerFormat::Journald => "journald",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_text() {
        assert_eq!(LoggerFormat::default(), LoggerFormat::Text);
    }

    #[test]
    fn parses_case_insensitive_with_journal_alias() {
        assert_eq!("TEXT".parse::<LoggerFormat>().unwrap(), LoggerFormat::Text);
        assert_eq!("Json".parse::<LoggerFormat>().unwrap(), LoggerFormat::Json);
        assert_eq!(
            "journal".parse::<LoggerFormat>().unwrap(),
            LoggerFormat::Journald
        );
    }

    #[test]
    fn rejects_unknown_format() {
        for input in ["", "xml", "logfmt", "text-json"] {
            assert!(
                input.parse::<LoggerFormat>().is_err(),
                "expected error for {input:?}"
            );
        }
    }

    #[test]
    fn serde_roundtrip_uses_lowercase_tags() {
        for format in [LoggerFormat::Text, LoggerFormat::Json, LoggerFormat::Journald] {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!(r#""{format}""#));

            let parsed: LoggerFormat = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, format);
        }
    }
}
