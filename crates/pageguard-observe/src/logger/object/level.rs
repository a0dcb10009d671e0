use std::{convert::TryFrom, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated wrapper around a `tracing_subscriber::EnvFilter` expression.
///
/// Stores the raw filter string (e.g. `"info"` or
/// `"pageguard_core=debug,info"`), validated at construction so that
/// converting into an actual [`EnvFilter`] later cannot fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String")]
#[serde(into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Creates a new level from a string-like value, validating it.
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// Returns the underlying filter string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the `EnvFilter` from the stored expression.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).expect("LoggerLevel is always valid after construction")
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self::try_from("info".to_string()).expect("default log level must be valid")
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{}: {}", s, e))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::LoggerLevel;

    #[test]
    fn accepts_valid_filter_expressions() {
        for lvl in ["info", "warn", "trace", "pageguard_core=debug,info"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "{lvl} must be valid");
        }
    }

    #[test]
    fn rejects_invalid_filter_expressions() {
        for lvl in ["my_crate=lol", "pageguard_core=verbose", "root=info,sub=xyz"] {
            assert!(
                LoggerLevel::from_str(lvl).is_err(),
                "{lvl} must be rejected"
            );
        }
    }

    #[test]
    fn default_is_info_and_convertible() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _filter = lvl.to_env_filter();
    }

    #[test]
    fn serde_accepts_plain_strings() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");

        let json = serde_json::to_string(&lvl).unwrap();
        assert_eq!(json, r#""debug""#);
    }

    #[test]
    fn serde_rejects_invalid_strings() {
        let parsed = serde_json::from_str::<LoggerLevel>(r#""crate=wat""#);
        assert!(parsed.is_err());
    }
}
