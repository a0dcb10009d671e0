use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// HTTP method a form submits with.
///
/// Only `Post` forms carry state-changing requests and are guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Whether submissions with this method change server state.
    #[inline]
    pub fn is_state_changing(&self) -> bool {
        matches!(self, Method::Post)
    }
}

impl Default for Method {
    fn default() -> Self {
        Method::Get
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        f.write_str(s)
    }
}

impl FromStr for Method {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => Err(ModelError::UnknownMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Method;

    #[test]
    fn only_post_is_state_changing() {
        assert!(Method::Post.is_state_changing());
        assert!(!Method::Get.is_state_changing());
    }

    #[test]
    fn parses_any_case() {
        assert_eq!("post".parse::<Method>().unwrap(), Method::Post);
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert!("PUT".parse::<Method>().is_err());
    }

    #[test]
    fn serde_uses_uppercase_tags() {
        assert_eq!(serde_json::to_string(&Method::Post).unwrap(), r#""POST""#);
        let m: Method = serde_json::from_str(r#""GET""#).unwrap();
        assert_eq!(m, Method::Get);
    }
}
