use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a rendered notice element.
///
/// Assigned by the rendering collaborator as a data attribute on the
/// element; the controller treats it as an opaque key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoticeId(String);

impl NoticeId {
    /// Create an identifier from a string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the identifier as `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoticeId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for NoticeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identifier of a submission-capable form element.
///
/// Like [`NoticeId`], it is produced by the renderer and opaque to the
/// controller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    /// Create an identifier from a string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the identifier as `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for FormId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{FormId, NoticeId};

    #[test]
    fn display_matches_inner_string() {
        let n = NoticeId::new("notice-3");
        let f = FormId::from("form-withdraw");

        assert_eq!(n.to_string(), "notice-3");
        assert_eq!(f.as_str(), "form-withdraw");
    }

    #[test]
    fn serde_is_transparent() {
        let id = NoticeId::new("n1");
        let json = serde_json::to_string(&id).unwrap();

        assert_eq!(json, r#""n1""#);
        let back: NoticeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn ids_are_usable_as_map_keys() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(FormId::from("f1"), 1);
        map.insert(FormId::from("f2"), 2);

        assert_eq!(map.get(&FormId::from("f1")), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
