use serde::{Deserialize, Serialize};

use crate::{ActionOp, FormId, Method, NoticeId, NoticeKind};

/// Descriptor of a notice element as reported by the view at attach time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeSpec {
    /// Stable identifier assigned by the renderer.
    pub id: NoticeId,

    /// Severity tag.
    #[serde(default)]
    pub kind: NoticeKind,

    /// Whether the notice carries a close control the user can activate.
    #[serde(default = "default_true")]
    pub dismissible: bool,
}

impl NoticeSpec {
    /// Build a descriptor with a close control.
    pub fn new(id: impl Into<NoticeId>, kind: NoticeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            dismissible: true,
        }
    }

    /// Whether the controller should schedule an auto-dismissal timer.
    #[inline]
    pub fn auto_dismiss(&self) -> bool {
        !self.kind.is_informational()
    }
}

/// Descriptor of a submission-capable form as reported by the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSpec {
    /// Stable identifier assigned by the renderer.
    pub id: FormId,

    /// HTTP method of the submission.
    #[serde(default)]
    pub method: Method,

    /// Operation the form targets.
    pub op: ActionOp,
}

impl FormSpec {
    /// Build a POST form descriptor.
    pub fn post(id: impl Into<FormId>, op: ActionOp) -> Self {
        Self {
            id: id.into(),
            method: Method::Post,
            op,
        }
    }

    /// Whether this form falls under submit guarding.
    #[inline]
    pub fn guarded(&self) -> bool {
        self.method.is_state_changing()
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::{FormSpec, NoticeSpec};
    use crate::{ActionOp, Method, NoticeKind};

    #[test]
    fn auto_dismiss_skips_informational_notices() {
        let info = NoticeSpec::new("n1", NoticeKind::Info);
        let danger = NoticeSpec::new("n2", NoticeKind::Danger);

        assert!(!info.auto_dismiss());
        assert!(danger.auto_dismiss());
    }

    #[test]
    fn only_post_forms_are_guarded() {
        let post = FormSpec::post("f1", ActionOp::Other("harvest".into()));
        assert!(post.guarded());

        let get = FormSpec {
            method: Method::Get,
            ..FormSpec::post("f2", ActionOp::Choice)
        };
        assert!(!get.guarded());
    }

    #[test]
    fn notice_spec_deserializes_with_defaults() {
        let json = r#"{"id": "n1"}"#;
        let spec: NoticeSpec = serde_json::from_str(json).unwrap();

        assert_eq!(spec.kind, NoticeKind::Info);
        assert!(spec.dismissible);
    }

    #[test]
    fn form_spec_serde_roundtrip() {
        let spec = FormSpec::post("form-withdraw", ActionOp::Withdraw);
        let json = serde_json::to_string(&spec).unwrap();
        let back: FormSpec = serde_json::from_str(&json).unwrap();

        assert_eq!(back, spec);
    }
}
