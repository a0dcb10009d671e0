mod domain;
pub use domain::{DISMISS_DELAY_MS, FADE_MS, SAFETY_UNLOCK_MS};
pub use domain::{DelayMs, FormId, NoticeId};

mod error;
pub use error::{ModelError, ModelResult};

mod kind;
pub use kind::{ActionOp, Method, NoticeKind};

mod spec;
pub use spec::{FormSpec, NoticeSpec};

mod prompt;
pub use prompt::{ConfirmPrompt, EffectDelta};
