use thiserror::Error;

use pageguard_model::{FormId, NoticeId};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("notice not present in view: {0}")]
    MissingNotice(NoticeId),

    #[error("form not present in view: {0}")]
    MissingForm(FormId),

    #[error("form has no submit control: {0}")]
    NoSubmitControl(FormId),

    #[error("confirmation prompt unavailable: {0}")]
    PromptUnavailable(String),

    #[error("view backend error: {0}")]
    Backend(String),
}
