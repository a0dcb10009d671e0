//! View boundary between the controller and the rendered page.
//!
//! Concrete views wrap whatever actually renders the page (a DOM bridge,
//! the in-memory simulator, a test double) and are injected into the
//! controller at construction time.
mod error;
pub use error::ViewError;

use pageguard_model::{ConfirmPrompt, FormId, FormSpec, NoticeId, NoticeSpec};

/// Abstract page surface the guard operates on.
///
/// All mutations are synchronous; scheduling is owned entirely by the
/// controller. A view implementation is responsible for:
/// - reporting the notices and forms present on the page (`notices`, `forms`)
/// - applying presentation changes the controller requests (fade, removal,
///   busy state)
/// - presenting the blocking confirmation prompt (`confirm`)
pub trait PageView: Send + Sync + 'static {
    /// Snapshot of the notices currently present on the page.
    fn notices(&self) -> Vec<NoticeSpec>;

    /// Snapshot of the forms currently present on the page.
    fn forms(&self) -> Vec<FormSpec>;

    /// Start the opacity fade for a notice.
    fn begin_fade(&self, id: &NoticeId) -> Result<(), ViewError>;

    /// Detach a notice from the page.
    fn remove_notice(&self, id: &NoticeId) -> Result<(), ViewError>;

    /// Whether the form's submit control is present and currently enabled.
    fn submit_enabled(&self, id: &FormId) -> Result<bool, ViewError>;

    /// Toggle the busy state of a form's submit control.
    ///
    /// `true` disables the control and applies the loading style;
    /// `false` clears both.
    fn set_submit_busy(&self, id: &FormId, busy: bool) -> Result<(), ViewError>;

    /// Present a blocking confirmation prompt.
    ///
    /// Returns `true` if the user accepted, `false` if they declined.
    fn confirm(&self, prompt: &ConfirmPrompt) -> Result<bool, ViewError>;
}
