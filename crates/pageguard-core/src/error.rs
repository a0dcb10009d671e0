use thiserror::Error;

use crate::view::ViewError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("controller is already attached to a page")]
    AlreadyAttached,

    #[error("view error: {0}")]
    View(#[from] ViewError),
}
