use thiserror::Error;

/// Rejections produced when a command cannot be applied to an editing session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("column permission belongs to view `{found}`, but the session edits `{expected}`")]
    ViewMismatch { expected: String, found: String },

    #[error("no column permission recorded for subject `{0}`")]
    PermissionNotFound(String),
}
