use thiserror::Error;

/// Errors raised by the catalog, quiz, and progress logic.
///
/// None of these should end a session: `Validation` is shown as a toast,
/// `UnsupportedEnvironment` turns the feature into a no-op, and
/// `InvalidInput` marks a caller-side precondition violation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotesError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{title}: {description}")]
    Validation { title: String, description: String },

    #[error("unsupported environment: {0}")]
    UnsupportedEnvironment(String),

    #[error("invalid username or password")]
    InvalidCredentials,
}

impl NotesError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn validation(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Validation {
            title: title.into(),
            description: description.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
