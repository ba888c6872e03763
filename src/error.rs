//! List Errors
//!
//! Failures surfaced by the list manager and its browser collaborators.

/// Result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// List-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Input was not valid JSON
    Parse(String),
    /// JSON parsed but does not describe a task list
    InvalidFormat(String),
    /// localStorage could not be read or written
    Storage(String),
    /// The export could not be offered to the user
    Download(String),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ListError::InvalidFormat(msg) => write!(f, "Invalid format: {}", msg),
            ListError::Storage(msg) => write!(f, "Storage error: {}", msg),
            ListError::Download(msg) => write!(f, "Download error: {}", msg),
        }
    }
}

impl std::error::Error for ListError {}

impl From<serde_json::Error> for ListError {
    fn from(e: serde_json::Error) -> Self {
        ListError::Parse(e.to_string())
    }
}
