//! Tool server error types.

use thiserror::Error;

/// Errors surfaced to tool callers.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool does not exist.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments object did not match the tool's schema.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The underlying API call failed.
    #[error(transparent)]
    Api(#[from] caldotcom_sdk::CalError),

    /// Reading or writing the stdio stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Stable machine-readable code for the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments(_) => "invalid_arguments",
            Self::Api(_) => "api_error",
            Self::Io(_) => "io_error",
        }
    }
}

/// Result alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
