//! Error types and exit codes for folio
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, rejected input)
//! - 3: Data/store error (missing store, missing post, ownership violation)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes reported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, missing entity (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<rusqlite::Error> for FolioError {
    fn from(err: rusqlite::Error) -> Self {
        FolioError::Other(err.to_string())
    }
}

/// Errors that can occur during folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("you cannot follow yourself")]
    SelfFollow,

    #[error("comment rejected: {reason}")]
    ModerationRejected { reason: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("post not found: {id}")]
    PostNotFound { id: String },

    #[error("comment not found: {id}")]
    CommentNotFound { id: String },

    #[error("user not found: {id}")]
    UserNotFound { id: String },

    #[error("not authorized to {action}")]
    NotAuthorized { action: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl FolioError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        FolioError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        FolioError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        FolioError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an action the acting user may not perform
    pub fn not_authorized(action: &str) -> Self {
        FolioError::NotAuthorized {
            action: action.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FolioError::UsageError(_)
            | FolioError::SelfFollow
            | FolioError::ModerationRejected { .. } => ExitCode::Usage,

            FolioError::StoreNotFound { .. }
            | FolioError::InvalidStore { .. }
            | FolioError::PostNotFound { .. }
            | FolioError::CommentNotFound { .. }
            | FolioError::UserNotFound { .. }
            | FolioError::NotAuthorized { .. }
            | FolioError::AlreadyExists { .. }
            | FolioError::NotFound { .. } => ExitCode::Data,

            FolioError::Io(_)
            | FolioError::Json(_)
            | FolioError::Toml(_)
            | FolioError::FailedOperation { .. }
            | FolioError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FolioError::UsageError(_) => "usage_error",
            FolioError::SelfFollow => "self_follow",
            FolioError::ModerationRejected { .. } => "moderation_rejected",
            FolioError::StoreNotFound { .. } => "store_not_found",
            FolioError::InvalidStore { .. } => "invalid_store",
            FolioError::PostNotFound { .. } => "post_not_found",
            FolioError::CommentNotFound { .. } => "comment_not_found",
            FolioError::UserNotFound { .. } => "user_not_found",
            FolioError::NotAuthorized { .. } => "not_authorized",
            FolioError::AlreadyExists { .. } => "already_exists",
            FolioError::NotFound { .. } => "not_found",
            FolioError::Io(_) => "io_error",
            FolioError::Json(_) => "json_error",
            FolioError::Toml(_) => "toml_error",
            FolioError::FailedOperation { .. } => "failed_operation",
            FolioError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, FolioError>;
