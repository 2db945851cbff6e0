//! Error types for zk

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for zk
#[derive(Debug, Error)]
pub enum ZkError {
    #[error("argument is not valid UTF-8: {0}")]
    InvalidArgument(String),

    #[error("{0} requires a path argument")]
    MissingFlagArgument(String),

    #[error("cannot resolve path '{path}': {source}")]
    PathResolution {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read the current directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("no notebook found in {0} or a parent directory")]
    NotebookNotFound(PathBuf),

    #[error("a notebook already exists in {0}")]
    AlreadyInitialized(PathBuf),

    #[error("failed to run alias '{alias}': {reason}")]
    AliasExecution { alias: String, reason: String },

    /// The alias ran and exited with a failure code. Never printed.
    #[error("alias exited with code {0}")]
    AliasNonZeroExit(i32),

    #[error(transparent)]
    CommandParse(#[from] clap::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl ZkError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ZkError::AliasNonZeroExit(code) => *code,
            _ => 1,
        }
    }

    /// Whether the error should be reported on stderr before exiting.
    ///
    /// A failing alias already wrote its own diagnostics, so only its exit
    /// code is forwarded.
    pub fn is_silent(&self) -> bool {
        matches!(self, ZkError::AliasNonZeroExit(_))
    }
}

/// Result type using ZkError
pub type Result<T> = std::result::Result<T, ZkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flag_message_names_flag() {
        let err = ZkError::MissingFlagArgument("--notebook-dir".to_string());
        assert_eq!(err.to_string(), "--notebook-dir requires a path argument");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_alias_exit_code_is_forwarded() {
        let err = ZkError::AliasNonZeroExit(3);
        assert_eq!(err.exit_code(), 3);
        assert!(err.is_silent());
    }

    #[test]
    fn test_notebook_not_found_names_directory() {
        let err = ZkError::NotebookNotFound(PathBuf::from("/tmp/notes"));
        let msg = err.to_string();
        assert!(msg.contains("/tmp/notes"));
        assert!(!err.is_silent());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_messages_fit_on_one_line() {
        let errors = [
            ZkError::NotebookNotFound(PathBuf::from("/tmp/notes")),
            ZkError::MissingFlagArgument("-W".to_string()),
            ZkError::InvalidArgument("caf\u{FFFD}".to_string()),
            ZkError::AlreadyInitialized(PathBuf::from("/tmp/notes")),
        ];
        for err in errors {
            assert!(!err.to_string().contains('\n'), "{err}");
        }
    }

    #[test]
    fn test_alias_execution_is_fatal() {
        let err = ZkError::AliasExecution {
            alias: "ls".to_string(),
            reason: "terminated by signal".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("'ls'"));
    }
}
