use std::io;
use std::path::PathBuf;

/// Errors that can occur while turning rule calls into build targets
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required field `{0}`")]
    MissingRequiredField(String),

    #[error("Invalid target name: expected a string literal, found {0}")]
    InvalidTargetName(String),

    #[error("Invalid dependency label `{0}`: expected `:name` or `//path:name`")]
    InvalidDependencyLabel(String),

    #[error("Unsupported expression: {0}")]
    UnsupportedExpression(String),

    #[error("Keyword argument `{0}` given more than once")]
    DuplicateArgument(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("No build file found in {0}")]
    BuildFileNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    pub(crate) fn unsupported(construct: impl Into<String>) -> Self {
        Error::UnsupportedExpression(construct.into())
    }
}

/// Result type alias for build rule parsing
pub type Result<T> = std::result::Result<T, Error>;
