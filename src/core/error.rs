//! Error taxonomy for the truncator

use std::path::PathBuf;

use crate::core::model::StubtrimError;

/// Errors raised while truncating candidate files
#[derive(Debug, thiserror::Error)]
pub enum TruncateError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl TruncateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TruncateError::Io {
            path: path.into(),
            source,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            TruncateError::InvalidConfig(_) => "INVALID_CONFIG",
            TruncateError::Io { .. } => "IO_ERROR",
            TruncateError::Encoding { .. } => "ENCODING_ERROR",
        }
    }

    /// Convert for embedding in a ResultItem
    pub fn to_stubtrim_error(&self) -> StubtrimError {
        StubtrimError::new(self.code(), self.to_string())
    }
}
