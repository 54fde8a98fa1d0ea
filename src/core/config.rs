//! Truncation settings

use std::path::PathBuf;

use crate::core::error::TruncateError;

/// Default file name suffix of generated gRPC Go stubs
pub const DEFAULT_SUFFIX: &str = "_grpc.pb.go";

/// Default marker; the server half of a generated stub starts at this comment
pub const DEFAULT_MARKER: &str = "Server is the server API";

/// What to do when a single candidate fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first failing file
    #[default]
    Abort,
    /// Record the failure and move on to the next file
    KeepGoing,
}

/// Configuration for one truncation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateConfig {
    /// Directory to list (non-recursive)
    pub dir: PathBuf,

    /// File name suffix selecting candidates
    pub suffix: String,

    /// Literal marker; content from its first occurrence onward is dropped
    pub marker: String,

    pub error_policy: ErrorPolicy,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            suffix: DEFAULT_SUFFIX.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            error_policy: ErrorPolicy::Abort,
        }
    }
}

impl TruncateConfig {
    /// Create a config for the given directory with default suffix and marker
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Reject settings that would make every file a candidate or cut every file to nothing
    pub fn validate(&self) -> Result<(), TruncateError> {
        if self.suffix.is_empty() {
            return Err(TruncateError::InvalidConfig(
                "suffix must not be empty".to_string(),
            ));
        }
        if self.marker.is_empty() {
            return Err(TruncateError::InvalidConfig(
                "marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
