//! Output records
//!
//! Field order and optional keys mirror the JSON consumers already parse.

use serde::Serialize;

/// Profile links found in one document. At most one per provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileSet {
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

/// Result for a single processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileResult {
    /// Base name of the file (absent only for the not-found case)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    /// Why extraction failed, if it did
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileResult {
    /// Successful extraction
    pub fn found(filename: impl Into<String>, profiles: ProfileSet) -> Self {
        Self {
            filename: Some(filename.into()),
            linkedin: profiles.linkedin,
            github: profiles.github,
            error: None,
        }
    }

    /// Extraction attempted but failed
    pub fn failed(filename: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            filename: Some(filename.into()),
            linkedin: None,
            github: None,
            error: Some(error.into()),
        }
    }

    /// Single-file mode on a path that does not exist. Carries no filename.
    pub fn not_found() -> Self {
        Self {
            filename: None,
            linkedin: None,
            github: None,
            error: Some("File not found".to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Top-level report when the CLI argument is neither file nor folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathError {
    pub error: String,
}

impl PathError {
    pub fn does_not_exist() -> Self {
        Self {
            error: "Path does not exist".to_string(),
        }
    }
}
