//! Document read errors

use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// Failure to read links out of one document.
///
/// The `Display` text is what ends up in a result's `error` field.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid DOCX container: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("malformed DOCX XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("DOCX is missing required part {0}")]
    MissingPart(String),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF text extraction failed: {0}")]
    PdfText(String),

    #[error("document parser panicked: {0}")]
    Panic(String),
}

impl From<quick_xml::events::attributes::AttrError> for ExtractError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ExtractError::Xml(err.into())
    }
}

pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Run a parsing step, turning a panic inside it into `ExtractError::Panic`.
pub fn catch_panic<T>(f: impl FnOnce() -> ExtractResult<T>) -> ExtractResult<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(ExtractError::Panic(message))
    })
}
