//! Folder and single-file runners
//!
//! Every file yields exactly one `FileResult`; a failing document is
//! recorded, never propagated.

use crate::docx::extract_docx;
use crate::error::{catch_panic, ExtractResult};
use crate::pdf::extract_pdf;
use crate::schema::{FileResult, ProfileSet};
use std::path::Path;

/// Supported document formats, chosen by file name suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Docx,
    Pdf,
}

impl DocumentKind {
    /// Case-insensitive `.docx` / `.pdf` suffix check on the file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else if name.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else {
            None
        }
    }

    /// Run the matching extractor. Panics inside the parsing libraries are
    /// turned into errors for this file.
    pub fn extract(self, path: &Path) -> ExtractResult<ProfileSet> {
        catch_panic(|| match self {
            DocumentKind::Docx => extract_docx(path),
            DocumentKind::Pdf => extract_pdf(path),
        })
    }
}

/// Process every `.docx`/`.pdf` file directly inside `folder`.
///
/// A missing folder is logged and yields no results. Other files are skipped.
/// Output order is directory enumeration order.
pub fn run_folder(folder: &Path) -> Vec<FileResult> {
    if !folder.is_dir() {
        tracing::error!("Folder {} does not exist", folder.display());
        return Vec::new();
    }

    let entries = match std::fs::read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!("Cannot read folder {}: {}", folder.display(), e);
            return Vec::new();
        }
    };

    let mut results = Vec::new();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(kind) = DocumentKind::from_path(&path) else {
            tracing::debug!(file = %path.display(), "skipping unsupported file");
            continue;
        };

        let filename = entry.file_name().to_string_lossy().into_owned();
        tracing::info!("  -> {}", filename);

        let result = match kind.extract(&path) {
            Ok(profiles) => FileResult::found(filename, profiles),
            Err(e) => {
                tracing::warn!("Error processing {}: {}", filename, e);
                FileResult::failed(filename, e.to_string())
            }
        };
        results.push(result);
    }

    let failed = results.iter().filter(|r| r.is_error()).count();
    tracing::info!(
        "Done: {}/{} OK",
        results.len() - failed,
        results.len()
    );

    results
}

/// Process a single file.
pub fn run_file(path: &Path) -> FileResult {
    if !path.exists() {
        return FileResult::not_found();
    }

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let Some(kind) = DocumentKind::from_path(path) else {
        return FileResult::failed(filename, "Unsupported file type");
    };

    match kind.extract(path) {
        Ok(profiles) => FileResult::found(filename, profiles),
        Err(e) => {
            tracing::warn!("Error processing {}: {}", filename, e);
            FileResult::failed(filename, e.to_string())
        }
    }
}
