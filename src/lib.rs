//! cv-links: LinkedIn and GitHub profile links from resumes
//!
//! Reads DOCX and PDF files, collects every URL in their text and link
//! metadata, and keeps the last personal-profile link per provider.

pub mod docx;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;
pub mod pdf;
pub mod profile;
pub mod scan;
pub mod schema;

pub use docx::extract_docx;
pub use error::{ExtractError, ExtractResult};
pub use output::{render, OutputFormat};
pub use pdf::extract_pdf;
pub use profile::{classify, normalize, Provider};
pub use scan::{run_file, run_folder, DocumentKind};
pub use schema::{FileResult, PathError, ProfileSet};
