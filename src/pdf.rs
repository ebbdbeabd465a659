//! PDF link extraction
//!
//! Text comes from pdf-extract; link annotations are walked with lopdf.
//! A document lopdf loads but pdf-extract cannot read yields annotations only.
//! The file is read into memory once, so no handle outlives the call.

use crate::error::{catch_panic, ExtractError, ExtractResult};
use crate::extract::extract_urls;
use crate::profile::classify;
use crate::schema::ProfileSet;
use lopdf::{Dictionary, Document, Object};
use std::path::Path;

/// Extract profile links from a PDF file.
pub fn extract_pdf(path: &Path) -> ExtractResult<ProfileSet> {
    let links = collect_pdf_links(path)?;
    tracing::debug!(file = %path.display(), candidates = links.len(), "pdf scanned");
    Ok(classify(&links))
}

/// Raw link candidates in discovery order: URLs in the text of all pages
/// first, then URI link annotations page by page.
pub fn collect_pdf_links(path: &Path) -> ExtractResult<Vec<String>> {
    let bytes = std::fs::read(path)?;
    collect_links_from_mem(&bytes)
}

/// Only a file lopdf cannot load is an error. When text extraction fails on
/// a loaded document, its link annotations are still returned.
fn collect_links_from_mem(bytes: &[u8]) -> ExtractResult<Vec<String>> {
    let doc = Document::load_mem(bytes)?;

    let text = catch_panic(|| {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::PdfText(e.to_string()))
    })
    .unwrap_or_else(|e| {
        tracing::warn!("No PDF text, using link annotations only: {}", e);
        String::new()
    });

    let mut links = extract_urls(&text);
    links.extend(annotation_uris(&doc));
    Ok(links)
}

/// URIs of link annotations, in page order then annotation order.
fn annotation_uris(doc: &Document) -> Vec<String> {
    let mut uris = Vec::new();

    // get_pages is keyed by page number
    for (_page_num, page_id) in doc.get_pages() {
        let Ok(Object::Dictionary(page)) = doc.get_object(page_id) else {
            continue;
        };
        let Ok(annots) = page.get(b"Annots") else {
            continue;
        };
        let Object::Array(annots) = resolve_obj(doc, annots) else {
            continue;
        };

        for annot in annots {
            let Object::Dictionary(annot) = resolve_obj(doc, annot) else {
                continue;
            };
            if let Some(uri) = link_uri(doc, annot) {
                uris.push(uri);
            }
        }
    }

    uris
}

/// URI target of a `/Link` annotation with a `/URI` action, if any.
fn link_uri(doc: &Document, annot: &Dictionary) -> Option<String> {
    let is_link = annot
        .get(b"Subtype")
        .map(|s| matches!(s, Object::Name(n) if n == b"Link"))
        .unwrap_or(false);
    if !is_link {
        return None;
    }

    let Object::Dictionary(action) = resolve_obj(doc, annot.get(b"A").ok()?) else {
        return None;
    };
    let Object::String(bytes, _) = resolve_obj(doc, action.get(b"URI").ok()?) else {
        return None;
    };

    let uri = decode_pdf_string(bytes);
    if uri.is_empty() {
        None
    } else {
        Some(uri)
    }
}

/// Resolve an indirect reference to the underlying object.
fn resolve_obj<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// PDF strings are either UTF-16BE with a byte order mark or byte strings.
fn decode_pdf_string(bytes: &[u8]) -> String {
    match bytes.strip_prefix(&[0xFE, 0xFF]) {
        Some(utf16) => char::decode_utf16(
            utf16
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]])),
        )
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect(),
        None => String::from_utf8_lossy(bytes).into_owned(),
    }
}
