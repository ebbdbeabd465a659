//! DOCX link extraction
//!
//! A DOCX file is a zip container. The package relationships name the main
//! document part (normally `word/document.xml`); paragraph text lives there
//! and hyperlink targets in that part's relationship table.

use crate::error::{ExtractError, ExtractResult};
use crate::extract::extract_urls;
use crate::profile::classify;
use crate::schema::ProfileSet;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const PACKAGE_RELS: &str = "_rels/.rels";
/// Used when the package has no `officeDocument` relationship
const DEFAULT_DOCUMENT_PART: &str = "word/document.xml";

/// Extract profile links from a DOCX file.
pub fn extract_docx(path: &Path) -> ExtractResult<ProfileSet> {
    let links = collect_docx_links(path)?;
    tracing::debug!(file = %path.display(), candidates = links.len(), "docx scanned");
    Ok(classify(&links))
}

/// Raw link candidates in discovery order: URLs in body paragraph text
/// first, then hyperlink relationship targets.
pub fn collect_docx_links(path: &Path) -> ExtractResult<Vec<String>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;

    let document_part = main_document_part(&mut archive)?;
    let document = read_part(&mut archive, &document_part)?
        .ok_or_else(|| ExtractError::MissingPart(document_part.clone()))?;
    let text = paragraph_texts(&document)?.join("\n");
    let mut links = extract_urls(&text);

    // No relationship part simply means no hyperlinks
    if let Some(rels) = read_part(&mut archive, &rels_part_for(&document_part))? {
        links.extend(hyperlink_targets(&rels)?);
    }

    Ok(links)
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> ExtractResult<Option<String>> {
    let mut entry = match archive.by_name(name) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(Some(xml))
}

/// Zip entry name of the main document, from the package relationships.
fn main_document_part<R: Read + Seek>(archive: &mut ZipArchive<R>) -> ExtractResult<String> {
    if let Some(rels) = read_part(archive, PACKAGE_RELS)? {
        let office_document = relationships(&rels)?
            .into_iter()
            .find(|(rel_type, _)| rel_type.ends_with("/officeDocument"));
        if let Some((_, target)) = office_document {
            return Ok(target.trim_start_matches('/').to_string());
        }
    }
    Ok(DEFAULT_DOCUMENT_PART.to_string())
}

/// `word/document.xml` -> `word/_rels/document.xml.rels`
fn rels_part_for(part: &str) -> String {
    match part.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/_rels/{file}.rels"),
        None => format!("_rels/{part}.rels"),
    }
}

/// Text of every paragraph directly under the document body, in order.
///
/// Paragraphs in table cells and text boxes are not counted. Paragraph text
/// is its runs' text (also runs inside hyperlinks): `t` as is, `tab` as a
/// tab, `br`/`cr` as a newline. Deleted text is ignored. Elements are
/// matched by local name, whatever the namespace prefix.
fn paragraph_texts(xml: &str) -> ExtractResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs: Vec<String> = Vec::new();
    // Local names of the open elements, innermost last
    let mut stack: Vec<String> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = local_name(&e);
                if name == "p" && at_body(&stack) {
                    paragraphs.push(String::new());
                }
                stack.push(name);
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Empty(e) => {
                let name = local_name(&e);
                if name == "p" && at_body(&stack) {
                    paragraphs.push(String::new());
                } else if in_body_run(&stack) {
                    if let Some(paragraph) = paragraphs.last_mut() {
                        match name.as_str() {
                            "tab" => paragraph.push('\t'),
                            "br" | "cr" => paragraph.push('\n'),
                            _ => {}
                        }
                    }
                }
            }
            Event::Text(t) => {
                if let Some((innermost, parents)) = stack.split_last() {
                    if innermost == "t" && in_body_run(parents) {
                        if let Some(paragraph) = paragraphs.last_mut() {
                            paragraph.push_str(&t.unescape()?);
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn at_body(stack: &[String]) -> bool {
    stack.last().is_some_and(|name| name == "body")
}

/// Innermost open element is a run of a body-level paragraph, directly or
/// through a hyperlink.
fn in_body_run(stack: &[String]) -> bool {
    let names: Vec<&str> = stack.iter().map(String::as_str).collect();
    names.ends_with(&["body", "p", "r"]) || names.ends_with(&["body", "p", "hyperlink", "r"])
}

/// `(Type, Target)` of every relationship, in table order.
fn relationships(xml: &str) -> ExtractResult<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);
    let mut rels = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut rel_type = None;
                let mut target = None;
                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.as_ref() {
                        b"Type" => rel_type = Some(attr.unescape_value()?.into_owned()),
                        b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                        _ => {}
                    }
                }
                if let (Some(rel_type), Some(target)) = (rel_type, target) {
                    rels.push((rel_type, target));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(rels)
}

/// Targets of hyperlink relationships, in table order.
fn hyperlink_targets(xml: &str) -> ExtractResult<Vec<String>> {
    Ok(relationships(xml)?
        .into_iter()
        .filter(|(rel_type, _)| rel_type.contains("hyperlink"))
        .map(|(_, target)| target)
        .collect())
}
