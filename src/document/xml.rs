//! XML hymnal loader.
//!
//! Reads the hymnal document format:
//!
//! ```xml
//! <hymnal lang="fi" year="1986">
//!   <tunes>
//!     <tune id="nicaea"/>
//!     <tune id="old-hundredth" canonical="genevan-134"/>
//!   </tunes>
//!   <hymn id="1" lang="sv" tune="nicaea" deleted="true">
//!     <topic ref="trinity"/>
//!     <day ref="trinity-sunday"/>
//!     <edition id="1938" year="1938"/>
//!     <verse><line>Holy, holy, holy!</line></verse>
//!     <refrain><line>...</line></refrain>
//!   </hymn>
//! </hymnal>
//! ```
//!
//! Unknown elements and attributes are skipped. Malformed XML is a hard
//! load error; the query engine never sees a partially-loaded document.

use anyhow::{Context, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;

use crate::document::types::{EditionLink, Entry, Hymnal};

/// Load a hymnal from a file on disk.
pub fn load_hymnal(path: &Path) -> Result<Hymnal> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read hymnal file: {}", path.display()))?;
    parse_hymnal(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse a hymnal document from an XML string.
pub fn parse_hymnal(content: &str) -> Result<Hymnal> {
    let mut reader = Reader::from_str(content);

    let mut doc: Option<Hymnal> = None;
    let mut entry: Option<Entry> = None;
    let mut line_buf = String::new();
    let mut in_line = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = local_name(e.name().as_ref());
                match name.as_str() {
                    "hymnal" => doc = Some(start_hymnal(e)?),
                    "hymn" => {
                        if doc.is_none() {
                            bail!("<hymn> outside <hymnal>");
                        }
                        entry = Some(start_hymn(e)?);
                    }
                    "line" => {
                        in_line = true;
                        line_buf.clear();
                    }
                    "tune" => tune_element(&mut doc, e),
                    other => {
                        if let Some(ref mut entry) = entry {
                            open_hymn_child(entry, other, e);
                        }
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = local_name(e.name().as_ref());
                match name.as_str() {
                    "hymnal" => doc = Some(start_hymnal(e)?),
                    "hymn" => match doc {
                        Some(ref mut doc) => doc.push_entry(start_hymn(e)?),
                        None => bail!("<hymn> outside <hymnal>"),
                    },
                    "tune" => tune_element(&mut doc, e),
                    other => {
                        if let Some(ref mut entry) = entry {
                            open_hymn_child(entry, other, e);
                        }
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_line {
                    if let Ok(text) = e.unescape() {
                        line_buf.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = local_name(e.name().as_ref());
                match name.as_str() {
                    "line" => {
                        if let Some(ref mut entry) = entry {
                            let line = line_buf.trim();
                            if !line.is_empty() {
                                entry.lines.push(line.to_string());
                            }
                        }
                        in_line = false;
                    }
                    "hymn" => {
                        if let (Some(doc), Some(entry)) = (doc.as_mut(), entry.take()) {
                            doc.push_entry(entry);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("XML parse error: {e}"),
            _ => {}
        }
    }

    doc.context("document has no <hymnal> root element")
}

/// Register a `<tune>` element, whether self-closing or expanded.
/// Only meaningful inside `<tunes>`, but a registration is harmless anywhere.
fn tune_element(doc: &mut Option<Hymnal>, e: &BytesStart) {
    if let (Some(doc), Some(id)) = (doc.as_mut(), attr(e, "id")) {
        doc.register_tune(id, attr(e, "canonical"));
    }
}

fn start_hymnal(e: &BytesStart) -> Result<Hymnal> {
    let lang = attr(e, "lang").context("<hymnal> missing lang attribute")?;
    let year: i32 = attr(e, "year")
        .context("<hymnal> missing year attribute")?
        .parse()
        .context("<hymnal> year is not a number")?;
    Ok(Hymnal::new(lang, year))
}

fn start_hymn(e: &BytesStart) -> Result<Entry> {
    let id = attr(e, "id").context("<hymn> missing id attribute")?;
    let mut entry = Entry::new(id);
    entry.language = attr(e, "lang");
    entry.tune = attr(e, "tune");
    entry.deleted = flag(e, "deleted");
    entry.restricted = flag(e, "restricted");
    Ok(entry)
}

/// Handle a child element of `<hymn>`, whether self-closing or not.
fn open_hymn_child(entry: &mut Entry, name: &str, e: &BytesStart) {
    match name {
        "topic" => {
            if let Some(r) = attr(e, "ref") {
                entry.topics.push(r);
            }
        }
        "day" => {
            if let Some(r) = attr(e, "ref") {
                entry.days.push(r);
            }
        }
        "edition" => {
            if let Some(id) = attr(e, "id") {
                let year = attr(e, "year").and_then(|y| y.parse().ok());
                entry.editions.push(EditionLink { id, year });
            }
        }
        "refrain" => entry.has_refrain = true,
        "chorus" => entry.has_chorus = true,
        "repeat" => entry.has_repeat = true,
        _ => {}
    }
}

fn local_name(name: &[u8]) -> String {
    let name = String::from_utf8_lossy(name);
    match name.find(':') {
        Some(pos) => name[pos + 1..].to_string(),
        None => name.to_string(),
    }
}

fn attr(e: &BytesStart, key: &str) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == key.as_bytes() {
            return attr
                .unescape_value()
                .ok()
                .map(|v| v.into_owned());
        }
    }
    None
}

fn flag(e: &BytesStart, key: &str) -> bool {
    matches!(attr(e, key).as_deref(), Some("true") | Some("1"))
}
