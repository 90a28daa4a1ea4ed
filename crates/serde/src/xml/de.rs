//! XML reading: quick-xml events are folded into a keyed element tree, which
//! the document model then decodes field by field.

use crate::error::{Result, SerdeError};
use crate::xml::utils::{open_element, resolve_reference};
use pacer_serde_support::{XmlElement, XmlRoot, decode_element, local_name};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::BufRead;

/// Deserialize a TCX document from an XML string.
///
/// # Examples
///
/// ```
/// use pacer_serde::xml::from_xml_str;
/// use pacer_tcx::TrainingCenterDatabase;
///
/// let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
/// <TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">
///   <Author>
///     <LangID>EN</LangID>
///   </Author>
/// </TrainingCenterDatabase>"#;
/// let database: TrainingCenterDatabase = from_xml_str(xml).unwrap();
/// assert_eq!(database.author().and_then(|a| a.language()), Some("EN"));
/// ```
pub fn from_xml_str<T: XmlRoot>(xml: &str) -> Result<T> {
    decode_root(&parse_element(xml)?)
}

/// Deserialize a TCX document from XML bytes.
pub fn from_xml_slice<T: XmlRoot>(xml: &[u8]) -> Result<T> {
    let xml_str = std::str::from_utf8(xml)
        .map_err(|e| SerdeError::Custom(format!("Invalid UTF-8: {}", e)))?;
    from_xml_str(xml_str)
}

/// Deserialize a TCX document from an XML reader.
pub fn from_xml_reader<R: BufRead, T: XmlRoot>(reader: R) -> Result<T> {
    decode_root(&read_tree(Reader::from_reader(reader))?)
}

/// Parses XML text into an element tree without decoding it into a model type.
///
/// Whitespace-only text inside elements that have children is dropped as
/// indentation. Leaf text, whitespace, entity and character references
/// included, is kept verbatim.
pub fn parse_element(xml: &str) -> Result<XmlElement> {
    read_tree(Reader::from_str(xml))
}

fn decode_root<T: XmlRoot>(root: &XmlElement) -> Result<T> {
    let found = local_name(&root.name);
    if found != T::ROOT_ELEMENT {
        return Err(SerdeError::UnexpectedRoot {
            expected: T::ROOT_ELEMENT,
            found: found.to_string(),
        });
    }
    tracing::debug!(
        root = T::ROOT_ELEMENT,
        children = root.children.len(),
        "decoding document"
    );
    Ok(decode_element(root)?)
}

fn read_tree<R: BufRead>(mut reader: Reader<R>) -> Result<XmlElement> {
    let mut buf = Vec::new();
    let mut open: Vec<XmlElement> = Vec::new();
    let mut root = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(start) => open.push(open_element(&start)?),
            Event::Empty(start) => {
                let element = open_element(&start)?;
                close_element(&mut open, &mut root, element)?;
            }
            Event::End(_) => {
                // quick-xml has already matched the end tag against its start
                let element = open
                    .pop()
                    .ok_or_else(|| SerdeError::Custom("unbalanced end tag".to_string()))?;
                close_element(&mut open, &mut root, element)?;
            }
            Event::Text(text) => {
                if let Some(current) = open.last_mut() {
                    current.append_text(&text.decode().map_err(quick_xml::Error::from)?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = open.last_mut() {
                    current.append_text(&data.decode().map_err(quick_xml::Error::from)?);
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(current) = open.last_mut() {
                    current.append_text(&resolve_reference(&reference)?);
                }
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.last() {
        return Err(SerdeError::Custom(format!(
            "unexpected end of document inside <{}>",
            unclosed.name
        )));
    }
    root.ok_or_else(|| SerdeError::Custom("document has no root element".to_string()))
}

/// Attaches a finished element to its parent, or makes it the root.
fn close_element(
    open: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    mut element: XmlElement,
) -> Result<()> {
    element.normalize_text();
    match open.last_mut() {
        Some(parent) => parent.push_child(element),
        None if root.is_none() => *root = Some(element),
        None => {
            return Err(SerdeError::Custom(format!(
                "second root element <{}>",
                element.name
            )));
        }
    }
    Ok(())
}
