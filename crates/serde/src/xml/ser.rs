//! XML writing: a model value is encoded into a keyed element tree, which is
//! then streamed out as quick-xml events.

use crate::error::{Result, SerdeError};
use pacer_serde_support::{XmlElement, XmlRoot, encode_root};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// Serialize a TCX document to a compact XML string.
///
/// # Examples
///
/// ```
/// use pacer_serde::xml::to_xml_string;
/// use pacer_tcx::TrainingCenterDatabase;
///
/// let xml = to_xml_string(&TrainingCenterDatabase::default()).unwrap();
/// assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?><TrainingCenterDatabase"#));
/// ```
pub fn to_xml_string<T: XmlRoot>(value: &T) -> Result<String> {
    into_string(to_xml_vec(value)?)
}

/// Serialize a TCX document to an XML string indented by two spaces.
pub fn to_xml_string_pretty<T: XmlRoot>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    write_element(&root_element(value), &mut buffer, true)?;
    into_string(buffer)
}

/// Serialize a TCX document to an XML byte vector.
pub fn to_xml_vec<T: XmlRoot>(value: &T) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    to_xml_writer(value, &mut buffer)?;
    Ok(buffer)
}

/// Serialize a TCX document to an XML writer.
pub fn to_xml_writer<T, W>(value: &T, writer: W) -> Result<()>
where
    T: XmlRoot,
    W: Write,
{
    write_element(&root_element(value), writer, false)
}

/// Writes an element tree as a complete XML document, declaration included.
///
/// Elements without children or text are written as empty tags. With
/// `pretty`, nested elements are indented by two spaces per level and text
/// content stays on the line of its element.
pub fn write_element<W: Write>(element: &XmlElement, writer: W, pretty: bool) -> Result<()> {
    let mut writer = if pretty {
        Writer::new_with_indent(writer, b' ', 2)
    } else {
        Writer::new(writer)
    };
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_node(&mut writer, element)
}

fn root_element<T: XmlRoot>(value: &T) -> XmlElement {
    let element = encode_root(value);
    tracing::debug!(
        root = T::ROOT_ELEMENT,
        children = element.children.len(),
        "encoding document"
    );
    element
}

fn write_node<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    let text = element.text.as_deref().filter(|text| !text.is_empty());
    if text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
    Ok(())
}

fn into_string(buffer: Vec<u8>) -> Result<String> {
    String::from_utf8(buffer).map_err(|e| SerdeError::Custom(e.to_string()))
}
