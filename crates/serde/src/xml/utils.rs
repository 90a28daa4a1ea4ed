//! Helpers shared by the XML reader and writer.

use std::borrow::Cow;

use quick_xml::events::{BytesRef, BytesStart};

use crate::error::{Result, SerdeError};
use pacer_serde_support::XmlElement;

/// Builds a childless tree node from a start tag, unescaping attribute values.
///
/// Names are kept exactly as written, prefix included, because TCX keys are
/// matched on their qualified spelling.
pub fn open_element(start: &BytesStart<'_>) -> Result<XmlElement> {
    let mut element = XmlElement::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?;
        element.push_attribute(key, value.into_owned());
    }
    Ok(element)
}

/// Resolves `&name;` and `&#N;` references found in text content.
pub fn resolve_reference(reference: &BytesRef<'_>) -> Result<Cow<'static, str>> {
    if let Some(ch) = reference.resolve_char_ref()? {
        return Ok(Cow::Owned(ch.to_string()));
    }
    let name = reference.decode().map_err(quick_xml::Error::from)?;
    quick_xml::escape::resolve_predefined_entity(&name)
        .map(Cow::Borrowed)
        .ok_or_else(|| SerdeError::Custom(format!("unknown entity reference `&{};`", name)))
}
