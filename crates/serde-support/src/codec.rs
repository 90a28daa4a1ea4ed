//! Per-entity codec traits and the keyed encoder/decoder they work against.
//!
//! Each entity implements [`XmlCodable`] next to its schema definition. The
//! implementation declares which keys are attributes (the node-placement
//! table) and lists its fields in schema order for both directions.

use std::marker::PhantomData;

use crate::error::DecodeError;
use crate::fallback::KeyedContainer;
use crate::node::XmlElement;
use crate::scalar::{ScalarError, XmlScalar};

/// Where a field is written inside its parent element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodePlacement {
    Attribute,
    Element,
}

/// An entity that maps to and from a keyed XML element.
pub trait XmlCodable: Sized {
    /// Entity name used in decode errors.
    const ENTITY: &'static str;

    /// Returns the placement of the field stored under `key`.
    ///
    /// This is a static lookup; keys without an attribute rule are elements.
    fn node_placement(key: &str) -> NodePlacement {
        let _ = key;
        NodePlacement::Element
    }

    /// Writes every field, in schema order.
    fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>);

    /// Reads every field, in schema order, and builds the entity through its
    /// constructor. Any field failure aborts the whole entity.
    fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError>;
}

/// An entity that can stand as the root element of a document.
pub trait XmlRoot: XmlCodable {
    const ROOT_ELEMENT: &'static str;

    /// `xmlns` declarations written on the root element.
    const NAMESPACES: &'static [(&'static str, &'static str)] = &[];
}

/// Node placement of `key` for entity `T`.
pub fn classify<T: XmlCodable>(key: &str) -> NodePlacement {
    T::node_placement(key)
}

/// Encodes `value` as an element named `name`.
pub fn encode_element<T: XmlCodable>(value: &T, name: &str) -> XmlElement {
    let mut element = XmlElement::new(name);
    value.encode_fields(&mut XmlEncoder::new(&mut element));
    element
}

/// Encodes `value` as a document root, including its namespace declarations.
pub fn encode_root<T: XmlRoot>(value: &T) -> XmlElement {
    let mut element = XmlElement::new(T::ROOT_ELEMENT);
    for (prefix, uri) in T::NAMESPACES {
        element.push_attribute(*prefix, *uri);
    }
    value.encode_fields(&mut XmlEncoder::new(&mut element));
    element
}

/// Decodes an entity from `element`; the element's own name is not checked.
pub fn decode_element<T: XmlCodable>(element: &XmlElement) -> Result<T, DecodeError> {
    T::decode_fields(&XmlDecoder::new(element))
}

/// Write side of the keyed container, bound to the entity being encoded so
/// that every write consults that entity's placement table.
pub struct XmlEncoder<'a, T> {
    element: &'a mut XmlElement,
    entity: PhantomData<fn(&T)>,
}

impl<'a, T: XmlCodable> XmlEncoder<'a, T> {
    pub fn new(element: &'a mut XmlElement) -> Self {
        Self {
            element,
            entity: PhantomData,
        }
    }

    /// Writes a scalar as an attribute or a text child, per the placement table.
    pub fn encode<V: XmlScalar>(&mut self, key: &'static str, value: &V) {
        let text = value.to_xml_text();
        match T::node_placement(key) {
            NodePlacement::Attribute => self.element.push_attribute(key, text),
            NodePlacement::Element => self.element.push_child(XmlElement::with_text(key, text)),
        }
    }

    /// Writes a scalar when set; unset values are omitted entirely.
    pub fn encode_optional<V: XmlScalar>(&mut self, key: &'static str, value: Option<&V>) {
        if let Some(value) = value {
            self.encode(key, value);
        }
    }

    pub fn encode_entity<E: XmlCodable>(&mut self, key: &'static str, value: &E) {
        self.require_element(key);
        self.element.push_child(encode_element(value, key));
    }

    pub fn encode_optional_entity<E: XmlCodable>(&mut self, key: &'static str, value: Option<&E>) {
        if let Some(value) = value {
            self.encode_entity(key, value);
        }
    }

    /// Writes one child per item, in sequence order.
    pub fn encode_entities<E: XmlCodable>(&mut self, key: &'static str, values: &[E]) {
        self.require_element(key);
        for value in values {
            self.element.push_child(encode_element(value, key));
        }
    }

    fn require_element(&self, key: &'static str) {
        assert!(
            T::node_placement(key) == NodePlacement::Element,
            "{}.{} holds a nested entity but is classified as an attribute",
            T::ENTITY,
            key
        );
    }
}

/// Read side of the keyed container.
///
/// Lookups are placement-agnostic: a key is matched against the attributes
/// first and then against the child elements.
pub struct XmlDecoder<'a, T> {
    element: &'a XmlElement,
    entity: PhantomData<fn() -> T>,
}

impl<'a, T: XmlCodable> XmlDecoder<'a, T> {
    pub fn new(element: &'a XmlElement) -> Self {
        Self {
            element,
            entity: PhantomData,
        }
    }

    pub fn element(&self) -> &'a XmlElement {
        self.element
    }

    pub fn decode<V: XmlScalar>(&self, key: &'static str) -> Result<V, DecodeError> {
        match self.raw_text(key) {
            Some(text) => self.parse(key, text),
            None => Err(self.missing(key)),
        }
    }

    pub fn decode_optional<V: XmlScalar>(&self, key: &'static str) -> Result<Option<V>, DecodeError> {
        self.raw_text(key)
            .map(|text| self.parse(key, text))
            .transpose()
    }

    pub fn decode_entity<E: XmlCodable>(&self, key: &'static str) -> Result<E, DecodeError> {
        match self.element.child(key) {
            Some(child) => decode_element(child),
            None => Err(self.missing(key)),
        }
    }

    pub fn decode_optional_entity<E: XmlCodable>(
        &self,
        key: &'static str,
    ) -> Result<Option<E>, DecodeError> {
        self.element.child(key).map(decode_element).transpose()
    }

    /// Decodes every child named `key`, in document order. No occurrences
    /// yields an empty sequence.
    pub fn decode_entities<E: XmlCodable>(&self, key: &'static str) -> Result<Vec<E>, DecodeError> {
        self.element.children_named(key).map(decode_element).collect()
    }

    /// Like [`decode_entities`](Self::decode_entities) but requires at least
    /// one occurrence.
    pub fn decode_required_entities<E: XmlCodable>(
        &self,
        key: &'static str,
    ) -> Result<Vec<E>, DecodeError> {
        if self.element.child(key).is_none() {
            return Err(self.missing(key));
        }
        self.decode_entities(key)
    }

    fn raw_text(&self, key: &str) -> Option<&'a str> {
        self.element.attribute(key).or_else(|| {
            self.element
                .child(key)
                .map(|child| child.text.as_deref().unwrap_or_default())
        })
    }

    fn parse<V: XmlScalar>(&self, key: &'static str, text: &str) -> Result<V, DecodeError> {
        V::from_xml_text(text).map_err(|err| match err {
            ScalarError::Malformed { expected } => DecodeError::MalformedValue {
                entity: T::ENTITY,
                key,
                expected,
                value: text.to_string(),
            },
            ScalarError::UnrecognizedCode => DecodeError::UnrecognizedEnumCode {
                entity: T::ENTITY,
                key,
                value: text.to_string(),
            },
        })
    }

    fn missing(&self, key: &'static str) -> DecodeError {
        DecodeError::MissingRequiredField {
            entity: T::ENTITY,
            key,
        }
    }
}

impl<T: XmlCodable> KeyedContainer for XmlDecoder<'_, T> {
    fn entity(&self) -> &'static str {
        T::ENTITY
    }

    fn contains_key(&self, key: &str) -> bool {
        self.element.attribute(key).is_some() || self.element.child(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker {
        code: String,
        label: Option<String>,
        count: u16,
    }

    impl XmlCodable for Marker {
        const ENTITY: &'static str = "Marker";

        fn node_placement(key: &str) -> NodePlacement {
            match key {
                "Code" => NodePlacement::Attribute,
                _ => NodePlacement::Element,
            }
        }

        fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
            encoder.encode("Code", &self.code);
            encoder.encode_optional("Label", self.label.as_ref());
            encoder.encode("Count", &self.count);
        }

        fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
            Ok(Marker {
                code: decoder.decode("Code")?,
                label: decoder.decode_optional("Label")?,
                count: decoder.decode("Count")?,
            })
        }
    }

    #[derive(Debug, PartialEq)]
    struct MarkerSet {
        markers: Vec<Marker>,
    }

    impl XmlCodable for MarkerSet {
        const ENTITY: &'static str = "MarkerSet";

        fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
            encoder.encode_entities("Marker", &self.markers);
        }

        fn decode_fields(decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
            Ok(MarkerSet {
                markers: decoder.decode_required_entities("Marker")?,
            })
        }
    }

    struct Misclassified;

    impl XmlCodable for Misclassified {
        const ENTITY: &'static str = "Misclassified";

        fn node_placement(_key: &str) -> NodePlacement {
            NodePlacement::Attribute
        }

        fn encode_fields(&self, encoder: &mut XmlEncoder<'_, Self>) {
            encoder.encode_entities::<Marker>("Marker", &[]);
        }

        fn decode_fields(_decoder: &XmlDecoder<'_, Self>) -> Result<Self, DecodeError> {
            Ok(Misclassified)
        }
    }

    #[test]
    fn test_classify_defaults_to_element() {
        assert_eq!(classify::<Marker>("Code"), NodePlacement::Attribute);
        assert_eq!(classify::<Marker>("Label"), NodePlacement::Element);
        assert_eq!(classify::<Marker>("Unknown"), NodePlacement::Element);
        assert_eq!(classify::<MarkerSet>("Marker"), NodePlacement::Element);
    }

    #[test]
    fn test_encode_routes_by_placement_and_omits_unset() {
        let marker = Marker {
            code: "A1".to_string(),
            label: None,
            count: 3,
        };
        let element = encode_element(&marker, "Marker");
        assert_eq!(element.attribute("Code"), Some("A1"));
        assert!(element.child("Code").is_none());
        assert!(element.child("Label").is_none());
        assert_eq!(
            element.child("Count").and_then(|c| c.text.as_deref()),
            Some("3")
        );
    }

    #[test]
    fn test_sequence_order_round_trips() {
        let set = MarkerSet {
            markers: (0..3)
                .map(|count| Marker {
                    code: format!("M{count}"),
                    label: Some("x".to_string()),
                    count,
                })
                .collect(),
        };
        let element = encode_element(&set, "MarkerSet");
        assert_eq!(element.children.len(), 3);
        assert_eq!(decode_element::<MarkerSet>(&element), Ok(set));
    }

    #[test]
    fn test_decode_is_placement_agnostic() {
        let mut element = XmlElement::new("Marker");
        element.push_child(XmlElement::with_text("Code", "B2"));
        element.push_attribute("Count", "9");
        let marker: Marker = decode_element(&element).unwrap();
        assert_eq!(marker.code, "B2");
        assert_eq!(marker.count, 9);
    }

    #[test]
    fn test_decode_errors_name_entity_and_key() {
        let mut element = XmlElement::new("Marker");
        element.push_attribute("Code", "A1");
        assert_eq!(
            decode_element::<Marker>(&element),
            Err(DecodeError::MissingRequiredField {
                entity: "Marker",
                key: "Count",
            })
        );

        element.push_child(XmlElement::with_text("Count", "many"));
        assert_eq!(
            decode_element::<Marker>(&element),
            Err(DecodeError::MalformedValue {
                entity: "Marker",
                key: "Count",
                expected: "unsigned short",
                value: "many".to_string(),
            })
        );
    }

    #[test]
    fn test_nested_failure_keeps_nested_identity() {
        let mut set = XmlElement::new("MarkerSet");
        set.push_child(XmlElement::new("Marker"));
        assert_eq!(
            decode_element::<MarkerSet>(&set),
            Err(DecodeError::MissingRequiredField {
                entity: "Marker",
                key: "Code",
            })
        );
        assert_eq!(
            decode_element::<MarkerSet>(&XmlElement::new("MarkerSet")),
            Err(DecodeError::MissingRequiredField {
                entity: "MarkerSet",
                key: "Marker",
            })
        );
    }

    #[test]
    #[should_panic(expected = "Misclassified.Marker holds a nested entity")]
    fn test_entity_under_attribute_placement_panics() {
        encode_element(&Misclassified, "Misclassified");
    }
}
