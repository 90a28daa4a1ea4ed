//! In-memory keyed element tree.
//!
//! This is the container the bridge reads from and writes to. Attribute and
//! child order is preserved exactly as it was inserted (or parsed), and
//! repeated child names are kept as separate, ordered entries.

/// A single XML element with its attributes, child elements and text.
///
/// Names are kept as written, including any namespace prefix
/// (`ns5:activityGoal`), since TCX producers disagree on prefixes and the
/// bridge matches on the qualified name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
    pub text: Option<String>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Creates a leaf element holding only text, e.g. `<Notes>easy</Notes>`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn push_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Returns the value of the attribute with the given qualified name.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first child element with the given qualified name.
    pub fn child(&self, key: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == key)
    }

    /// Iterates every child element with the given name, in document order.
    pub fn children_named<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == key)
    }

    /// The element name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    /// Appends text content, as produced by consecutive text/reference events.
    pub fn append_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_string()),
        }
    }

    /// Drops whitespace-only text from elements that have children, where it
    /// is indentation. Leaf text is kept verbatim.
    pub fn normalize_text(&mut self) {
        if !self.children.is_empty()
            && self
                .text
                .as_deref()
                .is_some_and(|text| text.trim().is_empty())
        {
            self.text = None;
        }
    }
}

/// Strips a namespace prefix from a qualified name.
pub fn local_name(name: &str) -> &str {
    name.rsplit_once(':').map(|(_, local)| local).unwrap_or(name)
}
