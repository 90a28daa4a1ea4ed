use pacer_serde_support::DecodeError;

/// Errors raised while reading or writing TCX documents.
#[derive(Debug)]
pub enum SerdeError {
    /// JSON serialization or deserialization error
    Json(serde_json::Error),

    /// The XML text is not well formed
    #[cfg(feature = "xml")]
    Xml(quick_xml::Error),

    /// IO error during serialization/deserialization
    Io(std::io::Error),

    /// The element tree does not match the document model
    Decode(DecodeError),

    /// The document root is not the element the target type expects
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// Custom error message
    Custom(String),
}

impl std::fmt::Display for SerdeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerdeError::Json(e) => write!(f, "JSON error: {}", e),
            #[cfg(feature = "xml")]
            SerdeError::Xml(e) => write!(f, "XML error: {}", e),
            SerdeError::Io(e) => write!(f, "IO error: {}", e),
            SerdeError::Decode(e) => write!(f, "{}", e),
            SerdeError::UnexpectedRoot { expected, found } => write!(
                f,
                "expected a <{}> document, found <{}>",
                expected, found
            ),
            SerdeError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SerdeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerdeError::Json(e) => Some(e),
            #[cfg(feature = "xml")]
            SerdeError::Xml(e) => Some(e),
            SerdeError::Io(e) => Some(e),
            // transparent
            SerdeError::Decode(e) => e.source(),
            SerdeError::UnexpectedRoot { .. } | SerdeError::Custom(_) => None,
        }
    }
}

impl SerdeError {
    /// The model-level decode failure, if that is what this error is.
    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self {
            SerdeError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SerdeError {
    fn from(err: serde_json::Error) -> Self {
        SerdeError::Json(err)
    }
}

#[cfg(feature = "xml")]
impl From<quick_xml::Error> for SerdeError {
    fn from(err: quick_xml::Error) -> Self {
        SerdeError::Xml(err)
    }
}

impl From<std::io::Error> for SerdeError {
    fn from(err: std::io::Error) -> Self {
        SerdeError::Io(err)
    }
}

impl From<DecodeError> for SerdeError {
    fn from(err: DecodeError) -> Self {
        SerdeError::Decode(err)
    }
}

impl From<String> for SerdeError {
    fn from(msg: String) -> Self {
        SerdeError::Custom(msg)
    }
}

impl From<&str> for SerdeError {
    fn from(msg: &str) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

/// Result type alias for TCX serialization operations
pub type Result<T> = std::result::Result<T, SerdeError>;
