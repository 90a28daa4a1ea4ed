//! Decode failures raised by the TCX bridge.

use thiserror::Error;

/// A failure to decode a single entity from its keyed element.
///
/// Every variant names the entity whose field failed and the XML key that was
/// read. Failures inside nested entities are propagated unchanged, so the
/// entity named here is the innermost one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required attribute or child element is not present.
    #[error("{entity} is missing required field `{key}`")]
    MissingRequiredField {
        entity: &'static str,
        key: &'static str,
    },

    /// The field is present but its text does not parse as the target type.
    #[error("{entity} field `{key}` is not a valid {expected}: {value:?}")]
    MalformedValue {
        entity: &'static str,
        key: &'static str,
        expected: &'static str,
        value: String,
    },

    /// The field holds a code outside the closed set of its enumeration.
    #[error("{entity} field `{key}` has unrecognized code {value:?}")]
    UnrecognizedEnumCode {
        entity: &'static str,
        key: &'static str,
        value: String,
    },
}

impl DecodeError {
    /// The entity type whose field failed.
    pub fn entity(&self) -> &'static str {
        match self {
            DecodeError::MissingRequiredField { entity, .. }
            | DecodeError::MalformedValue { entity, .. }
            | DecodeError::UnrecognizedEnumCode { entity, .. } => entity,
        }
    }

    /// The XML key that was being decoded.
    pub fn key(&self) -> &'static str {
        match self {
            DecodeError::MissingRequiredField { key, .. }
            | DecodeError::MalformedValue { key, .. }
            | DecodeError::UnrecognizedEnumCode { key, .. } => key,
        }
    }
}
