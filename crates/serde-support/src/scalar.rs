//! Text encoding of scalar field values.
//!
//! A scalar is anything that fits in a single attribute value or in the text
//! of a leaf element: strings, integers, decimals, booleans, timestamps and
//! enumerated codes.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;

/// Why a scalar's text could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarError {
    /// The text is not a valid value of the named type.
    Malformed { expected: &'static str },
    /// The text is not one of the codes of a closed enumeration.
    UnrecognizedCode,
}

/// A value that is written as attribute or element text.
pub trait XmlScalar: Sized {
    fn to_xml_text(&self) -> String;

    fn from_xml_text(text: &str) -> Result<Self, ScalarError>;
}

impl XmlScalar for String {
    fn to_xml_text(&self) -> String {
        self.clone()
    }

    fn from_xml_text(text: &str) -> Result<Self, ScalarError> {
        Ok(text.to_string())
    }
}

impl XmlScalar for bool {
    fn to_xml_text(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }

    // xsd:boolean admits the lexical forms 1 and 0 as well.
    fn from_xml_text(text: &str) -> Result<Self, ScalarError> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ScalarError::Malformed { expected: "boolean" }),
        }
    }
}

macro_rules! integer_scalar {
    ($($ty:ty => $expected:literal),+ $(,)?) => {
        $(
            impl XmlScalar for $ty {
                fn to_xml_text(&self) -> String {
                    self.to_string()
                }

                fn from_xml_text(text: &str) -> Result<Self, ScalarError> {
                    text.trim()
                        .parse()
                        .map_err(|_| ScalarError::Malformed { expected: $expected })
                }
            }
        )+
    };
}

integer_scalar! {
    u8 => "unsigned byte",
    u16 => "unsigned short",
    u32 => "unsigned int",
}

/// Measurements are read as exact decimals. The non-finite `xsd:double`
/// lexical forms `NaN`, `INF` and `-INF`, and exponents outside the range a
/// `Decimal` can hold, are malformed.
impl XmlScalar for Decimal {
    fn to_xml_text(&self) -> String {
        self.to_string()
    }

    fn from_xml_text(text: &str) -> Result<Self, ScalarError> {
        let text = text.trim();
        let parsed = if text.contains(['e', 'E']) {
            Decimal::from_scientific(text)
        } else {
            Decimal::from_str(text)
        };
        parsed.map_err(|_| ScalarError::Malformed { expected: "decimal" })
    }
}

/// Timestamps are written as RFC 3339 in UTC. Producers that omit the offset
/// are read as UTC.
impl XmlScalar for DateTime<Utc> {
    fn to_xml_text(&self) -> String {
        self.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn from_xml_text(text: &str) -> Result<Self, ScalarError> {
        let text = text.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Ok(parsed.with_timezone(&Utc));
        }
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| ScalarError::Malformed { expected: "dateTime" })
    }
}
