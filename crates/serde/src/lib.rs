//! # Pacer Serialization Module
//!
//! Reads and writes Training Center XML (TCX) documents modelled by
//! `pacer-tcx`.
//!
//! ## Features
//!
//! - **XML Support** (`xml`, on by default): TCX documents through
//!   `quick-xml`, with the attribute/element placement and alternate key
//!   spellings defined by the model.
//! - **JSON Support**: thin wrappers around `serde_json` for a camelCase JSON
//!   rendering of the same model.
//!
//! ## Examples
//!
//! ```
//! use pacer_serde::{from_json_str, to_json_string};
//! use pacer_tcx::Position;
//! use rust_decimal_macros::dec;
//!
//! let position = Position::new(dec!(47.6), dec!(-122.3));
//! let json = to_json_string(&position).unwrap();
//! let back: Position = from_json_str(&json).unwrap();
//! assert_eq!(back, position);
//! ```
//!
//! ```
//! # #[cfg(feature = "xml")]
//! # {
//! use pacer_serde::xml::{from_xml_str, to_xml_string_pretty};
//! use pacer_tcx::{ActivityGoals, TrainingCenterDatabase};
//!
//! let database = TrainingCenterDatabase::default();
//! let xml = to_xml_string_pretty(&database).unwrap();
//! assert_eq!(from_xml_str::<TrainingCenterDatabase>(&xml).unwrap(), database);
//! assert!(from_xml_str::<ActivityGoals>(&xml).is_err());
//! # }
//! ```

pub mod error;
pub mod json;

#[cfg(feature = "xml")]
pub mod xml;

// Re-export common types and functions
pub use error::{Result, SerdeError};

// Re-export JSON functions at top level for convenience
pub use json::{
    from_json_slice, from_json_str, from_json_value, to_json_string, to_json_string_pretty,
    to_json_value, to_json_vec,
};

#[cfg(feature = "xml")]
pub use xml::{
    from_xml_reader, from_xml_slice, from_xml_str, to_xml_string, to_xml_string_pretty,
    to_xml_vec, to_xml_writer,
};
