//! Shared building blocks for encoding TCX entities to XML and back.
//!
//! - [`node`]: the keyed element tree handed over by the XML text layer.
//! - [`scalar`]: text encoding of strings, numbers, booleans and timestamps.
//! - [`codec`]: the per-entity [`XmlCodable`] trait, the node-placement
//!   classifier and the keyed encoder/decoder.
//! - [`fallback`]: priority-ordered decoding of fields known under more than
//!   one tag name.
//! - [`error`]: [`DecodeError`].

pub mod codec;
pub mod error;
pub mod fallback;
pub mod node;
pub mod scalar;

pub use codec::{
    NodePlacement, XmlCodable, XmlDecoder, XmlEncoder, XmlRoot, classify, decode_element,
    encode_element, encode_root,
};
pub use error::DecodeError;
pub use fallback::{AliasedKey, KeyedContainer, decode_with_fallback};
pub use node::{XmlElement, local_name};
pub use scalar::{ScalarError, XmlScalar};
