//! Dual-key decoding for fields whose tag name changed between schema
//! revisions or namespace conventions.
//!
//! Candidate keys are tried in strict priority order. The first key that is
//! present decides the outcome: a well-formed value is returned, a malformed
//! one fails the decode. Later keys are only consulted when every earlier key
//! is absent, so a document from one schema family never silently borrows a
//! field from another.

use crate::error::DecodeError;

/// Presence queries over a keyed container.
pub trait KeyedContainer {
    /// Entity name reported when a decode through this container fails.
    fn entity(&self) -> &'static str;

    /// Whether `key` exists as an attribute or child element.
    fn contains_key(&self, key: &str) -> bool;
}

/// A field key with the alternate spellings accepted when decoding.
///
/// Encoding always writes [`primary`](Self::primary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasedKey {
    primary: &'static str,
    alternates: &'static [&'static str],
}

impl AliasedKey {
    pub const fn new(primary: &'static str, alternates: &'static [&'static str]) -> Self {
        Self {
            primary,
            alternates,
        }
    }

    pub const fn primary(&self) -> &'static str {
        self.primary
    }

    pub const fn alternates(&self) -> &'static [&'static str] {
        self.alternates
    }

    /// All keys in priority order, primary first.
    pub fn candidates(&self) -> impl Iterator<Item = &'static str> + use<> {
        std::iter::once(self.primary).chain(self.alternates.iter().copied())
    }
}

/// Decodes a field through the first present key of `keys`.
///
/// Returns `Ok(None)` when no candidate key is present. Errors from `decode`
/// are returned as-is; a malformed value under a higher-priority key never
/// falls through to a lower-priority one.
pub fn decode_with_fallback<C, V, F>(
    container: &C,
    keys: &AliasedKey,
    mut decode: F,
) -> Result<Option<V>, DecodeError>
where
    C: KeyedContainer + ?Sized,
    F: FnMut(&C, &'static str) -> Result<V, DecodeError>,
{
    for key in keys.candidates() {
        if !container.contains_key(key) {
            continue;
        }
        if key != keys.primary() {
            tracing::trace!(
                entity = container.entity(),
                primary = keys.primary(),
                alternate = key,
                "decoding field from alternate key"
            );
        }
        return decode(container, key).map(Some);
    }
    Ok(None)
}
