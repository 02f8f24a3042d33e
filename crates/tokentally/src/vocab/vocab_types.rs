//! # Vocabulary Types

use crate::types::TtHashMap;

/// `{ Vec<u8> -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `span_map`, or `span_token_map`.
pub type SpanTokenMap<T> = TtHashMap<Vec<u8>, T>;

/// `{ T -> Vec<u8> }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_spans`, or `token_span_map`.
pub type TokenSpanMap<T> = TtHashMap<T, Vec<u8>>;

/// `{ T -> u8 }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_bytes`, or `token_byte_map`.
pub type TokenByteMap<T> = TtHashMap<T, u8>;

/// `[T; 256]` array.
///
/// ## Style Hints
/// Instance names should prefer `byte_tokens`, or `byte_token_array`.
pub type ByteTokenArray<T> = [T; 256];

/// Common read-only view over the vocabulary tables.
pub trait VocabIndex<T> {
    /// The number of entries.
    fn len(&self) -> usize;

    /// Is this empty?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The largest token, if any.
    fn max_token(&self) -> Option<T>;

    /// Iterate ``(span, token)`` pairs, in no particular order.
    fn span_pairs(&self) -> impl Iterator<Item = (&[u8], T)>;
}
