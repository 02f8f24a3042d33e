//! # Byte/Token Mapping Table

use core::fmt::Debug;

use crate::{
    errors::{TallyError, TallyResult},
    types::TokenType,
    vocab::{ByteTokenArray, SpanTokenMap, TokenByteMap, VocabIndex},
};

/// ``0..=255`` Byte/Token Bijection Table
///
/// Every byte value has exactly one token; this is the single-byte floor
/// which makes every byte sequence encodable.
///
/// The token values are not required to be dense, or in the range ``0..=255``;
/// the `tiktoken` vocabularies place printable bytes first.
#[derive(Clone, PartialEq)]
pub struct ByteMapVocab<T: TokenType> {
    /// Hash map from token to byte ordinal value.
    token_bytes: TokenByteMap<T>,

    /// Table mapping from byte ordinal (position) to token.
    byte_tokens: ByteTokenArray<T>,

    /// Length-1 spans, indexed by byte ordinal.
    byte_spans: [u8; 256],
}

impl<T: TokenType> Debug for ByteMapVocab<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("ByteMapVocab")
            .field("max_token", &self.max_token())
            .finish()
    }
}

impl<T: TokenType> Default for ByteMapVocab<T> {
    /// The identity table: byte `b` is token `b`.
    fn default() -> Self {
        let byte_tokens: ByteTokenArray<T> = core::array::from_fn(|b| {
            T::from_usize(b).unwrap_or_else(|| panic!("token type cannot hold {b}"))
        });
        Self::init(byte_tokens)
    }
}

impl<T: TokenType> ByteMapVocab<T> {
    fn init(byte_tokens: ByteTokenArray<T>) -> Self {
        let mut token_bytes: TokenByteMap<T> = byte_tokens
            .iter()
            .enumerate()
            .map(|(b, &token)| (token, b as u8))
            .collect();
        token_bytes.shrink_to_fit();

        Self {
            token_bytes,
            byte_tokens,
            byte_spans: core::array::from_fn(|b| b as u8),
        }
    }

    /// Build from a byte-ord => token table.
    ///
    /// ## Errors
    /// * [`TallyError::VocabConflict`] if the table has the wrong length,
    ///   or two bytes share a token.
    pub fn try_from_byte_to_token(byte_to_token: &[T]) -> TallyResult<Self> {
        let byte_tokens: ByteTokenArray<T> = byte_to_token.try_into().map_err(|_| {
            TallyError::VocabConflict(format!(
                "byte table must have 256 entries, found {}",
                byte_to_token.len()
            ))
        })?;

        let vocab = Self::init(byte_tokens);
        if vocab.token_bytes.len() != 256 {
            return Err(TallyError::VocabConflict(
                "byte table is not a bijection".to_string(),
            ));
        }
        Ok(vocab)
    }

    /// Extract the length-1 entries of a span map.
    ///
    /// ## Errors
    /// * [`TallyError::MissingByteToken`] for the first byte value with no entry.
    pub fn try_from_span_map(span_map: &SpanTokenMap<T>) -> TallyResult<Self> {
        let mut byte_tokens = Vec::with_capacity(256);
        for b in 0..=255u8 {
            match span_map.get([b].as_slice()) {
                Some(&token) => byte_tokens.push(token),
                None => return Err(TallyError::MissingByteToken { byte: b }),
            }
        }
        Self::try_from_byte_to_token(&byte_tokens)
    }

    /// Get the byte-ord => token mapping table.
    pub fn byte_tokens(&self) -> &ByteTokenArray<T> {
        &self.byte_tokens
    }

    /// Get the token corresponding to a given byte.
    #[inline(always)]
    pub fn get_token(
        &self,
        byte: u8,
    ) -> T {
        self.byte_tokens[byte as usize]
    }

    /// Append the translated byte tokens to a target buffer.
    #[inline(always)]
    pub fn append_tokens(
        &self,
        bytes: &[u8],
        tokens: &mut Vec<T>,
    ) {
        tokens.extend(bytes.iter().map(|&b| self.get_token(b)));
    }

    /// Get the byte corresponding to a given token, if any.
    #[inline(always)]
    pub fn get_byte(
        &self,
        token: T,
    ) -> Option<u8> {
        self.token_bytes.get(&token).copied()
    }
}

impl<T: TokenType> VocabIndex<T> for ByteMapVocab<T> {
    fn len(&self) -> usize {
        256
    }

    fn max_token(&self) -> Option<T> {
        self.byte_tokens.iter().max().copied()
    }

    fn span_pairs(&self) -> impl Iterator<Item = (&[u8], T)> {
        self.byte_tokens
            .iter()
            .enumerate()
            .map(|(b, &token)| (core::slice::from_ref(&self.byte_spans[b]), token))
    }
}
