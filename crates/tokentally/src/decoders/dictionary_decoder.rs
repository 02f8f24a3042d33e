//! # Dictionary Decoder

use std::sync::Arc;

use crate::{
    decoders::TokenDecoder,
    errors::{TallyError, TallyResult},
    types::TokenType,
    vocab::{SpanMapVocab, SpecialVocab},
};

/// A [`TokenDecoder`] over the inverse vocabulary and the special words.
///
/// The vocabulary is consulted first; special ids never collide with ranks.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    vocab: Arc<SpanMapVocab<T>>,
    specials: SpecialVocab<T>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a decoder.
    pub fn new(
        vocab: Arc<SpanMapVocab<T>>,
        specials: SpecialVocab<T>,
    ) -> Self {
        Self { vocab, specials }
    }

    /// Get the bytes of one token, if any.
    #[inline(always)]
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.vocab
            .lookup_span(token)
            .or_else(|| self.specials.lookup_span(token))
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TallyResult<()> {
        for &token in tokens {
            match self.lookup_span(token) {
                Some(span) => buf.extend_from_slice(span),
                None => {
                    return Err(TallyError::UnknownToken {
                        token: token.to_u64().unwrap_or(u64::MAX),
                    });
                }
            }
        }
        Ok(())
    }
}
