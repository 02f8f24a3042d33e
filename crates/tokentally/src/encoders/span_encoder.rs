//! # Span Encoder Trait

use crate::{types::TokenType, vocab::SpanMapVocab};

/// A trait for encoding pre-tokenized chunks into ranks.
///
/// Implementations may keep scratch buffers between calls; hence `&mut self`.
pub trait SpanEncoder<T: TokenType>: Send {
    /// Merge a chunk which is not itself a vocabulary entry.
    ///
    /// ## Arguments
    /// * `vocab` - The merge vocabulary.
    /// * `span` - The chunk bytes.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_compound_span(
        &mut self,
        vocab: &SpanMapVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    );

    /// Encode a chunk, appending its ranks to `tokens`.
    ///
    /// A chunk which is itself a vocabulary entry is emitted directly.
    fn encode_append_span(
        &mut self,
        vocab: &SpanMapVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        if let Some(token) = vocab.lookup_token(span) {
            tokens.push(token);
        } else {
            self.encode_append_compound_span(vocab, span, tokens);
        }
    }
}

impl<T, E> SpanEncoder<T> for Box<E>
where
    T: TokenType,
    E: SpanEncoder<T> + ?Sized,
{
    fn encode_append_compound_span(
        &mut self,
        vocab: &SpanMapVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        (**self).encode_append_compound_span(vocab, span, tokens)
    }

    fn encode_append_span(
        &mut self,
        vocab: &SpanMapVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        (**self).encode_append_span(vocab, span, tokens)
    }
}
