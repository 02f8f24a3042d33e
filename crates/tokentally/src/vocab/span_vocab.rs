//! # Span Map ``{ Vec<u8> -> T }`` Token Vocabulary

use crate::{
    errors::{TallyError, TallyResult},
    types::{TokenType, hash_map_with_capacity},
    vocab::{ByteMapVocab, SpanTokenMap, TokenSpanMap, VocabIndex},
};

/// The ranked merge vocabulary of one encoding family.
///
/// Holds the forward ``{ bytes -> rank }`` map, its inverse, and the
/// [`ByteMapVocab`] for the single-byte floor. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanMapVocab<T: TokenType> {
    byte_vocab: ByteMapVocab<T>,
    span_map: SpanTokenMap<T>,
    token_spans: TokenSpanMap<T>,
}

impl<T: TokenType> Default for SpanMapVocab<T> {
    /// The 256 identity byte entries, and nothing else.
    fn default() -> Self {
        let byte_vocab = ByteMapVocab::<T>::default();
        let span_map: SpanTokenMap<T> = byte_vocab
            .span_pairs()
            .map(|(span, token)| (span.to_vec(), token))
            .collect();
        let token_spans = span_map.iter().map(|(s, &t)| (t, s.clone())).collect();
        Self {
            byte_vocab,
            span_map,
            token_spans,
        }
    }
}

impl<T: TokenType> TryFrom<SpanTokenMap<T>> for SpanMapVocab<T> {
    type Error = TallyError;

    fn try_from(span_map: SpanTokenMap<T>) -> TallyResult<Self> {
        Self::try_from_span_map(span_map)
    }
}

impl<T: TokenType> SpanMapVocab<T> {
    /// Build a vocabulary from ``(span, rank)`` pairs.
    ///
    /// ## Errors
    /// * [`TallyError::VocabConflict`] if a span appears twice;
    /// * [`TallyError::DuplicateRank`] if two spans share a rank;
    /// * [`TallyError::MissingByteToken`] if any byte lacks a length-1 entry.
    pub fn from_pairs<I>(pairs: I) -> TallyResult<Self>
    where
        I: IntoIterator<Item = (Vec<u8>, T)>,
    {
        let pairs = pairs.into_iter();
        let mut span_map: SpanTokenMap<T> = hash_map_with_capacity(pairs.size_hint().0);
        for (span, token) in pairs {
            if let Some(prev) = span_map.insert(span, token) {
                return Err(TallyError::VocabConflict(format!(
                    "span listed twice, with ranks {prev} and {token}"
                )));
            }
        }
        Self::try_from_span_map(span_map)
    }

    /// Build a vocabulary from a complete span map.
    ///
    /// ## Errors
    /// See [`Self::from_pairs`].
    pub fn try_from_span_map(mut span_map: SpanTokenMap<T>) -> TallyResult<Self> {
        let byte_vocab = ByteMapVocab::try_from_span_map(&span_map)?;

        let mut token_spans: TokenSpanMap<T> = hash_map_with_capacity(span_map.len());
        for (span, &token) in span_map.iter() {
            if token_spans.insert(token, span.clone()).is_some() {
                return Err(TallyError::DuplicateRank {
                    rank: token.to_u64().unwrap_or(u64::MAX),
                });
            }
        }

        span_map.shrink_to_fit();

        Ok(Self {
            byte_vocab,
            span_map,
            token_spans,
        })
    }

    /// The single-byte table.
    pub fn byte_vocab(&self) -> &ByteMapVocab<T> {
        &self.byte_vocab
    }

    /// The forward ``{ bytes -> rank }`` map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// Return the rank of the span, if any.
    #[inline(always)]
    pub fn lookup_token(
        &self,
        span: &[u8],
    ) -> Option<T> {
        if span.len() == 1 {
            Some(self.byte_vocab.get_token(span[0]))
        } else {
            self.span_map.get(span).copied()
        }
    }

    /// Return the span of the rank, if any.
    #[inline(always)]
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_spans.get(&token).map(Vec::as_slice)
    }

    /// Does the vocabulary contain this rank?
    pub fn contains_token(
        &self,
        token: T,
    ) -> bool {
        self.token_spans.contains_key(&token)
    }
}

impl<T: TokenType> VocabIndex<T> for SpanMapVocab<T> {
    fn len(&self) -> usize {
        self.span_map.len()
    }

    fn max_token(&self) -> Option<T> {
        self.token_spans.keys().max().copied()
    }

    fn span_pairs(&self) -> impl Iterator<Item = (&[u8], T)> {
        self.span_map
            .iter()
            .map(|(span, &token)| (span.as_slice(), token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::utility::testing::build_test_span_vocab;

    fn byte_pairs() -> Vec<(Vec<u8>, u32)> {
        (0..=255u8).map(|b| (vec![b], b as u32)).collect()
    }

    #[test]
    fn test_default() {
        let vocab = SpanMapVocab::<u32>::default();
        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.max_token(), Some(255));
        assert_eq!(vocab.lookup_token(b"a"), Some('a' as u32));
        assert_eq!(vocab.lookup_token(b"ab"), None);
        assert_eq!(vocab.lookup_span('z' as u32), Some(b"z".as_slice()));
    }

    #[test]
    fn test_from_pairs() {
        let mut pairs = byte_pairs();
        pairs.push((b"apple".to_vec(), 300));
        pairs.push((b"ap".to_vec(), 301));

        let vocab = SpanMapVocab::from_pairs(pairs).unwrap();
        assert_eq!(vocab.len(), 258);
        assert_eq!(vocab.max_token(), Some(301));

        assert_eq!(vocab.lookup_token(b"apple"), Some(300));
        assert_eq!(vocab.lookup_token(b"ap"), Some(301));
        assert_eq!(vocab.lookup_token(b"b"), Some('b' as u32));
        assert_eq!(vocab.lookup_token(b"pear"), None);

        assert_eq!(vocab.lookup_span(300), Some(b"apple".as_slice()));
        assert_eq!(vocab.lookup_span(302), None);
        assert!(vocab.contains_token(301));
        assert!(!vocab.contains_token(299));
    }

    #[test]
    fn test_duplicate_rank() {
        let mut pairs = byte_pairs();
        pairs.push((b"apple".to_vec(), 300));
        pairs.push((b"pear".to_vec(), 300));

        assert!(matches!(
            SpanMapVocab::from_pairs(pairs),
            Err(TallyError::DuplicateRank { rank: 300 })
        ));

        // A multi-byte span reusing a byte rank.
        let mut pairs = byte_pairs();
        pairs.push((b"apple".to_vec(), 7));
        assert!(matches!(
            SpanMapVocab::from_pairs(pairs),
            Err(TallyError::DuplicateRank { rank: 7 })
        ));
    }

    #[test]
    fn test_duplicate_span() {
        let mut pairs = byte_pairs();
        pairs.push((b"apple".to_vec(), 300));
        pairs.push((b"apple".to_vec(), 301));

        assert!(matches!(
            SpanMapVocab::from_pairs(pairs),
            Err(TallyError::VocabConflict(_))
        ));
    }

    #[test]
    fn test_single_byte_floor() {
        let pairs = byte_pairs().into_iter().filter(|(s, _)| s[0] != 0xff);
        assert!(matches!(
            SpanMapVocab::from_pairs(pairs),
            Err(TallyError::MissingByteToken { byte: 0xff })
        ));

        let vocab = build_test_span_vocab::<u32>();
        for b in 0..=255u8 {
            assert!(vocab.lookup_token(&[b]).is_some());
        }
    }
}
