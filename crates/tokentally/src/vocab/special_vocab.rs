//! # Special Words Vocabulary

use crate::{
    errors::{TallyError, TallyResult},
    regex::{RegexPattern, exact_match_union_regex_pattern},
    types::TokenType,
    vocab::{SpanMapVocab, SpanTokenMap, TokenSpanMap, VocabIndex},
};

/// Token vocabulary for special words.
///
/// Literal control strings mapped to reserved ids; these never take part in merges.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab<T: TokenType> {
    span_map: SpanTokenMap<T>,
    token_spans: TokenSpanMap<T>,
}

impl<T: TokenType> SpecialVocab<T> {
    /// Build from ``(word, id)`` pairs.
    ///
    /// ## Errors
    /// * [`TallyError::VocabConflict`] if a word is listed twice;
    /// * [`TallyError::DuplicateRank`] if two words share an id.
    pub fn from_words<W, S>(words: W) -> TallyResult<Self>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for (word, token) in words {
            vocab.add_str_word(word.as_ref(), token)?;
        }
        Ok(vocab)
    }

    /// Add a word to the vocab.
    ///
    /// ## Errors
    /// See [`Self::from_words`].
    pub fn add_str_word(
        &mut self,
        word: &str,
        token: T,
    ) -> TallyResult<()> {
        let span = word.as_bytes().to_vec();
        if self.span_map.contains_key(&span) {
            return Err(TallyError::VocabConflict(format!(
                "special token listed twice: {word}"
            )));
        }
        if self.token_spans.contains_key(&token) {
            return Err(TallyError::DuplicateRank {
                rank: token.to_u64().unwrap_or(u64::MAX),
            });
        }
        self.span_map.insert(span.clone(), token);
        self.token_spans.insert(token, span);
        Ok(())
    }

    /// Check that no special id is also a vocabulary rank.
    ///
    /// ## Errors
    /// * [`TallyError::VocabConflict`] naming the first colliding word.
    pub fn validate_disjoint(
        &self,
        vocab: &SpanMapVocab<T>,
    ) -> TallyResult<()> {
        for (span, &token) in self.span_map.iter() {
            if vocab.contains_token(token) {
                return Err(TallyError::VocabConflict(format!(
                    "special token {} reuses vocabulary rank {token}",
                    String::from_utf8_lossy(span)
                )));
            }
        }
        Ok(())
    }

    /// Get the span map.
    pub fn span_map(&self) -> &SpanTokenMap<T> {
        &self.span_map
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        span: &[u8],
    ) -> Option<T> {
        self.span_map.get(span).copied()
    }

    /// Get the associated span for a token, if any.
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_spans.get(&token).map(Vec::as_slice)
    }

    /// The special words, sorted by id.
    pub fn sorted_words(&self) -> Vec<(String, T)> {
        let mut words = self
            .span_map
            .iter()
            .map(|(span, &token)| (String::from_utf8_lossy(span).into_owned(), token))
            .collect::<Vec<_>>();
        words.sort_by_key(|&(_, token)| token);
        words
    }

    /// Get the exact-match regex pattern for the special words.
    ///
    /// ## Returns
    /// `None` if no special words are present;
    /// and `Some(RegexPattern)` otherwise.
    pub fn special_pattern(&self) -> Option<RegexPattern> {
        if self.is_empty() {
            return None;
        }

        let alts = self
            .span_map
            .keys()
            .map(|k| String::from_utf8_lossy(k).into_owned())
            .collect::<Vec<_>>();
        Some(exact_match_union_regex_pattern(&alts))
    }
}

impl<T: TokenType> VocabIndex<T> for SpecialVocab<T> {
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
