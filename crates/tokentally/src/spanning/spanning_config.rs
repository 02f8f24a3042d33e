//! # Text Spanner Configuration

use crate::{
    errors::TallyResult,
    regex::{ConstRegexPattern, RegexPattern},
    types::TokenType,
    vocab::SpecialVocab,
};

/// Description of text spanning configuration.
///
/// ## Style Hints
///
/// Instance names should prefer `spanning_config`,
/// or `config` when there is no ambiguity.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpanningConfig<T: TokenType> {
    /// Pattern for word splitting.
    pattern: RegexPattern,

    /// Special tokens vocabulary.
    specials: SpecialVocab<T>,
}

impl<T: TokenType> From<RegexPattern> for TextSpanningConfig<T> {
    fn from(pattern: RegexPattern) -> Self {
        Self::from_pattern(pattern)
    }
}

impl<T: TokenType> From<ConstRegexPattern> for TextSpanningConfig<T> {
    fn from(pattern: ConstRegexPattern) -> Self {
        Self::from_pattern(pattern)
    }
}

impl<T: TokenType> TextSpanningConfig<T> {
    /// Build a new config from the given word split pattern.
    ///
    /// Will contain an empty list of specials.
    pub fn from_pattern<P>(pattern: P) -> Self
    where
        P: Into<RegexPattern>,
    {
        Self {
            pattern: pattern.into(),
            specials: SpecialVocab::default(),
        }
    }

    /// Set the word split pattern.
    pub fn with_pattern<P>(
        self,
        pattern: P,
    ) -> Self
    where
        P: Into<RegexPattern>,
    {
        Self {
            pattern: pattern.into(),
            ..self
        }
    }

    /// Replace the special tokens vocabulary.
    pub fn with_specials(
        self,
        specials: SpecialVocab<T>,
    ) -> Self {
        Self { specials, ..self }
    }

    /// Add the given special words.
    ///
    /// This does not replace existing special words.
    ///
    /// ## Errors
    /// As [`SpecialVocab::add_str_word`].
    pub fn with_special_words<W, S>(
        mut self,
        special_words: W,
    ) -> TallyResult<Self>
    where
        W: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
    {
        for (word, token) in special_words {
            self.specials.add_str_word(word.as_ref(), token)?;
        }
        Ok(self)
    }

    /// Get the word split pattern.
    pub fn pattern(&self) -> &RegexPattern {
        &self.pattern
    }

    /// Get the special tokens vocabulary.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }
}
