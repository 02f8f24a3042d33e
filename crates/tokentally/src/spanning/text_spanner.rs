//! # Text Spanner

use core::{num::NonZeroUsize, ops::Range};

use crate::{
    concurrency::PoolToy,
    errors::TallyResult,
    regex::RegexWrapper,
    spanning::TextSpanningConfig,
    types::TokenType,
    vocab::SpecialVocab,
};

/// Expected bytes per chunk; used to pre-size span buffers.
const EXPECTED_BYTES_PER_SPAN: usize = 4;

/// Span Label/Range Reference for [`TextSpanner`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A pattern match.
    Word(Range<usize>),

    /// A special word match.
    Special(Range<usize>),

    /// Text not covered by any pattern match.
    Gap(Range<usize>),
}

impl SpanRef {
    /// The byte range of the span.
    pub fn range(&self) -> Range<usize> {
        match self {
            Self::Word(range) | Self::Special(range) | Self::Gap(range) => range.clone(),
        }
    }
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Special(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

/// A segment produced by special-token recognition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a, T: TokenType> {
    /// A literal special token, with its reserved id.
    Special {
        /// The matched literal.
        text: &'a str,

        /// The reserved id.
        token: T,
    },

    /// Plain text, to be pre-tokenized and merged.
    Text(&'a str),
}

fn offset_range(
    range: Range<usize>,
    offset: usize,
) -> Range<usize> {
    (range.start + offset)..(range.end + offset)
}

/// Text Spanner with regex-based word splitting and special word matching.
///
/// Each compiled regex is held in a [`PoolToy`], so concurrent callers
/// mostly work on distinct clones.
#[derive(Clone, Debug)]
pub struct TextSpanner<T: TokenType> {
    /// Regex for splitting words.
    word_re: PoolToy<RegexWrapper>,

    /// Regex for matching special words.
    special_re: Option<PoolToy<RegexWrapper>>,

    /// The special words.
    specials: SpecialVocab<T>,
}

impl<T: TokenType> TextSpanner<T> {
    /// Build a new [`TextSpanner`] from a [`TextSpanningConfig`].
    ///
    /// ## Arguments
    /// * `config` - The spanning configuration.
    /// * `max_pool` - The maximum size of the regex pool; if None, lib defaults are used.
    /// * `backtrack_limit` - Bound on the backtracking engine; if None, engine defaults are used.
    ///
    /// ## Errors
    /// * [`crate::TallyError::Regex`] if either pattern fails to compile.
    pub fn from_config(
        config: &TextSpanningConfig<T>,
        max_pool: Option<NonZeroUsize>,
        backtrack_limit: Option<usize>,
    ) -> TallyResult<Self> {
        let word_re = config
            .pattern()
            .compile_with_backtrack_limit(backtrack_limit)?;

        let special_re = match config.specials().special_pattern() {
            Some(pattern) => Some(pattern.compile()?),
            None => None,
        };

        Ok(Self {
            word_re: PoolToy::init(word_re, max_pool),
            special_re: special_re.map(|re| PoolToy::init(re, max_pool)),
            specials: config.specials().clone(),
        })
    }

    /// Get the span split regex.
    pub fn word_regex(&self) -> &RegexWrapper {
        self.word_re.get()
    }

    /// Get the optional special split regex.
    pub fn special_regex(&self) -> Option<&RegexWrapper> {
        self.special_re.as_ref().map(PoolToy::get)
    }

    /// Get the special words.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }

    /// Find the next special span in the text.
    ///
    /// ## Returns
    /// * `Some(Range<usize>)` of the leftmost, then longest, special word;
    /// * `None` otherwise.
    pub fn next_special_span(
        &self,
        text: &str,
    ) -> TallyResult<Option<Range<usize>>> {
        match self.special_regex() {
            None => Ok(None),
            Some(re) => Ok(re.find_first(text)?),
        }
    }

    /// Iterate over all split [`SpanRef`]s in the text.
    ///
    /// ## Arguments
    /// * `text` - the text to split.
    /// * `f` - the function to apply to each span;
    ///   halts when the function returns `false`.
    ///
    /// A span is consumed *only if* the function returns `true`.
    ///
    /// ## Returns
    /// ``(completed, consumed)`` where:
    /// - `consumed` is the number of bytes covered by spans accepted by `f`;
    /// - `completed` is if all spans were accepted.
    ///
    /// ## Errors
    /// * [`crate::TallyError::Regex`] if the pattern engine fails mid-match.
    pub fn for_each_split_span<F>(
        &self,
        text: &str,
        f: &mut F,
    ) -> TallyResult<(bool, usize)>
    where
        F: FnMut(SpanRef) -> bool,
    {
        let mut current = text;
        let mut offset = 0;

        while let Some(range) = self.next_special_span(current)? {
            let Range { start, end } = range;

            let (cont, used) = self.for_each_word(&current[..start], offset, f)?;
            if !cont {
                return Ok((false, offset + used));
            }

            if !f(SpanRef::Special(offset_range(range, offset))) {
                return Ok((false, offset + start));
            }

            current = &current[end..];
            offset += end;
        }

        let (cont, used) = self.for_each_word(current, offset, f)?;
        Ok((cont, offset + used))
    }

    /// Walk the pattern matches of a special-free region.
    ///
    /// Returns ``(completed, consumed)`` relative to `text`.
    fn for_each_word<F>(
        &self,
        text: &str,
        offset: usize,
        f: &mut F,
    ) -> TallyResult<(bool, usize)>
    where
        F: FnMut(SpanRef) -> bool,
    {
        let mut last = 0;
        for m in self.word_regex().find_iter(text) {
            let range = m?;
            let Range { start, end } = range;

            if last < start {
                if !f(SpanRef::Gap(offset_range(last..start, offset))) {
                    return Ok((false, last));
                }
                last = start;
            }

            if !f(SpanRef::Word(offset_range(range, offset))) {
                return Ok((false, last));
            }
            last = end;
        }

        if last < text.len() {
            if !f(SpanRef::Gap(offset_range(last..text.len(), offset))) {
                return Ok((false, last));
            }
            last = text.len();
        }

        Ok((true, last))
    }

    /// Split text into spans.
    pub fn split_spans(
        &self,
        text: &str,
    ) -> TallyResult<Vec<SpanRef>> {
        let mut spans = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_SPAN + 1);

        self.for_each_split_span(text, &mut |span_ref| {
            spans.push(span_ref);
            true
        })?;

        Ok(spans)
    }

    /// Pre-tokenize text into chunks, ignoring special words.
    ///
    /// The chunks partition `text` in order; concatenated, they are `text`.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> TallyResult<Vec<&'a str>> {
        let mut chunks = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_SPAN + 1);
        let mut last = 0;

        for m in self.word_regex().find_iter(text) {
            let range = m?;
            if last < range.start {
                chunks.push(&text[last..range.start]);
            }
            last = range.end;
            chunks.push(&text[range]);
        }
        if last < text.len() {
            chunks.push(&text[last..]);
        }

        Ok(chunks)
    }

    /// Recognize the special words of the text.
    ///
    /// ## Returns
    /// The ordered [`Segment`]s; empty text segments are omitted.
    pub fn segments<'a>(
        &self,
        text: &'a str,
    ) -> TallyResult<Vec<Segment<'a, T>>> {
        let mut segments = Vec::new();
        let mut current = text;

        while let Some(Range { start, end }) = self.next_special_span(current)? {
            if start > 0 {
                segments.push(Segment::Text(&current[..start]));
            }

            let literal = &current[start..end];
            segments.push(match self.specials.lookup_token(literal.as_bytes()) {
                Some(token) => Segment::Special {
                    text: literal,
                    token,
                },
                None => Segment::Text(literal),
            });

            current = &current[end..];
        }

        if !current.is_empty() {
            segments.push(Segment::Text(current));
        }

        Ok(segments)
    }
}
