//! # Token Codec

use core::str::FromStr;
use std::sync::Arc;

use crate::{
    codec::CodecOptions,
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{SpanEncoder, SpanEncoderBuilder},
    encodings::EncodingFamily,
    errors::TallyResult,
    spanning::{Segment, SpanRef, TextSpanner, TextSpanningConfig},
    types::TokenType,
    vocab::{SpanMapVocab, SpecialVocab, VocabIndex},
};

/// The result of [`Codec::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<T> {
    /// The token ids, in text order.
    pub ids: Vec<T>,

    /// The text of each id, for diagnostics.
    ///
    /// Ids which split a UTF-8 sequence render with replacement characters.
    pub tokens: Vec<String>,
}

/// One encoding: vocabulary, pattern and special tokens, bound to a merge engine.
///
/// Immutable once built; safe to share across threads.
///
/// ## Style Hints
///
/// Instance names should prefer `codec`.
#[derive(Clone)]
pub struct Codec<T: TokenType> {
    name: String,
    vocab: Arc<SpanMapVocab<T>>,
    spanner: TextSpanner<T>,
    decoder: DictionaryDecoder<T>,
    span_encoder_builder: SpanEncoderBuilder<T>,
    options: CodecOptions,
}

impl<T: TokenType> core::fmt::Debug for Codec<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Codec")
            .field("name", &self.name)
            .field("vocab_size", &self.vocab.len())
            .field("specials", &self.spanner.specials().len())
            .field("options", &self.options)
            .finish()
    }
}

impl<T: TokenType> Codec<T> {
    /// Build a new codec.
    ///
    /// ## Arguments
    /// * `name` - The encoding name, reported by [`Self::name`].
    /// * `vocab` - The merge vocabulary.
    /// * `spanning` - The split pattern and special words.
    /// * `options` - Engine and pool options.
    ///
    /// ## Errors
    /// * [`crate::TallyError::VocabConflict`] if a special id is also a vocabulary rank;
    /// * [`crate::TallyError::Regex`] if a pattern fails to compile.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn new<N, V>(
        name: N,
        vocab: V,
        spanning: TextSpanningConfig<T>,
        options: CodecOptions,
    ) -> TallyResult<Self>
    where
        N: Into<String>,
        V: Into<Arc<SpanMapVocab<T>>>,
    {
        let vocab = vocab.into();
        spanning.specials().validate_disjoint(&vocab)?;

        let spanner =
            TextSpanner::from_config(&spanning, options.max_pool(), options.backtrack_limit())?;
        let decoder = DictionaryDecoder::new(vocab.clone(), spanning.specials().clone());

        Ok(Self {
            name: name.into(),
            vocab,
            spanner,
            decoder,
            span_encoder_builder: options.span_encoder().span_encoder_builder(),
            options,
        })
    }

    /// The encoding name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [`EncodingFamily`] of this codec, if the name is a known family id.
    pub fn family(&self) -> Option<EncodingFamily> {
        EncodingFamily::from_str(&self.name).ok()
    }

    /// The options the codec was built with.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// The merge vocabulary.
    pub fn vocab(&self) -> &Arc<SpanMapVocab<T>> {
        &self.vocab
    }

    /// The number of merge vocabulary entries; excludes special tokens.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// The special tokens.
    pub fn special_tokens(&self) -> &SpecialVocab<T> {
        self.spanner.specials()
    }

    /// The compiled spanner.
    pub fn spanner(&self) -> &TextSpanner<T> {
        &self.spanner
    }

    /// Pre-tokenize text into chunks; special tokens are not recognized.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> TallyResult<Vec<&'a str>> {
        self.spanner.split(text)
    }

    /// Encode text to ids, and the text of each id.
    ///
    /// ## Errors
    /// * [`crate::TallyError::Regex`] if the pattern engine fails.
    pub fn encode(
        &self,
        text: &str,
    ) -> TallyResult<Encoded<T>> {
        let ids = self.encode_ids(text)?;
        let tokens = ids
            .iter()
            .map(|&id| match self.decoder.lookup_span(id) {
                Some(span) => String::from_utf8_lossy(span).into_owned(),
                None => String::new(),
            })
            .collect();
        Ok(Encoded { ids, tokens })
    }

    /// Encode text to ids.
    ///
    /// ## Errors
    /// * [`crate::TallyError::Regex`] if the pattern engine fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn encode_ids(
        &self,
        text: &str,
    ) -> TallyResult<Vec<T>> {
        let mut ids = Vec::with_capacity(text.len() / 3 + 1);
        self.encode_append(text, &mut ids)?;
        Ok(ids)
    }

    /// Encode text, appending ids to `ids`.
    ///
    /// On error, `ids` may hold a prefix of the encoding.
    pub fn encode_append(
        &self,
        text: &str,
        ids: &mut Vec<T>,
    ) -> TallyResult<()> {
        let mut span_encoder = (self.span_encoder_builder)();

        for segment in self.spanner.segments(text)? {
            match segment {
                Segment::Special { token, .. } => ids.push(token),
                Segment::Text(plain) => {
                    for chunk in self.spanner.split(plain)? {
                        span_encoder.encode_append_span(&self.vocab, chunk.as_bytes(), ids);
                    }
                }
            }
        }
        Ok(())
    }

    /// Count the ids [`Self::encode_ids`] would produce.
    ///
    /// Whole-chunk vocabulary hits are counted without merging;
    /// only compound chunks go through a scratch buffer.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn count(
        &self,
        text: &str,
    ) -> TallyResult<usize> {
        let mut span_encoder = (self.span_encoder_builder)();
        let mut scratch: Vec<T> = Vec::new();
        let mut count = 0;

        self.spanner.for_each_split_span(text, &mut |span_ref| {
            match span_ref {
                SpanRef::Special(_) => count += 1,
                SpanRef::Word(range) | SpanRef::Gap(range) => {
                    let span = text[range].as_bytes();
                    if self.vocab.lookup_token(span).is_some() {
                        count += 1;
                    } else {
                        scratch.clear();
                        span_encoder.encode_append_compound_span(&self.vocab, span, &mut scratch);
                        count += scratch.len();
                    }
                }
            }
            true
        })?;

        Ok(count)
    }

    /// Decode ids to their exact bytes.
    ///
    /// ## Errors
    /// * [`crate::TallyError::UnknownToken`] for an id in neither table.
    pub fn decode_bytes(
        &self,
        ids: &[T],
    ) -> TallyResult<Vec<u8>> {
        self.decoder.decode_to_bytes(ids)
    }

    /// Decode ids to text; invalid UTF-8 is replaced.
    ///
    /// ## Errors
    /// * [`crate::TallyError::UnknownToken`] for an id in neither table.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn decode(
        &self,
        ids: &[T],
    ) -> TallyResult<String> {
        self.decoder.decode_to_string(ids)
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroUsize;

    use once_cell::sync::Lazy;
    use proptest::{prelude::*, sample::Index};
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{
        TallyError,
        encoders::SpanEncoderSelector,
        encodings::{EncodingFamily, patterns::R50K_PATTERN},
        regex::RegexPattern,
        vocab::utility::testing::{build_test_span_vocab, build_test_special_vocab},
    };

    fn test_codec(selector: SpanEncoderSelector) -> Codec<u32> {
        let spanning = TextSpanningConfig::from_pattern(R50K_PATTERN)
            .with_specials(build_test_special_vocab());
        let options = CodecOptions::default()
            .with_span_encoder(selector)
            .with_max_pool(NonZeroUsize::new(2));
        Codec::new("test", build_test_span_vocab(), spanning, options).unwrap()
    }

    struct FamilyCodecs {
        family: EncodingFamily,
        specials: Vec<(String, usize)>,
        default: Codec<u32>,
        reference: Codec<u32>,
    }

    /// Every family's pattern and special layout, over the byte-complete test vocab.
    static FAMILY_CODECS: Lazy<Vec<FamilyCodecs>> = Lazy::new(|| {
        let vocab = Arc::new(build_test_span_vocab::<u32>());
        EncodingFamily::iter()
            .map(|family| {
                let config = family.config();
                let build = |selector| {
                    config
                        .build_codec(
                            vocab.clone(),
                            CodecOptions::default().with_span_encoder(selector),
                        )
                        .unwrap()
                };
                FamilyCodecs {
                    family,
                    specials: config.special_words(vocab.len()),
                    default: build(SpanEncoderSelector::Default),
                    reference: build(SpanEncoderSelector::Reference),
                }
            })
            .collect()
    });

    fn check_is_send_sync<S: Send + Sync>(_: &S) {}

    #[test]
    fn test_encode() {
        let codec = test_codec(SpanEncoderSelector::Default);
        check_is_send_sync(&codec);

        assert_eq!(codec.name(), "test");
        assert_eq!(codec.family(), None);
        assert_eq!(codec.vocab_size(), 256 + 19);
        assert_eq!(codec.special_tokens().len(), 3);

        let encoded = codec.encode("hello world").unwrap();
        assert_eq!(encoded.ids, vec![259, 265]);
        assert_eq!(encoded.tokens, vec!["hello", " world"]);

        let encoded = codec.encode("hellos<|endoftext|> world").unwrap();
        assert_eq!(encoded.ids, vec![259, 's' as u32, 1000, 265]);
        assert_eq!(encoded.tokens, vec!["hello", "s", "<|endoftext|>", " world"]);

        assert_eq!(codec.encode_ids("").unwrap(), Vec::<u32>::new());
        assert_eq!(codec.count("").unwrap(), 0);
    }

    #[test]
    fn test_engines_agree() {
        let default = test_codec(SpanEncoderSelector::Default);
        let reference = test_codec(SpanEncoderSelector::Reference);

        for text in [
            "hello   world",
            "it's the hello world, in an inn; 12345",
            "<|fim_prefix|>thethe<|fim_suffix|>",
        ] {
            assert_eq!(
                default.encode_ids(text).unwrap(),
                reference.encode_ids(text).unwrap()
            );
        }
    }

    #[test]
    fn test_determinism() {
        let codec = test_codec(SpanEncoderSelector::Default);
        let text = "the world is hello, in it's way";
        assert_eq!(codec.encode(text).unwrap(), codec.encode(text).unwrap());
    }

    #[test]
    fn test_decode_unknown_token() {
        let codec = test_codec(SpanEncoderSelector::Default);

        let err = codec.decode(&[259, 9_999_999]).unwrap_err();
        assert!(matches!(err, TallyError::UnknownToken { token: 9_999_999 }));
        assert_eq!(err.to_string(), "unknown token: 9999999");

        assert_eq!(codec.decode(&[259, 1001]).unwrap(), "hello<|fim_prefix|>");
    }

    #[test]
    fn test_decode_bytes_is_exact() {
        let codec = test_codec(SpanEncoderSelector::Default);

        let ids = codec.encode_ids("é").unwrap();
        assert_eq!(ids, vec![0xc3, 0xa9]);
        assert_eq!(codec.decode_bytes(&ids[..1]).unwrap(), vec![0xc3]);
        assert_eq!(codec.decode(&ids[..1]).unwrap(), "\u{fffd}");
    }

    #[test]
    fn test_special_collision_is_rejected() {
        let spanning = TextSpanningConfig::from_pattern(R50K_PATTERN)
            .with_special_words([("<|endoftext|>", 259u32)])
            .unwrap();
        let err = Codec::new(
            "bad",
            build_test_span_vocab(),
            spanning,
            CodecOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, TallyError::VocabConflict(_)));
    }

    #[test]
    fn test_engine_error_is_propagated() {
        let spanning = TextSpanningConfig::<u32>::from_pattern(RegexPattern::Fancy(
            r"(?i)(a|b|ab)*(?=c)|.".to_string(),
        ));
        let options = CodecOptions::default().with_backtrack_limit(1_000);
        let codec = Codec::new("pathological", build_test_span_vocab(), spanning, options).unwrap();

        let text = "ab".repeat(40);
        assert!(matches!(codec.encode(&text), Err(TallyError::Regex(_))));
        assert!(matches!(codec.count(&text), Err(TallyError::Regex(_))));

        // The codec stays usable.
        assert_eq!(codec.count("x").unwrap(), 1);
    }

    proptest! {
        #[test]
        fn test_round_trip_and_count(
            parts in proptest::collection::vec(
                prop_oneof![
                    "\\PC{0,16}",
                    "[ hel'o wrd\n]{0,16}",
                    Just("<|endoftext|>".to_string()),
                    Just("<|fim_suffix|>".to_string()),
                ],
                0..6,
            )
        ) {
            let codec = test_codec(SpanEncoderSelector::Default);
            let text = parts.concat();

            let ids = codec.encode_ids(&text).unwrap();
            prop_assert_eq!(codec.decode(&ids).unwrap(), text.clone());
            prop_assert_eq!(codec.count(&text).unwrap(), ids.len());

        }
        #[test]
        fn test_family_layouts_round_trip(
            parts in proptest::collection::vec(
                prop_oneof![
                    "\\PC{0,16}",
                    "[ hel'o wrd\n]{0,16}",
                    "[0-9 ]{1,8}",
                    "[ \t\r\n]{1,4}",
                ],
                1..5,
            ),
            picks in proptest::collection::vec(any::<Index>(), 0..3),
        ) {
            for codecs in FAMILY_CODECS.iter() {
                let mut text = String::new();
                let mut expected_specials = Vec::new();
                for (i, part) in parts.iter().enumerate() {
                    text.push_str(part);
                    if let Some(pick) = picks.get(i) {
                        let (word, id) = &codecs.specials[pick.index(codecs.specials.len())];
                        text.push_str(word);
                        expected_specials.push(*id as u32);
                    }
                }

                let ids = codecs.default.encode_ids(&text).unwrap();
                prop_assert_eq!(
                    &codecs.reference.encode_ids(&text).unwrap(),
                    &ids,
                    "{}", codecs.family
                );
                prop_assert_eq!(codecs.default.count(&text).unwrap(), ids.len());
                prop_assert_eq!(codecs.default.decode(&ids).unwrap(), text.clone());

                let special_ids: Vec<u32> = ids
                    .iter()
                    .copied()
                    .filter(|&id| codecs.default.special_tokens().lookup_span(id).is_some())
                    .collect();
                prop_assert_eq!(special_ids, expected_specials, "{}", codecs.family);
            }
        }
    }
}
