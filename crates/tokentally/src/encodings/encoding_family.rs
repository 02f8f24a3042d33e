//! # Encoding Families

use std::sync::Arc;

use crate::{
    codec::{Codec, CodecOptions},
    encodings::{
        patterns::{
            CL100K_PATTERN,
            GPT2_PATTERN,
            LLAMA3_PATTERN,
            O200K_PATTERN,
            P50K_PATTERN,
            R50K_PATTERN,
        },
        resources::{
            CL100K_BASE_TIKTOKEN,
            ConstKeyedResource,
            LLAMA3_TOKENIZER_MODEL,
            O200K_BASE_TIKTOKEN,
            P50K_BASE_TIKTOKEN,
            R50K_BASE_TIKTOKEN,
        },
        specials::{
            CL100K_SPECIALS,
            O200K_SPECIALS,
            P50K_BASE_SPECIALS,
            P50K_EDIT_SPECIALS,
            R50K_SPECIALS,
            llama3_specials,
        },
    },
    errors::{TallyError, TallyResult},
    regex::ConstRegexPattern,
    spanning::TextSpanningConfig,
    types::TokenType,
    vocab::{SpanMapVocab, SpecialVocab, VocabIndex},
};

/// The supported encoding families.
///
/// Parses from and prints as the family id, e.g. "`cl100k_base`".
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
    strum_macros::IntoStaticStr
)]
#[non_exhaustive]
pub enum EncodingFamily {
    /// "`o200k_base`"; GPT-4o, o-series and GPT-5 models.
    #[strum(serialize = "o200k_base")]
    O200kBase,

    /// "`cl100k_base`"; GPT-4 and GPT-3.5; the Anthropic approximation.
    #[strum(serialize = "cl100k_base")]
    Cl100kBase,

    /// "`r50k_base`"; GPT-3 models, and the generic fallback.
    #[strum(serialize = "r50k_base")]
    R50kBase,

    /// "`p50k_base`"; Codex models.
    #[strum(serialize = "p50k_base")]
    P50kBase,

    /// "`p50k_edit`"; edit models.
    #[strum(serialize = "p50k_edit")]
    P50kEdit,

    /// "`llama`"; Llama 3 and derived models.
    #[strum(serialize = "llama")]
    Llama,

    /// "`gpt2`"; the r50k vocabulary under the original GPT-2 pattern.
    #[strum(serialize = "gpt2")]
    Gpt2,
}

impl EncodingFamily {
    /// The family id.
    pub fn id(&self) -> &'static str {
        self.into()
    }

    /// The static configuration of this family.
    pub fn config(&self) -> EncodingConfig {
        use EncodingFamily::*;
        let (resource, pattern, specials) = match self {
            O200kBase => (
                O200K_BASE_TIKTOKEN,
                O200K_PATTERN,
                SpecialsLayout::Fixed(O200K_SPECIALS),
            ),
            Cl100kBase => (
                CL100K_BASE_TIKTOKEN,
                CL100K_PATTERN,
                SpecialsLayout::Fixed(CL100K_SPECIALS),
            ),
            R50kBase => (
                R50K_BASE_TIKTOKEN,
                R50K_PATTERN,
                SpecialsLayout::Fixed(R50K_SPECIALS),
            ),
            P50kBase => (
                P50K_BASE_TIKTOKEN,
                P50K_PATTERN,
                SpecialsLayout::Fixed(P50K_BASE_SPECIALS),
            ),
            P50kEdit => (
                P50K_BASE_TIKTOKEN,
                P50K_PATTERN,
                SpecialsLayout::Fixed(P50K_EDIT_SPECIALS),
            ),
            Llama => (
                LLAMA3_TOKENIZER_MODEL,
                LLAMA3_PATTERN,
                SpecialsLayout::Llama3Reserved,
            ),
            Gpt2 => (
                R50K_BASE_TIKTOKEN,
                GPT2_PATTERN,
                SpecialsLayout::Fixed(R50K_SPECIALS),
            ),
        };
        EncodingConfig {
            family: *self,
            resource,
            pattern,
            specials,
        }
    }
}

/// How a family lays out its special token ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialsLayout {
    /// A fixed ``(word, id)`` table.
    Fixed(&'static [(&'static str, usize)]),

    /// The Llama 3 reserved region, starting at the vocabulary length.
    Llama3Reserved,
}

/// The data which defines an encoding family: vocabulary source,
/// pattern and special tokens.
///
/// Every family shares the same algorithms; they differ only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingConfig {
    /// The family described.
    pub family: EncodingFamily,

    /// The vocabulary file.
    pub resource: ConstKeyedResource,

    /// The pre-tokenizer pattern.
    pub pattern: ConstRegexPattern,

    /// The special token layout.
    pub specials: SpecialsLayout,
}

impl EncodingConfig {
    /// The special words and ids for a vocabulary of `vocab_len` entries.
    pub fn special_words(
        &self,
        vocab_len: usize,
    ) -> Vec<(String, usize)> {
        match self.specials {
            SpecialsLayout::Fixed(words) => words
                .iter()
                .map(|&(word, id)| (word.to_string(), id))
                .collect(),
            SpecialsLayout::Llama3Reserved => llama3_specials(vocab_len),
        }
    }

    /// Build the spanning config for a vocabulary of `vocab_len` entries.
    ///
    /// ## Errors
    /// * [`TallyError::VocabSizeOverflow`] if an id does not fit `T`;
    /// * the [`SpecialVocab::add_str_word`] errors.
    pub fn spanning_config<T: TokenType>(
        &self,
        vocab_len: usize,
    ) -> TallyResult<TextSpanningConfig<T>> {
        let mut specials = SpecialVocab::<T>::default();
        for (word, id) in self.special_words(vocab_len) {
            let token = T::from_usize(id).ok_or(TallyError::VocabSizeOverflow { size: id + 1 })?;
            specials.add_str_word(&word, token)?;
        }
        Ok(TextSpanningConfig::from_pattern(self.pattern).with_specials(specials))
    }

    /// Bind a loaded vocabulary to this family.
    ///
    /// ## Errors
    /// As [`Self::spanning_config`] and [`Codec::new`].
    pub fn build_codec<T: TokenType>(
        &self,
        vocab: Arc<SpanMapVocab<T>>,
        options: CodecOptions,
    ) -> TallyResult<Codec<T>> {
        let spanning = self.spanning_config::<T>(vocab.len())?;
        Codec::new(self.family.id(), vocab, spanning, options)
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;
    use crate::vocab::utility::testing::build_test_span_vocab;

    #[test]
    fn test_family_ids() {
        let ids = EncodingFamily::iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "o200k_base",
                "cl100k_base",
                "r50k_base",
                "p50k_base",
                "p50k_edit",
                "llama",
                "gpt2"
            ]
        );
        for family in EncodingFamily::iter() {
            assert_eq!(EncodingFamily::from_str(family.id()).unwrap(), family);
            assert_eq!(family.config().family, family);
        }
        assert!(EncodingFamily::from_str("x50k_base").is_err());
    }

    #[test]
    fn test_shared_resources() {
        use EncodingFamily::*;
        assert_eq!(P50kBase.config().resource, P50kEdit.config().resource);
        assert_eq!(R50kBase.config().resource, Gpt2.config().resource);
        assert_ne!(R50kBase.config().pattern, Gpt2.config().pattern);
        assert_ne!(
            P50kBase.config().special_words(0),
            P50kEdit.config().special_words(0)
        );
    }

    #[test]
    fn test_llama_specials_follow_vocab() {
        let config = EncodingFamily::Llama.config();
        let words = config.special_words(275);
        assert_eq!(words.len(), 256);
        assert_eq!(words[0], ("<|begin_of_text|>".to_string(), 275));

        let spanning = config.spanning_config::<u32>(275).unwrap();
        assert_eq!(spanning.specials().lookup_token(b"<|eot_id|>"), Some(284));
    }

    #[test]
    fn test_spanning_config_overflow() {
        let config = EncodingFamily::Cl100kBase.config();
        assert!(matches!(
            config.spanning_config::<u16>(0),
            Err(TallyError::VocabSizeOverflow { size: 100258 })
        ));
    }

    #[test]
    fn test_build_codec() {
        let vocab = Arc::new(build_test_span_vocab::<u32>());

        let codec = EncodingFamily::Llama
            .config()
            .build_codec(vocab.clone(), CodecOptions::default())
            .unwrap();
        assert_eq!(codec.name(), "llama");
        assert_eq!(codec.family(), Some(EncodingFamily::Llama));
        assert_eq!(codec.special_tokens().len(), 256);

        let ids = codec.encode_ids("hello<|eot_id|>").unwrap();
        assert_eq!(ids, vec![259, 284]);
        assert_eq!(codec.decode(&ids).unwrap(), "hello<|eot_id|>");

        // endoftext at 50256 is outside the tiny test vocab; no collision.
        let codec = EncodingFamily::Gpt2
            .config()
            .build_codec(vocab, CodecOptions::default())
            .unwrap();
        assert_eq!(codec.name(), "gpt2");
    }
}
