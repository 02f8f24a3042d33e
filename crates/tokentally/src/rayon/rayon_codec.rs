//! # Parallel Codec

use std::sync::Arc;

use rayon::prelude::*;

use crate::{codec::Codec, errors::TallyResult, types::TokenType};

/// Batch-Level Parallel Codec Wrapper.
///
/// Runs batch items on the ``rayon`` pool; results keep input order.
/// The first error in the batch is returned.
#[derive(Debug, Clone)]
pub struct ParallelRayonCodec<T: TokenType> {
    /// Wrapped codec.
    pub inner: Arc<Codec<T>>,
}

impl<T: TokenType> From<Codec<T>> for ParallelRayonCodec<T> {
    fn from(codec: Codec<T>) -> Self {
        Self::new(codec)
    }
}

impl<T: TokenType> ParallelRayonCodec<T> {
    /// Wrap a codec.
    pub fn new<C>(inner: C) -> Self
    where
        C: Into<Arc<Codec<T>>>,
    {
        Self {
            inner: inner.into(),
        }
    }

    /// Encode each text to ids.
    ///
    /// ## Errors
    /// As [`Codec::encode_ids`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn encode_batch<S>(
        &self,
        batch: &[S],
    ) -> TallyResult<Vec<Vec<T>>>
    where
        S: AsRef<str> + Sync,
    {
        batch
            .par_iter()
            .map(|text| self.inner.encode_ids(text.as_ref()))
            .collect()
    }

    /// Count the ids of each text.
    ///
    /// ## Errors
    /// As [`Codec::count`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn count_batch<S>(
        &self,
        batch: &[S],
    ) -> TallyResult<Vec<usize>>
    where
        S: AsRef<str> + Sync,
    {
        batch
            .par_iter()
            .map(|text| self.inner.count(text.as_ref()))
            .collect()
    }

    /// Decode each id sequence to text.
    ///
    /// ## Errors
    /// As [`Codec::decode`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn decode_batch(
        &self,
        batch: &[Vec<T>],
    ) -> TallyResult<Vec<String>> {
        batch
            .par_iter()
            .map(|ids| self.inner.decode(ids))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        TallyError,
        codec::CodecOptions,
        encodings::patterns::CL100K_PATTERN,
        spanning::TextSpanningConfig,
        vocab::utility::testing::{build_test_span_vocab, build_test_special_vocab},
    };

    fn check_is_send<S: Send>(_: &S) {}
    fn check_is_sync<S: Sync>(_: &S) {}

    fn build_codec() -> ParallelRayonCodec<u32> {
        let spanning = TextSpanningConfig::from_pattern(CL100K_PATTERN)
            .with_specials(build_test_special_vocab());
        let codec = Codec::new(
            "test",
            build_test_span_vocab::<u32>(),
            spanning,
            CodecOptions::default(),
        )
        .unwrap();
        codec.into()
    }

    #[test]
    fn test_batches() {
        let codec = build_codec();
        check_is_send(&codec);
        check_is_sync(&codec);

        let samples = vec![
            "hello world",
            "hello san francisco<|endoftext|>",
            "it's not the heat, it's the salt",
            "",
        ];

        let ids = codec.encode_batch(&samples).unwrap();
        assert_eq!(ids.len(), samples.len());
        for (sample, ids) in samples.iter().zip(ids.iter()) {
            assert_eq!(ids, &codec.inner.encode_ids(sample).unwrap());
        }
        assert_eq!(ids[0], vec![259, 265]);
        assert!(ids[3].is_empty());

        let counts = codec.count_batch(&samples).unwrap();
        assert_eq!(
            counts,
            ids.iter().map(Vec::len).collect::<Vec<_>>()
        );

        assert_eq!(codec.decode_batch(&ids).unwrap(), samples);
    }

    #[test]
    fn test_decode_batch_error() {
        let codec = build_codec();
        assert!(matches!(
            codec.decode_batch(&[vec![259], vec![999_999]]),
            Err(TallyError::UnknownToken { token: 999_999 })
        ));
    }
}
