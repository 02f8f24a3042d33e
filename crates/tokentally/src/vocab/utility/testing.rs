//! # Vocab Testing Tools

use crate::{
    types::TokenType,
    vocab::{ByteMapVocab, SpanMapVocab, SpecialVocab},
};

/// Merge spans of [`build_test_span_vocab`], in rank order from 256.
///
/// Every multi-byte span is reachable by merging two lower-ranked spans.
pub const TEST_MERGES: &[&str] = &[
    "he", "ll", "hell", "hello", "or", "wor", "ld", "world", " w", " world", "in", "an", "it",
    "'s", " h", " hello", "th", "the", " the",
];

/// Create a byte vocab where byte `b` is token `b + shift`.
pub fn build_test_shift_byte_vocab<T: TokenType>(shift: usize) -> ByteMapVocab<T> {
    let table = (0..256)
        .map(|b| T::from_usize(b + shift).unwrap())
        .collect::<Vec<_>>();
    ByteMapVocab::try_from_byte_to_token(&table).unwrap()
}

/// Create a test [`SpanMapVocab`].
///
/// The 256 identity bytes, then [`TEST_MERGES`] ranked from 256.
pub fn build_test_span_vocab<T: TokenType>() -> SpanMapVocab<T> {
    let bytes = (0..256usize).map(|b| (vec![b as u8], T::from_usize(b).unwrap()));
    let merges = TEST_MERGES
        .iter()
        .enumerate()
        .map(|(i, s)| (s.as_bytes().to_vec(), T::from_usize(256 + i).unwrap()));

    SpanMapVocab::from_pairs(bytes.chain(merges)).unwrap()
}

/// Create a vocab with the single merge ``"aa"``, for rank tie tests.
///
/// On ``"aaa"`` both pairs share a rank; the leftmost merge gives ``[aa, a]``.
pub fn build_test_tie_vocab<T: TokenType>() -> SpanMapVocab<T> {
    let bytes = (0..256usize).map(|b| (vec![b as u8], T::from_usize(b).unwrap()));
    let merges = core::iter::once((b"aa".to_vec(), T::from_usize(256).unwrap()));

    SpanMapVocab::from_pairs(bytes.chain(merges)).unwrap()
}

/// Create a test [`SpecialVocab`], with ids above [`build_test_span_vocab`].
pub fn build_test_special_vocab<T: TokenType>() -> SpecialVocab<T> {
    SpecialVocab::from_words([
        ("<|endoftext|>", T::from_usize(1000).unwrap()),
        ("<|fim_prefix|>", T::from_usize(1001).unwrap()),
        ("<|fim_suffix|>", T::from_usize(1002).unwrap()),
    ])
    .unwrap()
}
