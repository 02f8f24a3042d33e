//! # Encoder Test Utilities

use crate::{
    encoders::SpanEncoder,
    types::TokenType,
    vocab::utility::testing::{build_test_span_vocab, build_test_tie_vocab},
};

fn tok<T: TokenType>(x: usize) -> T {
    T::from_usize(x).unwrap()
}

/// Encode each chunk with a fresh buffer.
pub fn encode_chunk<T: TokenType, E: SpanEncoder<T> + ?Sized>(
    encoder: &mut E,
    vocab: &crate::vocab::SpanMapVocab<T>,
    chunk: &str,
) -> Vec<T> {
    let mut tokens = Vec::new();
    encoder.encode_append_span(vocab, chunk.as_bytes(), &mut tokens);
    tokens
}

/// Common [`SpanEncoder`] tests, over the synthetic test vocabularies.
pub fn common_span_encoder_tests<T, E>(mut encoder: E)
where
    T: TokenType,
    E: SpanEncoder<T>,
{
    let vocab = build_test_span_vocab::<T>();

    // Whole-chunk vocabulary hits.
    assert_eq!(encode_chunk(&mut encoder, &vocab, "hello"), vec![tok(259)]);
    assert_eq!(encode_chunk(&mut encoder, &vocab, " world"), vec![tok(265)]);
    assert_eq!(encode_chunk(&mut encoder, &vocab, "x"), vec![tok('x' as usize)]);
    assert_eq!(encode_chunk(&mut encoder, &vocab, ""), Vec::<T>::new());

    // he, ll, hell, hello; then nothing joins "s".
    assert_eq!(
        encode_chunk(&mut encoder, &vocab, "hellos"),
        vec![tok(259), tok('s' as usize)]
    );

    // or, wor, ld, world.
    let mut tokens = Vec::new();
    encoder.encode_append_compound_span(&vocab, b"world", &mut tokens);
    assert_eq!(tokens, vec![tok(263)]);

    assert_eq!(
        encode_chunk(&mut encoder, &vocab, "thethe"),
        vec![tok(273), tok(273)]
    );

    // Non-text bytes fall to the single-byte floor.
    let mut tokens = Vec::new();
    encoder.encode_append_span(&vocab, &[0xff, 0x00, 0xfe], &mut tokens);
    assert_eq!(tokens, vec![tok(0xff), tok(0x00), tok(0xfe)]);

    // Appends; never clears.
    let mut tokens = vec![tok(7)];
    encoder.encode_append_span(&vocab, b"inin", &mut tokens);
    assert_eq!(tokens, vec![tok(7), tok(266), tok(266)]);

    // Equal ranks merge leftmost first.
    let tie_vocab = build_test_tie_vocab::<T>();
    assert_eq!(
        encode_chunk(&mut encoder, &tie_vocab, "aaa"),
        vec![tok(256), tok('a' as usize)]
    );
    assert_eq!(
        encode_chunk(&mut encoder, &tie_vocab, "aaaaa"),
        vec![tok(256), tok(256), tok('a' as usize)]
    );
}
