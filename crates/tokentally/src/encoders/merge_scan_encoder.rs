//! # Rescanning [`SpanEncoder`].

use core::ops::Range;

use crate::{encoders::SpanEncoder, types::TokenType, vocab::SpanMapVocab};

/// The reference [`SpanEncoder`].
///
/// Keeps the chunk as a buffer of ``(byte range, rank)`` parts; each round
/// scans every adjacent pair for the lowest rank and merges it.
/// ``O(n^2)`` per chunk.
#[derive(Default, Debug, Clone)]
pub struct MergeScanSpanEncoder<T: TokenType> {
    working: Vec<(Range<usize>, T)>,
}

impl<T: TokenType> SpanEncoder<T> for MergeScanSpanEncoder<T> {
    fn encode_append_compound_span(
        &mut self,
        vocab: &SpanMapVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let byte_vocab = vocab.byte_vocab();

        self.working.clear();
        self.working.extend(
            span.iter()
                .enumerate()
                .map(|(i, &b)| (i..i + 1, byte_vocab.get_token(b))),
        );

        while self.working.len() > 1 {
            let mut best: Option<(T, usize)> = None;
            for (idx, w) in self.working.windows(2).enumerate() {
                let Some(rank) = vocab.lookup_token(&span[w[0].0.start..w[1].0.end]) else {
                    continue;
                };
                // Strict `<`; the leftmost of equal ranks is kept.
                if best.is_none_or(|(best_rank, _)| rank < best_rank) {
                    best = Some((rank, idx));
                }
            }

            let Some((rank, idx)) = best else {
                break;
            };

            let end = self.working[idx + 1].0.end;
            self.working[idx] = (self.working[idx].0.start..end, rank);
            self.working.remove(idx + 1);
        }

        tokens.extend(self.working.iter().map(|(_, token)| *token));
    }
}
