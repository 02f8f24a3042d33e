//! # Priority-merge [`SpanEncoder`].
//!
//! A binary min-heap of candidate merges over a linked list of parts;
//! ``O(n log n)`` per chunk, against the ``O(n^2)`` of [`super::MergeScanSpanEncoder`].

use core::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{encoders::SpanEncoder, types::TokenType, vocab::SpanMapVocab};

const NONE: usize = usize::MAX;

/// A part of the chunk, indexed by its start byte offset.
///
/// The right neighbor of a live part always starts at its `end`.
#[derive(Debug, Clone, Copy)]
struct Node<T> {
    token: T,
    end: usize,
    prev: usize,
    live: bool,
}

/// Heap entry representing a potential merge of ``span[left..right_end]``.
///
/// Ordered by (rank, `left`) so the lowest-rank, leftmost pair is popped first.
/// `mid` and `right_end` are stored for O(1) stale-entry detection.
#[derive(Debug, Eq)]
struct MergeEntry<T: Ord> {
    rank: T,
    left: usize,
    mid: usize,
    right_end: usize,
}

impl<T: Ord> PartialEq for MergeEntry<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.rank == other.rank && self.left == other.left
    }
}

impl<T: Ord> Ord for MergeEntry<T> {
    fn cmp(
        &self,
        other: &Self,
    ) -> core::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.left.cmp(&other.left))
    }
}

impl<T: Ord> PartialOrd for MergeEntry<T> {
    fn partial_cmp(
        &self,
        other: &Self,
    ) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A [`SpanEncoder`] using a binary min-heap with a linked list of parts.
///
/// Output is identical to [`super::MergeScanSpanEncoder`].
pub struct PriorityMergeSpanEncoder<T: TokenType> {
    nodes: Vec<Node<T>>,
    heap: BinaryHeap<Reverse<MergeEntry<T>>>,
}

impl<T: TokenType> Default for PriorityMergeSpanEncoder<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: TokenType> core::fmt::Debug for PriorityMergeSpanEncoder<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("PriorityMergeSpanEncoder").finish()
    }
}

impl<T: TokenType> Clone for PriorityMergeSpanEncoder<T> {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl<T: TokenType> PriorityMergeSpanEncoder<T> {
    fn push_candidate(
        &mut self,
        vocab: &SpanMapVocab<T>,
        span: &[u8],
        left: usize,
    ) {
        let mid = self.nodes[left].end;
        if mid >= span.len() {
            return;
        }
        let right_end = self.nodes[mid].end;
        if let Some(rank) = vocab.lookup_token(&span[left..right_end]) {
            self.heap.push(Reverse(MergeEntry {
                rank,
                left,
                mid,
                right_end,
            }));
        }
    }

    fn is_live_pair(
        &self,
        entry: &MergeEntry<T>,
    ) -> bool {
        let left = &self.nodes[entry.left];
        if !left.live || left.end != entry.mid {
            return false;
        }
        let right = &self.nodes[entry.mid];
        right.live && right.end == entry.right_end
    }
}

impl<T: TokenType> SpanEncoder<T> for PriorityMergeSpanEncoder<T> {
    fn encode_append_compound_span(
        &mut self,
        vocab: &SpanMapVocab<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) {
        let n = span.len();
        let byte_vocab = vocab.byte_vocab();

        if n < 2 {
            byte_vocab.append_tokens(span, tokens);
            return;
        }

        self.nodes.clear();
        self.nodes.reserve(n);
        for (i, &byte) in span.iter().enumerate() {
            self.nodes.push(Node {
                token: byte_vocab.get_token(byte),
                end: i + 1,
                prev: if i == 0 { NONE } else { i - 1 },
                live: true,
            });
        }

        self.heap.clear();
        for i in 0..(n - 1) {
            self.push_candidate(vocab, span, i);
        }

        while let Some(Reverse(entry)) = self.heap.pop() {
            if !self.is_live_pair(&entry) {
                continue;
            }

            // Merge: left absorbs right.
            let li = entry.left;
            self.nodes[entry.mid].live = false;
            self.nodes[li].token = entry.rank;
            self.nodes[li].end = entry.right_end;
            if entry.right_end < n {
                self.nodes[entry.right_end].prev = entry.left;
            }

            let prev = self.nodes[li].prev;
            if prev != NONE {
                self.push_candidate(vocab, span, prev);
            }
            self.push_candidate(vocab, span, entry.left);
        }

        let mut idx = 0usize;
        while idx < n {
            let node = &self.nodes[idx];
            tokens.push(node.token);
            idx = node.end;
        }
    }
}
