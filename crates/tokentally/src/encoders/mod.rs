//! # BPE Merge Engines
//!
//! A [`SpanEncoder`] turns one pre-tokenized chunk into ranks.
//!
//! Merging follows the `tiktoken` rule: a pair of adjacent parts is ranked by
//! the vocabulary rank of their concatenated bytes; the lowest rank merges
//! first, and equal ranks merge leftmost first.
//!
//! * [`MergeScanSpanEncoder`] - the reference; rescans all pairs after each merge.
//! * [`PriorityMergeSpanEncoder`] - a min-heap over the live pairs.
//!
//! Both produce identical output; select with [`SpanEncoderSelector`].

mod merge_scan_encoder;
mod priority_merge_encoder;
mod span_encoder;
mod span_encoder_selector;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

#[doc(inline)]
pub use merge_scan_encoder::*;
#[doc(inline)]
pub use priority_merge_encoder::*;
#[doc(inline)]
pub use span_encoder::*;
#[doc(inline)]
pub use span_encoder_selector::*;
