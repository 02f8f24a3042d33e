//! # Vocabulary
//!
//! This module provides the vocabulary tables and their io.
//!
//! ## Byte Vocabulary
//!
//! The `tiktoken` vocabularies do not rank bytes by ordinal value, so we
//! explicitly map between byte values and token ranks:
//! * [`ByteMapVocab`].
//!
//! ## Merge Vocabulary
//!
//! [`SpanMapVocab`] holds the ranked ``{ Vec<u8> -> T }`` merge table of a family,
//! and its inverse for decoding.
//!
//! ## Special Vocabulary
//!
//! [`SpecialVocab`] holds the literal control strings of a family; their ids
//! never collide with a merge rank.
pub mod io;

pub mod byte_vocab;
pub mod span_vocab;
pub mod special_vocab;
pub mod utility;
pub mod vocab_types;

#[doc(inline)]
pub use byte_vocab::ByteMapVocab;
#[doc(inline)]
pub use span_vocab::SpanMapVocab;
#[doc(inline)]
pub use special_vocab::SpecialVocab;
#[doc(inline)]
pub use vocab_types::{ByteTokenArray, SpanTokenMap, TokenByteMap, TokenSpanMap, VocabIndex};
