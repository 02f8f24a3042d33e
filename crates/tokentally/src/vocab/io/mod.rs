//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use tokentally::vocab::{SpanMapVocab, io::load_tiktoken_vocab_path};
//!
//! fn example() -> tokentally::TallyResult<SpanMapVocab<u32>> {
//!     load_tiktoken_vocab_path("o200k_base.tiktoken")
//! }
//! ```

mod tiktoken_io;

#[doc(inline)]
pub use tiktoken_io::*;
