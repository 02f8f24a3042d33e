//! # Token Decoders
//!
//! Decoding is a table walk: each id maps to its vocabulary bytes, or to its
//! special-token literal; ids in neither table are reported, not skipped.

mod dictionary_decoder;
mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::*;
#[doc(inline)]
pub use token_decoder::*;
