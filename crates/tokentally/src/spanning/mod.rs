//! # Text Spanning
//!
//! [`TextSpanningConfig`] describes the declarative needs of a family:
//! * `pattern` - the word/span split pattern.
//! * `specials` - a [`crate::vocab::SpecialVocab`] of control strings to handle out-of-band.
//!
//! [`TextSpanner`] is the compiled form; special words are recognized first
//! (leftmost, then longest), and the text between them is split by the pattern.

mod spanning_config;
mod text_spanner;

#[doc(inline)]
pub use spanning_config::*;
#[doc(inline)]
pub use text_spanner::*;
