//! # Regex Utilities
//!
//! Every pre-tokenizer pattern in use needs lookahead (``\s+(?!\S)``), which the
//! [`regex`] crate does not provide; those run on [`fancy_regex`]. Exact-match
//! unions (special tokens) run on the plain [`regex`] engine.
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern which needs regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//!
//! [`RegexWrapper::find_iter`] yields `Result` items, since backtracking
//! matches can fail at match time.

mod exact_match_union;
mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use exact_match_union::exact_match_union_regex_pattern;
#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
