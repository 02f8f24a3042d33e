//! # Codec
//!
//! [`Codec`] composes the vocabulary, the spanner, a merge engine and the
//! decoder of one encoding into `encode`/`decode`/`count`.

mod codec_options;
mod token_codec;

#[doc(inline)]
pub use codec_options::*;
#[doc(inline)]
pub use token_codec::*;
