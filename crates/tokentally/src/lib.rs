//! # `tokentally` BPE Codecs and Token Counting
//!
//! `tokentally` encodes, decodes and counts tokens with `tiktoken` compatible
//! byte-pair encodings, and maps model names to the encoding they use.
//!
//! See:
//! * [`codec`] for the [`Codec`]: encode, decode and count.
//! * [`encodings`] for the supported families and the exactly-once [`encodings::EncodingRegistry`].
//! * [`models`] to resolve model names, with count correction.
//! * [`vocab`] to manage token vocabularies and vocab io.
//! * [`encoders`] and [`decoders`] for the merge engines and the inverse lookup.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``client``
//! * ``rayon``
//!
//! #### feature: ``client``
//!
//! * ``download``
//! * ``std``
//!
//! The default client loads vocabularies and runs the codecs.
//!
//! #### feature: ``download``
//!
//! * ``tokentally-disk-cache``
//!
//! The download feature fetches vendor vocabularies and caches them on disk.
//! Without it, vocabularies are read from ``TOKENTALLY_VOCAB_DIR``.
//!
//! #### feature: ``ahash`` / ``foldhash``
//!
//! Swaps all HashMap/HashSet implementations; see [`types::TtHashMap`].
//! If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``rayon``
//!
//! Batch wrappers in [`rayon`].
//!
//! #### feature: ``tracing``
//!
//! A number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Counting Tokens
//!
//! ```rust,no_run
//! fn example() -> tokentally::TallyResult<()> {
//!     let codec = tokentally::get_encoding("o200k_base")?;
//!     let encoded = codec.encode("hello world")?;
//!     assert_eq!(encoded.ids, vec![24912, 2375]);
//!     assert_eq!(codec.decode(&encoded.ids)?, "hello world");
//!
//!     let n = tokentally::count_for_model("claude-sonnet-4-20250514", "hello world")?;
//!     println!("{n}");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

#[cfg(feature = "download")]
#[doc(inline)]
pub use tokentally_disk_cache as disk_cache;

pub mod codec;
pub mod concurrency;
pub mod decoders;
pub mod encoders;
pub mod encodings;
pub mod errors;
pub mod models;
pub mod regex;
pub mod spanning;
pub mod types;
pub mod vocab;

use std::sync::Arc;

use once_cell::sync::Lazy;

#[doc(inline)]
pub use codec::{Codec, CodecOptions, Encoded};
#[doc(inline)]
pub use encodings::{EncodingFamily, EncodingRegistry};
#[doc(inline)]
pub use errors::{TallyError, TallyResult};
#[doc(inline)]
pub use models::ModelResolver;
#[doc(inline)]
pub use types::Rank;

static DEFAULT_RESOLVER: Lazy<ModelResolver> = Lazy::new(ModelResolver::default);

/// Get the shared codec for a family id, such as "`cl100k_base`".
///
/// Built on first use by the default registry.
///
/// ## Errors
/// * [`TallyError::EncodingNotSupported`] for an unknown id;
/// * vocabulary load or build errors.
pub fn get_encoding(name: &str) -> TallyResult<Arc<Codec<Rank>>> {
    encodings::default_registry().get_by_name(name)
}

/// Get the shared codec for a family.
///
/// ## Errors
/// * vocabulary load or build errors.
pub fn get_codec(family: EncodingFamily) -> TallyResult<Arc<Codec<Rank>>> {
    encodings::default_registry().get(family)
}

/// Get the shared codec for a model name.
///
/// ## Errors
/// * [`TallyError::ModelNotSupported`] if the model does not resolve;
/// * vocabulary load or build errors.
pub fn for_model(model: &str) -> TallyResult<Arc<Codec<Rank>>> {
    DEFAULT_RESOLVER.codec_for(encodings::default_registry(), model)
}

/// Count the tokens of `text` for a model, with ratio correction.
///
/// ## Errors
/// As [`for_model`], plus [`TallyError::Regex`] from the pattern engine.
pub fn count_for_model(
    model: &str,
    text: &str,
) -> TallyResult<usize> {
    DEFAULT_RESOLVER.count(encodings::default_registry(), model, text)
}
