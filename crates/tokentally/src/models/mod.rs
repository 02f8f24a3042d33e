//! # Model Resolution
//!
//! Maps free-form model names to [`crate::encodings::EncodingFamily`]s,
//! and corrects counts for models whose tokenizer is approximated.
//!
//! ```rust
//! use tokentally::{encodings::EncodingFamily, models::ModelResolver};
//!
//! let resolver = ModelResolver::default();
//! assert_eq!(resolver.resolve("gpt-4o").unwrap(), EncodingFamily::O200kBase);
//! assert_eq!(resolver.resolve("llama3.2:3b").unwrap(), EncodingFamily::Llama);
//! assert!(resolver.resolve("not-a-model").is_err());
//! ```

mod model_resolver;
pub mod tables;

#[doc(inline)]
pub use model_resolver::{ModelResolver, PrefixTable};
