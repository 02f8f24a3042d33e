//! # Encoding Families
//!
//! The per-family data (vocabulary resource, pattern, special tokens),
//! the loaders which fetch vocabulary files, and the [`EncodingRegistry`]
//! which builds each family's codec exactly once.
//!
//! ## Loading A Codec
//!
//! ```rust,no_run
//! use tokentally::encodings::{EncodingFamily, EncodingRegistry, VocabDirLoader};
//!
//! fn example() -> tokentally::TallyResult<()> {
//!     let registry = EncodingRegistry::new(VocabDirLoader::new("/data/vocabs"));
//!     let codec = registry.get(EncodingFamily::Cl100kBase)?;
//!     assert_eq!(codec.encode_ids("hello world")?, vec![15339, 1917]);
//!     Ok(())
//! }
//! ```

mod encoding_family;
pub mod loaders;
pub mod patterns;
pub mod registry;
pub mod resources;
pub mod specials;

#[doc(inline)]
pub use encoding_family::{EncodingConfig, EncodingFamily, SpecialsLayout};
#[doc(inline)]
pub use loaders::{DefaultResourceLoader, ResourceLoader, TOKENTALLY_VOCAB_DIR, VocabDirLoader};
#[cfg(feature = "download")]
#[doc(inline)]
pub use loaders::DiskCacheLoader;
#[doc(inline)]
pub use registry::{EncodingRegistry, default_registry};
