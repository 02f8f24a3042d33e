//! # Encoding Registry
//!
//! Builds each family's [`Codec`] at most once, on first use.
//!
//! ## Style Hints
//!
//! Instance names should prefer `registry`.

use core::str::FromStr;
use std::{io::BufRead, sync::Arc};

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::Mutex;
use strum::IntoEnumIterator;

use crate::{
    codec::{Codec, CodecOptions},
    encodings::{
        EncodingFamily,
        loaders::{DefaultResourceLoader, ResourceLoader},
        resources::ConstKeyedResource,
    },
    errors::{TallyError, TallyResult},
    types::{Rank, TtHashMap, TtHashSet},
    vocab::{
        SpanMapVocab,
        VocabIndex,
        io::{load_tiktoken_vocab_path, read_tiktoken_span_map},
    },
};

/// A set of lazily built, shared codecs; one per [`EncodingFamily`].
///
/// Concurrent first use of a family builds it once; other callers block
/// until it is ready. A failed build leaves the family unbuilt, so a later
/// call may retry.
pub struct EncodingRegistry {
    options: CodecOptions,
    loader: Box<dyn ResourceLoader + Send + Sync>,

    /// Vocabularies by resource file name; families may share a file.
    ///
    /// The map lock is only held to find a file's cell.
    vocabs: Mutex<TtHashMap<&'static str, Arc<OnceCell<Arc<SpanMapVocab<Rank>>>>>>,

    injected: Mutex<Injected>,

    codecs: TtHashMap<EncodingFamily, OnceCell<Arc<Codec<Rank>>>>,
}

/// Vocabularies provided through [`EncodingRegistry::insert_vocab`].
#[derive(Default)]
struct Injected {
    vocabs: TtHashMap<EncodingFamily, Arc<SpanMapVocab<Rank>>>,

    /// Families with a build in flight or done; these refuse injection.
    claimed: TtHashSet<EncodingFamily>,
}

impl core::fmt::Debug for EncodingRegistry {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        let built = EncodingFamily::iter()
            .filter(|&family| self.is_built(family))
            .collect::<Vec<_>>();
        f.debug_struct("EncodingRegistry")
            .field("options", &self.options)
            .field("built", &built)
            .finish()
    }
}

impl Default for EncodingRegistry {
    fn default() -> Self {
        Self::new(DefaultResourceLoader::default())
    }
}

impl EncodingRegistry {
    /// Create a registry which fetches vocabularies with `loader`.
    pub fn new<L>(loader: L) -> Self
    where
        L: ResourceLoader + Send + Sync + 'static,
    {
        Self {
            options: CodecOptions::default(),
            loader: Box::new(loader),
            vocabs: Mutex::new(TtHashMap::default()),
            injected: Mutex::new(Injected::default()),
            codecs: EncodingFamily::iter()
                .map(|family| (family, OnceCell::new()))
                .collect(),
        }
    }

    /// Set the options every codec is built with.
    pub fn with_options(
        self,
        options: CodecOptions,
    ) -> Self {
        Self { options, ..self }
    }

    /// The options every codec is built with.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Has the family's codec been built?
    pub fn is_built(
        &self,
        family: EncodingFamily,
    ) -> bool {
        self.codecs
            .get(&family)
            .is_some_and(|cell| cell.get().is_some())
    }

    /// Get the codec for a family, building it on first use.
    ///
    /// ## Errors
    /// * loader errors, when the vocabulary cannot be fetched;
    /// * vocabulary build errors, when the vocabulary file is malformed.
    pub fn get(
        &self,
        family: EncodingFamily,
    ) -> TallyResult<Arc<Codec<Rank>>> {
        let cell = self
            .codecs
            .get(&family)
            .ok_or_else(|| TallyError::EncodingNotSupported(family.to_string()))?;
        cell.get_or_try_init(|| self.build(family)).cloned()
    }

    /// Get the codec for a family id, such as "`cl100k_base`".
    ///
    /// ## Errors
    /// * [`TallyError::EncodingNotSupported`] for an unknown id;
    /// * as [`Self::get`].
    pub fn get_by_name(
        &self,
        name: &str,
    ) -> TallyResult<Arc<Codec<Rank>>> {
        let family = EncodingFamily::from_str(name)
            .map_err(|_| TallyError::EncodingNotSupported(name.to_string()))?;
        self.get(family)
    }

    /// Provide a family's vocabulary directly, instead of loading it.
    ///
    /// ## Errors
    /// * the [`SpanMapVocab::from_pairs`] errors;
    /// * [`TallyError::VocabConflict`] if the family is built, or being built.
    pub fn insert_vocab<I>(
        &self,
        family: EncodingFamily,
        pairs: I,
    ) -> TallyResult<()>
    where
        I: IntoIterator<Item = (Vec<u8>, Rank)>,
    {
        let vocab = Arc::new(SpanMapVocab::from_pairs(pairs)?);

        let mut injected = self.injected.lock();
        if injected.claimed.contains(&family) {
            return Err(TallyError::VocabConflict(format!(
                "{family} is already built"
            )));
        }
        injected.vocabs.insert(family, vocab);
        Ok(())
    }

    /// Parse a tiktoken vocabulary and provide it for a family.
    ///
    /// ## Errors
    /// As [`read_tiktoken_span_map`] and [`Self::insert_vocab`].
    pub fn insert_tiktoken_vocab<R: BufRead>(
        &self,
        family: EncodingFamily,
        reader: R,
    ) -> TallyResult<()> {
        self.insert_vocab(family, read_tiktoken_span_map::<Rank, _>(reader)?)
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    fn build(
        &self,
        family: EncodingFamily,
    ) -> TallyResult<Arc<Codec<Rank>>> {
        let injected = {
            let mut injected = self.injected.lock();
            injected.claimed.insert(family);
            injected.vocabs.get(&family).cloned()
        };

        let result = self.build_with(family, injected);
        if result.is_err() {
            self.injected.lock().claimed.remove(&family);
        }
        result
    }

    fn build_with(
        &self,
        family: EncodingFamily,
        injected: Option<Arc<SpanMapVocab<Rank>>>,
    ) -> TallyResult<Arc<Codec<Rank>>> {
        let config = family.config();

        let vocab = match injected {
            Some(vocab) => vocab,
            None => self.load_vocab(&config.resource).map_err(|err| {
                log::error!("failed to load {family} vocabulary: {err}");
                err
            })?,
        };

        let codec = config
            .build_codec(vocab, self.options)
            .map_err(|err| {
                log::error!("failed to build {family} codec: {err}");
                err
            })?;

        log::info!(
            "built {family} codec: {} ranks, {} specials",
            codec.vocab_size(),
            codec.special_tokens().len()
        );
        Ok(Arc::new(codec))
    }

    fn load_vocab(
        &self,
        resource: &ConstKeyedResource,
    ) -> TallyResult<Arc<SpanMapVocab<Rank>>> {
        let cell = self
            .vocabs
            .lock()
            .entry(resource.file_name)
            .or_default()
            .clone();

        cell.get_or_try_init(|| {
            let path = self.loader.load_resource_path(resource)?;
            log::debug!("loading {} from {}", resource.file_name, path.display());
            Ok(Arc::new(load_tiktoken_vocab_path::<Rank, _>(&path)?))
        })
        .cloned()
    }
}

static DEFAULT_REGISTRY: Lazy<EncodingRegistry> = Lazy::new(EncodingRegistry::default);

/// The process-wide registry behind the crate-level entry points.
pub fn default_registry() -> &'static EncodingRegistry {
    &DEFAULT_REGISTRY
}
