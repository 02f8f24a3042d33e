//! # Vocabulary Resource Loaders

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    encodings::resources::ConstKeyedResource,
    errors::{TallyError, TallyResult},
};

/// Environment variable naming a directory of pre-fetched vocabulary files.
pub const TOKENTALLY_VOCAB_DIR: &str = "TOKENTALLY_VOCAB_DIR";

/// Resolves a [`ConstKeyedResource`] to a local file.
///
/// Loaders are shared by the registry; concurrent calls for different
/// resources must not block each other.
pub trait ResourceLoader {
    /// Get a local path for the resource, fetching it if needed.
    fn load_resource_path(
        &self,
        resource: &ConstKeyedResource,
    ) -> TallyResult<PathBuf>;
}

/// Loads vocabulary files from one flat directory; never downloads.
///
/// The directory holds files by their resource file names,
/// e.g. ``cl100k_base.tiktoken`` or ``tokenizer.model``.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabDirLoader {
    dir: PathBuf,
}

impl VocabDirLoader {
    /// Load from `dir`.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Load from the [`TOKENTALLY_VOCAB_DIR`] directory, if set.
    pub fn from_env() -> Option<Self> {
        env::var_os(TOKENTALLY_VOCAB_DIR)
            .filter(|dir| !dir.is_empty())
            .map(Self::new)
    }

    /// The directory searched.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ResourceLoader for VocabDirLoader {
    fn load_resource_path(
        &self,
        resource: &ConstKeyedResource,
    ) -> TallyResult<PathBuf> {
        let path = self.dir.join(resource.file_name);
        log::debug!("resolving {} from {}", resource.file_name, path.display());
        if path.is_file() {
            Ok(path)
        } else {
            Err(TallyError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("vocabulary file not found: {}", path.display()),
            )))
        }
    }
}

/// Loads through a [`tokentally_disk_cache::TallyDiskCache`], downloading on a miss.
///
/// Each call opens its own cache handle, so downloads of different
/// files proceed in parallel.
#[cfg(feature = "download")]
#[derive(Debug, Clone, Default)]
pub struct DiskCacheLoader {
    options: tokentally_disk_cache::TallyDiskCacheOptions,
}

#[cfg(feature = "download")]
impl DiskCacheLoader {
    /// Load with the given cache options.
    pub fn new(options: tokentally_disk_cache::TallyDiskCacheOptions) -> Self {
        Self { options }
    }

    /// The cache options.
    pub fn options(&self) -> &tokentally_disk_cache::TallyDiskCacheOptions {
        &self.options
    }
}

#[cfg(feature = "download")]
impl ResourceLoader for DiskCacheLoader {
    fn load_resource_path(
        &self,
        resource: &ConstKeyedResource,
    ) -> TallyResult<PathBuf> {
        log::debug!("resolving {} from the disk cache", resource.file_name);
        tokentally_disk_cache::TallyDiskCache::new(self.options.clone())
            .and_then(|mut cache| cache.load_cached_path(resource.key, resource.urls, true))
            .map_err(|e| TallyError::External(format!("{e:#}")))
    }
}

/// The loader behind the default registry.
///
/// Prefers [`TOKENTALLY_VOCAB_DIR`] when set; otherwise, with the
/// `download` feature, the default disk cache.
#[derive(Debug, Clone, Default)]
pub struct DefaultResourceLoader {
    #[cfg(feature = "download")]
    disk_cache: DiskCacheLoader,
}

impl ResourceLoader for DefaultResourceLoader {
    fn load_resource_path(
        &self,
        resource: &ConstKeyedResource,
    ) -> TallyResult<PathBuf> {
        if let Some(loader) = VocabDirLoader::from_env() {
            return loader.load_resource_path(resource);
        }

        #[cfg(feature = "download")]
        {
            self.disk_cache.load_resource_path(resource)
        }

        #[cfg(not(feature = "download"))]
        {
            Err(TallyError::External(format!(
                "no loader for {}: set {TOKENTALLY_VOCAB_DIR} or enable the \"download\" feature",
                resource.file_name
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serial_test::serial;
    use tempdir::TempDir;

    use super::*;
    use crate::encodings::resources::{CL100K_BASE_TIKTOKEN, LLAMA3_TOKENIZER_MODEL};

    #[test]
    fn test_vocab_dir_loader() {
        let tmp = TempDir::new("tokentally-loader").unwrap();
        fs::write(tmp.path().join("cl100k_base.tiktoken"), "").unwrap();

        let loader = VocabDirLoader::new(tmp.path());
        assert_eq!(loader.dir(), tmp.path());
        assert_eq!(
            loader.load_resource_path(&CL100K_BASE_TIKTOKEN).unwrap(),
            tmp.path().join("cl100k_base.tiktoken")
        );

        assert!(matches!(
            loader.load_resource_path(&LLAMA3_TOKENIZER_MODEL),
            Err(TallyError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    #[serial]
    fn test_vocab_dir_from_env() {
        let original = env::var_os(TOKENTALLY_VOCAB_DIR);

        unsafe { env::remove_var(TOKENTALLY_VOCAB_DIR) };
        assert_eq!(VocabDirLoader::from_env(), None);

        unsafe { env::set_var(TOKENTALLY_VOCAB_DIR, "/tmp/vocabs") };
        assert_eq!(
            VocabDirLoader::from_env(),
            Some(VocabDirLoader::new("/tmp/vocabs"))
        );

        match original {
            Some(value) => unsafe { env::set_var(TOKENTALLY_VOCAB_DIR, value) },
            None => unsafe { env::remove_var(TOKENTALLY_VOCAB_DIR) },
        }
    }

    #[test]
    #[serial]
    fn test_default_loader_prefers_vocab_dir() {
        let original = env::var_os(TOKENTALLY_VOCAB_DIR);

        let tmp = TempDir::new("tokentally-default-loader").unwrap();
        fs::write(tmp.path().join("tokenizer.model"), "").unwrap();
        unsafe { env::set_var(TOKENTALLY_VOCAB_DIR, tmp.path()) };

        let loader = DefaultResourceLoader::default();
        assert_eq!(
            loader.load_resource_path(&LLAMA3_TOKENIZER_MODEL).unwrap(),
            tmp.path().join("tokenizer.model")
        );

        match original {
            Some(value) => unsafe { env::set_var(TOKENTALLY_VOCAB_DIR, value) },
            None => unsafe { env::remove_var(TOKENTALLY_VOCAB_DIR) },
        }
    }

    #[cfg(feature = "download")]
    #[test]
    fn test_disk_cache_loader_offline() {
        use tokentally_disk_cache::TallyDiskCacheOptions;

        let tmp = TempDir::new("tokentally-disk-loader").unwrap();
        let loader = DiskCacheLoader::new(
            TallyDiskCacheOptions::default()
                .with_cache_dir(Some(tmp.path()))
                .with_offline(true),
        );
        assert!(loader.options().offline);

        assert!(matches!(
            loader.load_resource_path(&CL100K_BASE_TIKTOKEN),
            Err(TallyError::External(msg)) if msg.contains("cached file not found")
        ));

        let cached = tmp.path().join("openai/cl100k/cl100k_base.tiktoken");
        fs::create_dir_all(cached.parent().unwrap()).unwrap();
        fs::write(&cached, "IQ== 0\n").unwrap();
        assert_eq!(
            loader.load_resource_path(&CL100K_BASE_TIKTOKEN).unwrap(),
            cached
        );
    }
}
