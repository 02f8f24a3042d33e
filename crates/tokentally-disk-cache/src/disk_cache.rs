//! # Vocabulary Disk Cache

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use downloader::{Download, Downloader};

use crate::{TOKENTALLY_CACHE_CONFIG, path_utils};

/// Options for [`TallyDiskCache`].
#[derive(Clone, Default, Debug)]
pub struct TallyDiskCacheOptions {
    /// Optional path to the cache directory.
    pub cache_dir: Option<PathBuf>,

    /// Optional path to the data directory.
    pub data_dir: Option<PathBuf>,

    /// Never download; only serve files already in the cache.
    pub offline: bool,

    /// Optional [`Downloader`] builder.
    pub downloader: Option<fn() -> Downloader>,
}

impl TallyDiskCacheOptions {
    /// Set the cache directory.
    pub fn with_cache_dir<P: AsRef<Path>>(
        mut self,
        cache_dir: Option<P>,
    ) -> Self {
        self.cache_dir = cache_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the data directory.
    pub fn with_data_dir<P: AsRef<Path>>(
        mut self,
        data_dir: Option<P>,
    ) -> Self {
        self.data_dir = data_dir.map(|p| p.as_ref().to_path_buf());
        self
    }

    /// Set the offline flag.
    pub fn with_offline(
        mut self,
        offline: bool,
    ) -> Self {
        self.offline = offline;
        self
    }

    /// Set the downloader builder.
    pub fn with_downloader(
        mut self,
        downloader: Option<fn() -> Downloader>,
    ) -> Self {
        self.downloader = downloader;
        self
    }
}

/// Disk cache for downloaded vocabulary files.
///
/// Files are stored as ``cache_dir / context.. / <url file name>``.
pub struct TallyDiskCache {
    cache_dir: PathBuf,
    data_dir: PathBuf,
    offline: bool,

    /// Built on first download; offline use never opens a connection pool.
    downloader: Option<Downloader>,
    downloader_builder: Option<fn() -> Downloader>,
}

impl TallyDiskCache {
    /// Construct a new [`TallyDiskCache`].
    pub fn new(options: TallyDiskCacheOptions) -> anyhow::Result<Self> {
        let cache_dir = TOKENTALLY_CACHE_CONFIG
            .resolve_cache_dir(options.cache_dir)
            .context("failed to resolve cache directory")?;

        let data_dir = TOKENTALLY_CACHE_CONFIG
            .resolve_data_dir(options.data_dir)
            .context("failed to resolve data directory")?;

        Ok(Self {
            cache_dir,
            data_dir,
            offline: options.offline,
            downloader: None,
            downloader_builder: options.downloader,
        })
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Get the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Is downloading disabled?
    pub fn is_offline(&self) -> bool {
        self.offline
    }

    /// Get the cache path for ``context / file``.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    pub fn cache_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.cache_dir, context, file)
    }

    /// Get the data path for ``context / file``.
    ///
    /// * Does not check that the path exists.
    /// * Does not initialize the containing directories.
    pub fn data_path<C, F>(
        &self,
        context: &[C],
        file: F,
    ) -> PathBuf
    where
        C: AsRef<Path>,
        F: AsRef<Path>,
    {
        path_utils::extend_path(&self.data_dir, context, file)
    }

    fn downloader(&mut self) -> anyhow::Result<&mut Downloader> {
        if self.downloader.is_none() {
            let downloader = match self.downloader_builder {
                Some(builder) => builder(),
                None => Downloader::builder()
                    .build()
                    .context("failed to build downloader")?,
            };
            self.downloader = Some(downloader);
        }
        self.downloader
            .as_mut()
            .context("downloader was not initialized")
    }

    /// Load a cached file, downloading it from the mirror `urls` on a miss.
    ///
    /// # Arguments
    /// * `context` - prefix dirs, inserted between the cache dir and the file.
    /// * `urls` - mirrors of the same file; the file name is taken from the first.
    /// * `download` - permit downloading on a miss (ignored when offline).
    ///
    /// # Errors
    /// * the file is not cached and downloading is not permitted;
    /// * the download fails.
    pub fn load_cached_path<C, S>(
        &mut self,
        context: &[C],
        urls: &[S],
        download: bool,
    ) -> anyhow::Result<PathBuf>
    where
        C: AsRef<Path>,
        S: AsRef<str>,
    {
        let urls: Vec<&str> = urls.iter().map(|s| s.as_ref()).collect();
        let first = urls.first().context("no urls provided")?;
        let file_name = path_utils::url_file_name(first)
            .with_context(|| format!("url has no file name: {first}"))?;

        let path = self.cache_path(context, file_name);
        if is_cached(&path) {
            log::debug!("cache hit: {}", path.display());
            return Ok(path);
        }

        if !download || self.offline {
            anyhow::bail!("cached file not found: {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let part = partial_path(&path);
        remove_if_present(&part);
        let mut dl = Download::new_mirrored(&urls);
        dl.file_name = part.clone();

        log::info!("downloading {first} -> {}", path.display());
        let fetched = self.downloader().and_then(|downloader| {
            for result in downloader.download(&[dl])? {
                result.with_context(|| format!("failed to download {first}"))?;
            }
            anyhow::ensure!(is_cached(&part), "empty download from {first}");
            Ok(())
        });

        if let Err(err) = fetched {
            remove_if_present(&part);
            remove_if_present(&path);
            return Err(err);
        }

        if let Err(err) = fs::rename(&part, &path) {
            remove_if_present(&part);
            return Err(err)
                .with_context(|| format!("failed to move download into {}", path.display()));
        }

        Ok(path)
    }
}

/// A cached file is present and non-empty.
fn is_cached(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file() && m.len() > 0)
}

/// The sibling path a download is written to before it is moved into place.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

fn remove_if_present(path: &Path) {
    match fs::remove_file(path) {
        Err(err) if err.kind() != std::io::ErrorKind::NotFound => {
            log::warn!("failed to remove {}: {err}", path.display());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, path::PathBuf};

    use serial_test::serial;
    use tempdir::TempDir;

    use crate::{
        TOKENTALLY_CACHE_CONFIG,
        TOKENTALLY_CACHE_DIR,
        TOKENTALLY_DATA_DIR,
        disk_cache::{TallyDiskCache, TallyDiskCacheOptions},
    };

    #[test]
    #[serial]
    fn test_resolve_dirs() {
        let orig_cache_dir = env::var(TOKENTALLY_CACHE_DIR);
        let orig_data_dir = env::var(TOKENTALLY_DATA_DIR);

        let pds = TOKENTALLY_CACHE_CONFIG
            .project_dirs()
            .expect("failed to get project dirs");

        let user_cache_dir = PathBuf::from("/tmp/tokentally/cache");
        let user_data_dir = PathBuf::from("/tmp/tokentally/data");

        unsafe {
            env::remove_var(TOKENTALLY_CACHE_DIR);
            env::remove_var(TOKENTALLY_DATA_DIR);
        }

        let cache = TallyDiskCache::new(
            TallyDiskCacheOptions::default()
                .with_cache_dir(Some(user_cache_dir.clone()))
                .with_data_dir(Some(user_data_dir.clone())),
        )
        .unwrap();
        assert_eq!(cache.cache_dir(), user_cache_dir.as_path());
        assert_eq!(cache.data_dir(), user_data_dir.as_path());

        let cache = TallyDiskCache::new(TallyDiskCacheOptions::default()).unwrap();
        assert_eq!(cache.cache_dir(), pds.cache_dir());
        assert_eq!(cache.data_dir(), pds.data_dir());

        unsafe {
            env::set_var(TOKENTALLY_CACHE_DIR, "/tmp/tokentally/env_cache");
            env::set_var(TOKENTALLY_DATA_DIR, "/tmp/tokentally/env_data");
        }
        let cache = TallyDiskCache::new(TallyDiskCacheOptions::default()).unwrap();
        assert_eq!(
            cache.cache_dir(),
            PathBuf::from("/tmp/tokentally/env_cache").as_path()
        );
        assert_eq!(
            cache.data_dir(),
            PathBuf::from("/tmp/tokentally/env_data").as_path()
        );

        match orig_cache_dir {
            Ok(original) => unsafe { env::set_var(TOKENTALLY_CACHE_DIR, original) },
            Err(_) => unsafe { env::remove_var(TOKENTALLY_CACHE_DIR) },
        }
        match orig_data_dir {
            Ok(original) => unsafe { env::set_var(TOKENTALLY_DATA_DIR, original) },
            Err(_) => unsafe { env::remove_var(TOKENTALLY_DATA_DIR) },
        }
    }

    #[test]
    fn test_paths() {
        let cache = TallyDiskCache::new(
            TallyDiskCacheOptions::default()
                .with_cache_dir(Some("/tmp/tt/cache"))
                .with_data_dir(Some("/tmp/tt/data")),
        )
        .unwrap();

        assert_eq!(
            cache.cache_path(&["openai"], "file.txt"),
            PathBuf::from("/tmp/tt/cache/openai/file.txt")
        );
        assert_eq!(
            cache.data_path(&["openai"], "file.txt"),
            PathBuf::from("/tmp/tt/data/openai/file.txt")
        );
    }

    #[test]
    fn test_offline_cache() {
        let dir = TempDir::new("tt_disk_cache").unwrap();

        let mut cache = TallyDiskCache::new(
            TallyDiskCacheOptions::default()
                .with_cache_dir(Some(dir.path()))
                .with_offline(true),
        )
        .unwrap();
        assert!(cache.is_offline());

        let urls = ["https://example.invalid/encodings/tiny.tiktoken"];

        // Miss, and no download permitted.
        assert!(cache.load_cached_path(&["openai"], &urls, true).is_err());

        // Hit.
        let expected = dir.path().join("openai").join("tiny.tiktoken");
        fs::create_dir_all(expected.parent().unwrap()).unwrap();
        fs::write(&expected, "IQ== 0\n").unwrap();

        let path = cache.load_cached_path(&["openai"], &urls, true).unwrap();
        assert_eq!(path, expected);
    }

    fn refused_downloader() -> downloader::Downloader {
        downloader::Downloader::builder()
            .retries(1)
            .connect_timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_file_is_a_miss() {
        let dir = TempDir::new("tt_disk_cache").unwrap();
        let mut cache = TallyDiskCache::new(
            TallyDiskCacheOptions::default()
                .with_cache_dir(Some(dir.path()))
                .with_offline(true),
        )
        .unwrap();

        let urls = ["https://example.invalid/encodings/tiny.tiktoken"];
        let path = dir.path().join("openai").join("tiny.tiktoken");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();

        let err = cache
            .load_cached_path(&["openai"], &urls, true)
            .unwrap_err();
        assert!(err.to_string().contains("cached file not found"), "{err:#}");
    }

    #[test]
    fn test_failed_download_leaves_no_file() {
        let dir = TempDir::new("tt_disk_cache").unwrap();
        let mut cache = TallyDiskCache::new(
            TallyDiskCacheOptions::default()
                .with_cache_dir(Some(dir.path()))
                .with_downloader(Some(refused_downloader)),
        )
        .unwrap();

        // Port 1 on loopback refuses connections.
        let urls = ["http://127.0.0.1:1/encodings/tiny.tiktoken"];
        let path = dir.path().join("openai").join("tiny.tiktoken");

        // A stale empty file from an earlier failure is not served.
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();

        for _ in 0..2 {
            assert!(cache.load_cached_path(&["openai"], &urls, true).is_err());
            assert!(!path.exists());
            assert!(!path.with_file_name("tiny.tiktoken.part").exists());
        }

        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 0);
    }
}
