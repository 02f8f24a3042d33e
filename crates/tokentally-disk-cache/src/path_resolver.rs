//! # App Path Resolver
//!
//! Static defaults for cache/data directory resolution.

use std::{
    env,
    path::{Path, PathBuf},
};

use directories_next::ProjectDirs;

/// The two directory roles a [`PathResolver`] knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    /// Re-creatable downloads.
    Cache,

    /// User data which should persist.
    Data,
}

/// Static configuration for application path resolution.
pub struct PathResolver {
    /// The qualifier for [`ProjectDirs`].
    pub qualifier: &'static str,

    /// The organization for [`ProjectDirs`].
    pub organization: &'static str,

    /// The application for [`ProjectDirs`].
    pub application: &'static str,

    /// Cache directory environment variables, in priority order.
    pub cache_env_vars: &'static [&'static str],

    /// Data directory environment variables, in priority order.
    pub data_env_vars: &'static [&'static str],
}

impl PathResolver {
    /// Get the [`ProjectDirs`] for this config.
    pub fn project_dirs(&self) -> Option<ProjectDirs> {
        ProjectDirs::from(self.qualifier, self.organization, self.application)
    }

    /// The environment variables consulted for `kind`.
    pub fn env_vars(
        &self,
        kind: DirKind,
    ) -> &'static [&'static str] {
        match kind {
            DirKind::Cache => self.cache_env_vars,
            DirKind::Data => self.data_env_vars,
        }
    }

    /// Resolve a directory.
    ///
    /// Resolution Order:
    /// 1. `path`, if present.
    /// 2. ``env[$VAR]`` for each of [`Self::env_vars`]; in order.
    /// 3. the matching [`ProjectDirs`] directory, if present.
    /// 4. `None`
    ///
    /// ## Project Dirs Behavior (cache)
    ///
    /// |Platform | Value                                                                 |
    /// | ------- | --------------------------------------------------------------------- |
    /// | Linux   | `$XDG_CACHE_HOME`/`_project_path_` or `$HOME`/.cache/`_project_path_` |
    /// | macOS   | `$HOME`/Library/Caches/`_project_path_`                               |
    /// | Windows | `{FOLDERID_LocalAppData}`\\`_project_path_`\\cache                    |
    pub fn resolve_dir<P: AsRef<Path>>(
        &self,
        kind: DirKind,
        path: Option<P>,
    ) -> Option<PathBuf> {
        if let Some(path) = path {
            return Some(path.as_ref().to_path_buf());
        }

        for env_var in self.env_vars(kind) {
            if let Ok(value) = env::var(env_var)
                && !value.is_empty()
            {
                log::debug!("{kind:?} dir from ${env_var}: {value}");
                return Some(PathBuf::from(value));
            }
        }

        self.project_dirs().map(|pds| match kind {
            DirKind::Cache => pds.cache_dir().to_path_buf(),
            DirKind::Data => pds.data_dir().to_path_buf(),
        })
    }

    /// Resolve the cache directory; see [`Self::resolve_dir`].
    pub fn resolve_cache_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve_dir(DirKind::Cache, path)
    }

    /// Resolve the data directory; see [`Self::resolve_dir`].
    pub fn resolve_data_dir<P: AsRef<Path>>(
        &self,
        path: Option<P>,
    ) -> Option<PathBuf> {
        self.resolve_dir(DirKind::Data, path)
    }
}
