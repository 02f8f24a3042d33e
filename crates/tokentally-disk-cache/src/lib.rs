//! # tokentally-disk-cache
//!
//! Resolves and downloads the vendor vocabulary files used by `tokentally`.
//!
//! Directory resolution honors, in order:
//! 1. explicit paths in [`TallyDiskCacheOptions`],
//! 2. the [`TOKENTALLY_CACHE_DIR`] / [`TOKENTALLY_DATA_DIR`] environment variables,
//! 3. the platform project directories.
#![warn(missing_docs)]

use crate::path_resolver::PathResolver;

pub mod disk_cache;
pub mod path_resolver;
pub mod path_utils;

pub use disk_cache::{TallyDiskCache, TallyDiskCacheOptions};

/// Environment variable key to override the default cache directory.
pub const TOKENTALLY_CACHE_DIR: &str = "TOKENTALLY_CACHE_DIR";
/// Environment variable key to override the default data directory.
pub const TOKENTALLY_DATA_DIR: &str = "TOKENTALLY_DATA_DIR";

/// Default [`PathResolver`] for tokentally.
pub const TOKENTALLY_CACHE_CONFIG: PathResolver = PathResolver {
    qualifier: "io.crates.tokentally",
    organization: "",
    application: "tokentally",
    cache_env_vars: &[TOKENTALLY_CACHE_DIR],
    data_env_vars: &[TOKENTALLY_DATA_DIR],
};
