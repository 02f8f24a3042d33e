//! # Thread Utilities

use core::{
    hash::{Hash, Hasher},
    str::FromStr,
};
use std::{collections::hash_map::DefaultHasher, env, num::NonZeroUsize, thread};

/// Hash of the current thread id.
///
/// Stable for the life of the thread; distinct threads may collide.
pub fn current_thread_id_hash() -> usize {
    let mut hasher = DefaultHasher::new();
    thread::current().id().hash(&mut hasher);
    hasher.finish() as usize
}

/// The search list of environment variables that Rayon uses to control parallelism.
const RAYON_VARS: &[&str] = &["RAYON_NUM_THREADS", "RAYON_RS_NUM_CPUS"];

/// Get the max parallelism available.
///
/// Scans `RAYON_VARS` for a positive integer; then falls back to
/// [`thread::available_parallelism`].
pub fn est_max_parallelism() -> usize {
    for name in RAYON_VARS {
        if let Some(x @ 1..) = env::var(name).ok().and_then(|s| usize::from_str(&s).ok()) {
            return x;
        }
    }

    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Resolve the max pool size.
///
/// ``min(max_pool, est_max_parallelism())``
pub fn resolve_max_pool(max_pool: Option<NonZeroUsize>) -> usize {
    let sys_max = est_max_parallelism();

    let max_pool = max_pool.map(|x| x.get()).unwrap_or(sys_max);

    core::cmp::min(max_pool, sys_max)
}
