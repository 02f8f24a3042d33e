//! # Thread Pool Toy

use core::fmt::Debug;
use std::num::NonZeroUsize;

use crate::concurrency::threads;

/// Current Thread -> T Pool.
///
/// A thread-id hashed pool of items. Compiled backtracking regexes keep
/// per-instance scratch state behind a lock; spreading clones across threads
/// avoids contending on that lock.
///
/// ## Style Hints
///
/// Instance names should prefer `${T-name}_pool`,
/// for example, `regex_pool`.
pub struct PoolToy<T>
where
    T: Clone + Send,
{
    pool: Vec<T>,
}

impl<T> AsRef<T> for PoolToy<T>
where
    T: Clone + Send,
{
    fn as_ref(&self) -> &T {
        self.get()
    }
}

impl<T> PoolToy<T>
where
    T: Clone + Send,
{
    /// Initialize a pool of `item` clones.
    ///
    /// The pool size is ``min(max_pool, est_max_parallelism())``, and at least 1.
    pub fn init(
        item: T,
        max_pool: Option<NonZeroUsize>,
    ) -> Self {
        let size = threads::resolve_max_pool(max_pool);
        Self {
            pool: vec![item; size],
        }
    }

    /// Get a reference to the item for the current thread.
    pub fn get(&self) -> &T {
        let tid = threads::current_thread_id_hash();
        &self.pool[tid % self.pool.len()]
    }

    /// Get the length of the pool.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.pool.len()
    }
}

impl<T> Clone for PoolToy<T>
where
    T: Clone + Send,
{
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

impl<T> Debug for PoolToy<T>
where
    T: Clone + Send + Debug,
{
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("PoolToy")
            .field("item", &self.pool[0])
            .field("len", &self.pool.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::threads::resolve_max_pool;

    #[test]
    fn test_pool_toy() {
        let max_pool = NonZeroUsize::new(128);
        let pool = PoolToy::init(10, max_pool);

        // This will be different sizes on different systems.
        let size = resolve_max_pool(max_pool);

        assert_eq!(pool.len(), size);
        assert_eq!(pool.get(), &10);
        assert_eq!(pool.as_ref(), &10);

        assert_eq!(
            format!("{:?}", pool),
            format!("PoolToy {{ item: 10, len: {size} }}")
        );

        assert_eq!(pool.clone().len(), size);
    }

    #[test]
    fn test_pool_toy_single() {
        let pool = PoolToy::init("x".to_string(), NonZeroUsize::new(1));
        assert_eq!(pool.len(), 1);

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(pool.get(), "x"));
            }
        });
    }
}
