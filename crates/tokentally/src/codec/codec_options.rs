//! Codec Options
//!
//! Options for building a [`crate::Codec`].

use core::num::NonZeroUsize;

use crate::encoders::SpanEncoderSelector;

/// Options for configuring a [`crate::Codec`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecOptions {
    /// The [`SpanEncoderSelector`] to use.
    pub span_encoder: SpanEncoderSelector,

    /// The width of the per-thread regex pool.
    ///
    /// When `None`, the estimated parallelism is used.
    pub max_pool: Option<NonZeroUsize>,

    /// Bound on backtracking steps per pattern match.
    ///
    /// When `None`, the `fancy_regex` default is used. A match exceeding
    /// the bound fails the encode with [`crate::TallyError::Regex`].
    pub backtrack_limit: Option<usize>,
}

impl CodecOptions {
    /// Get the configured [`SpanEncoderSelector`].
    pub fn span_encoder(&self) -> SpanEncoderSelector {
        self.span_encoder
    }

    /// Set the configured [`SpanEncoderSelector`].
    pub fn set_span_encoder(
        &mut self,
        span_encoder: SpanEncoderSelector,
    ) {
        self.span_encoder = span_encoder;
    }

    /// Set the configured [`SpanEncoderSelector`] and return the builder.
    pub fn with_span_encoder(
        mut self,
        span_encoder: SpanEncoderSelector,
    ) -> Self {
        self.set_span_encoder(span_encoder);
        self
    }

    /// Get the max regex pool width.
    pub fn max_pool(&self) -> Option<NonZeroUsize> {
        self.max_pool
    }

    /// Set the max regex pool width.
    pub fn set_max_pool<P>(
        &mut self,
        max_pool: P,
    ) where
        P: Into<Option<NonZeroUsize>>,
    {
        self.max_pool = max_pool.into();
    }

    /// Set the max regex pool width and return the builder.
    pub fn with_max_pool<P>(
        mut self,
        max_pool: P,
    ) -> Self
    where
        P: Into<Option<NonZeroUsize>>,
    {
        self.set_max_pool(max_pool);
        self
    }

    /// Get the backtrack limit.
    pub fn backtrack_limit(&self) -> Option<usize> {
        self.backtrack_limit
    }

    /// Set the backtrack limit.
    pub fn set_backtrack_limit<L>(
        &mut self,
        backtrack_limit: L,
    ) where
        L: Into<Option<usize>>,
    {
        self.backtrack_limit = backtrack_limit.into();
    }

    /// Set the backtrack limit and return the builder.
    pub fn with_backtrack_limit<L>(
        mut self,
        backtrack_limit: L,
    ) -> Self
    where
        L: Into<Option<usize>>,
    {
        self.set_backtrack_limit(backtrack_limit);
        self
    }
}
