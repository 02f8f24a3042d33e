//! # Span Encoder Selector

use std::sync::Arc;

use crate::{
    encoders::{MergeScanSpanEncoder, PriorityMergeSpanEncoder, SpanEncoder},
    types::TokenType,
};

/// Factory for boxed [`SpanEncoder`]s.
pub type SpanEncoderBuilder<T> = Arc<dyn Fn() -> Box<dyn SpanEncoder<T>> + Send + Sync>;

/// Policy enum for selecting a [`SpanEncoder`].
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display
)]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum SpanEncoderSelector {
    /// The canonical best encoder.
    ///
    /// This is the evergreen label for "the good one"; a saved config
    /// holding it means "use the default", not a fixed engine.
    ///
    /// This is currently an alias for: [`PriorityMerge`](`Self::PriorityMerge`)
    #[default]
    Default,

    /// The canonical reference encoder.
    ///
    /// As simple as possible; meant for testing and comparison.
    ///
    /// This is currently an alias for: [`MergeScan`](`Self::MergeScan`)
    Reference,

    /// Use the [`MergeScanSpanEncoder`] encoder.
    MergeScan,

    /// Use the [`PriorityMergeSpanEncoder`] encoder.
    PriorityMerge,
}

impl SpanEncoderSelector {
    /// Get a builder for the configured [`SpanEncoder`].
    pub fn span_encoder_builder<T: TokenType>(&self) -> SpanEncoderBuilder<T> {
        use SpanEncoderSelector::*;
        match self {
            Reference | MergeScan => Arc::new(|| Box::new(MergeScanSpanEncoder::<T>::default())),
            Default | PriorityMerge => {
                Arc::new(|| Box::new(PriorityMergeSpanEncoder::<T>::default()))
            }
        }
    }
}
