//! # Rayon Utilities
//!
//! [`rayon`] powered batch wrappers for [`crate::Codec`].

mod rayon_codec;

pub use rayon_codec::ParallelRayonCodec;
