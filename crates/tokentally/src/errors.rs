//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from tokentally operations.
#[derive(Debug, thiserror::Error)]
pub enum TallyError {
    /// The requested encoding family is unknown.
    #[error("encoding not supported: {0}")]
    EncodingNotSupported(String),

    /// No table resolves the requested model name.
    #[error("model not supported: {0}")]
    ModelNotSupported(String),

    /// A decode input id has no entry in the vocabulary or the special tokens.
    #[error("unknown token: {token}")]
    UnknownToken {
        /// The offending id.
        token: u64,
    },

    /// The pattern engine failed, while compiling or while matching.
    #[error("regex error: {0}")]
    Regex(#[from] ErrorWrapper),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A single byte value has no length-1 vocabulary entry.
    #[error("vocabulary has no entry for byte {byte:#04x}")]
    MissingByteToken {
        /// The missing byte.
        byte: u8,
    },

    /// Two vocabulary entries share a rank.
    #[error("duplicate rank in vocabulary: {rank}")]
    DuplicateRank {
        /// The repeated rank.
        rank: u64,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),

    /// Error from an external component.
    #[error("{0}")]
    External(String),
}

/// Result type for tokentally operations.
pub type TallyResult<T> = core::result::Result<T, TallyError>;
