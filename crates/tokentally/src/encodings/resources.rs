//! # Vocabulary Resources

/// A vocabulary file, with the URLs it may be fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstKeyedResource {
    /// The cache key; used in place of the URL for local caching.
    pub key: &'static [&'static str],

    /// The local file name.
    pub file_name: &'static str,

    /// The URLs associated with this resource, tried in order.
    pub urls: &'static [&'static str],

    /// The sha256 hex digest of the file, if published.
    pub hash: Option<&'static str>,
}

/// The "`r50k_base.tiktoken`" vocabulary resource.
pub const R50K_BASE_TIKTOKEN: ConstKeyedResource = ConstKeyedResource {
    key: &["openai", "r50k"],
    file_name: "r50k_base.tiktoken",
    urls: &["https://openaipublic.blob.core.windows.net/encodings/r50k_base.tiktoken"],
    hash: Some("306cd27f03c1a714eca7108e03d66b7dc042abe8c258b44c199a7ed9838dd930"),
};

/// The "`p50k_base.tiktoken`" vocabulary resource.
pub const P50K_BASE_TIKTOKEN: ConstKeyedResource = ConstKeyedResource {
    key: &["openai", "p50k"],
    file_name: "p50k_base.tiktoken",
    urls: &["https://openaipublic.blob.core.windows.net/encodings/p50k_base.tiktoken"],
    hash: Some("94b5ca7dff4d00767bc256fdd1b27e5b17361d7b8a5f968547f9f23eb70d2069"),
};

/// The "`cl100k_base.tiktoken`" vocabulary resource.
pub const CL100K_BASE_TIKTOKEN: ConstKeyedResource = ConstKeyedResource {
    key: &["openai", "cl100k"],
    file_name: "cl100k_base.tiktoken",
    urls: &["https://openaipublic.blob.core.windows.net/encodings/cl100k_base.tiktoken"],
    hash: Some("223921b76ee99bde995b7ff738513eef100fb51d18c93597a113bcffe865b2a7"),
};

/// The "`o200k_base.tiktoken`" vocabulary resource.
pub const O200K_BASE_TIKTOKEN: ConstKeyedResource = ConstKeyedResource {
    key: &["openai", "o200k"],
    file_name: "o200k_base.tiktoken",
    urls: &["https://openaipublic.blob.core.windows.net/encodings/o200k_base.tiktoken"],
    hash: Some("446a9538cb6c348e3516120d7c08b09f57c36495e2acfffe59a5bf8b0cfb1a2d"),
};

/// The Llama 3 "`tokenizer.model`" resource; tiktoken text format.
pub const LLAMA3_TOKENIZER_MODEL: ConstKeyedResource = ConstKeyedResource {
    key: &["meta", "llama3"],
    file_name: "tokenizer.model",
    urls: &[
        "https://raw.githubusercontent.com/meta-llama/llama-models/refs/heads/main/models/llama3/tokenizer.model",
    ],
    hash: None,
};
