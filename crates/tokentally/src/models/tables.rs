//! # Model Tables
//!
//! Built-in data for [`super::ModelResolver`]. Many open-weight entries map
//! to `r50k_base` as a stand-in for tokenizers not reproduced locally; counts
//! for those models are approximate.

use crate::encodings::EncodingFamily::{self, *};

/// Fully qualified model names, checked before any prefix table.
pub const EXACT_MODELS: &[(&str, EncodingFamily)] = &[
    ("o1", O200kBase),
    ("o1-preview", O200kBase),
    ("o1-mini", O200kBase),
    ("o3", O200kBase),
    ("o3-mini", O200kBase),
    ("o4-mini", O200kBase),
    ("gpt-4.1", O200kBase),
    ("gpt-4o", O200kBase),
    ("gpt-4", Cl100kBase),
    ("gpt-3.5", Cl100kBase),
    ("gpt-3.5-turbo", Cl100kBase),
    ("text-embedding-ada-002", Cl100kBase),
    ("text-davinci-003", P50kBase),
    ("text-davinci-002", P50kBase),
    ("code-davinci-002", P50kBase),
    ("code-davinci-001", P50kBase),
    ("code-cushman-002", P50kBase),
    ("code-cushman-001", P50kBase),
    ("davinci-codex", P50kBase),
    ("cushman-codex", P50kBase),
    ("text-davinci-001", R50kBase),
    ("text-curie-001", R50kBase),
    ("text-babbage-001", R50kBase),
    ("text-ada-001", R50kBase),
    ("davinci", R50kBase),
    ("curie", R50kBase),
    ("babbage", R50kBase),
    ("ada", R50kBase),
    ("text-similarity-davinci-001", R50kBase),
    ("text-similarity-curie-001", R50kBase),
    ("text-similarity-babbage-001", R50kBase),
    ("text-similarity-ada-001", R50kBase),
    ("text-search-davinci-doc-001", R50kBase),
    ("text-search-curie-doc-001", R50kBase),
    ("text-search-ada-doc-001", R50kBase),
    ("text-search-babbage-doc-001", R50kBase),
    ("code-search-babbage-code-001", R50kBase),
    ("code-search-ada-code-001", R50kBase),
    ("text-davinci-edit-001", P50kEdit),
    ("code-davinci-edit-001", P50kEdit),
];

/// Model families with a published tokenizer.
pub const DEFINITIVE_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("gpt-5", O200kBase),
    ("o1-", O200kBase),
    ("o3-", O200kBase),
    ("o4-", O200kBase),
    ("chatgpt-4o-", O200kBase),
    ("gpt-4.1-", O200kBase),
    ("gpt-4o-", O200kBase),
    ("gpt-4-", Cl100kBase),
    ("gpt-3.5-turbo-", Cl100kBase),
    ("gpt-35-turbo-", Cl100kBase),
    ("ft:gpt-4", Cl100kBase),
    ("ft:gpt-3.5-turbo", Cl100kBase),
    ("ft:davinci-002", Cl100kBase),
    ("ft:babbage-002", Cl100kBase),
];

/// Anthropic models; approximated with `cl100k_base` and a count ratio.
pub const CLAUDE_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("claude-2.0", Cl100kBase),
    ("claude-2.1", Cl100kBase),
    ("claude-3-opus-", Cl100kBase),
    ("claude-3-sonnet-", Cl100kBase),
    ("claude-3-5-sonnet-", Cl100kBase),
    ("claude-3-haiku-", Cl100kBase),
    ("claude-3-5-haiku-", Cl100kBase),
    ("claude-3-7-sonnet-", Cl100kBase),
    ("claude-opus-4", Cl100kBase),
    ("claude-sonnet-4", Cl100kBase),
];

/// `DeepSeek` models.
pub const DEEPSEEK_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("deepseek-r1", R50kBase),
    ("deepseek-v3", R50kBase),
    ("deepseek-v2.5", R50kBase),
    ("deepseek-v2", R50kBase),
    ("deepseek-coder-v2", R50kBase),
    ("deepseek-coder", R50kBase),
    ("deepseek-llm", R50kBase),
    ("deepcoder", R50kBase),
    ("deepscaler", R50kBase),
];

/// Llama models; Llama 2 generations fall back to `r50k_base`.
pub const LLAMA_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("llama3.1", Llama),
    ("llama3.2", Llama),
    ("llama3.3", Llama),
    ("llama3", Llama),
    ("llama4", Llama),
    ("llama2", R50kBase),
    ("codellama", R50kBase),
    ("llama2-uncensored", R50kBase),
    ("llama2-chinese", R50kBase),
];

/// Qwen models.
pub const QWEN_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("qwen3", R50kBase),
    ("qwen2.5vl", R50kBase),
    ("qwen2.5", R50kBase),
    ("qwen2.5-coder", R50kBase),
    ("qwen", R50kBase),
    ("qwen2", R50kBase),
    ("qwen2-math", R50kBase),
    ("qwq", R50kBase),
    ("codeqwen", R50kBase),
];

/// Mistral models.
pub const MISTRAL_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("mistral", R50kBase),
    ("mistral-nemo", R50kBase),
    ("mistral-small", R50kBase),
    ("mistral-small3.1", R50kBase),
    ("mistral-small3.2", R50kBase),
    ("mistral-large", R50kBase),
    ("mistral-openorca", R50kBase),
    ("mistrallite", R50kBase),
    ("mathstral", R50kBase),
    ("codestral", R50kBase),
    ("devstral", R50kBase),
    ("mixtral", R50kBase),
];

/// Gemma models.
pub const GEMMA_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("gemma3n", R50kBase),
    ("gemma3", R50kBase),
    ("gemma2", R50kBase),
    ("gemma", R50kBase),
    ("codegemma", R50kBase),
];

/// Phi models.
pub const PHI_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("phi4", R50kBase),
    ("phi4-mini", R50kBase),
    ("phi4-reasoning", R50kBase),
    ("phi4-mini-reasoning", R50kBase),
    ("phi3", Llama),
    ("phi3.5", R50kBase),
    ("phi", R50kBase),
];

/// Vision models.
pub const VISION_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("llava", R50kBase),
    ("llava-llama3", Llama),
    ("llava-phi3", R50kBase),
    ("minicpm-v", R50kBase),
    ("llama3.2-vision", Llama),
    ("bakllava", R50kBase),
    ("moondream", R50kBase),
    ("granite3.2-vision", R50kBase),
];

/// Granite models.
pub const GRANITE_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("granite-code", R50kBase),
    ("granite3.3", R50kBase),
    ("granite3.2", R50kBase),
    ("granite3.1-dense", R50kBase),
    ("granite3.1-moe", R50kBase),
    ("granite3-dense", R50kBase),
    ("granite3-moe", R50kBase),
    ("granite3-guardian", R50kBase),
    ("granite-embedding", R50kBase),
];

/// Small models.
pub const SMALL_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("smollm2", R50kBase),
    ("smollm", R50kBase),
    ("tinyllama", R50kBase),
    ("phi", R50kBase),
    ("tinydolphin", R50kBase),
];

/// Embedding models.
pub const EMBEDDING_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("nomic-embed-text", R50kBase),
    ("mxbai-embed-large", R50kBase),
    ("bge-m3", R50kBase),
    ("snowflake-arctic-embed", R50kBase),
    ("snowflake-arctic-embed2", R50kBase),
    ("all-minilm", R50kBase),
    ("bge-large", R50kBase),
    ("paraphrase-multilingual", R50kBase),
];

/// Fine-tunes of other families.
pub const DERIVED_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("dolphin3", Llama),
    ("dolphin-mixtral", R50kBase),
    ("dolphin-mistral", R50kBase),
    ("dolphin-llama3", Llama),
    ("dolphincoder", R50kBase),
    ("dolphin-phi", R50kBase),
    ("hermes3", Llama),
    ("nous-hermes2", R50kBase),
    ("nous-hermes2-mixtral", R50kBase),
    ("nous-hermes", R50kBase),
    ("openhermes", R50kBase),
    ("wizardlm2", R50kBase),
    ("wizardlm", R50kBase),
    ("wizardlm-uncensored", R50kBase),
    ("wizardcoder", R50kBase),
    ("wizard-math", R50kBase),
    ("wizard-vicuna-uncensored", R50kBase),
    ("wizard-vicuna", R50kBase),
];

/// Everything else.
pub const FALLBACK_PREFIXES: &[(&str, EncodingFamily)] = &[
    ("starcoder2", R50kBase),
    ("starcoder", R50kBase),
    ("orca-mini", R50kBase),
    ("orca2", R50kBase),
    ("yi", R50kBase),
    ("yi-coder", R50kBase),
    ("zephyr", R50kBase),
    ("command-r", R50kBase),
    ("command-r-plus", R50kBase),
    ("command-r7b", R50kBase),
    ("command-r7b-arabic", R50kBase),
    ("command-a", R50kBase),
    ("vicuna", R50kBase),
    ("openchat", R50kBase),
    ("olmo2", R50kBase),
    ("dbrx", R50kBase),
    ("falcon", R50kBase),
    ("falcon2", R50kBase),
    ("falcon3", R50kBase),
    ("solar", R50kBase),
    ("solar-pro", R50kBase),
    ("stablelm2", R50kBase),
    ("stablelm-zephyr", R50kBase),
    ("stable-code", R50kBase),
    ("stable-beluga", R50kBase),
    ("sqlcoder", R50kBase),
    ("reflection", Llama),
    ("starling-lm", R50kBase),
    ("xwinlm", R50kBase),
    ("phind-codellama", R50kBase),
    ("internlm2", R50kBase),
    ("yarn-llama2", R50kBase),
    ("yarn-mistral", R50kBase),
    ("nexusraven", R50kBase),
    ("shieldgemma", R50kBase),
    ("everythinglm", R50kBase),
    ("codeup", R50kBase),
    ("duckdb-nsql", R50kBase),
    ("magicoder", R50kBase),
    ("codebooga", R50kBase),
    ("bespoke-minicheck", R50kBase),
    ("tulu3", Llama),
    ("nuextract", R50kBase),
    ("megadolphin", R50kBase),
    ("notux", R50kBase),
    ("open-orca-platypus2", R50kBase),
    ("notus", R50kBase),
    ("goliath", R50kBase),
    ("alfred", R50kBase),
    ("neural-chat", R50kBase),
    ("samantha-mistral", R50kBase),
    ("athene-v2", R50kBase),
    ("nemotron-mini", R50kBase),
    ("nemotron", Llama),
    ("opencoder", R50kBase),
    ("exaone3.5", R50kBase),
    ("exaone-deep", R50kBase),
    ("aya", R50kBase),
    ("aya-expanse", R50kBase),
    ("smallthinker", R50kBase),
    ("sailor2", R50kBase),
    ("firefunction-v2", Llama),
    ("codegeex4", R50kBase),
    ("glm4", R50kBase),
    ("meditron", R50kBase),
    ("medllama2", R50kBase),
    ("reader-lm", R50kBase),
    ("r1-1776", R50kBase),
    ("marco-o1", R50kBase),
    ("openthinker", R50kBase),
    ("magistral", R50kBase),
    ("cogito", R50kBase),
];

/// The prefix tables, most specific first.
pub const PREFIX_TABLES: &[(&str, &[(&str, EncodingFamily)])] = &[
    ("definitive", DEFINITIVE_PREFIXES),
    ("claude", CLAUDE_PREFIXES),
    ("deepseek", DEEPSEEK_PREFIXES),
    ("llama", LLAMA_PREFIXES),
    ("qwen", QWEN_PREFIXES),
    ("mistral", MISTRAL_PREFIXES),
    ("gemma", GEMMA_PREFIXES),
    ("phi", PHI_PREFIXES),
    ("vision", VISION_PREFIXES),
    ("granite", GRANITE_PREFIXES),
    ("small", SMALL_PREFIXES),
    ("embedding", EMBEDDING_PREFIXES),
    ("derived", DERIVED_PREFIXES),
    ("fallback", FALLBACK_PREFIXES),
];

/// Count correction ratios, by model prefix; first match wins.
///
/// Calibrated against a remote counting API; these drift as vendors
/// retrain, and adjusted counts are estimates.
pub const COUNT_RATIOS: &[(&str, f64)] = &[("claude-", 1.165)];
