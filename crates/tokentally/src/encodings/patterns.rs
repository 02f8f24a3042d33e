//! # Pre-tokenizer Patterns

use crate::{join_patterns, regex::ConstRegexPattern};

/// The original GPT-2 word pattern.
///
/// Matches the same chunks as [`R50K_PATTERN`]; kept for the `gpt2` family,
/// which is defined by it.
pub const GPT2_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'s",
    r"'t",
    r"'re",
    r"'ve",
    r"'m",
    r"'ll",
    r"'d",
    r" ?\p{L}+",
    r" ?\p{N}+",
    r" ?[^\s\p{L}\p{N}]+",
    r"\s+(?!\S)",
    r"\s+",
));

/// The "`r50k_base`" word pattern, with possessive quantifiers.
pub const R50K_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'(?:[sdmt]|ll|ve|re)",
    r" ?\p{L}++",
    r" ?\p{N}++",
    r" ?[^\s\p{L}\p{N}]++",
    r"\s++$",
    r"\s+(?!\S)",
    r"\s",
));

/// The "`p50k_base`" and "`p50k_edit`" word pattern.
pub const P50K_PATTERN: ConstRegexPattern = R50K_PATTERN;

/// The "`cl100k_base`" word pattern.
pub const CL100K_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'(?i:[sdmt]|ll|ve|re)",
    r"[^\r\n\p{L}\p{N}]?+\p{L}++",
    r"\p{N}{1,3}+",
    r" ?[^\s\p{L}\p{N}]++[\r\n]*+",
    r"\s++$",
    r"\s*[\r\n]",
    r"\s+(?!\S)",
    r"\s",
));

/// The "`o200k_base`" word pattern.
pub const O200K_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+"
));

/// The Llama 3 word pattern; digits group in runs of 1 to 3.
pub const LLAMA3_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"(?i:'s|'t|'re|'ve|'m|'ll|'d)",
    r"[^\r\n\p{L}\p{N}]?\p{L}+",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]+[\r\n]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+",
));

#[cfg(test)]
mod tests {
    use super::*;

    fn split(
        pattern: ConstRegexPattern,
        text: &str,
    ) -> Vec<String> {
        let re = pattern.compile().unwrap();
        re.find_iter(text)
            .map(|r| text[r.unwrap()].to_string())
            .collect()
    }

    #[test]
    fn test_patterns_compile() {
        for pattern in [
            GPT2_PATTERN,
            R50K_PATTERN,
            P50K_PATTERN,
            CL100K_PATTERN,
            O200K_PATTERN,
            LLAMA3_PATTERN,
        ] {
            assert!(pattern.compile().is_ok(), "{}", pattern.as_str());
        }
    }

    #[test]
    fn test_whitespace_runs() {
        for pattern in [GPT2_PATTERN, R50K_PATTERN] {
            assert_eq!(
                split(pattern, "hello   world"),
                vec!["hello", "  ", " world"]
            );
        }
        for pattern in [CL100K_PATTERN, O200K_PATTERN, LLAMA3_PATTERN] {
            assert_eq!(
                split(pattern, "hello   world"),
                vec!["hello", "  ", " world"]
            );
        }
    }

    #[test]
    fn test_digit_grouping() {
        assert_eq!(
            split(R50K_PATTERN, "I'm 12345!"),
            vec!["I", "'m", " 12345", "!"]
        );
        assert_eq!(
            split(LLAMA3_PATTERN, "I'm 12345!"),
            vec!["I", "'m", " ", "123", "45", "!"]
        );
        assert_eq!(
            split(CL100K_PATTERN, "12345"),
            vec!["123", "45"]
        );
    }
}
