//! # Regex Pattern Labeled Wrapper

use crate::regex::{ErrorWrapper, RegexWrapper};

/// Const Regex Wrapper Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConstRegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(&'static str),

    /// This is a regex pattern that requires regex extensions.
    Fancy(&'static str),
}

impl ConstRegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
        }
    }

    /// Convert to [`RegexPattern`]
    pub fn to_pattern(&self) -> RegexPattern {
        (*self).into()
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        self.to_pattern().compile()
    }
}

impl From<ConstRegexPattern> for RegexPattern {
    fn from(pattern: ConstRegexPattern) -> Self {
        use ConstRegexPattern::*;
        match pattern {
            Basic(pattern) => RegexPattern::Basic(pattern.to_string()),
            Fancy(pattern) => RegexPattern::Fancy(pattern.to_string()),
        }
    }
}

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    Fancy(String),

    /// The requirements of this pattern are unknown; it may require regex extensions.
    Adaptive(String),
}

impl From<&str> for RegexPattern {
    fn from(pattern: &str) -> Self {
        Self::Adaptive(pattern.to_string())
    }
}

impl From<String> for RegexPattern {
    fn from(pattern: String) -> Self {
        Self::Adaptive(pattern)
    }
}

impl RegexPattern {
    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            Self::Fancy(pattern) => pattern,
            Self::Adaptive(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a [`RegexWrapper`].
    ///
    /// Uses the [`fancy_regex`] default backtrack limit.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        self.compile_with_backtrack_limit(None)
    }

    /// Compile the regex pattern, bounding the backtracking engine.
    ///
    /// A match which exceeds `backtrack_limit` fails with an [`ErrorWrapper::Fancy`]
    /// at match time. The limit does not apply to [`RegexPattern::Basic`] patterns,
    /// which run in linear time.
    pub fn compile_with_backtrack_limit(
        &self,
        backtrack_limit: Option<usize>,
    ) -> Result<RegexWrapper, ErrorWrapper> {
        let fancy = |pattern: &str| {
            let mut builder = fancy_regex::RegexBuilder::new(pattern);
            if let Some(limit) = backtrack_limit {
                builder.backtrack_limit(limit);
            }
            builder
                .build()
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from)
        };

        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            Self::Fancy(pattern) => fancy(pattern),
            Self::Adaptive(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .or_else(|_| fancy(pattern)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const_pattern() {
        const BASIC: ConstRegexPattern = ConstRegexPattern::Basic("hello world");
        assert_eq!(BASIC.as_str(), "hello world");

        let rw = BASIC.compile().unwrap();
        assert_eq!(rw.as_str(), "hello world");
        assert!(rw.is_basic());

        const FANCY: ConstRegexPattern = ConstRegexPattern::Fancy(r"\s+(?!\S)");
        assert_eq!(FANCY.to_pattern(), RegexPattern::Fancy(r"\s+(?!\S)".to_string()));

        let rw = FANCY.compile().unwrap();
        assert!(rw.is_fancy());
    }

    #[test]
    fn test_adaptive_pattern() {
        let pattern: RegexPattern = "hello world".into();
        assert!(matches!(pattern, RegexPattern::Adaptive(_)));
        assert!(pattern.compile().unwrap().is_basic());

        // Lookahead is not supported by `regex`; falls up to `fancy_regex`.
        let pattern: RegexPattern = r"\s+(?!\S)|\s+".to_string().into();
        assert!(pattern.compile().unwrap().is_fancy());
    }

    #[test]
    fn test_basic_pattern_failure() {
        let pattern = RegexPattern::Basic(r"\s+(?!\S)".to_string());
        let err = pattern.compile().unwrap_err();
        assert!(matches!(err, ErrorWrapper::Basic(_)));
        assert!(err.to_string().contains("regex parse error"));
    }

    #[test]
    fn test_fancy_pattern_failure() {
        let pattern = RegexPattern::Fancy(r"[".to_string());
        let err = pattern.compile().unwrap_err();
        assert!(matches!(err, ErrorWrapper::Fancy(_)));
    }
}
