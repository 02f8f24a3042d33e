//! # Pattern Tools

/// Concatenate string literals with a separator, at compile time.
///
/// # Examples
///
/// ```rust
/// use tokentally::join_strs;
///
/// assert_eq!(join_strs!(",", ("a", "b", "c")), "a,b,c");
/// assert_eq!(join_strs!(";", ("OnlyOne")), "OnlyOne");
/// ```
#[macro_export]
macro_rules! join_strs {
    ($sep:literal, ($first:literal $(, $rest:literal)* $(,)?)) => {
        concat!($first $(, $sep, $rest)*)
    };
}

/// An extension of [`join_strs!()`] which uses the "|" as the separator.
///
/// Pre-tokenizer patterns are written one alternative per line with this.
#[macro_export]
macro_rules! join_patterns {
    ($($e:expr),* $(,)?) => { $crate::join_strs!("|", ($($e),*)) };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_join_patterns() {
        const P: &str = join_patterns!(r"\p{L}+", r"\p{N}{1,3}", r"\s+");
        assert_eq!(P, r"\p{L}+|\p{N}{1,3}|\s+");
    }
}
