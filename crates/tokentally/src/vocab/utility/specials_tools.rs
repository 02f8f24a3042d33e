//! # Special Tokens Tools

/// Generate a "<|$name|>" string literal.
#[macro_export]
macro_rules! carrot_str {
    ($value:literal) => {
        concat!("<|", $value, "|>")
    };
}

/// Generate a "<|$value|>" String.
pub fn format_carrot<S: AsRef<str>>(value: S) -> String {
    format!("<|{}|>", value.as_ref())
}

/// Generate a "<|`reserved_special_token_{$index}`|>" String.
pub fn format_reserved_special_token(index: usize) -> String {
    format!("<|reserved_special_token_{index}|>")
}

/// Declare special token constants with [`carrot_str!()`].
///
/// Declare 1:
/// - ``declare_carrot_special!(CONST_NAME, const_value);``
///
/// Declare many:
/// - ``declare_carrot_special!( (N1, V1), (N2, V2), ... );``
#[macro_export]
macro_rules! declare_carrot_special {
    ($name:ident, $value:literal $(,)?) => {
        #[doc = concat!("Special token: `<|", $value, "|>`")]
        pub const $name: &str = $crate::carrot_str!($value);
    };

    (($name:ident, $value:literal) $(,)?) => {
        $crate::declare_carrot_special!($name, $value);
    };

    (($name:ident, $value:literal), $($rest:tt)*) => {
        $crate::declare_carrot_special!($name, $value);
        $crate::declare_carrot_special!($($rest)*);
    };
}
