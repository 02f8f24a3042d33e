//! # Vocabulary Utilities

pub mod pattern_tools;
pub mod specials_tools;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
