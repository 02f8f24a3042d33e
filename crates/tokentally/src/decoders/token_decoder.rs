//! # Token Decoder Trait

use crate::{errors::TallyResult, types::TokenType};

/// A trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens, appending their bytes to `buf`.
    ///
    /// ## Errors
    /// * [`crate::TallyError::UnknownToken`] for the first id with no mapping;
    ///   `buf` may then hold the bytes of the preceding ids.
    fn decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TallyResult<()>;

    /// Decode tokens to their exact bytes.
    fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> TallyResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.decode_append_bytes(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decode tokens to text, replacing invalid UTF-8 sequences.
    fn decode_to_string(
        &self,
        tokens: &[T],
    ) -> TallyResult<String> {
        let buf = self.decode_to_bytes(tokens)?;
        Ok(match String::from_utf8(buf) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }
}
