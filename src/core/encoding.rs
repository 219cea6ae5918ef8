use crate::domain::model::EncodingPolicy;
use crate::utils::error::{CaserError, Result};
use std::borrow::Cow;

/// 將原始位元組轉為文字
///
/// Valid UTF-8 is borrowed as-is. Under [`EncodingPolicy::Strict`] the first
/// malformed sequence is reported by byte offset; under
/// [`EncodingPolicy::Replace`] every malformed sequence becomes U+FFFD.
pub fn decode(bytes: &[u8], policy: EncodingPolicy) -> Result<Cow<'_, str>> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(e) => match policy {
            EncodingPolicy::Strict => Err(CaserError::InvalidEncoding {
                valid_up_to: e.valid_up_to(),
            }),
            EncodingPolicy::Replace => {
                tracing::warn!(
                    "⚠️ Malformed UTF-8 at byte {}, substituting replacement characters",
                    e.valid_up_to()
                );
                Ok(String::from_utf8_lossy(bytes))
            }
        },
    }
}

pub fn decode_owned(bytes: Vec<u8>, policy: EncodingPolicy) -> Result<String> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            let bytes = e.into_bytes();
            decode(&bytes, policy).map(Cow::into_owned)
        }
    }
}
