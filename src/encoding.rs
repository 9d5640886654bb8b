//! Byte-order-mark normalization for configuration files.
//!
//! Files authored on some platforms carry a UTF-8 or UTF-16 byte-order mark.
//! Without stripping it the TOML decoder would see spurious leading
//! characters and misparse the first key.

use std::borrow::Cow;
use thiserror::Error;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("invalid UTF-8 byte sequence at offset {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("UTF-16 content has a truncated code unit ({len} bytes)")]
    TruncatedUtf16 { len: usize },

    #[error("UTF-16 content contains an unpaired surrogate")]
    UnpairedSurrogate,
}

/// Strips a leading byte-order mark and returns UTF-8 text.
///
/// UTF-16 content is transcoded; input without a mark passes through
/// unchanged as already-UTF-8.
pub fn normalize(bytes: &[u8]) -> Result<Cow<'_, str>, TranscodeError> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return utf8_text(rest).map(Cow::Borrowed);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes).map(Cow::Owned);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes).map(Cow::Owned);
    }
    utf8_text(bytes).map(Cow::Borrowed)
}

fn utf8_text(bytes: &[u8]) -> Result<&str, TranscodeError> {
    std::str::from_utf8(bytes).map_err(|e| TranscodeError::InvalidUtf8 {
        offset: e.valid_up_to(),
    })
}

fn decode_utf16(bytes: &[u8], read_unit: fn([u8; 2]) -> u16) -> Result<String, TranscodeError> {
    if bytes.len() % 2 != 0 {
        return Err(TranscodeError::TruncatedUtf16 { len: bytes.len() });
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| read_unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| TranscodeError::UnpairedSurrogate)
}
