//! Text/binary classification of file content.

use content_inspector::{inspect, ContentType};

/// Number of leading bytes inspected to classify a file.
pub const SAMPLE_LEN: usize = 64;

/// The leading bytes of `content` used for classification.
pub fn sample(content: &[u8]) -> &[u8] {
    &content[..content.len().min(SAMPLE_LEN)]
}

/// Check whether a sample of bytes looks like human-readable text.
///
/// The sample is binary when it carries NUL bytes or a known binary
/// signature, is not UTF-8, or contains control characters other than
/// whitespace. A multi-byte sequence cut short at the end of the sample is
/// accepted, since the sample boundary may fall inside a character.
pub fn looks_like_text(sample: &[u8]) -> bool {
    if matches!(inspect(sample), ContentType::BINARY) {
        return false;
    }

    let text = match std::str::from_utf8(sample) {
        Ok(text) => text,
        Err(err) if err.error_len().is_none() => {
            std::str::from_utf8(&sample[..err.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return false,
    };

    !text.chars().any(|c| c.is_control() && !c.is_whitespace())
}
