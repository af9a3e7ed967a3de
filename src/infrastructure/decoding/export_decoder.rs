use crate::domain::Conversation;

/// Decode one raw export file into a `Conversation`.
///
/// The exporter escapes each raw UTF-8 *byte* of non-ASCII text as its own
/// `\u00XX` sequence, as if the byte string were Latin-1. The repair pass
/// collapses every such sequence back to the byte it names; the resulting
/// byte string is then reinterpreted as UTF-8, which recovers the original
/// multi-byte characters. Decoding is atomic: any failure yields an error
/// and no partial conversation.
pub fn decode_export(data: &[u8]) -> Result<Conversation, DecodeError> {
    let repaired = repair_escaped_bytes(data);
    let text =
        String::from_utf8(repaired).map_err(|e| DecodeError::InvalidUtf8(e.utf8_error()))?;
    let conversation = serde_json::from_str(&text)?;
    Ok(conversation)
}

/// Inverse of the repair pass: re-encode text the way the exporter would,
/// escaping every non-ASCII byte as `\u00XX`. `decode` after `escape` is the
/// identity on valid UTF-8 text.
pub fn escape_to_export(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &byte in text.as_bytes() {
        if byte.is_ascii() {
            out.push(byte as char);
        } else {
            out.push_str(&format!("\\u00{:02x}", byte));
        }
    }
    out
}

/// Replace every literal `\u00XX` sequence with the byte `XX`. The scan is
/// blind, exactly inverting the exporter's per-byte escaping; it does not
/// track JSON string context.
fn repair_escaped_bytes(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        if let Some(byte) = match_byte_escape(&input[i..]) {
            out.push(byte);
            i += 6;
        } else {
            out.push(input[i]);
            i += 1;
        }
    }
    out
}

/// Parse a leading `\u00XX` sequence, returning the byte it names.
fn match_byte_escape(input: &[u8]) -> Option<u8> {
    if input.len() < 6 || !input.starts_with(b"\\u00") {
        return None;
    }
    let hi = hex_value(input[4])?;
    let lo = hex_value(input[5])?;
    Some(hi << 4 | lo)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("repaired bytes are not valid utf-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}
