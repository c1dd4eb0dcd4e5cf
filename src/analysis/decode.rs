//! Lenient decoding of uploaded bytes.

/// Decode UTF-8, silently dropping any invalid byte sequences.
///
/// ```
/// use spellreport::analysis::decode::decode_lenient;
///
/// assert_eq!(decode_lenient(b"caf\xffe"), "cafe");
/// ```
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
