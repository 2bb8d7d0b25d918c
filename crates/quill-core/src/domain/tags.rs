//! Tag codec - a post's tags travel through storage as a JSON array in a
//! single text column.

/// Encode tags as a JSON array literal.
pub fn encode(tags: &[String]) -> String {
    serde_json::to_string(tags).unwrap_or_else(|_| "[]".to_string())
}

/// Decode a stored tags column back into an ordered list.
///
/// SQL NULL, the literal `[]`, and malformed JSON all decode to an empty
/// list. Decoding never fails: a corrupted row loses its tags but stays
/// readable.
pub fn decode(raw: Option<&str>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some("[]") => Vec::new(),
        Some(json) => serde_json::from_str(json).unwrap_or_default(),
    }
}
