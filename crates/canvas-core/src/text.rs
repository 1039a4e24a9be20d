use unicode_normalization::UnicodeNormalization;

/// Canonicalize a user-entered title.
///
/// Goals:
/// - Deterministic across platforms and input editors (NFC normalization)
/// - No surrounding whitespace
///
/// Internal whitespace, punctuation, and casing are left untouched.
pub fn canonicalize_title(input: &str) -> String {
    input.trim().nfc().collect()
}
