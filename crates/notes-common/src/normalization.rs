use unicode_normalization::UnicodeNormalization;

/// Normalize text: trim, collapse whitespace (U+0020 only), Unicode NFC normalization, BOM removal.
pub fn normalize_text(text: &str) -> String {
    let no_bom = text.replace('\u{FEFF}', "");
    let nfc: String = no_bom.nfc().collect();
    let mut result = String::with_capacity(nfc.len());
    let mut prev_space = false;
    for c in nfc.chars() {
        if c.is_whitespace() {
            if !prev_space {
                result.push(' ');
                prev_space = true;
            }
        } else {
            result.push(c);
            prev_space = false;
        }
    }
    result.trim().to_string()
}

/// Search folding: NFC, trim, lowercase. Applied to both the query and the
/// fields it is matched against so the comparison is case-insensitive.
pub fn fold_for_search(text: &str) -> String {
    let nfc: String = text.trim().nfc().collect();
    nfc.to_lowercase()
}

/// True when the already-folded `needle` occurs in `haystack` after folding.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || fold_for_search(haystack).contains(needle)
}

fn truncate_to_chars(s: &str, max_chars: usize) -> &str {
    if s.chars().count() <= max_chars {
        return s;
    }
    let byte_idx = s
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len());
    &s[..byte_idx]
}

/// Canonical title for uploaded notes: normalize_text + truncate to 120 chars.
pub fn canonical_title(title: &str) -> String {
    let normalized = normalize_text(title);
    truncate_to_chars(&normalized, 120).to_string()
}

/// Canonical tag label: normalize_text + truncate to 32 chars.
pub fn canonical_tag(tag: &str) -> String {
    let normalized = normalize_text(tag);
    truncate_to_chars(&normalized, 32).to_string()
}
