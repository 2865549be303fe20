/// Collapse whitespace runs to single spaces, lowercase, and trim.
///
/// This is the normalization applied to the free-text residue of a query.
/// Idempotent: folding already-folded text is a no-op.
pub fn fold_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.to_lowercase()
}

/// Normalize a line of verse text for substring matching.
///
/// Strips sentence punctuation and smart quotes, then folds whitespace and
/// case the same way as [`fold_text`]. Applied identically to both sides of
/// a free-text comparison so that "alleluia" matches "Alleluia!".
pub fn normalize_line(s: &str) -> String {
    let stripped: String = s.chars().filter(|&c| !is_stripped_punct(c)).collect();
    fold_text(&stripped)
}

fn is_stripped_punct(c: char) -> bool {
    matches!(
        c,
        '\u{2018}' | '\u{2019}' | '\u{201C}' | '\u{201D}' // smart quotes
            | '.' | ',' | ';' | ':' | '?' | '!' | '-'
    )
}
