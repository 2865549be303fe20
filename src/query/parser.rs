use regex::Regex;
use std::sync::LazyLock;

use crate::utils::fold_text;

/// A keyword token: `topic:heaven` matches as `<name>:<value>`, where the
/// value is a run of alphanumerics/underscore/hyphen or a double-quoted
/// string (for multi-word values such as author names). The alphanumeric
/// class is Unicode-wide (`\w`), so accented values like
/// `topic:ylösnousemus` tokenize whole; keyword names stay ASCII. Anything
/// else, including `3:30` or `http://...`, stays in the free text.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([A-Za-z_-]+):("[^"]*"|[\w-]+)"#).unwrap());

/// Parsed search query representation
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// The original input string, unmodified.
    pub raw: String,
    /// Free-text residue after keyword extraction: whitespace-collapsed,
    /// lowercased, trimmed.
    pub text: String,
    /// `(name, value)` pairs in order of appearance. Names are lowercased;
    /// values are verbatim with surrounding quotes stripped.
    pub keywords: Vec<(String, String)>,
}

impl SearchQuery {
    /// Check if the query filters nothing (no text and no keywords)
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.keywords.is_empty()
    }
}

/// Parse a raw search string into a [`SearchQuery`].
///
/// Never fails: malformed or unrecognized keyword names are still extracted
/// syntactically. Whether a name means anything is the compiler's concern,
/// not the parser's.
pub fn parse(raw: &str) -> SearchQuery {
    let mut keywords = Vec::new();
    let mut residue = String::with_capacity(raw.len());
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(raw) {
        let m = caps.get(0).unwrap();
        residue.push_str(&raw[last..m.start()]);
        residue.push(' ');
        last = m.end();

        let name = caps[1].to_lowercase();
        let value = caps[2].trim_matches('"').to_string();
        keywords.push((name, value));
    }
    residue.push_str(&raw[last..]);

    SearchQuery {
        raw: raw.to_string(),
        text: fold_text(&residue),
        keywords,
    }
}
