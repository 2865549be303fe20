use ahash::AHashMap;

/// Unique identifier for an entry (hymn) in a hymnal.
///
/// Hymn numbers are not always numeric ("301a", "632b"), so identifiers are
/// kept as strings throughout.
pub type EntryId = String;

/// A link from an entry to the same hymn in another edition of the hymnal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionLink {
    /// Edition identifier, usually the edition's name or year string.
    pub id: String,
    /// Publication year of the linked edition, when it parses as a number.
    pub year: Option<i32>,
}

/// A single searchable hymnal entry.
///
/// Entries are read-only from the query engine's perspective; all fields are
/// populated at load time and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Entry {
    pub id: EntryId,
    /// Explicit language override; `None` means the hymnal's default language.
    pub language: Option<String>,
    /// Reference to the tune this entry is sung to.
    pub tune: Option<String>,
    pub topics: Vec<String>,
    pub days: Vec<String>,
    pub deleted: bool,
    pub restricted: bool,
    pub has_refrain: bool,
    pub has_chorus: bool,
    pub has_repeat: bool,
    /// Body text, one element per line of verse.
    pub lines: Vec<String>,
    /// Cross-edition links, used by the `is:new` / `is:kept` predicates.
    pub editions: Vec<EditionLink>,
}

impl Entry {
    pub fn new(id: impl Into<EntryId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// First line of body text, used as a display title.
    pub fn first_line(&self) -> &str {
        self.lines.first().map(String::as_str).unwrap_or("")
    }
}

/// An in-memory hymnal document: entries in document order plus the
/// document-level lookup tables the query engine needs.
#[derive(Debug, Default)]
pub struct Hymnal {
    language: String,
    year: i32,
    entries: Vec<Entry>,
    by_id: AHashMap<EntryId, usize>,
    /// Tune id (including aliases) -> canonical tune id.
    tunes: AHashMap<String, String>,
}

impl Hymnal {
    pub fn new(language: impl Into<String>, year: i32) -> Self {
        Self {
            language: language.into(),
            year,
            ..Default::default()
        }
    }

    /// Append an entry, preserving document order. A duplicate id replaces
    /// the earlier id-table slot but both entries stay in the collection.
    pub fn push_entry(&mut self, entry: Entry) {
        self.by_id.insert(entry.id.clone(), self.entries.len());
        self.entries.push(entry);
    }

    /// Register a tune. `canonical` of `None` means the id is itself
    /// canonical.
    pub fn register_tune(&mut self, id: impl Into<String>, canonical: Option<String>) {
        let id = id.into();
        let canonical = canonical.unwrap_or_else(|| id.clone());
        self.tunes.insert(id, canonical);
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&Entry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Canonical form of a tune reference. References absent from the tune
    /// table are treated as already canonical.
    pub fn canonical_tune<'a>(&'a self, tune_ref: &'a str) -> &'a str {
        self.tunes.get(tune_ref).map(String::as_str).unwrap_or(tune_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_first_line() {
        let mut e = Entry::new("1");
        assert_eq!(e.first_line(), "");
        e.lines.push("Holy, holy, holy!".to_string());
        e.lines.push("Lord God Almighty".to_string());
        assert_eq!(e.first_line(), "Holy, holy, holy!");
    }

    #[test]
    fn test_entry_lookup() {
        let mut doc = Hymnal::new("en", 1986);
        doc.push_entry(Entry::new("1"));
        doc.push_entry(Entry::new("2a"));
        assert!(doc.entry("2a").is_some());
        assert!(doc.entry("3").is_none());
    }

    #[test]
    fn test_canonical_tune_alias() {
        let mut doc = Hymnal::new("en", 1986);
        doc.register_tune("nicaea", None);
        doc.register_tune("old-hundredth", Some("genevan-134".to_string()));
        assert_eq!(doc.canonical_tune("nicaea"), "nicaea");
        assert_eq!(doc.canonical_tune("old-hundredth"), "genevan-134");
        assert_eq!(doc.canonical_tune("unlisted"), "unlisted");
    }
}
