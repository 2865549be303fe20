//! Hymnal document model.
//!
//! [`Hymnal`] is the in-memory document the query engine runs against;
//! [`xml`] loads one from the XML hymnal format. The engine itself only
//! depends on the [`DocumentView`] read capability, so tests (and any future
//! document source) can supply their own implementation.

pub mod types;
pub mod xml;

pub use types::{EditionLink, Entry, EntryId, Hymnal};

/// Read access the query engine requires from a document.
///
/// Everything is a snapshot read; implementations must not mutate under an
/// active borrow.
pub trait DocumentView {
    /// All entries, in document order.
    fn entries(&self) -> &[Entry];

    /// The document's default language code.
    fn default_language(&self) -> &str;

    /// The document's publication year.
    fn year(&self) -> i32;

    /// Canonical tune id used by the entry with the given id, if the entry
    /// exists and carries a tune reference.
    fn resolve_tune(&self, entry_id: &str) -> Option<String>;

    /// Canonical form of a tune reference.
    fn canonical_tune(&self, tune_ref: &str) -> String;
}

impl DocumentView for Hymnal {
    fn entries(&self) -> &[Entry] {
        Hymnal::entries(self)
    }

    fn default_language(&self) -> &str {
        self.language()
    }

    fn year(&self) -> i32 {
        Hymnal::year(self)
    }

    fn resolve_tune(&self, entry_id: &str) -> Option<String> {
        let tune_ref = self.entry(entry_id)?.tune.as_deref()?;
        Some(Hymnal::canonical_tune(self, tune_ref).to_string())
    }

    fn canonical_tune(&self, tune_ref: &str) -> String {
        Hymnal::canonical_tune(self, tune_ref).to_string()
    }
}
