use memchr::memmem;

use crate::document::{DocumentView, Entry};
use crate::utils::normalize_line;

/// Structural features testable with `has:` / `hasnot:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Refrain,
    Chorus,
    Repeat,
    Deleted,
}

impl Feature {
    fn from_value(value: &str) -> Option<Self> {
        match value {
            "refrain" => Some(Feature::Refrain),
            "chorus" => Some(Feature::Chorus),
            "repeat" => Some(Feature::Repeat),
            "deleted" => Some(Feature::Deleted),
            _ => None,
        }
    }
}

/// Entry markers testable with `is:` / `isnot:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Deleted,
    Restricted,
    /// No linked edition dated before this document's year: the hymn was
    /// first introduced at or after this edition.
    New,
    /// Some linked edition dated after this document's year: the hymn
    /// survived into a later edition.
    Kept,
}

impl Marker {
    fn from_value(value: &str) -> Option<Self> {
        match value {
            "deleted" => Some(Marker::Deleted),
            "restricted" => Some(Marker::Restricted),
            "new" => Some(Marker::New),
            "kept" => Some(Marker::Kept),
            _ => None,
        }
    }
}

/// A boolean test over a single entry. All predicates of a query are
/// conjoined; an entry must pass every one to match.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Entry has a topic reference equal to the id.
    TopicEquals(String),
    /// Entry's canonical tune id equals the (already resolved) id.
    TuneResolvesTo(String),
    /// `None` means "no explicit override" (the document default language).
    LanguageEquals(Option<String>),
    /// Entry has a day reference equal to the id.
    DayEquals(String),
    HasFeature(Feature),
    NotHasFeature(Feature),
    IsMarker(Marker),
    IsNotMarker(Marker),
    /// Some line of the entry contains the normalized needle. The needle is
    /// held as a closed value and compared byte-wise, never interpolated
    /// into any query text.
    TextContains(String),
}

/// Build the predicate for one keyword occurrence.
///
/// Returns `None` for unrecognized keyword names, unrecognized values under
/// a recognized keyword, and `tune:` references that don't resolve. A miss
/// simply contributes no filtering; a search never hard-fails on its input.
pub fn build_predicate<V: DocumentView>(name: &str, value: &str, doc: &V) -> Option<Predicate> {
    match name {
        "topic" => Some(Predicate::TopicEquals(value.to_string())),
        "tune" => doc.resolve_tune(value).map(Predicate::TuneResolvesTo),
        "lang" => {
            if value == doc.default_language() {
                Some(Predicate::LanguageEquals(None))
            } else {
                Some(Predicate::LanguageEquals(Some(value.to_string())))
            }
        }
        "day" => Some(Predicate::DayEquals(value.to_string())),
        "has" => Feature::from_value(value).map(Predicate::HasFeature),
        "hasnot" => Feature::from_value(value).map(Predicate::NotHasFeature),
        "is" => Marker::from_value(value).map(Predicate::IsMarker),
        "isnot" => Marker::from_value(value).map(Predicate::IsNotMarker),
        _ => None,
    }
}

impl Predicate {
    /// Test one entry. Pure; the document is a read-only context used for
    /// tune canonicalization and the edition-year comparisons.
    pub fn matches<V: DocumentView>(&self, entry: &Entry, doc: &V) -> bool {
        match self {
            Predicate::TopicEquals(id) => entry.topics.iter().any(|t| t == id),
            Predicate::TuneResolvesTo(id) => entry
                .tune
                .as_deref()
                .map(|t| doc.canonical_tune(t) == *id)
                .unwrap_or(false),
            Predicate::LanguageEquals(None) => entry.language.is_none(),
            Predicate::LanguageEquals(Some(code)) => entry.language.as_deref() == Some(code),
            Predicate::DayEquals(id) => entry.days.iter().any(|d| d == id),
            Predicate::HasFeature(f) => has_feature(entry, *f),
            Predicate::NotHasFeature(f) => !has_feature(entry, *f),
            Predicate::IsMarker(m) => has_marker(entry, doc, *m),
            Predicate::IsNotMarker(m) => !has_marker(entry, doc, *m),
            Predicate::TextContains(needle) => entry
                .lines
                .iter()
                .any(|line| memmem::find(normalize_line(line).as_bytes(), needle.as_bytes()).is_some()),
        }
    }
}

fn has_feature(entry: &Entry, feature: Feature) -> bool {
    match feature {
        Feature::Refrain => entry.has_refrain,
        Feature::Chorus => entry.has_chorus,
        Feature::Repeat => entry.has_repeat,
        Feature::Deleted => entry.deleted,
    }
}

fn has_marker<V: DocumentView>(entry: &Entry, doc: &V, marker: Marker) -> bool {
    match marker {
        Marker::Deleted => entry.deleted,
        Marker::Restricted => entry.restricted,
        // Edition years compare numerically; links without a parsable year
        // contribute nothing to either test
        Marker::New => !entry
            .editions
            .iter()
            .any(|ed| ed.year.is_some_and(|y| y < doc.year())),
        Marker::Kept => entry
            .editions
            .iter()
            .any(|ed| ed.year.is_some_and(|y| y > doc.year())),
    }
}
