use crate::document::{DocumentView, EntryId};
use crate::query::parser::{SearchQuery, parse};
use crate::query::predicate::{Predicate, build_predicate};
use crate::utils::normalize_line;

/// Compile a parsed query against a document and return the matching entry
/// ids, in document order. The compiler does no ranking.
///
/// Each keyword occurrence contributes at most one predicate; keyword misses
/// (unknown names, unknown values, unresolvable `tune:` references) drop out
/// silently. An empty query matches every entry.
pub fn compile<V: DocumentView>(query: &SearchQuery, doc: &V) -> Vec<EntryId> {
    if query.is_empty() {
        return doc.entries().iter().map(|entry| entry.id.clone()).collect();
    }

    let mut predicates: Vec<Predicate> = query
        .keywords
        .iter()
        .filter_map(|(name, value)| build_predicate(name, value, doc))
        .collect();

    if !query.text.is_empty() {
        predicates.push(Predicate::TextContains(normalize_line(&query.text)));
    }

    doc.entries()
        .iter()
        .filter(|entry| predicates.iter().all(|p| p.matches(entry, doc)))
        .map(|entry| entry.id.clone())
        .collect()
}

/// Parse and compile in one step.
pub fn search<V: DocumentView>(raw: &str, doc: &V) -> Vec<EntryId> {
    compile(&parse(raw), doc)
}
