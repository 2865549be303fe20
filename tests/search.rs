//! End-to-end search tests against an XML-loaded hymnal.

use hymnq::document::Hymnal;
use hymnq::document::xml::parse_hymnal;
use hymnq::query::{compile, parse, search};

const HYMNAL: &str = r#"
<hymnal lang="fi" year="1986">
  <tunes>
    <tune id="nicaea"/>
    <tune id="old-hundredth" canonical="genevan-134"/>
  </tunes>
  <hymn id="E1" lang="en" tune="nicaea">
    <topic ref="heaven"/>
    <day ref="easter"/>
    <edition id="2016" year="2016"/>
    <verse>
      <line>Alleluia! Sing to Jesus</line>
      <line>His the sceptre, his the throne</line>
    </verse>
    <refrain><line>Alleluia, alleluia</line></refrain>
  </hymn>
  <hymn id="E2" tune="old-hundredth">
    <topic ref="creation"/>
    <edition id="1938" year="1938"/>
    <verse><line>Enkeli taivaan lausui näin</line></verse>
    <repeat><line>Nyt Jumalalle kunnia</line></repeat>
  </hymn>
  <hymn id="E3" lang="en" tune="genevan-134" deleted="true" restricted="true">
    <verse><line>Abide with me; fast falls the eventide</line></verse>
  </hymn>
</hymnal>
"#;

fn doc() -> Hymnal {
    parse_hymnal(HYMNAL).unwrap()
}

#[test]
fn empty_query_returns_all_in_document_order() {
    assert_eq!(search("", &doc()), vec!["E1", "E2", "E3"]);
    assert_eq!(search("   ", &doc()), vec!["E1", "E2", "E3"]);
}

#[test]
fn lang_explicit_matches_overrides() {
    assert_eq!(search("lang:en", &doc()), vec!["E1", "E3"]);
}

#[test]
fn lang_default_matches_unmarked_entries() {
    // "fi" is the document default, so it selects entries with no override
    assert_eq!(search("lang:fi", &doc()), vec!["E2"]);
}

#[test]
fn is_deleted_and_negation() {
    let doc = doc();
    assert_eq!(search("is:deleted", &doc), vec!["E3"]);
    assert_eq!(search("isnot:deleted lang:en", &doc), vec!["E1"]);
    assert_eq!(search("is:restricted", &doc), vec!["E3"]);
}

#[test]
fn topic_and_day_filters() {
    let doc = doc();
    assert_eq!(search("topic:heaven", &doc), vec!["E1"]);
    assert_eq!(search("day:easter", &doc), vec!["E1"]);
    assert_eq!(search("day:christmas", &doc), Vec::<String>::new());
}

#[test]
fn structural_features() {
    let doc = doc();
    assert_eq!(search("has:refrain", &doc), vec!["E1"]);
    assert_eq!(search("has:repeat", &doc), vec!["E2"]);
    assert_eq!(search("hasnot:refrain hasnot:deleted", &doc), vec!["E2"]);
}

#[test]
fn tune_same_as_entry() {
    let doc = doc();
    // E2's tune resolves through the alias table to genevan-134, which E3
    // references directly
    assert_eq!(search("tune:E2", &doc), vec!["E2", "E3"]);
    // Unresolvable reference filters nothing
    assert_eq!(search("tune:E99", &doc), vec!["E1", "E2", "E3"]);
}

#[test]
fn edition_markers() {
    let doc = doc();
    // E1 links only to a 2016 edition (after 1986): new and kept.
    // E2 links to 1938: neither. E3 has no links: new, not kept.
    assert_eq!(search("is:new", &doc), vec!["E1", "E3"]);
    assert_eq!(search("is:kept", &doc), vec!["E1"]);
    assert_eq!(search("isnot:new", &doc), vec!["E2"]);
}

#[test]
fn free_text_ignores_case_and_punctuation() {
    let doc = doc();
    assert_eq!(search("alleluia", &doc), vec!["E1"]);
    assert_eq!(search("Abide with me fast", &doc), vec!["E3"]);
}

#[test]
fn free_text_matches_within_a_single_line() {
    let doc = doc();
    // Spans two lines, so no contiguous line contains it
    assert_eq!(search("jesus his the sceptre", &doc), Vec::<String>::new());
}

#[test]
fn unknown_keyword_is_inert() {
    let doc = doc();
    assert_eq!(search("foo:bar lang:en", &doc), search("lang:en", &doc));
    assert_eq!(search("has:bogus", &doc), search("", &doc));
}

#[test]
fn conjunction_narrows_results() {
    let doc = doc();
    let both = search("lang:en is:deleted", &doc);
    let p_only = search("lang:en", &doc);
    let q_only = search("is:deleted", &doc);
    assert!(both.iter().all(|id| p_only.contains(id)));
    assert!(both.iter().all(|id| q_only.contains(id)));
    assert_eq!(both, vec!["E3"]);
}

#[test]
fn compile_accepts_pre_parsed_queries() {
    let doc = doc();
    let q = parse("topic:heaven");
    assert_eq!(compile(&q, &doc), vec!["E1"]);
    // The query object carries the raw input and the extraction result
    assert_eq!(q.raw, "topic:heaven");
    assert!(q.text.is_empty());
}

#[test]
fn keyword_with_quoted_value_is_inert_when_unrecognized() {
    let doc = doc();
    assert_eq!(
        search(r#"author:"Isaac Watts" lang:en"#, &doc),
        search("lang:en", &doc)
    );
}
