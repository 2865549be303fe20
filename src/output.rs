//! Output formatting for search results

use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::document::{DocumentView, EntryId};

/// One search result, as exposed on the JSON surface.
#[derive(Debug, Serialize)]
pub struct MatchRecord<'a> {
    pub id: &'a str,
    pub first_line: &'a str,
}

/// Collect the display records for a set of matched ids.
pub fn match_records<'a, V: DocumentView>(doc: &'a V, ids: &'a [EntryId]) -> Vec<MatchRecord<'a>> {
    doc.entries()
        .iter()
        .filter(|entry| ids.contains(&entry.id))
        .map(|entry| MatchRecord {
            id: &entry.id,
            first_line: entry.first_line(),
        })
        .collect()
}

/// Print matches as `<id>  <first line>`, one per line, id colorized.
pub fn print_matches<V: DocumentView>(doc: &V, ids: &[EntryId], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for record in match_records(doc, ids) {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        write!(stdout, "{}", record.id)?;
        stdout.reset()?;
        writeln!(stdout, "  {}", record.first_line)?;
    }

    Ok(())
}

/// Print matches as a JSON array of `{id, first_line}` records.
pub fn print_json<V: DocumentView>(doc: &V, ids: &[EntryId]) -> io::Result<()> {
    let records = match_records(doc, ids);
    let json = serde_json::to_string_pretty(&records)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Entry, Hymnal};

    #[test]
    fn test_match_records_follow_document_order() {
        let mut doc = Hymnal::new("en", 2000);
        for id in ["1", "2", "3"] {
            let mut e = Entry::new(id);
            e.lines.push(format!("Hymn {id}"));
            doc.push_entry(e);
        }
        // Ids out of order; records still come back in document order
        let ids = vec!["3".to_string(), "1".to_string()];
        let records = match_records(&doc, &ids);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "3");
        assert_eq!(records[0].first_line, "Hymn 1");
    }
}
