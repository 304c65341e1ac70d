//! Markup generation for publication listings.
//!
//! Every function in here is a pure mapping from records to markup
//! strings.  None of the text taken from the records is escaped, the
//! data source is trusted to provide markup-safe values.

use crate::model::{
    JournalEntry,
    WorkingEntry,
};

pub mod abstract_toggle;
pub mod entry;
pub mod links;

pub use abstract_toggle::abstract_toggle;
pub use entry::{
    journal_entry,
    working_entry,
};
pub use links::link_list;

/// Separator placed between adjacent link items.
pub const LINK_SEPARATOR: &str = r#"<span class="paper-link-sep">|</span>"#;

/// Whether an entry is the final one of its sequence; the final entry is
/// the only one rendered without a trailing divider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Inner,
    Last,
}

impl Position {
    pub fn of(index: usize, total: usize) -> Self {
        if index + 1 == total {
            Position::Last
        } else {
            Position::Inner
        }
    }

    pub(crate) fn divider(&self) -> &'static str {
        match self {
            Position::Inner => "<hr>",
            Position::Last => "",
        }
    }
}

fn render_sequence<T>(
    entries: &[T],
    render: impl Fn(&T, Position) -> String,
) -> String {
    let total = entries.len();
    entries.iter()
        .enumerate()
        .map(|(index, entry)| render(entry, Position::of(index, total)))
        .collect()
}

/// Render the full journal publication listing, in sequence order.
pub fn render_journal_list(entries: &[JournalEntry]) -> String {
    render_sequence(entries, journal_entry)
}

/// Render the full working paper listing, in sequence order.
pub fn render_working_list(entries: &[WorkingEntry]) -> String {
    render_sequence(entries, working_entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position() {
        assert_eq!(Position::of(0, 1), Position::Last);
        assert_eq!(Position::of(0, 2), Position::Inner);
        assert_eq!(Position::of(1, 2), Position::Last);
    }

    #[test]
    fn empty_sequences() {
        assert_eq!(render_journal_list(&[]), "");
        assert_eq!(render_working_list(&[]), "");
    }

    #[test]
    fn dividers_between_entries() {
        let entries = (0..4)
            .map(|i| WorkingEntry {
                id: format!("w{i}"),
                title: format!("Title {i}"),
                .. Default::default()
            })
            .collect::<Vec<_>>();
        let output = render_working_list(&entries);
        assert_eq!(output.matches("<li>").count(), 4);
        assert_eq!(output.matches("<hr>").count(), 3);
        assert!(!output.trim_end().ends_with("<hr>"));
        // order preserved
        let first = output.find("Title 0");
        let last = output.find("Title 3");
        assert!(first < last);
    }
}
