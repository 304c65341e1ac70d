use itertools::Itertools;
use crate::model::PublicationData;

impl PublicationData {
    /// Entry ids that occur more than once across both sequences, each
    /// reported once.
    ///
    /// All entries of a page share one namespace for the abstract anchors
    /// (`abstract-<id>`), so a duplicate makes a toggle open the wrong
    /// abstract.
    pub fn duplicate_ids(&self) -> Vec<&str> {
        self.journal_publications()
            .iter()
            .map(|entry| entry.id.as_str())
            .chain(self.working_papers().iter().map(|entry| entry.id.as_str()))
            .duplicates()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        JournalEntry,
        PublicationData,
        WorkingEntry,
    };

    fn journal(id: &str) -> JournalEntry {
        JournalEntry { id: id.into(), .. Default::default() }
    }

    fn working(id: &str) -> WorkingEntry {
        WorkingEntry { id: id.into(), .. Default::default() }
    }

    #[test]
    fn unique() {
        let data = PublicationData {
            journal_publications: Some(vec![journal("a1"), journal("a2")]),
            working_papers: Some(vec![working("w1")]),
        };
        assert!(data.duplicate_ids().is_empty());
        assert!(PublicationData::default().duplicate_ids().is_empty());
    }

    #[test]
    fn duplicates_across_sequences() {
        let data = PublicationData {
            journal_publications: Some(vec![journal("a1"), journal("x"), journal("a1")]),
            working_papers: Some(vec![working("x"), working("a1"), working("w1")]),
        };
        assert_eq!(data.duplicate_ids(), ["a1", "x"]);
    }
}
