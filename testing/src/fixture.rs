use pubcore::model::PublicationData;

/// A single journal publication with neither links nor abstract.
pub const SINGLE_JOURNAL: &str = r#"{
    "journalPublications": [{
        "id": "a1",
        "authors": "Smith, J.",
        "year": 2020,
        "title": "X",
        "journal": "Econometrica"
    }]
}"#;

/// A document shaped like a typical research page.
pub const RESEARCH: &str = r#"{
    "journalPublications": [
        {
            "id": "jp-trade",
            "authors": "Smith, J. and Jones, A.",
            "year": 2023,
            "title": "Trade and Labor Markets",
            "journal": "American Economic Review",
            "journalInfo": "113(4): 1010-1050",
            "links": {
                "materials": "https://example.org/trade/replication",
                "thread": "https://example.org/trade/thread",
                "paper": "https://example.org/trade/paper.pdf"
            },
            "abstract": "We study <em>trade shocks</em> and local labor markets."
        },
        {
            "id": "jp-firms",
            "authors": "Smith, J.",
            "year": "forthcoming",
            "title": "Firm Dynamics",
            "journal": "Journal of Political Economy"
        },
        {
            "id": "jp-notes",
            "authors": "Smith, J.",
            "title": "Notes on Measurement",
            "abstract": "A short note."
        }
    ],
    "workingPapers": [
        {
            "id": "wp-housing",
            "title": "Housing Supply",
            "coauthors": "with B. Lee",
            "links": {
                "preprint": "https://osf.io/abcde",
                "ungated": "https://osf.io/fghij"
            }
        },
        {
            "id": "wp-credit",
            "title": "Credit Frictions",
            "abstract": "Credit frictions matter."
        },
        {
            "id": "wp-early",
            "title": "Early Stage Project"
        }
    ]
}"#;

/// A document in which an entry id is reused across the two sequences.
pub const DUPLICATE_IDS: &str = r#"{
    "journalPublications": [
        {"id": "p1", "authors": "Smith, J.", "title": "First"}
    ],
    "workingPapers": [
        {"id": "p1", "title": "Second", "abstract": "Collides."}
    ]
}"#;

pub fn single_journal() -> PublicationData {
    serde_json::from_str(SINGLE_JOURNAL)
        .expect("fixture must be valid")
}

pub fn research() -> PublicationData {
    serde_json::from_str(RESEARCH)
        .expect("fixture must be valid")
}

pub fn duplicate_ids() -> PublicationData {
    serde_json::from_str(DUPLICATE_IDS)
        .expect("fixture must be valid")
}
