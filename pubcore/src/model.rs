use serde::{Deserialize, Serialize};

/// The root document, as served from `data/research.json`.
///
/// Both sequences are kept in document order, which is also the order
/// they are rendered in.  A sequence missing from the document is kept
/// as `None` so that the corresponding container is left untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_publications: Option<Vec<JournalEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_papers: Option<Vec<WorkingEntry>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(deserialize_with = "impls::entry_id")]
    pub id: String,
    pub authors: String,
    #[serde(default)]
    pub year: Option<Year>,
    pub title: String,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(default)]
    pub journal_info: Option<String>,
    #[serde(default)]
    pub links: Option<LinkSet>,
    #[serde(default)]
    pub r#abstract: Option<TrustedHtml>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingEntry {
    #[serde(deserialize_with = "impls::entry_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub coauthors: Option<String>,
    #[serde(default)]
    pub links: Option<LinkSet>,
    #[serde(default)]
    pub r#abstract: Option<TrustedHtml>,
}

/// Publication year; the data may carry either a number or free text
/// such as "forthcoming".
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Float(f64),
    Text(String),
}

/// The named external links attached to an entry.  Keys outside of the
/// known vocabulary are dropped on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LinkSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preprint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ungated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,
}

/// The kinds of links a `LinkSet` may hold, in rendering priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Thread,
    Preprint,
    Paper,
    Ungated,
    Materials,
}

/// Markup supplied by the data source that is inserted into the page
/// verbatim.
///
/// No escaping or sanitization is ever applied to the contents; whoever
/// produces the document is responsible for only placing trusted markup
/// in here.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

mod impls;
