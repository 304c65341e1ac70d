use serde::{
    Deserialize,
    Deserializer,
};
use std::{
    fmt,
    ops::Deref,
    str::FromStr,
};
use crate::{
    error::ValueError,
    model::*,
};

/// Mirrors a truthiness check on an optional text field: absent and
/// empty are treated alike.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Entry ids may be given as numbers; they are kept in the textual form
/// used for the abstract anchors.
pub(crate) fn entry_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

impl PublicationData {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValueError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn journal_publications(&self) -> &[JournalEntry] {
        self.journal_publications.as_deref().unwrap_or_default()
    }

    pub fn working_papers(&self) -> &[WorkingEntry] {
        self.working_papers.as_deref().unwrap_or_default()
    }
}

impl FromStr for PublicationData {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl JournalEntry {
    pub fn year(&self) -> Option<&Year> {
        self.year.as_ref().filter(|year| year.is_present())
    }

    pub fn journal(&self) -> Option<&str> {
        non_empty(&self.journal)
    }

    pub fn journal_info(&self) -> Option<&str> {
        non_empty(&self.journal_info)
    }

    pub fn abstract_html(&self) -> Option<&TrustedHtml> {
        self.r#abstract.as_ref().filter(|html| !html.is_empty())
    }
}

impl WorkingEntry {
    pub fn coauthors(&self) -> Option<&str> {
        non_empty(&self.coauthors)
    }

    pub fn abstract_html(&self) -> Option<&TrustedHtml> {
        self.r#abstract.as_ref().filter(|html| !html.is_empty())
    }
}

impl Year {
    /// A zero or an empty string is treated as no year at all.
    pub fn is_present(&self) -> bool {
        match self {
            Year::Number(n) => *n != 0,
            Year::Float(n) => *n != 0.0,
            Year::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Year::Number(n) => write!(f, "{n}"),
            // whole values print without a fractional part, e.g. `2020`
            Year::Float(n) => write!(f, "{n}"),
            Year::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Year {
    fn from(value: i64) -> Self {
        Year::Number(value)
    }
}

impl From<&str> for Year {
    fn from(value: &str) -> Self {
        Year::Text(value.to_string())
    }
}

impl LinkKind {
    pub const ALL: [LinkKind; 5] = [
        LinkKind::Thread,
        LinkKind::Preprint,
        LinkKind::Paper,
        LinkKind::Ungated,
        LinkKind::Materials,
    ];

    pub fn icon(&self) -> &'static str {
        match self {
            LinkKind::Thread => "fa fa-cloud",
            LinkKind::Preprint => "ai ai-osf",
            LinkKind::Paper => "ai ai-open-access",
            LinkKind::Ungated => "ai ai-osf",
            LinkKind::Materials => "ai ai-open-data",
        }
    }

    pub fn icon_color(&self) -> Option<&'static str> {
        match self {
            LinkKind::Thread => Some("#87CEEB"),
            LinkKind::Materials => Some("#696969"),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Thread => "Thread",
            LinkKind::Preprint => "Preprint",
            LinkKind::Paper => "Paper",
            LinkKind::Ungated => "Ungated",
            LinkKind::Materials => "Materials",
        }
    }
}

impl LinkSet {
    pub fn get(&self, kind: LinkKind) -> Option<&str> {
        non_empty(match kind {
            LinkKind::Thread => &self.thread,
            LinkKind::Preprint => &self.preprint,
            LinkKind::Paper => &self.paper,
            LinkKind::Ungated => &self.ungated,
            LinkKind::Materials => &self.materials,
        })
    }

    /// The links that are set, in rendering priority order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkKind, &str)> + '_ {
        LinkKind::ALL.into_iter()
            .filter_map(|kind| self.get(kind).map(|url| (kind, url)))
    }
}

impl Deref for TrustedHtml {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for TrustedHtml {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TrustedHtml {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}
