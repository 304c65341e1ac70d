use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_URL: &str = "data/research.json";
pub const DEFAULT_JOURNAL_CONTAINER: &str = "journal-publications-list";
pub const DEFAULT_WORKING_CONTAINER: &str = "working-papers-list";

/// Where to load the document from and which containers receive the
/// rendered listings.
///
/// The host page may override any subset of the fields; the rest keep
/// their defaults.
#[cfg_attr(feature = "cli", derive(clap::Args))]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Location of the publication data document; relative locations are
    /// resolved against the page (or read from disk by the CLI).
    #[cfg_attr(feature = "cli", clap(
        long = "input",
        value_name = "PUBRENDER_DATA_URL",
        env = "PUBRENDER_DATA_URL",
        default_value = DEFAULT_DATA_URL,
    ))]
    pub data_url: String,
    #[cfg_attr(feature = "cli", clap(
        long,
        value_name = "PUBRENDER_JOURNAL_CONTAINER",
        env = "PUBRENDER_JOURNAL_CONTAINER",
        default_value = DEFAULT_JOURNAL_CONTAINER,
    ))]
    pub journal_container: String,
    #[cfg_attr(feature = "cli", clap(
        long,
        value_name = "PUBRENDER_WORKING_CONTAINER",
        env = "PUBRENDER_WORKING_CONTAINER",
        default_value = DEFAULT_WORKING_CONTAINER,
    ))]
    pub working_container: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            journal_container: DEFAULT_JOURNAL_CONTAINER.to_string(),
            working_container: DEFAULT_WORKING_CONTAINER.to_string(),
        }
    }
}

impl Config {
    pub fn data_url(mut self, value: impl Into<String>) -> Self {
        self.data_url = value.into();
        self
    }

    pub fn journal_container(mut self, value: impl Into<String>) -> Self {
        self.journal_container = value.into();
        self
    }

    pub fn working_container(mut self, value: impl Into<String>) -> Self {
        self.working_container = value.into();
        self
    }

    /// Whether `data_url` names a remote http(s) resource rather than a
    /// path.
    pub fn is_remote(&self) -> bool {
        self.data_url.starts_with("http://") || self.data_url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.data_url, "data/research.json");
        assert_eq!(config.journal_container, "journal-publications-list");
        assert_eq!(config.working_container, "working-papers-list");
        assert!(!config.is_remote());
    }

    #[test]
    fn partial_overrides() -> anyhow::Result<()> {
        let config: Config = serde_json::from_str(r#"{
            "dataUrl": "https://example.com/papers.json"
        }"#)?;
        assert_eq!(config, Config::default().data_url("https://example.com/papers.json"));
        assert!(config.is_remote());

        let config: Config = serde_json::from_str(r#"{
            "workingContainer": "drafts"
        }"#)?;
        assert_eq!(config.working_container, "drafts");
        assert_eq!(config.journal_container, DEFAULT_JOURNAL_CONTAINER);
        Ok(())
    }
}
