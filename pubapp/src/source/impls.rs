use async_trait::async_trait;
use pubcore::model::PublicationData;
use std::{
    fs,
    path::PathBuf,
};
use url::Url;
use crate::{
    error::LoadError,
    source::{
        DataSource,
        FileSource,
        HttpSource,
    },
};

impl HttpSource {
    /// `location` may be an absolute URL, or a relative one if a `base`
    /// is provided to resolve it against.
    pub fn new(location: impl Into<String>, base: Option<String>) -> Self {
        Self {
            location: location.into(),
            base,
        }
    }

    pub fn url(&self) -> Result<Url, LoadError> {
        Ok(match &self.base {
            Some(base) => Url::parse(base)?.join(&self.location)?,
            None => Url::parse(&self.location)?,
        })
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<PublicationData, LoadError> {
        let url = self.url()?;
        log::trace!("fetching publication data: {url}");
        let response = reqwest::get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok(PublicationData::from_slice(&body)?)
    }
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<PublicationData, LoadError> {
        log::trace!("reading publication data: {}", self.path.display());
        let body = fs::read(&self.path)?;
        Ok(PublicationData::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative() -> anyhow::Result<()> {
        let source = HttpSource::new(
            "data/research.json",
            Some("https://example.com/people/smith/research.html".to_string()),
        );
        assert_eq!(
            source.url()?.as_str(),
            "https://example.com/people/smith/data/research.json",
        );
        Ok(())
    }

    #[test]
    fn resolve_absolute() -> anyhow::Result<()> {
        let source = HttpSource::new(
            "https://cdn.example.com/research.json",
            Some("https://example.com/research.html".to_string()),
        );
        assert_eq!(source.url()?.as_str(), "https://cdn.example.com/research.json");
        let source = HttpSource::new("https://cdn.example.com/research.json", None);
        assert_eq!(source.url()?.as_str(), "https://cdn.example.com/research.json");
        Ok(())
    }

    #[test]
    fn relative_without_base() {
        let source = HttpSource::new("data/research.json", None);
        assert!(matches!(source.url(), Err(LoadError::Url(_))));
    }
}
