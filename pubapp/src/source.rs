use async_trait::async_trait;
use pubcore::model::PublicationData;
use std::path::PathBuf;
use crate::error::LoadError;

/// Provides the publication data document.
///
/// Implementations perform exactly one load per call and never retry.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataSource {
    async fn fetch(&self) -> Result<PublicationData, LoadError>;
}

/// Issues a single GET for the document, without headers, query
/// parameters or authentication.
#[derive(Clone, Debug)]
pub struct HttpSource {
    location: String,
    base: Option<String>,
}

/// Reads the document from the local filesystem.
#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

mod impls;
