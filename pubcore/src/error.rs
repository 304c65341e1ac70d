use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// The document did not match the expected publication data shape.
    #[error("malformed publication data: {0}")]
    Parse(#[from] serde_json::Error),
}
