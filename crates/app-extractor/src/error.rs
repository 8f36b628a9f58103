use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractorError {
    /// The extractor ran but could not retrieve the media.
    /// Covers bad URLs, unsupported sites, geo-blocks and network
    /// failures on the source side.
    #[error("extractor could not retrieve media info: {0}")]
    Extraction(String),

    #[error("failed to run extractor: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse extractor output: {0}")]
    InvalidMetadata(#[from] serde_json::Error),
}

impl ExtractorError {
    /// Whether the failure is a fetch-level problem the caller can act on,
    /// as opposed to something wrong on our side.
    #[must_use]
    pub const fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Extraction(_))
    }
}
