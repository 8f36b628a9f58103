use std::fmt::Debug;

use async_trait::async_trait;

pub use self::{
    error::ExtractorError,
    media_info::{FormatRecord, MediaInfo},
    yt_dlp::YtDlpExtractor,
};

mod error;
pub mod media_info;
pub mod yt_dlp;

/// Boundary to the external metadata extraction program.
///
/// Implementations fetch and parse a video hosting page for a given URL
/// and return a typed description of the playable media. They never
/// download media bytes.
#[async_trait]
pub trait Extractor: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    async fn extract(&self, url: &str) -> Result<MediaInfo, ExtractorError>;
}
