use app_config::Config;
use app_logger::{debug, trace};
use tokio::process::Command;

use crate::{Extractor, ExtractorError, MediaInfo};

/// Fixed format preference: best muxed video+audio pair in mp4, then the
/// best single mp4 stream, then the best available stream of any container.
/// Not user-configurable.
pub const FORMAT_PREFERENCE: &str = "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best";

#[derive(Debug, Default)]
pub struct YtDlpExtractor;

#[async_trait::async_trait]
impl Extractor for YtDlpExtractor {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn extract(&self, url: &str) -> Result<MediaInfo, ExtractorError> {
        let yt_dlp = Config::global().dependency_paths.yt_dlp_path();
        trace!("`yt-dlp' binary: {:?}", &yt_dlp);

        let mut cmd = Command::new(yt_dlp);
        let cmd = cmd
            .arg("--dump-single-json")
            .arg("--quiet")
            .arg("--no-warnings")
            .arg("--no-check-certificate")
            .args(["--socket-timeout", "120"])
            .args(["--format", FORMAT_PREFERENCE])
            .arg("--")
            .arg(url);
        debug!("Running cmd: {:?}", &cmd);

        let output = cmd.output().await?;
        trace!(status = ?output.status, "yt-dlp finished");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ExtractorError::Extraction(stderr));
        }

        let info = serde_json::from_slice(&output.stdout)?;

        Ok(info)
    }
}
