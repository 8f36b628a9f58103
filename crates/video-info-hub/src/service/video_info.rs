use app_extractor::MediaInfo;
use serde::Serialize;

pub const DEFAULT_TITLE: &str = "No Title";

/// One user-facing download choice. `quality` doubles as the dedup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityOption {
    pub quality: String,
    pub url: String,
    pub ext: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoInfoResponse {
    pub title: String,
    pub thumbnail: String,
    pub formats: Vec<QualityOption>,
}

impl VideoInfoResponse {
    /// Builds the caller-facing payload, or `None` when not a single
    /// usable format could be derived.
    #[must_use]
    pub fn from_media_info(info: MediaInfo) -> Option<Self> {
        let formats = quality_options(&info);
        if formats.is_empty() {
            return None;
        }

        Some(Self {
            title: info.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            thumbnail: info.thumbnail.unwrap_or_default(),
            formats,
        })
    }
}

/// Turns the extractor's raw format list into a deduplicated,
/// human-readable list of quality options. Input order is preserved;
/// the first record to produce a given label wins.
#[must_use]
pub fn quality_options(info: &MediaInfo) -> Vec<QualityOption> {
    let mut options: Vec<QualityOption> = Vec::new();

    for record in &info.formats {
        let Some(url) = record.url.as_deref() else {
            continue;
        };

        // Downloadable means video and audio muxed together, or an
        // audio-only stream. The comparison is against the literal
        // string "none"; a missing codec field does not count as it.
        let vcodec = record.vcodec.as_deref();
        let acodec = record.acodec.as_deref();
        if !((vcodec != Some("none") && acodec != Some("none")) || vcodec == Some("none")) {
            continue;
        }

        let label = if record.is_audio_only() {
            Some("Audio Only".to_string())
        } else {
            record
                .format_note
                .clone()
                .or_else(|| record.resolution.clone())
        };

        let label = match label {
            Some(label) => label,
            None => match record.height {
                Some(height) => format!("{height}p"),
                // No way to derive a readable label for this record.
                None => continue,
            },
        };

        if options.iter().any(|option| option.quality == label) {
            continue;
        }

        options.push(QualityOption {
            quality: label,
            url: url.to_string(),
            ext: record.ext.clone().unwrap_or_default(),
        });
    }

    if options.is_empty() {
        if let Some(url) = info.url.clone() {
            let quality = info
                .height
                .map_or_else(|| "Standard".to_string(), |height| format!("{height}p"));

            options.push(QualityOption {
                quality,
                url,
                ext: info.ext.clone().unwrap_or_default(),
            });
        }
    }

    options
}

#[cfg(test)]
mod tests {
    use app_extractor::FormatRecord;

    use super::*;

    fn muxed(url: &str, note: Option<&str>, height: Option<u64>) -> FormatRecord {
        FormatRecord {
            url: Some(url.to_string()),
            vcodec: Some("avc1".to_string()),
            acodec: Some("mp4a".to_string()),
            format_note: note.map(ToString::to_string),
            resolution: None,
            height,
            ext: Some("mp4".to_string()),
        }
    }

    fn with_formats(formats: Vec<FormatRecord>) -> MediaInfo {
        MediaInfo {
            formats,
            ..MediaInfo::default()
        }
    }

    #[test]
    fn first_record_wins_for_duplicate_labels() {
        let info = with_formats(vec![
            muxed("https://cdn.example.com/first.mp4", Some("720p"), None),
            muxed("https://cdn.example.com/second.mp4", Some("720p"), None),
            muxed("https://cdn.example.com/third.mp4", Some("1080p"), None),
        ]);

        let options = quality_options(&info);

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].quality, "720p");
        assert_eq!(options[0].url, "https://cdn.example.com/first.mp4");
        assert_eq!(options[1].quality, "1080p");
    }

    #[test]
    fn audio_only_label_overrides_format_note() {
        let info = with_formats(vec![FormatRecord {
            url: Some("https://cdn.example.com/audio.m4a".to_string()),
            vcodec: Some("none".to_string()),
            acodec: Some("aac".to_string()),
            format_note: Some("medium".to_string()),
            resolution: Some("audio only".to_string()),
            height: None,
            ext: Some("m4a".to_string()),
        }]);

        let options = quality_options(&info);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].quality, "Audio Only");
        assert_eq!(options[0].ext, "m4a");
    }

    #[test]
    fn records_without_a_derivable_label_are_skipped() {
        let info = with_formats(vec![
            muxed("https://cdn.example.com/unlabeled.mp4", None, None),
            muxed("https://cdn.example.com/labeled.mp4", None, Some(480)),
        ]);

        let options = quality_options(&info);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].quality, "480p");
        assert_eq!(options[0].url, "https://cdn.example.com/labeled.mp4");
    }

    #[test]
    fn video_only_records_are_not_downloadable() {
        let info = with_formats(vec![FormatRecord {
            url: Some("https://cdn.example.com/video-only.mp4".to_string()),
            vcodec: Some("avc1".to_string()),
            acodec: Some("none".to_string()),
            format_note: Some("1080p".to_string()),
            ..FormatRecord::default()
        }]);

        assert!(quality_options(&info).is_empty());
    }

    #[test]
    fn missing_codec_fields_pass_the_downloadable_check() {
        // Extractors sometimes omit vcodec/acodec entirely. Only the
        // literal "none" marker excludes a record.
        let info = with_formats(vec![FormatRecord {
            url: Some("https://cdn.example.com/unknown.mp4".to_string()),
            format_note: Some("360p".to_string()),
            ..FormatRecord::default()
        }]);

        let options = quality_options(&info);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].quality, "360p");
    }

    #[test]
    fn records_without_a_url_are_skipped() {
        let info = with_formats(vec![FormatRecord {
            format_note: Some("720p".to_string()),
            vcodec: Some("avc1".to_string()),
            acodec: Some("mp4a".to_string()),
            ..FormatRecord::default()
        }]);

        assert!(quality_options(&info).is_empty());
    }

    #[test]
    fn format_note_is_preferred_over_resolution() {
        let info = with_formats(vec![FormatRecord {
            url: Some("https://cdn.example.com/v.mp4".to_string()),
            format_note: Some("hd".to_string()),
            resolution: Some("1280x720".to_string()),
            ..FormatRecord::default()
        }]);

        assert_eq!(quality_options(&info)[0].quality, "hd");
    }

    #[test]
    fn falls_back_to_the_top_level_url() {
        let info = MediaInfo {
            url: Some("https://cdn.example.com/direct.mp4".to_string()),
            ext: Some("mp4".to_string()),
            height: Some(720),
            ..MediaInfo::default()
        };

        let options = quality_options(&info);

        assert_eq!(
            options,
            vec![QualityOption {
                quality: "720p".to_string(),
                url: "https://cdn.example.com/direct.mp4".to_string(),
                ext: "mp4".to_string(),
            }]
        );
    }

    #[test]
    fn fallback_without_height_is_labeled_standard() {
        let info = MediaInfo {
            url: Some("https://cdn.example.com/direct.mp4".to_string()),
            ..MediaInfo::default()
        };

        let options = quality_options(&info);

        assert_eq!(options.len(), 1);
        assert_eq!(options[0].quality, "Standard");
        assert_eq!(options[0].ext, "");
    }

    #[test]
    fn no_formats_and_no_fallback_yields_no_response() {
        assert!(VideoInfoResponse::from_media_info(MediaInfo::default()).is_none());
    }

    #[test]
    fn title_and_thumbnail_get_defaults() {
        let info = MediaInfo {
            url: Some("https://cdn.example.com/direct.mp4".to_string()),
            ..MediaInfo::default()
        };

        let response =
            VideoInfoResponse::from_media_info(info).expect("expected a usable response");

        assert_eq!(response.title, DEFAULT_TITLE);
        assert_eq!(response.thumbnail, "");
    }
}
