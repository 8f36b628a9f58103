use serde::{Deserialize, Deserializer, Serialize};

/// Metadata for a single media page, as reported by the extractor.
///
/// Every field is defaulted during deserialization so downstream code
/// never has to guard against missing keys. String fields that arrive
/// as some other JSON type (extractors are not consistent about this)
/// are treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaInfo {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub formats: Vec<FormatRecord>,

    /// Top-level fallback used when `formats` is absent or unusable.
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub ext: Option<String>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub height: Option<u64>,
}

/// One candidate encoded rendition of a video with a direct fetch URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,

    /// The literal string `"none"` marks an absent video codec.
    /// A missing field does *not* mean `"none"`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub vcodec: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub acodec: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub format_note: Option<String>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub resolution: Option<String>,

    #[serde(default, deserialize_with = "lenient_u64")]
    pub height: Option<u64>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub ext: Option<String>,
}

impl FormatRecord {
    /// An audio stream without any video track.
    #[must_use]
    pub fn is_audio_only(&self) -> bool {
        self.vcodec.as_deref() == Some("none") && self.acodec.as_deref() != Some("none")
    }
}

/// Accepts any JSON value but only keeps non-empty strings.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Accepts any JSON value but only keeps non-negative integers.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;

    Ok(value.as_u64())
}
