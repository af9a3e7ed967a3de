use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::{MediaAttachment, MessageKind, Share};

/// Format of the derived display timestamp. Minute resolution only; ordering
/// always goes through `timestamp_ms`, never through this string.
const DISPLAY_FORMAT: &str = "%H:%M %d/%m/%Y";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<i64>,
    /// Derived display string, consistent with `timestamp_ms`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<MediaAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<MediaAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_files: Option<Vec<MediaAttachment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<Share>,
    #[serde(rename = "type", default)]
    pub kind: MessageKind,
}

impl Message {
    /// Recompute the display timestamp from `timestamp_ms`. Messages without
    /// a timestamp, or with one outside chrono's representable range, keep
    /// `timestamp` unset.
    pub fn derive_display_timestamp(&mut self) {
        self.timestamp = self
            .timestamp_ms
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.format(DISPLAY_FORMAT).to_string());
    }

    pub fn first_photo(&self) -> Option<&MediaAttachment> {
        self.photos.as_deref().and_then(|photos| photos.first())
    }
}
