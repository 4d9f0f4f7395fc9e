//! Media sniffing for display-only bubbles
//!
//! Only the URL extension is inspected; no network probing happens here.

use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "gif", "png"];
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "ogg"];

/// Content type declared on every `<source>` element for bubble videos.
pub const VIDEO_MIME_TYPE: &str = "video/mp4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a URL by its trailing extension, case-insensitively.
    pub fn sniff(url: &str) -> Option<Self> {
        let (_, extension) = url.rsplit_once('.')?;
        let extension = extension.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// What a display-only bubble shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BubbleContent {
    Image { url: String },
    Video { url: String },
    Text { text: String },
}

impl BubbleContent {
    /// The extension test runs on the raw prompt, so a URL with trailing
    /// whitespace is shown as text. Media URLs are trimmed before use.
    pub fn classify(prompt: &str) -> Self {
        match MediaKind::sniff(prompt) {
            Some(MediaKind::Image) => BubbleContent::Image {
                url: prompt.trim().to_string(),
            },
            Some(MediaKind::Video) => BubbleContent::Video {
                url: prompt.trim().to_string(),
            },
            None => BubbleContent::Text {
                text: prompt.to_string(),
            },
        }
    }

    pub fn is_media(&self) -> bool {
        !matches!(self, BubbleContent::Text { .. })
    }
}
