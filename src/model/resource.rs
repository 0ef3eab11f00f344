//! Switches selecting which artifact kinds a download must produce.

use serde::{Deserialize, Serialize};

/// The `resource` settings group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResourceSettings {
    /// Download the video stream.
    pub require_video: bool,
    /// Download the audio stream.
    pub require_audio: bool,
    /// Download subtitles.
    pub require_subtitle: bool,
    /// Generate a metadata file.
    pub require_metadata: bool,
    /// Download danmaku.
    pub require_danmaku: bool,
    /// Fetch the cover image.
    pub require_cover: bool,
    /// Fetch chapter information.
    pub require_chapter_info: bool,
    /// Keep the cover image as a standalone file.
    pub save_cover: bool,
}

impl Default for ResourceSettings {
    fn default() -> Self {
        Self {
            require_video: true,
            require_audio: true,
            require_subtitle: true,
            require_metadata: false,
            require_danmaku: true,
            require_cover: true,
            require_chapter_info: true,
            save_cover: false,
        }
    }
}
