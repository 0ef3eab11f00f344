//! Closed container and danmaku format types.

use serde::{Deserialize, Serialize};

/// Target container for muxed video output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pick the container from the downloaded streams.
    #[default]
    Infer,
    /// MP4 container.
    Mp4,
    /// Matroska container.
    Mkv,
    /// QuickTime container.
    Mov,
}

/// Target container for audio-only output.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioOnlyOutputFormat {
    /// Pick the container from the downloaded stream.
    #[default]
    Infer,
    /// MPEG-4 audio container.
    M4a,
    /// Raw AAC stream.
    Aac,
    /// MP3.
    Mp3,
    /// FLAC.
    Flac,
    /// MP4 container.
    Mp4,
    /// Matroska container.
    Mkv,
    /// QuickTime container.
    Mov,
}

/// On-disk representation of downloaded danmaku.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanmakuFormat {
    /// The provider's native XML listing.
    Xml,
    /// Rendered ASS subtitles.
    #[default]
    Ass,
    /// The provider's binary protobuf listing.
    Protobuf,
}
