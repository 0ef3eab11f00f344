//! Download mechanics: workers, quality, codecs, paths, credentials.

use std::collections::BTreeMap;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use super::format::{AudioOnlyOutputFormat, DanmakuFormat, OutputFormat};
use super::quality::{AudioQuality, VideoQuality};

/// The `basic` settings group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BasicSettings {
    /// Number of concurrent download workers spawned downstream.
    pub num_workers: u32,
    /// Desired video quality tier.
    pub video_quality: VideoQuality,
    /// Desired audio quality tier.
    pub audio_quality: AudioQuality,
    /// Video codec selector, `download:target` with `copy` for no re-encode.
    pub vcodec: String,
    /// Audio codec selector, `download:target` with `copy` for no re-encode.
    pub acodec: String,
    /// Ordered codec preference for stream selection, when set.
    pub download_vcodec_priority: Option<Vec<String>>,
    /// Container for muxed output.
    pub output_format: OutputFormat,
    /// Container for audio-only output.
    pub output_format_audio_only: AudioOnlyOutputFormat,
    /// On-disk danmaku representation.
    pub danmaku_format: DanmakuFormat,
    /// Download block size in MiB.
    pub block_size: f64,
    /// Overwrite files that already exist.
    pub overwrite: bool,
    /// Proxy selector: `auto`, `no`, or an explicit proxy URL.
    pub proxy: String,
    /// Output directory.
    pub dir: Utf8PathBuf,
    /// Working directory for partial downloads; the output directory when unset.
    pub tmp_dir: Option<Utf8PathBuf>,
    /// Session credential cookie value, read verbatim and never parsed.
    pub sessdata: String,
    /// Template controlling the output subpath of each item.
    pub subpath_template: String,
    /// User-defined shorthand tokens expanded during resolution.
    pub aliases: BTreeMap<String, String>,
    /// strftime pattern for the `premiered` metadata field.
    pub metadata_format_premiered: String,
    /// Seconds to wait between item downloads.
    pub download_interval: u32,
    /// Regular expression of mirror hosts to skip, when set.
    pub banned_mirrors_pattern: Option<String>,
    /// Disable coloured terminal output.
    pub no_color: bool,
    /// Disable the progress display.
    pub no_progress: bool,
    /// Enable debug diagnostics.
    pub debug: bool,
    /// Fail when VIP-gated streams are requested without VIP access.
    pub vip_strict: bool,
    /// Fail when the session credential is missing or expired.
    pub login_strict: bool,
}

impl Default for BasicSettings {
    fn default() -> Self {
        Self {
            num_workers: 8,
            video_quality: VideoQuality::default(),
            audio_quality: AudioQuality::default(),
            vcodec: "avc:copy".to_owned(),
            acodec: "mp4a:copy".to_owned(),
            download_vcodec_priority: None,
            output_format: OutputFormat::default(),
            output_format_audio_only: AudioOnlyOutputFormat::default(),
            danmaku_format: DanmakuFormat::default(),
            block_size: 0.5,
            overwrite: false,
            proxy: "auto".to_owned(),
            dir: Utf8PathBuf::from("./download"),
            tmp_dir: None,
            sessdata: String::new(),
            subpath_template: "{auto}".to_owned(),
            aliases: BTreeMap::new(),
            metadata_format_premiered: "%Y-%m-%d".to_owned(),
            download_interval: 0,
            banned_mirrors_pattern: None,
            no_color: false,
            no_progress: false,
            debug: false,
            vip_strict: false,
            login_strict: false,
        }
    }
}
