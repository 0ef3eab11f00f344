//! Danmaku rendering parameters and block filters.

use serde::{Deserialize, Serialize};

/// The `danmaku` settings group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DanmakuSettings {
    /// Font size in points; derived from the video height when unset.
    pub font_size: Option<u32>,
    /// Font family used for rendered comments.
    pub font: String,
    /// Comment opacity, 0.0 to 1.0.
    pub opacity: f64,
    /// Fraction of the screen height comments may occupy.
    pub display_region_ratio: f64,
    /// Scroll speed multiplier.
    pub speed: f64,
    /// Block comments pinned to the top of the screen.
    pub block_top: bool,
    /// Block comments pinned to the bottom of the screen.
    pub block_bottom: bool,
    /// Block scrolling comments.
    pub block_scroll: bool,
    /// Block reverse-scrolling comments.
    pub block_reverse: bool,
    /// Block fixed-position comments.
    pub block_fixed: bool,
    /// Block special-effect comments.
    pub block_special: bool,
    /// Block coloured comments.
    pub block_colorful: bool,
    /// Regular expressions; matching comments are dropped.
    pub block_keyword_patterns: Vec<String>,
}

impl Default for DanmakuSettings {
    fn default() -> Self {
        Self {
            font_size: None,
            font: "SimHei".to_owned(),
            opacity: 0.8,
            display_region_ratio: 1.0,
            speed: 1.0,
            block_top: false,
            block_bottom: false,
            block_scroll: false,
            block_reverse: false,
            block_fixed: false,
            block_special: false,
            block_colorful: false,
            block_keyword_patterns: Vec::new(),
        }
    }
}
