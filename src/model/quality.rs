//! Closed quality selector types.
//!
//! The upstream provider offers resolution and bitrate tiers as opaque
//! numeric codes. These enums close over the legal codes so an illegal tier
//! is unrepresentable once settings are validated; serde round-trips them as
//! the raw codes.

use serde::{Deserialize, Serialize};

use crate::schema::quality_codes;

/// Video resolution/bitrate tier offered by the upstream provider.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum VideoQuality {
    /// 8K Ultra HD (code 127).
    #[default]
    EightK = 127,
    /// Dolby Vision (code 126).
    DolbyVision = 126,
    /// HDR (code 125).
    Hdr = 125,
    /// 4K Ultra HD (code 120).
    FourK = 120,
    /// 1080p at 60 fps (code 116).
    FullHd60 = 116,
    /// 1080p high bitrate (code 112).
    FullHdPlus = 112,
    /// AI-remastered source (code 100).
    Remastered = 100,
    /// 1080p (code 80).
    FullHd = 80,
    /// 720p at 60 fps (code 74).
    Hd60 = 74,
    /// 720p (code 64).
    Hd = 64,
    /// 480p (code 32).
    Sd = 32,
    /// 360p (code 16).
    Low = 16,
}

impl VideoQuality {
    /// The provider's numeric code for this tier.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl From<VideoQuality> for u32 {
    fn from(quality: VideoQuality) -> Self {
        quality.code()
    }
}

impl TryFrom<u32> for VideoQuality {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            127 => Ok(Self::EightK),
            126 => Ok(Self::DolbyVision),
            125 => Ok(Self::Hdr),
            120 => Ok(Self::FourK),
            116 => Ok(Self::FullHd60),
            112 => Ok(Self::FullHdPlus),
            100 => Ok(Self::Remastered),
            80 => Ok(Self::FullHd),
            74 => Ok(Self::Hd60),
            64 => Ok(Self::Hd),
            32 => Ok(Self::Sd),
            16 => Ok(Self::Low),
            other => Err(format!(
                "unknown video quality code {other}, expected one of {:?}",
                quality_codes::VIDEO
            )),
        }
    }
}

/// Audio bitrate/codec tier offered by the upstream provider.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum AudioQuality {
    /// Hi-Res lossless (code 30251).
    #[default]
    HiRes = 30251,
    /// Dolby Audio (code 30255).
    DolbyAudio = 30255,
    /// Dolby Atmos (code 30250).
    DolbyAtmos = 30250,
    /// 320 kbps (code 30280).
    Kbps320 = 30280,
    /// 128 kbps (code 30232).
    Kbps128 = 30232,
    /// 64 kbps (code 30216).
    Kbps64 = 30216,
}

impl AudioQuality {
    /// The provider's numeric code for this tier.
    #[must_use]
    pub const fn code(self) -> u32 {
        self as u32
    }
}

impl From<AudioQuality> for u32 {
    fn from(quality: AudioQuality) -> Self {
        quality.code()
    }
}

impl TryFrom<u32> for AudioQuality {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            30251 => Ok(Self::HiRes),
            30255 => Ok(Self::DolbyAudio),
            30250 => Ok(Self::DolbyAtmos),
            30280 => Ok(Self::Kbps320),
            30232 => Ok(Self::Kbps128),
            30216 => Ok(Self::Kbps64),
            other => Err(format!(
                "unknown audio quality code {other}, expected one of {:?}",
                quality_codes::AUDIO
            )),
        }
    }
}
