// In: src/config.rs

//! The single source of truth for all pixlzw codec configuration.
//!
//! The plain/diff x gray/color tool variants differ only in
//! preprocessing and framing. `CodecConfig` selects between them explicitly so
//! that a single dictionary engine, delta filter and channel framer serve all
//! of them.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// The spatial prefilter applied to each plane before dictionary coding.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// **Default:** samples are coded as they are.
    #[default]
    None,

    /// Each sample is replaced by its difference (mod 256) from the left
    /// neighbour in the same row. The first sample of every row is kept.
    RowDelta,
}

/// Describes how many interleaved channels an image payload carries.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum ChannelLayout {
    /// One sample per pixel (grayscale).
    SingleChannel,

    /// Several interleaved samples per pixel (e.g. RGB). Channels are
    /// de-interleaved and concatenated plane by plane before coding.
    MultiChannel {
        #[serde(default = "default_channels")]
        channels: usize,
    },
}

impl Default for ChannelLayout {
    fn default() -> Self {
        ChannelLayout::SingleChannel
    }
}

/// Provides a sensible default for `channels` for serde (RGB).
fn default_channels() -> usize {
    3
}

//==================================================================================
// II. The Unified CodecConfig
//==================================================================================

/// The complete configuration for one compress or decompress call.
///
/// The same config must be used on both sides: the artifact persists geometry
/// but not the filter or channel count.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    #[serde(default)]
    pub filter: FilterMode,

    #[serde(default)]
    pub layout: ChannelLayout,
}

impl CodecConfig {
    /// Grayscale image, no prefilter.
    pub fn gray() -> Self {
        Self::default()
    }

    /// Grayscale image with the row-delta prefilter.
    pub fn gray_diff() -> Self {
        Self {
            filter: FilterMode::RowDelta,
            layout: ChannelLayout::SingleChannel,
        }
    }

    /// RGB image, no prefilter.
    pub fn color() -> Self {
        Self {
            filter: FilterMode::None,
            layout: ChannelLayout::MultiChannel {
                channels: default_channels(),
            },
        }
    }

    /// RGB image with the row-delta prefilter applied to each plane.
    pub fn color_diff() -> Self {
        Self {
            filter: FilterMode::RowDelta,
            ..Self::color()
        }
    }

    /// Parses a config from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, CodecError> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of interleaved samples per pixel.
    pub fn channel_count(&self) -> usize {
        match self.layout {
            ChannelLayout::SingleChannel => 1,
            ChannelLayout::MultiChannel { channels } => channels,
        }
    }

    pub fn validate(&self) -> Result<(), CodecError> {
        if let ChannelLayout::MultiChannel { channels } = self.layout {
            if channels < 2 {
                return Err(CodecError::InvalidConfig(format!(
                    "multi-channel layout needs at least 2 channels, got {}",
                    channels
                )));
            }
            if channels > usize::from(u8::MAX) {
                return Err(CodecError::InvalidConfig(format!(
                    "multi-channel layout supports at most 255 channels, got {}",
                    channels
                )));
            }
        }
        Ok(())
    }
}
