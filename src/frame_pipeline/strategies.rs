// In: src/frame_pipeline/strategies.rs

use super::channels::{interleave_channels, merge_planes, split_channels, split_planes};
use super::{check_sample_count, ChannelFramer};
use crate::error::CodecError;
use crate::types::ImageGeometry;

/// Grayscale: the pixel buffer already is the stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleChannelFramer;

impl ChannelFramer for SingleChannelFramer {
    fn frame(&self, pixels: &[u8], geometry: &ImageGeometry) -> Result<Vec<u8>, CodecError> {
        check_channels(1, geometry)?;
        check_sample_count("pixels", pixels.len(), geometry)?;
        Ok(pixels.to_vec())
    }

    fn unframe(&self, stream: &[u8], geometry: &ImageGeometry) -> Result<Vec<u8>, CodecError> {
        check_channels(1, geometry)?;
        check_sample_count("stream", stream.len(), geometry)?;
        Ok(stream.to_vec())
    }
}

/// Multi-channel: de-interleave into planes, then concatenate the planes.
#[derive(Debug, Clone, Copy)]
pub struct PlanarFramer {
    channels: usize,
}

impl PlanarFramer {
    pub fn new(channels: usize) -> Self {
        Self { channels }
    }
}

impl ChannelFramer for PlanarFramer {
    fn frame(&self, pixels: &[u8], geometry: &ImageGeometry) -> Result<Vec<u8>, CodecError> {
        check_channels(self.channels, geometry)?;
        check_sample_count("pixels", pixels.len(), geometry)?;
        let planes = split_channels(pixels, self.channels)?;
        log::debug!(
            "framer: split {} pixels into {} planes of {}",
            pixels.len() / self.channels.max(1),
            planes.len(),
            geometry.plane_len()?
        );
        merge_planes(&planes)
    }

    fn unframe(&self, stream: &[u8], geometry: &ImageGeometry) -> Result<Vec<u8>, CodecError> {
        check_channels(self.channels, geometry)?;
        check_sample_count("stream", stream.len(), geometry)?;
        let planes = split_planes(stream, self.channels, geometry.plane_len()?)?;
        interleave_channels(&planes)
    }
}

fn check_channels(expected: usize, geometry: &ImageGeometry) -> Result<(), CodecError> {
    if geometry.channels != expected {
        return Err(CodecError::SizeMismatch {
            field: "channels",
            expected,
            actual: geometry.channels,
        });
    }
    Ok(())
}
