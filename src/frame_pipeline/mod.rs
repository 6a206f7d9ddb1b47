//! This module defines the frame-level stage of the pipeline: turning an
//! interleaved image buffer into the single linear symbol stream the
//! `chunk_pipeline` compresses, and back.

use crate::config::ChannelLayout;
use crate::error::CodecError;
use crate::types::ImageGeometry;

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod channels;

mod strategies; // Concrete ChannelFramer implementations

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::channels::{interleave_channels, merge_planes, split_channels, split_planes};
pub use self::strategies::{PlanarFramer, SingleChannelFramer};

/// **CONTRACT:** Converts between interleaved pixels and one linear stream.
/// `unframe(frame(p)) == p` for every buffer whose length matches `geometry`.
pub trait ChannelFramer {
    fn frame(&self, pixels: &[u8], geometry: &ImageGeometry) -> Result<Vec<u8>, CodecError>;
    fn unframe(&self, stream: &[u8], geometry: &ImageGeometry) -> Result<Vec<u8>, CodecError>;
}

/// Picks the framer for a configured channel layout.
pub fn framer_for(layout: ChannelLayout) -> Box<dyn ChannelFramer> {
    match layout {
        ChannelLayout::SingleChannel => Box::new(SingleChannelFramer),
        ChannelLayout::MultiChannel { channels } => Box::new(PlanarFramer::new(channels)),
    }
}

/// Rejects buffers whose length is not exactly `geometry.sample_count()`.
pub(crate) fn check_sample_count(
    field: &'static str,
    len: usize,
    geometry: &ImageGeometry,
) -> Result<(), CodecError> {
    let expected = geometry.sample_count()?;
    if len != expected {
        return Err(CodecError::SizeMismatch {
            field,
            expected,
            actual: len,
        });
    }
    Ok(())
}
