// In: src/bridge/format.rs

//! Defines all on-disk constants and public result structs for the pixlzw
//! artifact formats.
//!
//! Two layouts exist, neither carries a magic number or version:
//!
//! ```text
//! bare:   [pad_count:1B][codelength:1B][code bits][zero pad]
//! image:  [width:2B LE][height:2B LE][pad_count:1B][codelength:1B][code bits][zero pad]
//! ```
//!
//! The filter mode and channel count are not persisted; the caller supplies
//! them through `CodecConfig` on both sides.

use serde::{Deserialize, Serialize};

use crate::types::ImageGeometry;

pub use crate::kernels::bitstream::BITSTREAM_HEADER_LEN;

/// Size in bytes of the `[width][height]` geometry header.
pub const GEOMETRY_HEADER_LEN: usize = 4;
/// The minimum possible size of a valid image artifact in bytes.
pub const MIN_IMAGE_ARTIFACT_LEN: usize = GEOMETRY_HEADER_LEN + BITSTREAM_HEADER_LEN;

/// The public-facing struct for artifact inspection, returned by `analyze_artifact`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompressionStats {
    /// Geometry header plus bitstream header, in bytes.
    pub header_size: usize,
    /// Packed code bytes, including the final padded byte.
    pub data_size: usize,
    pub total_size: usize,
    pub codelength: u8,
    pub code_count: usize,
    /// Present for image artifacts.
    pub geometry: Option<ImageGeometry>,
}
