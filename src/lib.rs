//! This file is the root of the `pixlzw` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`chunk_pipeline`,
//!     `kernels`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the public surface: the stateless API in `bridge`, the
//!     configuration types, and the error type.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

#[doc(hidden)]
pub use log as __log;

pub mod bridge;
pub mod config;
pub mod kernels;

pub mod frame_pipeline;

mod chunk_pipeline;
mod error;
mod types;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{
    analyze_artifact, analyze_bitstream, compress_array, compress_bytes, compress_gray_array,
    compress_image, decompress_array, decompress_bytes, decompress_image, decompress_plane,
    CompressionStats, GEOMETRY_HEADER_LEN, MIN_IMAGE_ARTIFACT_LEN,
};
pub use chunk_pipeline::artifact::{GeometryHeader, HeaderInfo, ImageArtifact};
pub use chunk_pipeline::context::DecodedImage;
pub use config::{ChannelLayout, CodecConfig, FilterMode};
pub use error::CodecError;
pub use observability::enable_verbose_logging;
pub use types::ImageGeometry;
