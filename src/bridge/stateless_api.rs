// In: src/bridge/stateless_api.rs

use ndarray::{Array3, ArrayView2, ArrayView3};

use crate::bridge::format::{CompressionStats, BITSTREAM_HEADER_LEN};
use crate::bridge::ndarray_impl;
use crate::chunk_pipeline::artifact::ImageArtifact;
use crate::chunk_pipeline::context::DecodedImage;
use crate::chunk_pipeline::orchestrator;
use crate::config::{CodecConfig, FilterMode};
use crate::error::CodecError;
use crate::kernels::bitstream;
use crate::types::ImageGeometry;

//==================================================================================
// 1. Byte Streams
//==================================================================================

/// Compresses any byte payload into the bare bitstream layout.
pub fn compress_bytes(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    orchestrator::compress_symbols(data)
}

/// Decompresses a bare bitstream produced by [`compress_bytes`].
pub fn decompress_bytes(bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
    orchestrator::decompress_symbols(bytes)
}

//==================================================================================
// 2. Images (flat interleaved buffers)
//==================================================================================

/// Compresses an interleaved, row-major image. The artifact always carries
/// its geometry.
pub fn compress_image(
    pixels: &[u8],
    geometry: ImageGeometry,
    config: &CodecConfig,
) -> Result<Vec<u8>, CodecError> {
    orchestrator::compress_image(pixels, geometry, config)
}

pub fn decompress_image(bytes: &[u8], config: &CodecConfig) -> Result<DecodedImage, CodecError> {
    orchestrator::decompress_image(bytes, config)
}

/// Decompresses a headerless single-channel artifact whose dimensions the
/// caller knows. The dimensions are checked against the decoded length.
pub fn decompress_plane(
    bytes: &[u8],
    width: usize,
    height: usize,
    filter: FilterMode,
) -> Result<Vec<u8>, CodecError> {
    orchestrator::decompress_plane(bytes, width, height, filter)
}

//==================================================================================
// 3. Images (ndarray)
//==================================================================================

/// Compresses a `(height, width, channels)` array. The config's channel
/// layout must match the array's last axis.
pub fn compress_array(array: ArrayView3<'_, u8>, config: &CodecConfig) -> Result<Vec<u8>, CodecError> {
    let (pixels, geometry) = ndarray_impl::array3_to_pixels(array);
    orchestrator::compress_image(&pixels, geometry, config)
}

/// Compresses a `(height, width)` grayscale array.
pub fn compress_gray_array(
    array: ArrayView2<'_, u8>,
    config: &CodecConfig,
) -> Result<Vec<u8>, CodecError> {
    let (pixels, geometry) = ndarray_impl::array2_to_pixels(array);
    orchestrator::compress_image(&pixels, geometry, config)
}

/// Decompresses an image artifact into a `(height, width, channels)` array.
pub fn decompress_array(bytes: &[u8], config: &CodecConfig) -> Result<Array3<u8>, CodecError> {
    let decoded = orchestrator::decompress_image(bytes, config)?;
    ndarray_impl::decoded_to_array3(decoded)
}

//==================================================================================
// 4. Inspection
//==================================================================================

/// Analyzes an image artifact without decoding any codes.
pub fn analyze_artifact(bytes: &[u8], config: &CodecConfig) -> Result<CompressionStats, CodecError> {
    let info = ImageArtifact::peek_info(bytes)?;
    Ok(CompressionStats {
        header_size: info.header_size,
        data_size: info.data_size,
        total_size: bytes.len(),
        codelength: info.bitstream.codelength,
        code_count: info.bitstream.code_count,
        geometry: Some(ImageGeometry::new(
            usize::from(info.geometry.width),
            usize::from(info.geometry.height),
            config.channel_count(),
        )),
    })
}

/// Analyzes a bare bitstream produced by [`compress_bytes`].
pub fn analyze_bitstream(bytes: &[u8]) -> Result<CompressionStats, CodecError> {
    let info = bitstream::peek(bytes)?;
    Ok(CompressionStats {
        header_size: BITSTREAM_HEADER_LEN,
        data_size: bytes.len() - BITSTREAM_HEADER_LEN,
        total_size: bytes.len(),
        codelength: info.codelength,
        code_count: info.code_count,
        geometry: None,
    })
}
