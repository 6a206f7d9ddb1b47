// In: src/chunk_pipeline/orchestrator/core.rs

use crate::chunk_pipeline::artifact::{attach_header, read_header, GeometryHeader};
use crate::chunk_pipeline::context::DecodedImage;
use crate::config::{CodecConfig, FilterMode};
use crate::error::CodecError;
use crate::frame_pipeline::framer_for;
use crate::kernels::{self, bitstream, lzw};
use crate::types::ImageGeometry;

//==================================================================================
// 1. Symbol Stream Orchestration (bare bitstream layout)
//==================================================================================

/// Compresses an arbitrary byte stream into a bare framed bitstream:
/// `[pad_count][codelength][codes][pad]`.
pub fn compress_symbols(symbols: &[u8]) -> Result<Vec<u8>, CodecError> {
    let encoded = lzw::encode(symbols);
    let bytes = bitstream::pack(&encoded.codes, encoded.codelength)?;

    log_metric!(
        "event" = "compress_symbols",
        "symbols" = symbols.len(),
        "codes" = encoded.codes.len(),
        "dict_size" = encoded.dict_size,
        "codelength" = encoded.codelength,
        "bytes" = bytes.len()
    );
    Ok(bytes)
}

/// Inverse of [`compress_symbols`].
pub fn decompress_symbols(bytes: &[u8]) -> Result<Vec<u8>, CodecError> {
    let (codes, codelength) = bitstream::unpack(bytes)?;
    let symbols = lzw::decode(&codes)?;

    log_metric!(
        "event" = "decompress_symbols",
        "bytes" = bytes.len(),
        "codes" = codes.len(),
        "codelength" = codelength,
        "symbols" = symbols.len()
    );
    Ok(symbols)
}

//==================================================================================
// 2. Image Orchestration (geometry-prefixed layout)
//==================================================================================

/// Compresses an interleaved, row-major 8-bit image.
///
/// The pipeline is: channel framing (planes concatenated) -> optional row
/// delta -> LZW -> bit packing -> geometry header. The geometry header is
/// always written, for single- and multi-channel images alike.
pub fn compress_image(
    pixels: &[u8],
    geometry: ImageGeometry,
    config: &CodecConfig,
) -> Result<Vec<u8>, CodecError> {
    // 1. Validate the request before touching any data.
    config.validate()?;
    if geometry.channels != config.channel_count() {
        return Err(CodecError::SizeMismatch {
            field: "channels",
            expected: config.channel_count(),
            actual: geometry.channels,
        });
    }
    let header = GeometryHeader::new(geometry.width, geometry.height)?;

    // 2. Frame: interleaved pixels -> planar stream.
    let framer = framer_for(config.layout);
    let stream = framer.frame(pixels, &geometry)?;

    // 3. Filter. Concatenated planes are `height * channels` rows of `width`,
    //    so one pass covers every plane without crossing plane boundaries.
    let rows = geometry.height * geometry.channels;
    let filtered = kernels::dispatch_filter(config.filter, stream, geometry.width, rows)
        .map_err(|e| e.at_stage("row_delta_forward"))?;

    // 4. Dictionary coding + bit packing.
    let bitstream = compress_symbols(&filtered)?;

    // 5. Assemble the artifact.
    let artifact = attach_header(header, &bitstream);
    log::info!(
        "compressed {} image ({:?}) into {} bytes",
        geometry,
        config.filter,
        artifact.len()
    );
    Ok(artifact)
}

/// Decompresses an artifact produced by [`compress_image`] with the same config.
///
/// # Errors
/// `MalformedStream` if the artifact is truncated or if its geometry header
/// disagrees with the number of decoded samples; `InvalidCode` for a corrupt
/// code stream.
pub fn decompress_image(bytes: &[u8], config: &CodecConfig) -> Result<DecodedImage, CodecError> {
    config.validate()?;

    // 1. Deserialize the geometry header.
    let (header, bitstream) = read_header(bytes)?;
    let geometry = ImageGeometry::new(
        usize::from(header.width),
        usize::from(header.height),
        config.channel_count(),
    );

    // 2. Unpack and decode the symbol stream.
    let stream = decompress_symbols(bitstream)?;
    check_decoded_len(stream.len(), geometry.sample_count()?)?;

    // 3. Undo the filter, then the framing.
    let rows = geometry.height * geometry.channels;
    let unfiltered = kernels::dispatch_unfilter(config.filter, stream, geometry.width, rows)
        .map_err(|e| e.at_stage("row_delta_inverse"))?;
    let pixels = framer_for(config.layout)
        .unframe(&unfiltered, &geometry)
        .map_err(|e| e.at_stage("channel_unframe"))?;

    log::info!(
        "decompressed {} bytes into {} image ({:?})",
        bytes.len(),
        geometry,
        config.filter
    );
    Ok(DecodedImage::new(pixels, geometry))
}

/// Decompresses a bare, headerless single-channel bitstream whose geometry is
/// known out of band. The decoded length must match `width * height` exactly.
pub fn decompress_plane(
    bytes: &[u8],
    width: usize,
    height: usize,
    filter: FilterMode,
) -> Result<Vec<u8>, CodecError> {
    let geometry = ImageGeometry::new(width, height, 1);
    let stream = decompress_symbols(bytes)?;
    check_decoded_len(stream.len(), geometry.plane_len()?)?;

    kernels::dispatch_unfilter(filter, stream, width, height)
        .map_err(|e| e.at_stage("row_delta_inverse"))
}

//==================================================================================
// 3. Private Helpers
//==================================================================================

fn check_decoded_len(actual: usize, expected: usize) -> Result<(), CodecError> {
    if actual != expected {
        return Err(CodecError::malformed(
            "geometry_header",
            format!("{} decoded samples", expected),
            format!("{} decoded samples", actual),
        ));
    }
    Ok(())
}
