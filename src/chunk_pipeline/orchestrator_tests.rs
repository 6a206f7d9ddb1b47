use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chunk_pipeline::artifact::ImageArtifact;
use crate::chunk_pipeline::orchestrator::{
    compress_image, compress_symbols, decompress_image, decompress_plane, decompress_symbols,
};
use crate::config::{ChannelLayout, CodecConfig, FilterMode};
use crate::error::CodecError;
use crate::kernels::{bitstream, lzw};
use crate::types::ImageGeometry;

// Test Helpers
/// A smooth gradient with a little structure, similar to a photographic plane.
fn gradient_image(width: usize, height: usize, channels: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                pixels.push(((x * 3 + y * 2 + c * 40) % 256) as u8);
            }
        }
    }
    pixels
}

fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.random::<u8>()).collect()
}

//==================================================================================
// Symbol stream
//==================================================================================

#[test]
fn test_symbols_roundtrip_various_lengths() {
    for (len, seed) in [(0, 1), (1, 2), (2, 3), (255, 4), (4096, 5)] {
        let input = random_bytes(len, seed);
        let bytes = compress_symbols(&input).unwrap();
        assert_eq!(decompress_symbols(&bytes).unwrap(), input, "len {}", len);
    }
}

#[test]
fn test_symbols_roundtrip_low_entropy() {
    let input: Vec<u8> = b"abcabcabcabcabcaaaaaaaaaaaaaaaaaaaaab".repeat(50);
    let bytes = compress_symbols(&input).unwrap();
    assert!(bytes.len() < input.len());
    assert_eq!(decompress_symbols(&bytes).unwrap(), input);
}

#[test]
fn test_framing_roundtrip_matches_encoder() {
    let input = random_bytes(2000, 42);
    let encoded = lzw::encode(&input);
    let packed = bitstream::pack(&encoded.codes, encoded.codelength).unwrap();
    let (codes, codelength) = bitstream::unpack(&packed).unwrap();
    assert_eq!(codes, encoded.codes);
    assert_eq!(codelength, encoded.codelength);
}

#[test]
fn test_empty_symbols_produce_minimal_bitstream() {
    let bytes = compress_symbols(&[]).unwrap();
    assert_eq!(bytes, vec![0, 8]);
    assert!(decompress_symbols(&bytes).unwrap().is_empty());
}

#[test]
fn test_compress_symbols_is_deterministic() {
    let input = random_bytes(3000, 7);
    assert_eq!(
        compress_symbols(&input).unwrap(),
        compress_symbols(&input).unwrap()
    );
}

#[test]
fn test_decompress_symbols_short_input_is_malformed() {
    assert!(matches!(
        decompress_symbols(&[]).unwrap_err(),
        CodecError::MalformedStream { .. }
    ));
    assert!(matches!(
        decompress_symbols(&[4]).unwrap_err(),
        CodecError::MalformedStream { .. }
    ));
}

#[test]
fn test_decompress_symbols_invalid_code() {
    // Second code 300 is far past the next dictionary index (256).
    let bytes = bitstream::pack(&[65, 300], 9).unwrap();
    let err = decompress_symbols(&bytes).unwrap_err();
    assert!(matches!(err, CodecError::InvalidCode { code: 300, .. }));
}

//==================================================================================
// Images
//==================================================================================

#[test]
fn test_image_roundtrip_all_variants() {
    let configs = [
        CodecConfig::gray(),
        CodecConfig::gray_diff(),
        CodecConfig::color(),
        CodecConfig::color_diff(),
    ];
    for config in configs {
        let geometry = ImageGeometry::new(17, 9, config.channel_count());
        let pixels = gradient_image(17, 9, config.channel_count());

        let bytes = compress_image(&pixels, geometry, &config).unwrap();
        let decoded = decompress_image(&bytes, &config).unwrap();

        assert_eq!(decoded.geometry, geometry, "{:?}", config);
        assert_eq!(decoded.pixels, pixels, "{:?}", config);
    }
}

#[test]
fn test_image_artifact_layout() {
    let config = CodecConfig::gray_diff();
    let geometry = ImageGeometry::new(4, 1, 1);
    let bytes = compress_image(&[10, 12, 12, 250], geometry, &config).unwrap();

    // Geometry header, then a bitstream of the residuals [10, 2, 0, 238].
    assert_eq!(&bytes[..4], &[4, 0, 1, 0]);
    let expected_bitstream = compress_symbols(&[10, 2, 0, 238]).unwrap();
    assert_eq!(&bytes[4..], expected_bitstream.as_slice());
}

#[test]
fn test_row_delta_helps_gradients() {
    let geometry = ImageGeometry::new(64, 64, 1);
    let pixels = gradient_image(64, 64, 1);

    let plain = compress_image(&pixels, geometry, &CodecConfig::gray()).unwrap();
    let diff = compress_image(&pixels, geometry, &CodecConfig::gray_diff()).unwrap();
    assert!(diff.len() < plain.len());
}

#[test]
fn test_empty_image_roundtrip() {
    let config = CodecConfig::color();
    let geometry = ImageGeometry::new(0, 0, 3);
    let bytes = compress_image(&[], geometry, &config).unwrap();
    assert_eq!(bytes, vec![0, 0, 0, 0, 0, 8]);

    let decoded = decompress_image(&bytes, &config).unwrap();
    assert!(decoded.pixels.is_empty());
    assert_eq!(decoded.geometry, geometry);
}

#[test]
fn test_compress_image_rejects_bad_input() {
    let config = CodecConfig::color();

    // Pixel count disagrees with geometry.
    let err = compress_image(&[0; 10], ImageGeometry::new(2, 2, 3), &config).unwrap_err();
    assert!(matches!(err, CodecError::SizeMismatch { field: "pixels", .. }));

    // Channel count disagrees with config.
    let err = compress_image(&[0; 4], ImageGeometry::new(2, 2, 1), &config).unwrap_err();
    assert!(matches!(err, CodecError::SizeMismatch { field: "channels", .. }));

    // Width too large for the 16-bit header.
    let err = compress_image(&[], ImageGeometry::new(70_000, 0, 3), &config).unwrap_err();
    assert!(matches!(err, CodecError::DimensionTooLarge { field: "width", .. }));
}

#[test]
fn test_decompress_image_geometry_mismatch_is_malformed() {
    let config = CodecConfig::gray();
    let geometry = ImageGeometry::new(3, 2, 1);
    let mut bytes = compress_image(&[1, 2, 3, 4, 5, 6], geometry, &config).unwrap();

    // Claim a 3x3 image while the payload only holds 6 samples.
    bytes[2] = 3;
    let err = decompress_image(&bytes, &config).unwrap_err();
    assert!(matches!(
        err,
        CodecError::MalformedStream {
            field: "geometry_header",
            ..
        }
    ));
}

#[test]
fn test_decompress_image_wrong_channel_config() {
    let geometry = ImageGeometry::new(2, 2, 3);
    let bytes = compress_image(&gradient_image(2, 2, 3), geometry, &CodecConfig::color()).unwrap();

    // 12 decoded samples cannot be a 2x2 single-channel image.
    let err = decompress_image(&bytes, &CodecConfig::gray()).unwrap_err();
    assert!(matches!(err, CodecError::MalformedStream { .. }));
}

#[test]
fn test_decompress_image_truncated() {
    for bytes in [&[][..], &[3, 0, 2][..], &[3, 0, 2, 0][..], &[3, 0, 2, 0, 0][..]] {
        let err = decompress_image(bytes, &CodecConfig::gray()).unwrap_err();
        assert!(matches!(err, CodecError::MalformedStream { .. }));
    }
}

#[test]
fn test_four_channel_layout() {
    let config = CodecConfig {
        filter: FilterMode::RowDelta,
        layout: ChannelLayout::MultiChannel { channels: 4 },
    };
    let geometry = ImageGeometry::new(5, 3, 4);
    let pixels = random_bytes(60, 11);

    let bytes = compress_image(&pixels, geometry, &config).unwrap();
    let info = ImageArtifact::peek_info(&bytes).unwrap();
    assert_eq!((info.geometry.width, info.geometry.height), (5, 3));

    assert_eq!(decompress_image(&bytes, &config).unwrap().pixels, pixels);
}

//==================================================================================
// Headerless planes
//==================================================================================

#[test]
fn test_decompress_plane_with_out_of_band_geometry() {
    let pixels = gradient_image(8, 4, 1);
    let residuals = crate::kernels::row_delta::forward(&pixels, 8, 4).unwrap();
    let bytes = compress_symbols(&residuals).unwrap();

    let restored = decompress_plane(&bytes, 8, 4, FilterMode::RowDelta).unwrap();
    assert_eq!(restored, pixels);
}

#[test]
fn test_decompress_plane_never_guesses_geometry() {
    let bytes = compress_symbols(&gradient_image(8, 4, 1)).unwrap();
    let err = decompress_plane(&bytes, 16, 4, FilterMode::None).unwrap_err();
    assert!(matches!(
        err,
        CodecError::MalformedStream {
            field: "geometry_header",
            ..
        }
    ));
}
