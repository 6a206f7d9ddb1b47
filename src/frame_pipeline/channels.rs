// In: src/frame_pipeline/channels.rs

//! Pure helpers that move 8-bit samples between the interleaved pixel order
//! (`r g b r g b ...`) and the planar order the codec compresses
//! (`r r ... g g ... b b ...`).

use crate::error::CodecError;

/// De-interleaves `pixels` into `channel_count` planes. Plane `k` holds the
/// `k`-th component of every pixel, in row-major order.
pub fn split_channels(pixels: &[u8], channel_count: usize) -> Result<Vec<Vec<u8>>, CodecError> {
    if channel_count == 0 {
        return Err(CodecError::InvalidConfig(
            "channel count must be at least 1".to_string(),
        ));
    }
    if pixels.len() % channel_count != 0 {
        // Report the next length that would split evenly.
        return Err(CodecError::SizeMismatch {
            field: "pixels",
            expected: (pixels.len() / channel_count + 1) * channel_count,
            actual: pixels.len(),
        });
    }

    let plane_len = pixels.len() / channel_count;
    let mut planes: Vec<Vec<u8>> = (0..channel_count)
        .map(|_| Vec::with_capacity(plane_len))
        .collect();
    for pixel in pixels.chunks_exact(channel_count) {
        for (plane, &sample) in planes.iter_mut().zip(pixel) {
            plane.push(sample);
        }
    }
    Ok(planes)
}

/// Concatenates planes into one stream: `plane0 ++ plane1 ++ ...`.
pub fn merge_planes(planes: &[Vec<u8>]) -> Result<Vec<u8>, CodecError> {
    let plane_len = planes.first().map_or(0, Vec::len);
    if let Some(bad) = planes.iter().find(|p| p.len() != plane_len) {
        return Err(CodecError::SizeMismatch {
            field: "plane",
            expected: plane_len,
            actual: bad.len(),
        });
    }
    Ok(planes.concat())
}

/// Cuts a merged stream back into `channel_count` planes of `plane_len` samples.
pub fn split_planes(
    stream: &[u8],
    channel_count: usize,
    plane_len: usize,
) -> Result<Vec<Vec<u8>>, CodecError> {
    let expected = channel_count.saturating_mul(plane_len);
    if channel_count == 0 || stream.len() != expected {
        return Err(CodecError::SizeMismatch {
            field: "stream",
            expected,
            actual: stream.len(),
        });
    }
    if plane_len == 0 {
        return Ok(vec![Vec::new(); channel_count]);
    }
    Ok(stream.chunks_exact(plane_len).map(<[u8]>::to_vec).collect())
}

/// Re-interleaves equal-length planes into pixel order.
pub fn interleave_channels(planes: &[Vec<u8>]) -> Result<Vec<u8>, CodecError> {
    let plane_len = planes.first().map_or(0, Vec::len);
    if let Some(bad) = planes.iter().find(|p| p.len() != plane_len) {
        return Err(CodecError::SizeMismatch {
            field: "plane",
            expected: plane_len,
            actual: bad.len(),
        });
    }

    let mut pixels = Vec::with_capacity(plane_len * planes.len());
    for i in 0..plane_len {
        pixels.extend(planes.iter().map(|plane| plane[i]));
    }
    Ok(pixels)
}
