// In: src/bridge/ndarray_impl.rs

//! DATA MARSHALLING between `ndarray` pixel arrays and the flat, interleaved
//! sample buffers the pipeline works on.
//!
//! Arrays are indexed `(row, column, channel)`, the shape image decoders hand
//! out. Iteration uses logical order, so non-contiguous or transposed views are
//! flattened correctly.

use ndarray::{Array3, ArrayView2, ArrayView3};

use crate::chunk_pipeline::context::DecodedImage;
use crate::error::CodecError;
use crate::types::ImageGeometry;

/// Flattens an `(height, width, channels)` array into interleaved samples.
pub fn array3_to_pixels(array: ArrayView3<'_, u8>) -> (Vec<u8>, ImageGeometry) {
    let (height, width, channels) = array.dim();
    let pixels = array.iter().copied().collect();
    (pixels, ImageGeometry::new(width, height, channels))
}

/// Flattens a `(height, width)` grayscale array.
pub fn array2_to_pixels(array: ArrayView2<'_, u8>) -> (Vec<u8>, ImageGeometry) {
    let (height, width) = array.dim();
    let pixels = array.iter().copied().collect();
    (pixels, ImageGeometry::new(width, height, 1))
}

/// Reshapes a decoded image into an `(height, width, channels)` array.
pub fn decoded_to_array3(image: DecodedImage) -> Result<Array3<u8>, CodecError> {
    let g = image.geometry;
    Ok(Array3::from_shape_vec((g.height, g.width, g.channels), image.pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_array3_flattening_is_interleaved() {
        let image = array![[[1u8, 2, 3], [4, 5, 6]], [[7, 8, 9], [10, 11, 12]]];
        let (pixels, geometry) = array3_to_pixels(image.view());
        assert_eq!(geometry, ImageGeometry::new(2, 2, 3));
        assert_eq!(pixels, (1..=12).collect::<Vec<u8>>());
    }

    #[test]
    fn test_transposed_view_uses_logical_order() {
        let image = Array2::from_shape_vec((2, 3), vec![1u8, 2, 3, 4, 5, 6]).unwrap();
        let (pixels, geometry) = array2_to_pixels(image.t());
        assert_eq!(geometry, ImageGeometry::new(2, 3, 1));
        assert_eq!(pixels, vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_decoded_to_array3() {
        let decoded = DecodedImage::new((0..12).collect(), ImageGeometry::new(2, 2, 3));
        let array = decoded_to_array3(decoded).unwrap();
        assert_eq!(array.dim(), (2, 2, 3));
        assert_eq!(array[[1, 0, 2]], 8);
    }

    #[test]
    fn test_decoded_to_array3_shape_error() {
        let decoded = DecodedImage::new(vec![0; 5], ImageGeometry::new(2, 2, 1));
        assert!(matches!(
            decoded_to_array3(decoded),
            Err(CodecError::Shape(_))
        ));
    }
}
