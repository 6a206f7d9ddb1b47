//! The pure, library-agnostic data carriers passed into and out of the
//! chunk pipeline.

use crate::types::ImageGeometry;

/// A fully decoded image: interleaved, row-major samples plus their shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub geometry: ImageGeometry,
}

impl DecodedImage {
    pub fn new(pixels: Vec<u8>, geometry: ImageGeometry) -> Self {
        Self { pixels, geometry }
    }
}
