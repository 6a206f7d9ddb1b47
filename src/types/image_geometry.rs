//! The shape of an image payload: width, height and interleaved channel count.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CodecError;

/// Dimensions of an 8-bit image held in memory as a row-major, channel
/// interleaved sample buffer.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageGeometry {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl ImageGeometry {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Pixels per channel plane.
    pub fn plane_len(&self) -> Result<usize, CodecError> {
        self.width
            .checked_mul(self.height)
            .ok_or(CodecError::DimensionTooLarge {
                field: "plane",
                value: usize::MAX,
            })
    }

    /// Total samples across all channels.
    pub fn sample_count(&self) -> Result<usize, CodecError> {
        self.plane_len()?
            .checked_mul(self.channels)
            .ok_or(CodecError::DimensionTooLarge {
                field: "sample_count",
                value: usize::MAX,
            })
    }

    /// Checks that both dimensions fit the 16-bit geometry header.
    pub fn check_header_bounds(&self) -> Result<(), CodecError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if value > usize::from(u16::MAX) {
                return Err(CodecError::DimensionTooLarge { field, value });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ImageGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        let geometry = ImageGeometry::new(4, 3, 3);
        assert_eq!(geometry.plane_len().unwrap(), 12);
        assert_eq!(geometry.sample_count().unwrap(), 36);
        assert_eq!(geometry.to_string(), "4x3x3");
    }

    #[test]
    fn test_header_bounds() {
        assert!(ImageGeometry::new(65535, 65535, 1).check_header_bounds().is_ok());
        let err = ImageGeometry::new(65536, 1, 1).check_header_bounds().unwrap_err();
        assert!(matches!(
            err,
            CodecError::DimensionTooLarge {
                field: "width",
                value: 65536
            }
        ));
        assert!(ImageGeometry::new(1, 70000, 1).check_header_bounds().is_err());
    }
}
