//! Defines the on-disk format for a compressed image artifact: a fixed 4-byte
//! geometry header followed by a framed LZW bitstream. This module is the
//! single source of truth for serialization, deserialization, and efficient
//! metadata peeking of the artifact.

use std::io::{Cursor, Read, Write};

use crate::bridge::format::{GEOMETRY_HEADER_LEN, MIN_IMAGE_ARTIFACT_LEN};
use crate::error::CodecError;
use crate::kernels::bitstream::{self, BitstreamInfo};

//==================================================================================
// Public Structs
//==================================================================================

/// Persisted image dimensions: `[width: u16 LE][height: u16 LE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryHeader {
    pub width: u16,
    pub height: u16,
}

/// Metadata extracted from an artifact's headers without unpacking any codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
    pub geometry: GeometryHeader,
    pub bitstream: BitstreamInfo,
    /// Geometry header plus bitstream header, in bytes.
    pub header_size: usize,
    /// Packed code bytes after the headers.
    pub data_size: usize,
}

/// A compressed image held in memory: its geometry plus the framed bitstream
/// (`[pad_count][codelength][codes][pad]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageArtifact {
    pub header: GeometryHeader,
    pub bitstream: Vec<u8>,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl GeometryHeader {
    /// Builds a header, failing if either dimension exceeds 65535.
    pub fn new(width: usize, height: usize) -> Result<Self, CodecError> {
        let narrow = |field: &'static str, value: usize| {
            u16::try_from(value).map_err(|_| CodecError::DimensionTooLarge { field, value })
        };
        Ok(Self {
            width: narrow("width", width)?,
            height: narrow("height", height)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; GEOMETRY_HEADER_LEN] {
        let mut buf = [0u8; GEOMETRY_HEADER_LEN];
        buf[..2].copy_from_slice(&self.width.to_le_bytes());
        buf[2..].copy_from_slice(&self.height.to_le_bytes());
        buf
    }

    /// Parses the first four bytes of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut cursor = Cursor::new(bytes);
        let map_err = |_: std::io::Error| {
            CodecError::malformed(
                "geometry_header",
                format!("{} bytes", GEOMETRY_HEADER_LEN),
                format!("{} bytes", bytes.len()),
            )
        };

        let mut u16_buf = [0u8; 2];
        cursor.read_exact(&mut u16_buf).map_err(map_err)?;
        let width = u16::from_le_bytes(u16_buf);
        cursor.read_exact(&mut u16_buf).map_err(map_err)?;
        let height = u16::from_le_bytes(u16_buf);

        Ok(Self { width, height })
    }

    /// Pixels per channel plane.
    pub fn plane_len(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Prepends the geometry header to a framed bitstream.
pub fn attach_header(header: GeometryHeader, bitstream: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(GEOMETRY_HEADER_LEN + bitstream.len());
    // Writing into a Vec<u8> cannot fail.
    let _ = buf.write_all(&header.to_bytes());
    let _ = buf.write_all(bitstream);
    buf
}

/// Splits an artifact into its geometry header and the remaining bitstream.
pub fn read_header(bytes: &[u8]) -> Result<(GeometryHeader, &[u8]), CodecError> {
    let header = GeometryHeader::from_bytes(bytes)?;
    Ok((header, &bytes[GEOMETRY_HEADER_LEN..]))
}

impl ImageArtifact {
    /// Serializes the artifact into its canonical byte layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        attach_header(self.header, &self.bitstream)
    }

    /// Deserializes an artifact, validating both headers.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        // Reuse peek_info so both paths share one set of header checks.
        let info = Self::peek_info(bytes)?;
        Ok(Self {
            header: info.geometry,
            bitstream: bytes[GEOMETRY_HEADER_LEN..].to_vec(),
        })
    }

    /// Peeks into a serialized artifact's headers without unpacking the codes.
    pub fn peek_info(bytes: &[u8]) -> Result<HeaderInfo, CodecError> {
        if bytes.len() < MIN_IMAGE_ARTIFACT_LEN {
            return Err(CodecError::malformed(
                "artifact",
                format!("at least {} bytes", MIN_IMAGE_ARTIFACT_LEN),
                format!("{} bytes", bytes.len()),
            ));
        }

        let (geometry, rest) = read_header(bytes)?;
        let bitstream = bitstream::peek(rest)?;

        Ok(HeaderInfo {
            geometry,
            bitstream,
            header_size: MIN_IMAGE_ARTIFACT_LEN,
            data_size: bytes.len() - MIN_IMAGE_ARTIFACT_LEN,
        })
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
