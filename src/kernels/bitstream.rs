//! This module contains the fixed-width bit-packing codec for LZW code streams.
//!
//! Codes are written most-significant bit first, all at the same width. The
//! packed payload is framed as:
//!
//! ```text
//! [pad_count: 8 bits][codelength: 8 bits][code bits ...][pad_count zero bits]
//! ```
//!
//! `pad_count` is the number of zero bits appended to reach a byte boundary.
//! It is written last but stored first, so the writer reserves its byte up
//! front and patches it in `finish`.

use bitvec::prelude::*;

use crate::error::CodecError;

/// Size in bytes of the `[pad_count][codelength]` prefix.
pub const BITSTREAM_HEADER_LEN: usize = 2;
/// Widest code the codec will pack or accept.
pub const MAX_CODELENGTH: u8 = 32;

//==================================================================================
// 1. Bit Writer / Bit Reader
//==================================================================================

/// Appends fixed-width values to a growing MSB-first bit buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    bits: BitVec<u8, Msb0>,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        BitWriter {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Number of bits written so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Writes the low `width` bits of `value`, most significant first.
    pub fn write_bits(&mut self, value: u32, width: u8) -> Result<(), CodecError> {
        if width == 0 || width > MAX_CODELENGTH {
            return Err(CodecError::InvalidConfig(format!(
                "bit width must be in 1..={}, got {}",
                MAX_CODELENGTH, width
            )));
        }
        if width < 32 && value >> width != 0 {
            return Err(CodecError::BitstreamEncode { value, width });
        }
        let start = 32 - width as usize;
        self.bits
            .extend_from_bitslice(&value.view_bits::<Msb0>()[start..]);
        Ok(())
    }

    /// Appends zero bits up to the next byte boundary and returns how many
    /// were added.
    pub fn pad_to_byte(&mut self) -> u8 {
        let pad = (8 - self.bits.len() % 8) % 8;
        self.bits.resize(self.bits.len() + pad, false);
        pad as u8
    }

    /// Pads to a byte boundary and returns the raw bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.pad_to_byte();
        self.bits.into_vec()
    }
}

/// Reads fixed-width values from a bit slice, advancing an internal cursor.
pub struct BitReader<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    cursor: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitReader {
            bits: bytes.view_bits::<Msb0>(),
            cursor: 0,
        }
    }

    /// Restricts the reader to the first `len` bits of its input.
    pub fn truncate(&mut self, len: usize) {
        if len < self.bits.len() {
            self.bits = &self.bits[..len];
        }
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.cursor
    }

    /// Reads the next `width` bits as an unsigned value, or `None` if fewer
    /// than `width` bits remain.
    pub fn read_bits(&mut self, width: u8) -> Option<u32> {
        let width = width as usize;
        if width == 0 || width > MAX_CODELENGTH as usize || self.remaining() < width {
            return None;
        }
        let chunk = &self.bits[self.cursor..self.cursor + width];
        self.cursor += width;

        let mut value = 0u32;
        for bit in chunk.iter().by_vals() {
            value = (value << 1) | u32::from(bit);
        }
        Some(value)
    }
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Header fields of a packed bitstream, read without unpacking the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitstreamInfo {
    pub pad_count: u8,
    pub codelength: u8,
    /// Number of whole codes the payload holds.
    pub code_count: usize,
    /// Length in bytes of the framed bitstream.
    pub byte_len: usize,
}

/// Packs `codes` at `codelength` bits each into a framed byte buffer.
pub fn pack(codes: &[u32], codelength: u8) -> Result<Vec<u8>, CodecError> {
    let mut writer =
        BitWriter::with_capacity(BITSTREAM_HEADER_LEN * 8 + codes.len() * codelength as usize + 8);

    // Placeholder for pad_count, patched once the payload length is known.
    writer.write_bits(0, 8)?;
    writer.write_bits(u32::from(codelength), 8)?;
    for &code in codes {
        writer.write_bits(code, codelength)?;
    }

    let pad_count = writer.pad_to_byte();
    let mut bytes = writer.into_bytes();
    bytes[0] = pad_count;

    log::debug!(
        "bitstream pack: {} codes at {} bits -> {} bytes (pad {})",
        codes.len(),
        codelength,
        bytes.len(),
        pad_count
    );
    Ok(bytes)
}

/// Reads and validates the bitstream header.
pub fn peek(bytes: &[u8]) -> Result<BitstreamInfo, CodecError> {
    let total_bits = bytes.len() * 8;
    if bytes.len() < BITSTREAM_HEADER_LEN {
        return Err(CodecError::malformed(
            "bitstream_header",
            "at least 16 bits",
            format!("{} bits", total_bits),
        ));
    }

    let pad_count = bytes[0];
    let codelength = bytes[1];
    if pad_count > 7 {
        return Err(CodecError::malformed("pad_count", "0..=7", pad_count));
    }
    if codelength == 0 || codelength > MAX_CODELENGTH {
        return Err(CodecError::malformed(
            "codelength",
            format!("1..={}", MAX_CODELENGTH),
            codelength,
        ));
    }

    let body_bits = total_bits - BITSTREAM_HEADER_LEN * 8;
    if usize::from(pad_count) > body_bits {
        return Err(CodecError::malformed(
            "pad_count",
            format!("at most {} payload bits", body_bits),
            pad_count,
        ));
    }

    Ok(BitstreamInfo {
        pad_count,
        codelength,
        code_count: (body_bits - usize::from(pad_count)) / usize::from(codelength),
        byte_len: bytes.len(),
    })
}

/// Unpacks a framed bitstream into its codes and their width. A trailing
/// group shorter than `codelength` is dropped.
pub fn unpack(bytes: &[u8]) -> Result<(Vec<u32>, u8), CodecError> {
    let info = peek(bytes)?;

    let mut reader = BitReader::new(&bytes[BITSTREAM_HEADER_LEN..]);
    let payload_bits = reader.remaining() - usize::from(info.pad_count);
    reader.truncate(payload_bits);

    let mut codes = Vec::with_capacity(info.code_count);
    while let Some(code) = reader.read_bits(info.codelength) {
        codes.push(code);
    }

    log::debug!(
        "bitstream unpack: {} bytes -> {} codes at {} bits",
        bytes.len(),
        codes.len(),
        info.codelength
    );
    Ok((codes, info.codelength))
}
