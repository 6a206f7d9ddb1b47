//! This module contains the row-wise delta filter for image planes.
//!
//! Each sample is replaced by its difference from the left neighbour in the
//! same row, using wrapping arithmetic so residuals stay in the sample type
//! and the transform is exactly invertible. The first sample of every row is
//! stored as-is. Rows never reference each other.

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

use crate::error::CodecError;

//==================================================================================
// 1. Generic Core Logic (In-Place)
//==================================================================================

/// Replaces each sample with `row[i] - row[i - 1]`, in place.
fn encode_row_inplace<T>(row: &mut [T])
where
    T: PrimInt + WrappingSub,
{
    // Backwards, so every subtraction still sees the original left neighbour.
    for i in (1..row.len()).rev() {
        row[i] = row[i].wrapping_sub(&row[i - 1]);
    }
}

/// Reconstructs the original samples from residuals, in place, left to right.
fn decode_row_inplace<T>(row: &mut [T])
where
    T: PrimInt + WrappingAdd,
{
    for i in 1..row.len() {
        row[i] = row[i].wrapping_add(&row[i - 1]);
    }
}

fn check_plane_len(len: usize, width: usize, height: usize) -> Result<(), CodecError> {
    let expected = width
        .checked_mul(height)
        .ok_or(CodecError::DimensionTooLarge {
            field: "plane",
            value: usize::MAX,
        })?;
    if len != expected {
        return Err(CodecError::SizeMismatch {
            field: "plane",
            expected,
            actual: len,
        });
    }
    Ok(())
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Applies the filter to a row-major `width x height` plane.
pub fn forward_rows<T>(samples: &[T], width: usize, height: usize) -> Result<Vec<T>, CodecError>
where
    T: PrimInt + WrappingSub,
{
    check_plane_len(samples.len(), width, height)?;
    let mut residuals = samples.to_vec();
    if width > 0 {
        for row in residuals.chunks_exact_mut(width) {
            encode_row_inplace(row);
        }
    }
    Ok(residuals)
}

/// Inverts [`forward_rows`].
pub fn inverse_rows<T>(residuals: &[T], width: usize, height: usize) -> Result<Vec<T>, CodecError>
where
    T: PrimInt + WrappingAdd,
{
    check_plane_len(residuals.len(), width, height)?;
    let mut samples = residuals.to_vec();
    if width > 0 {
        for row in samples.chunks_exact_mut(width) {
            decode_row_inplace(row);
        }
    }
    Ok(samples)
}

/// Row-delta filter over 8-bit samples: `residual[r, c] = (s[r, c] - s[r, c - 1]) mod 256`.
pub fn forward(samples: &[u8], width: usize, height: usize) -> Result<Vec<u8>, CodecError> {
    forward_rows(samples, width, height)
}

/// Inverse row-delta filter over 8-bit residuals.
pub fn inverse(residuals: &[u8], width: usize, height: usize) -> Result<Vec<u8>, CodecError> {
    inverse_rows(residuals, width, height)
}
