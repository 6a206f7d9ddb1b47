//! This module serves as the public API and dispatcher for the collection of all
//! pure, stateless codec kernels.
//!
//! Each kernel is a standalone transform over in-memory buffers. The
//! dispatchers below map a configured `FilterMode` onto the matching kernel
//! so the orchestrator never has to match on it itself.

use crate::config::FilterMode;
use crate::error::CodecError;

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Spatial prediction
pub mod row_delta;

/// Dictionary coding
pub mod lzw;

/// Bit-level framing
pub mod bitstream;

//==================================================================================
// 2. Public API (Filter Dispatchers)
//==================================================================================

/// Applies the configured prefilter to `rows` rows of `width` samples.
pub fn dispatch_filter(
    mode: FilterMode,
    samples: Vec<u8>,
    width: usize,
    rows: usize,
) -> Result<Vec<u8>, CodecError> {
    match mode {
        FilterMode::None => Ok(samples),
        FilterMode::RowDelta => row_delta::forward(&samples, width, rows),
    }
}

/// Undoes the configured prefilter.
pub fn dispatch_unfilter(
    mode: FilterMode,
    residuals: Vec<u8>,
    width: usize,
    rows: usize,
) -> Result<Vec<u8>, CodecError> {
    match mode {
        FilterMode::None => Ok(residuals),
        FilterMode::RowDelta => row_delta::inverse(&residuals, width, rows),
    }
}
