// In: src/error.rs

//! This module defines the single, unified error type for the entire pixlzw library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    // =========================================================================
    // === Codec Errors (Specific to our library's logic)
    // =========================================================================
    /// The decoder met a code that is neither in the dictionary nor the next
    /// index the encoder could have just created.
    #[error("Invalid LZW code {code}: dictionary holds {dict_size} entries")]
    InvalidCode { code: u32, dict_size: usize },

    /// An artifact is too short for its mandatory headers, or a header field
    /// disagrees with the payload it describes.
    #[error("Malformed stream: field '{field}' expected {expected}, got {actual}")]
    MalformedStream {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("Size mismatch for '{field}': expected {expected}, got {actual}")]
    SizeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Image {field} of {value} does not fit the 16-bit geometry header")]
    DimensionTooLarge { field: &'static str, value: usize },

    #[error("Bitstream encoding error: value {value} exceeds bit width {width}")]
    BitstreamEncode { value: u32, width: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Pipeline execution failed at stage '{stage}': {source}")]
    PipelineError {
        stage: String,
        #[source]
        source: Box<CodecError>,
    },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error from ndarray when a decoded buffer cannot take the requested shape.
    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    /// An error from the Serde JSON library, typically while loading a config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Shorthand for a `MalformedStream` error.
    pub(crate) fn malformed(
        field: &'static str,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        CodecError::MalformedStream {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Wraps `self` with the name of the pipeline stage that produced it.
    pub(crate) fn at_stage(self, stage: &str) -> Self {
        CodecError::PipelineError {
            stage: stage.to_string(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through any `PipelineError` wrappers.
    pub fn root_cause(&self) -> &CodecError {
        match self {
            CodecError::PipelineError { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
