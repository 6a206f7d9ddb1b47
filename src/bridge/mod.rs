// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the pixlzw library. It wraps the
// pure `chunk_pipeline` engine and adapts caller-side pixel containers to it.
//
// Data Flow (Compression):
//
//   1. [Stateless API (compress_array / compress_image)] -> Receives pixels
//         |
//         `-> a. `ndarray_impl` flattens arrays into interleaved samples
//         |
//         `-> b. Calls the pure engine with samples + `ImageGeometry`
//
//   2. [Pipeline Engine (chunk_pipeline::orchestrator)]
//         frame -> filter -> LZW -> pack -> geometry header -> `Vec<u8>`
//
// Data Flow (Decompression):
//
//   1. [Pipeline Engine] -> `&[u8]` -> `DecodedImage`
//
//   2. [Stateless API (decompress_array)] -> reshapes into `Array3<u8>`
//
// ====================================================================================
pub(crate) mod format;
pub(crate) mod ndarray_impl;
pub mod stateless_api;

// --- Low-Level Stateless API ---
pub use stateless_api::{
    analyze_artifact, analyze_bitstream, compress_array, compress_bytes, compress_gray_array,
    compress_image, decompress_array, decompress_bytes, decompress_image, decompress_plane,
};

// --- Format Constants and Structs ---
pub use format::{CompressionStats, GEOMETRY_HEADER_LEN, MIN_IMAGE_ARTIFACT_LEN};
