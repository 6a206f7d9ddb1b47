// In: src/chunk_pipeline/orchestrator/mod.rs

mod core;

pub use self::core::{
    compress_image, compress_symbols, decompress_image, decompress_plane, decompress_symbols,
};
