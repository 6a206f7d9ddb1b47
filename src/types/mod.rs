//! This module defines the core, strongly-typed data representations used
//! throughout the pixlzw pipeline.

pub mod image_geometry;

// Re-export the main type(s) for easier access.
pub use image_geometry::ImageGeometry;
