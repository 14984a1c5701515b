//! Core types for the BitPress resource codec: the two-colour pixel
//! model, raster sampling boundary, compiled-blob type, configuration,
//! errors, and byte-literal emission helpers.

pub mod blob;
pub mod config;
pub mod emit;
pub mod error;
pub mod pixel;

pub use blob::CompiledBlob;
pub use config::{AssetConfig, FontConfig, GraphicsConfig, IconSpec, RegionSpec};
pub use error::{BpError, Result};
pub use pixel::{BitRaster, Pixel, PixelRegion, RasterSource};

#[cfg(test)]
mod tests;
