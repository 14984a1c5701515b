//! BitPress: an offline resource codec for two-colour raster assets.
//!
//! Compiles named raster regions, whole-image icons, and a glyph stream
//! into program-storage byte-array text, with duplicate-row compression
//! and nibble-packed glyph metadata. One [`CompileRun`] owns the
//! assembled output and the grand-total byte count for a whole compile
//! invocation.

mod run;

pub use run::CompileRun;

pub use bp_core::{
    AssetConfig, BitRaster, BpError, CompiledBlob, FontConfig, GraphicsConfig, IconSpec, Pixel,
    PixelRegion, RasterSource, RegionSpec, Result,
};
pub use bp_font::{compile_font, GlyphRecord, GlyphStream};
pub use bp_raster::{
    compile_image, compile_region, RowCompressor, RowEncoding, RowHistoryTable, ESC_IDX,
    ESC_IDX_BLACK, ESC_MASK, ESC_VALUE,
};
