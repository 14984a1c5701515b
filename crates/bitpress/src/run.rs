//! Whole-run driver: one object owns the assembled output text and the
//! grand-total byte accumulator.

use bp_core::emit::{created_from, total_annotation};
use bp_core::{CompiledBlob, FontConfig, RasterSource, RegionSpec, Result};
use bp_raster::{ESC_IDX, ESC_IDX_BLACK, ESC_MASK, ESC_VALUE};
use tracing::info;

/// One compile invocation. Blobs append in call order; a failed compile
/// appends nothing, so the run's text never holds partial output.
#[derive(Debug, Default)]
pub struct CompileRun {
    text: String,
    grand_total: usize,
}

impl CompileRun {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source banner plus the duplicate-row escape defines, ahead of the
    /// first region.
    pub fn graphics_banner(&mut self, source: &str) {
        self.text.push_str(&created_from(source));
        self.text.push_str("// duplicate row encoding:\n");
        self.text.push_str(&format!(
            "#define BMP_ROW_ESC_MASK        0b{:08b} // mask for escape byte\n",
            ESC_MASK
        ));
        self.text.push_str(&format!(
            "#define BMP_ROW_ESC_VALUE       0b{:08b} // escape byte\n",
            ESC_VALUE
        ));
        self.text.push_str(&format!(
            "#define BMP_ROW_ESC_IDX         0b{:08b} // index to recent or initial\n",
            ESC_IDX
        ));
        self.text.push_str(&format!(
            "#define BMP_ROW_ESC_IDX_BLACK   0b{:08b} // index to black row\n",
            ESC_IDX_BLACK
        ));
        self.text.push('\n');
    }

    /// Per-icon source banner.
    pub fn icon_banner(&mut self, source: &str) {
        self.text.push_str(&created_from(source));
    }

    /// Compile a named sub-region (or whole image when `w == h == 0`)
    /// and append it. Returns the blob's byte count.
    pub fn region(&mut self, raster: &dyn RasterSource, spec: &RegionSpec) -> Result<usize> {
        let blob = bp_raster::compile_region(raster, spec)?;
        Ok(self.append(blob))
    }

    /// Compile a whole-image icon and append it.
    pub fn icon(&mut self, raster: &dyn RasterSource, name: &str) -> Result<usize> {
        let blob = bp_raster::compile_image(raster, name)?;
        Ok(self.append(blob))
    }

    /// Compile the glyph stream and append the font array.
    pub fn font(&mut self, stream: &str, config: &FontConfig) -> Result<usize> {
        let blob = bp_font::compile_font(stream, config)?;
        Ok(self.append(blob))
    }

    fn append(&mut self, blob: CompiledBlob) -> usize {
        self.text.push_str(&blob.text);
        self.grand_total += blob.bytes;
        blob.bytes
    }

    pub fn grand_total(&self) -> usize {
        self.grand_total
    }

    /// Append the grand-total annotation and return the assembled text
    /// with the total.
    pub fn finish(mut self) -> (String, usize) {
        self.text.push_str(&total_annotation(self.grand_total));
        info!(bytes = self.grand_total, "compile run finished");
        (self.text, self.grand_total)
    }
}
