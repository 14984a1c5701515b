//! Region compiler: drives the row compressor over a raster view and
//! emits the byte-literal text for one program-storage array.

use bp_core::emit::{array_close, array_open, byte_hex, hi_lo};
use bp_core::{BpError, CompiledBlob, PixelRegion, RasterSource, RegionSpec, Result};
use tracing::debug;

use crate::compressor::{RowCompressor, RowEncoding};

/// Compile one named region. `w == 0 && h == 0` selects whole-image
/// mode: dimensions come from the raster and no position header is
/// emitted. Aborts before emitting anything if the region leaves the
/// raster.
pub fn compile_region(raster: &dyn RasterSource, spec: &RegionSpec) -> Result<CompiledBlob> {
    let whole_image = spec.w == 0 && spec.h == 0;
    let region = if whole_image {
        PixelRegion::whole(raster)
    } else {
        PixelRegion::new(
            raster,
            spec.x as u32,
            spec.y as u32,
            spec.w as u32,
            spec.h as u32,
        )
    };
    if !region.in_bounds() {
        return Err(BpError::RegionOutOfBounds {
            name: spec.name.clone(),
        });
    }

    let mut text = String::new();
    let mut count = 0usize;
    if whole_image {
        text.push_str(&array_open(&format!("p{}Image", spec.name)));
    } else {
        text.push_str(&array_open(&format!("p{}Data", spec.name)));
        text.push_str(&format!(
            "  {}, {}, {}, {},  // xHi,xLo, yHi,yLo, wHi,wLo, hHi,hLo,\n",
            hi_lo(spec.x),
            hi_lo(spec.y),
            hi_lo(spec.w),
            hi_lo(spec.h),
        ));
        count += 8;
    }

    let mut compressor = RowCompressor::new();
    for row in 0..region.h {
        let encoding = compressor.encode_row(&region, row);
        count += encoding.byte_count();
        if let Some(esc) = encoding.escape_byte() {
            text.push_str("  ");
            text.push_str(&byte_hex(esc));
            text.push_str(",\n");
        } else if let RowEncoding::Literal(bytes) = encoding {
            text.push_str(&literal_row_line(&bytes, region.w));
        }
    }

    text.push_str(&array_close(count));
    debug!(name = %spec.name, bytes = count, "region compiled");
    Ok(CompiledBlob {
        name: spec.name.clone(),
        text,
        bytes: count,
    })
}

/// Whole-image convenience wrapper for icons.
pub fn compile_image(raster: &dyn RasterSource, name: &str) -> Result<CompiledBlob> {
    compile_region(
        raster,
        &RegionSpec {
            name: name.into(),
            x: 0,
            y: 0,
            w: 0,
            h: 0,
        },
    )
}

/// Literal row text: full bytes render `0xAB, `, a final partial byte
/// `0xAB,`.
fn literal_row_line(bytes: &[u8], width: u32) -> String {
    let full = (width / 8) as usize;
    let mut line = String::from("  ");
    for (i, b) in bytes.iter().enumerate() {
        line.push_str(&byte_hex(*b));
        line.push(',');
        if i < full {
            line.push(' ');
        }
    }
    line.push('\n');
    line
}
