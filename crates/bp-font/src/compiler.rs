//! Font compiler: filters the glyph stream, remaps the two special
//! glyphs, and re-emits everything as one program-storage array with
//! nibble-packed metadata.

use bp_core::emit::{array_close, array_open, byte_hex, created_from};
use bp_core::{CompiledBlob, FontConfig, Result};
use tracing::debug;

use crate::metadata::{pack_dims, pack_offsets};
use crate::stream::{GlyphRecord, GlyphStream};

/// Output code point of the remapped bullet glyph.
pub const BULLET_OUT: i32 = 127;
/// Output code point of the remapped logo glyph.
pub const LOGO_OUT: i32 = 128;
/// Code point of the appended command glyph.
pub const COMMAND_OUT: i32 = 129;

/// Stream code point of the bullet glyph.
const BULLET_IN: i32 = 8226;
/// Stream code point of the logo glyph.
const LOGO_IN: i32 = 63743;

/// The command glyph is not in the source font; its record is fixed and
/// appended verbatim after the stream's glyphs.
const COMMAND_GLYPH_TEXT: &str = "
  // (not in font file)
  129,  // <command>
  0xA9, 0x00,
  0b0110001, 0b10000000,
  0b1001010, 0b01000000,
  0b1001010, 0b01000000,
  0b0111111, 0b10000000,
  0b0001010, 0b00000000,
  0b0111111, 0b10000000,
  0b1001010, 0b01000000,
  0b1001010, 0b01000000,
  0b0110001, 0b10000000,
";

/// Bytes the command glyph contributes: code point, two metadata bytes,
/// nine 2-byte rows.
const COMMAND_GLYPH_BYTES: usize = 21;

/// Compile the glyph stream into the `Font` array. Fatal on a malformed
/// stream; nothing partial is returned.
pub fn compile_font(stream: &str, config: &FontConfig) -> Result<CompiledBlob> {
    let mut records = GlyphStream::new(stream);

    let mut text = String::new();
    text.push_str(&created_from(&config.source));
    text.push_str(&format!("#define FONT_HEIGHT    {}\n", config.height));
    text.push_str(&format!("#define FONT_DESCENDER  {}\n", config.descender));
    text.push_str(&array_open("Font"));
    text.push_str("  // char\n");
    text.push_str("  // (w, h):0bwwwwhhhh, (dx, dy):0bsxxxsyyy s:sign, 1=-ve\n");
    text.push_str("  // 1BPP row data...\n");

    let mut count = 1usize; // terminating zero byte
    let mut glyphs = 0usize;
    while let Some(record) = records.next_record()? {
        let Some(code_point) = remap_code_point(record.code_point) else {
            continue;
        };
        if code_point == BULLET_OUT {
            text.push('\n');
        }
        emit_glyph(&mut text, code_point, &record);
        count += 3 + row_bytes(&record);
        glyphs += 1;
    }

    text.push_str(COMMAND_GLYPH_TEXT);
    count += COMMAND_GLYPH_BYTES;
    text.push_str("  0\n");
    text.push_str(&array_close(count));
    debug!(glyphs, bytes = count, "font compiled");
    Ok(CompiledBlob {
        name: "Font".into(),
        text,
        bytes: count,
    })
}

/// Inclusion filter and remapping. `None` drops the glyph with zero
/// emitted bytes.
fn remap_code_point(cp: i32) -> Option<i32> {
    if cp > 32 && cp < 127 {
        Some(cp)
    } else if cp == BULLET_IN {
        Some(BULLET_OUT)
    } else if cp == LOGO_IN {
        Some(LOGO_OUT)
    } else {
        None
    }
}

/// Rows are one byte wide up to 8 pixels, two bytes beyond, counted
/// from the declared metrics.
fn row_bytes(record: &GlyphRecord) -> usize {
    if record.w <= 8 {
        record.h as usize
    } else {
        2 * record.h as usize
    }
}

fn emit_glyph(text: &mut String, code_point: i32, record: &GlyphRecord) {
    text.push_str(&format!("  {},", code_point));
    match code_point {
        BULLET_OUT => text.push_str("  // <bullet>"),
        LOGO_OUT => text.push_str("  // <apple>"),
        _ => {
            if let Some(ch) = char::from_u32(code_point as u32) {
                text.push_str(&format!("  // '{}'", ch));
            }
        }
    }
    text.push('\n');
    text.push_str(&format!(
        "  {}, {},\n",
        byte_hex(pack_dims(record.w, record.h)),
        byte_hex(pack_offsets(record.dx, record.dy)),
    ));
    text.push_str("  ");
    for token in &record.rows {
        // Fixed 2-character chunks, one emitted byte each.
        let mut digits = token.chars();
        while let (Some(hi), Some(lo)) = (digits.next(), digits.next()) {
            text.push_str("0x");
            text.push(hi);
            text.push(lo);
            text.push_str(", ");
        }
    }
    text.push('\n');
}
