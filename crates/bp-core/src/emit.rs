//! Byte-literal text emission helpers.
//!
//! The grammar matches the packaged headers byte-for-byte: uppercase hex
//! data bytes, decimal hi/lo header pairs, trailing byte-count
//! annotations. Regenerated output must diff clean against shipped
//! headers.

/// One data byte as an uppercase hex literal: `0xAB`.
pub fn byte_hex(b: u8) -> String {
    format!("0x{:02X}", b)
}

/// Big-endian 16-bit value as decimal `hi,lo` text.
pub fn hi_lo(value: u16) -> String {
    format!("{},{}", value / 256, value % 256)
}

/// `// (created from "<source>")` banner line.
pub fn created_from(source: &str) -> String {
    format!("// (created from \"{}\")\n", source)
}

/// Open a named byte array held in program storage.
pub fn array_open(name: &str) -> String {
    format!("static const uint8_t {}[] PROGMEM =\n{{\n", name)
}

/// Close an array with its byte-count annotation.
pub fn array_close(bytes: usize) -> String {
    format!("}}; // {} bytes\n\n", bytes)
}

/// Whole-run total annotation.
pub fn total_annotation(bytes: usize) -> String {
    format!("// total {} bytes\n\n", bytes)
}
