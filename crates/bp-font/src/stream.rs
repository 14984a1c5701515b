//! Glyph-record stream tokenizer.
//!
//! The input is a sequential text stream of glyph records in BDF layout:
//! `ENCODING` opens a record (a preceding `STARTCHAR` is ignored noise),
//! `BBX` carries the bounding-box quad, `BITMAP` opens the row data,
//! `ENDCHAR` closes the record, and `ENDFONT` ends the stream. The
//! tokenizer yields whole records; a missing expected marker is a typed
//! fatal error, never an out-of-bounds scan.

use bp_core::{BpError, Result};

/// One glyph definition as read from the stream.
///
/// The code point is signed: unencoded glyphs carry -1 and are dropped
/// by the compiler's filter, not by the tokenizer.
#[derive(Debug, Clone)]
pub struct GlyphRecord {
    pub code_point: i32,
    pub w: u32,
    pub h: u32,
    pub dx: i32,
    pub dy: i32,
    /// Verbatim hexadecimal row tokens (2 or 4 digits per row), copied
    /// through, never repacked.
    pub rows: Vec<String>,
}

/// Pull-based tokenizer over a glyph-definition stream.
pub struct GlyphStream<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> GlyphStream<'a> {
    pub fn new(stream: &'a str) -> Self {
        Self {
            lines: stream.lines(),
        }
    }

    /// Next glyph record, or `None` once `ENDFONT` is reached.
    pub fn next_record(&mut self) -> Result<Option<GlyphRecord>> {
        let code_point = loop {
            let Some(line) = self.lines.next() else {
                return Err(BpError::MissingMarker { marker: "ENDFONT" });
            };
            if line.starts_with("ENDFONT") {
                return Ok(None);
            }
            if let Some(rest) = line.strip_prefix("ENCODING") {
                let token = rest.split_whitespace().next().ok_or(BpError::InvalidField {
                    field: "ENCODING",
                    value: rest.trim().to_string(),
                })?;
                break parse_int::<i32>("ENCODING", token)?;
            }
        };

        let (w, h, dx, dy) = loop {
            let Some(line) = self.lines.next() else {
                return Err(BpError::UnexpectedEnd { expected: "BBX" });
            };
            if let Some(rest) = line.strip_prefix("BBX") {
                break parse_bbx(rest)?;
            }
            if line.starts_with("ENDCHAR") || line.starts_with("ENDFONT") {
                return Err(BpError::MissingMarker { marker: "BBX" });
            }
        };

        loop {
            let Some(line) = self.lines.next() else {
                return Err(BpError::UnexpectedEnd { expected: "BITMAP" });
            };
            if line.starts_with("BITMAP") {
                break;
            }
            if line.starts_with("ENDCHAR") || line.starts_with("ENDFONT") {
                return Err(BpError::MissingMarker { marker: "BITMAP" });
            }
        }

        let mut rows = Vec::new();
        loop {
            let Some(line) = self.lines.next() else {
                return Err(BpError::MissingMarker { marker: "ENDCHAR" });
            };
            if line.starts_with("ENDCHAR") {
                break;
            }
            if line.starts_with("ENDFONT") {
                return Err(BpError::MissingMarker { marker: "ENDCHAR" });
            }
            rows.push(line.trim().to_string());
        }

        Ok(Some(GlyphRecord {
            code_point,
            w,
            h,
            dx,
            dy,
            rows,
        }))
    }
}

/// The bounding-box quad: width, height, then the signed offsets.
fn parse_bbx(rest: &str) -> Result<(u32, u32, i32, i32)> {
    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(BpError::InvalidField {
            field: "BBX",
            value: rest.trim().to_string(),
        });
    }
    Ok((
        parse_int::<u32>("BBX width", fields[0])?,
        parse_int::<u32>("BBX height", fields[1])?,
        parse_int::<i32>("BBX x-offset", fields[2])?,
        parse_int::<i32>("BBX y-offset", fields[3])?,
    ))
}

fn parse_int<T: std::str::FromStr>(field: &'static str, token: &str) -> Result<T> {
    token.parse().map_err(|_| BpError::InvalidField {
        field,
        value: token.to_string(),
    })
}
