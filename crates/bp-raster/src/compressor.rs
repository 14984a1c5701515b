//! Per-row encoding decision.

use bp_core::PixelRegion;

use crate::history::RowHistoryTable;
use crate::row::pack_row;
use crate::{ESC_IDX_BLACK, ESC_VALUE};

/// How one scanline is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEncoding {
    /// Single escape byte: the row holds no white pixel.
    AllBlack,
    /// Single escape byte referencing a history slot.
    Backref(usize),
    /// Literal packed bytes, now recorded in the history.
    Literal(Vec<u8>),
}

impl RowEncoding {
    /// The escape byte, for the two non-literal encodings.
    pub fn escape_byte(&self) -> Option<u8> {
        match self {
            RowEncoding::AllBlack => Some(ESC_VALUE | ESC_IDX_BLACK),
            RowEncoding::Backref(slot) => Some(ESC_VALUE | *slot as u8),
            RowEncoding::Literal(_) => None,
        }
    }

    /// Bytes this row contributes to the blob.
    pub fn byte_count(&self) -> usize {
        match self {
            RowEncoding::AllBlack | RowEncoding::Backref(_) => 1,
            RowEncoding::Literal(bytes) => bytes.len(),
        }
    }
}

/// Duplicate-row compressor: one history table, one region pass.
#[derive(Debug, Default)]
pub struct RowCompressor {
    history: RowHistoryTable,
}

impl RowCompressor {
    pub fn new() -> Self {
        Self {
            history: RowHistoryTable::new(),
        }
    }

    /// Encode one scanline. An all-black row never touches the history;
    /// its bit pattern is discarded.
    pub fn encode_row(&mut self, region: &PixelRegion<'_>, row: u32) -> RowEncoding {
        let packed = pack_row(region, row);
        if packed.iter().all(|b| *b == 0) {
            return RowEncoding::AllBlack;
        }
        if let Some(slot) = self.history.lookup(&packed) {
            return RowEncoding::Backref(slot);
        }
        self.history.insert(&packed);
        RowEncoding::Literal(packed)
    }
}
