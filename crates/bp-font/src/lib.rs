//! Bitmap-font compilation: glyph-definition stream in, program-storage
//! byte-array text out.

pub mod compiler;
pub mod metadata;
pub mod stream;

pub use compiler::{compile_font, BULLET_OUT, COMMAND_OUT, LOGO_OUT};
pub use metadata::{pack_dims, pack_offsets};
pub use stream::{GlyphRecord, GlyphStream};
