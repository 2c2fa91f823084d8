pub mod builtin;
pub(crate) mod pal_playpal;
pub mod palette;

pub const PALETTE_COLORS: usize = 256;

/// Bytes per palette record: red, green, blue, then one ignored padding byte.
pub const RECORD_SIZE: usize = 4;

pub const PLAYPAL_SIZE: usize = PALETTE_COLORS * RECORD_SIZE;

/// Written in place of the padding byte when serializing; never checked when reading.
pub(crate) const RECORD_PADDING: u8 = 0;
