pub mod convert;
pub mod error;
pub mod palettes;
pub mod remap;

pub use convert::{PaletteSource, convert, convert_stdio, load_palette, playpal2rgb};
pub use error::{ConvertError, Stage};
pub use palettes::builtin::BuiltInPalette;
pub use palettes::palette::{Color, PaletteTable};
pub use remap::apply_palette;
