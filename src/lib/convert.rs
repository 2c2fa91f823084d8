use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::io;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::palettes::builtin::BuiltInPalette;
use crate::palettes::palette::PaletteTable;
use crate::remap::apply_palette;

pub const STATUS_SUCCESS: i32 = 0;
pub const STATUS_FAILURE: i32 = 1;

/// Where a conversion run gets its palette from.
#[derive(Clone, Debug, PartialEq)]
pub enum PaletteSource {
	File(PathBuf),
	BuiltIn(BuiltInPalette),
}

impl Display for PaletteSource {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteSource::File(path) => write!(f, "{}", path.display()),
			PaletteSource::BuiltIn(pal) => write!(f, "built-in {pal:?} palette"),
		}
	}
}

impl From<BuiltInPalette> for PaletteSource {
	fn from(pal: BuiltInPalette) -> Self {
		PaletteSource::BuiltIn(pal)
	}
}

impl From<PathBuf> for PaletteSource {
	fn from(path: PathBuf) -> Self {
		PaletteSource::File(path)
	}
}

/// Built-in palettes are borrowed as-is; files are parsed into a fresh table.
pub fn load_palette(source: &PaletteSource) -> Result<Cow<'static, PaletteTable>, ConvertError> {
	match source {
		PaletteSource::File(path) => PaletteTable::from_playpal_file(path).map(Cow::Owned),
		PaletteSource::BuiltIn(pal) => Ok(Cow::Borrowed(pal.table())),
	}
}

/// Loads the palette, then remaps all of `input` into `output`.
///
/// Nothing is read from `input` unless the palette loaded successfully.
pub fn convert<R: Read, W: Write>(source: &PaletteSource, input: R, output: W) -> Result<u64, ConvertError> {
	let table = load_palette(source)?;
	apply_palette(&table, input, output)
}

pub fn convert_stdio(source: &PaletteSource) -> Result<u64, ConvertError> {
	let table = load_palette(source)?;

	let stdin = io::stdin().lock();
	let stdout = BufWriter::new(io::stdout().lock());
	apply_palette(&table, stdin, stdout)
}

/// Converts stdin to stdout with the palette file at `path`, returning an integer status.
///
/// This is the whole surface a scripting binding needs: it takes a path string and
/// reports [STATUS_SUCCESS] or [STATUS_FAILURE]. Failures are logged at `error`, or printed
/// to stderr directly when no logger would show them.
pub fn playpal2rgb<P: AsRef<Path>>(path: P) -> i32 {
	let source = PaletteSource::from(path.as_ref().to_path_buf());

	match convert_stdio(&source) {
		Ok(_) => STATUS_SUCCESS,
		Err(e) => {
			let e = anyhow::Error::from(e);
			if log::log_enabled!(log::Level::Error) {
				log::error!("converting with {source} failed: {e:#}");
			} else {
				eprintln!("{e:#}");
			}
			STATUS_FAILURE
		}
	}
}
