use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use byteorder::ReadBytesExt;

use crate::error::ConvertError;
use crate::palettes::palette::{Color, PaletteTable};
use crate::palettes::{PALETTE_COLORS, PLAYPAL_SIZE, RECORD_SIZE};

/// Reads one byte, mapping a clean end of input to `None`.
fn read_byte<R: Read>(reader: &mut R, position: usize) -> Result<Option<u8>, ConvertError> {
	match reader.read_u8() {
		Ok(b) => Ok(Some(b)),
		Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
		Err(e) => Err(ConvertError::PaletteIo { position, source: e }),
	}
}

impl PaletteTable {
	/// Parses exactly 256 `[R][G][B][pad]` records and nothing more.
	///
	/// One byte past the last record is probed so oversized input is rejected instead of
	/// silently truncated.
	pub fn from_reader<R: Read>(mut reader: R) -> Result<PaletteTable, ConvertError> {
		let mut colors = [Color::BLACK; PALETTE_COLORS];
		let mut position = 0;

		for color in colors.iter_mut() {
			let mut record = [0_u8; RECORD_SIZE];
			for byte in record.iter_mut() {
				*byte = read_byte(&mut reader, position)?
					.ok_or(ConvertError::TruncatedPalette { read: position })?;
				position += 1;
			}

			// record[3] is padding
			*color = Color::new(record[0], record[1], record[2]);
		}

		if read_byte(&mut reader, position)?.is_some() {
			return Err(ConvertError::OversizedPalette);
		}

		Ok(PaletteTable::new(colors))
	}

	pub fn from_playpal_file<P: AsRef<Path>>(path: P) -> Result<PaletteTable, ConvertError> {
		let path = path.as_ref();
		let f = File::open(path).map_err(|e| ConvertError::ResourceOpen { path: path.to_path_buf(), source: e })?;

		let table = Self::from_reader(f)?;
		log::debug!("loaded palette from {} ({PLAYPAL_SIZE} bytes)", path.display());

		Ok(table)
	}
}
