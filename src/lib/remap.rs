use std::io::{Read, Write};

use humansize::DECIMAL;

use crate::error::ConvertError;
use crate::palettes::palette::PaletteTable;

const BYTES_PER_PIXEL: u64 = 3;

/// Replaces every index byte read from `input` with its RGB triple from `table`.
///
/// Input is pulled one byte at a time and each triple is handed to `output` as soon as it's
/// looked up, so a failed write stops the run without consuming any further input. Bytes
/// already written stay written. Returns the number of indices converted.
pub fn apply_palette<R: Read, W: Write>(table: &PaletteTable, input: R, mut output: W) -> Result<u64, ConvertError> {
	let mut converted = 0_u64;

	for index in input.bytes() {
		let index = index.map_err(ConvertError::SourceRead)?;
		output.write_all(&table.get(index).to_bytes()).map_err(ConvertError::SinkWrite)?;
		converted += 1;
	}

	output.flush().map_err(ConvertError::SinkWrite)?;

	log::debug!(
		"converted {converted} indices ({} written)",
		humansize::format_size(converted * BYTES_PER_PIXEL, DECIMAL)
	);

	Ok(converted)
}
