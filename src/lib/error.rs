use std::io;
use std::path::PathBuf;

use crate::palettes::PLAYPAL_SIZE;

/// The part of a conversion run an error originated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
	Open,
	Load,
	Convert,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
	#[error("Error opening palette file {}", path.display())]
	ResourceOpen { path: PathBuf, source: io::Error },

	#[error("Palette file is too small: ended after {read} of {} bytes", PLAYPAL_SIZE)]
	TruncatedPalette { read: usize },

	#[error("Palette file is too big: expected exactly {} bytes", PLAYPAL_SIZE)]
	OversizedPalette,

	/// Any read failure while loading the palette other than a clean end of input.
	#[error("Error reading palette file at byte {position:#X}")]
	PaletteIo { position: usize, source: io::Error },

	#[error("Error reading from input: {0}")]
	SourceRead(io::Error),

	#[error("Error writing to output: {0}")]
	SinkWrite(io::Error),
}

impl ConvertError {
	pub fn stage(&self) -> Stage {
		match self {
			ConvertError::ResourceOpen { .. } => Stage::Open,
			ConvertError::TruncatedPalette { .. } | ConvertError::OversizedPalette | ConvertError::PaletteIo { .. } => Stage::Load,
			ConvertError::SourceRead(_) | ConvertError::SinkWrite(_) => Stage::Convert,
		}
	}
}
