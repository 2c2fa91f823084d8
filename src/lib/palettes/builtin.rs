use crate::palettes::PALETTE_COLORS;
use crate::palettes::palette::{Color, PaletteTable};

/// Palettes compiled into the binary. Converting with one of these skips palette loading.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuiltInPalette {
	Grayscale,
	Rgb332, // rrrgggbb
}

static GRAYSCALE: PaletteTable = grayscale();
static RGB332: PaletteTable = rgb332();

impl BuiltInPalette {
	pub fn table(&self) -> &'static PaletteTable {
		match self {
			BuiltInPalette::Grayscale => &GRAYSCALE,
			BuiltInPalette::Rgb332 => &RGB332,
		}
	}
}

const fn scale_3bits_to_8bits(v: u8) -> u8 {
	let v = v & 0b111;
	(v << 5) | (v << 2) | (v >> 1)
}

const fn scale_2bits_to_8bits(v: u8) -> u8 {
	(v & 0b11) * 0x55
}

const fn grayscale() -> PaletteTable {
	let mut colors = [Color::BLACK; PALETTE_COLORS];
	let mut i = 0;
	while i < PALETTE_COLORS {
		let v = i as u8;
		colors[i] = Color::new(v, v, v);
		i += 1;
	}
	PaletteTable::new(colors)
}

const fn rgb332() -> PaletteTable {
	let mut colors = [Color::BLACK; PALETTE_COLORS];
	let mut i = 0;
	while i < PALETTE_COLORS {
		let v = i as u8;
		colors[i] = Color::new(
			scale_3bits_to_8bits(v >> 5),
			scale_3bits_to_8bits(v >> 2),
			scale_2bits_to_8bits(v),
		);
		i += 1;
	}
	PaletteTable::new(colors)
}
