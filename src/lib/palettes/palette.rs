use std::fmt::{Display, Formatter};
use std::io::Write;
use std::ops::Index;

use serde::{Serialize, Serializer};

use crate::palettes::{PALETTE_COLORS, RECORD_PADDING};

/// One palette entry, stored and emitted in R, G, B order.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Color = Color::new(0, 0, 0);

	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	pub const fn to_bytes(self) -> [u8; 3] {
		[self.r, self.g, self.b]
	}
}

impl From<[u8; 3]> for Color {
	fn from(v: [u8; 3]) -> Self {
		Self {
			r: v[0],
			g: v[1],
			b: v[2],
		}
	}
}

impl From<u32> for Color {
	fn from(v: u32) -> Self {
		Self {
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
		}
	}
}

impl From<Color> for u32 {
	fn from(c: Color) -> Self {
		(c.r as u32) << 16 | (c.g as u32) << 8 | c.b as u32
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:06X}", u32::from(*self))
	}
}

impl Serialize for Color {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

/// A complete 256-entry palette.
///
/// There is no way to build a table with fewer entries, and since lookups take a `u8`
/// every possible index names a valid entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteTable {
	colors: [Color; PALETTE_COLORS],
}

impl PaletteTable {
	pub const fn new(colors: [Color; PALETTE_COLORS]) -> Self {
		Self { colors }
	}

	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	pub fn colors(&self) -> &[Color; PALETTE_COLORS] {
		&self.colors
	}

	/// Writes the table back out in the 4-byte-per-record layout the loader accepts.
	pub fn write_playpal<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
		for c in &self.colors {
			writer.write_all(&[c.r, c.g, c.b, RECORD_PADDING])?;
		}

		Ok(())
	}
}

impl Index<u8> for PaletteTable {
	type Output = Color;

	fn index(&self, index: u8) -> &Color {
		&self.colors[index as usize]
	}
}
