use std::error::Error;
use std::io;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use playpal2rgb::{BuiltInPalette, Color, ConvertError, PaletteTable, Stage};

fn fixture(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/palettes").join(name)
}

/// 256 records of (i, 255 - i, i * 7) with the given padding byte.
fn playpal_bytes(padding: u8) -> Vec<u8> {
	(0..=255_u8)
		.flat_map(|i| [i, 255 - i, i.wrapping_mul(7), padding])
		.collect()
}

/// Hands out `data` and then fails instead of reporting end of input.
struct BrokenReader {
	data: Vec<u8>,
	pos: usize,
}

impl Read for BrokenReader {
	fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
		if buf.is_empty() {
			return Ok(0);
		}

		if self.pos < self.data.len() {
			buf[0] = self.data[self.pos];
			self.pos += 1;
			return Ok(1);
		}

		Err(io::Error::other("device went away"))
	}
}

#[test]
fn palette_parsing() {
	let pal = PaletteTable::from_playpal_file(fixture("palette.playpal")).unwrap();

	assert_eq!(pal.colors().len(), 256);
	for i in 0..=255_u8 {
		assert_eq!(pal.get(i), Color::new(i, 255 - i, i.wrapping_mul(7)));
		assert_eq!(pal[i], pal.get(i));
	}

	assert_eq!(pal.get(0).to_string(), "#00FF00");
	assert_eq!(pal.get(1).to_string(), "#01FE07");
	assert_eq!(pal.get(255).to_string(), "#FF00F9");
}

#[test]
fn palette_parsing_from_reader() {
	let pal = PaletteTable::from_reader(Cursor::new(playpal_bytes(0xAA))).unwrap();
	let from_file = PaletteTable::from_playpal_file(fixture("palette.playpal")).unwrap();
	assert_eq!(pal, from_file);
}

#[test]
#[should_panic(expected = "TruncatedPalette { read: 1023 }")]
fn palette_parsing_short() {
	println!("Testing 1023-byte palette…");
	PaletteTable::from_playpal_file(fixture("palette_short.playpal")).unwrap();
}

#[test]
#[should_panic(expected = "OversizedPalette")]
fn palette_parsing_long() {
	println!("Testing 1025-byte palette…");
	PaletteTable::from_playpal_file(fixture("palette_long.playpal")).unwrap();
}

#[test]
fn palette_parsing_empty() {
	let err = PaletteTable::from_reader(io::empty()).unwrap_err();
	assert!(matches!(err, ConvertError::TruncatedPalette { read: 0 }));
	assert_eq!(err.stage(), Stage::Load);
}

#[test]
fn palette_parsing_much_too_long() {
	let mut data = playpal_bytes(0);
	data.extend_from_slice(&playpal_bytes(0));

	let mut reader = Cursor::new(data);
	let err = PaletteTable::from_reader(&mut reader).unwrap_err();
	assert!(matches!(err, ConvertError::OversizedPalette));

	// only the probe byte past the palette was consumed
	assert_eq!(reader.position(), 1025);
}

#[test]
fn palette_padding_is_ignored() {
	let a = PaletteTable::from_reader(Cursor::new(playpal_bytes(0x00))).unwrap();
	let b = PaletteTable::from_reader(Cursor::new(playpal_bytes(0xFF))).unwrap();
	assert_eq!(a, b);
}

#[test]
fn palette_read_failure() {
	let reader = BrokenReader { data: playpal_bytes(0)[..10].to_vec(), pos: 0 };
	let err = PaletteTable::from_reader(reader).unwrap_err();

	match &err {
		ConvertError::PaletteIo { position, .. } => assert_eq!(*position, 10),
		e => panic!("unexpected error {e:?}"),
	}
	assert_eq!(err.stage(), Stage::Load);

	// the cause is chained, not repeated in the message
	assert_eq!(err.to_string(), "Error reading palette file at byte 0xA");
	assert_eq!(err.source().unwrap().to_string(), "device went away");
}

#[test]
fn palette_probe_failure() {
	// a read error on the probe byte is an I/O failure, not a size verdict
	let reader = BrokenReader { data: playpal_bytes(0), pos: 0 };
	let err = PaletteTable::from_reader(reader).unwrap_err();
	assert!(matches!(err, ConvertError::PaletteIo { position: 1024, .. }));
}

#[test]
fn palette_missing_file() {
	let err = PaletteTable::from_playpal_file(fixture("does_not_exist.playpal")).unwrap_err();
	assert!(matches!(err, ConvertError::ResourceOpen { .. }));
	assert_eq!(err.stage(), Stage::Open);
	assert_eq!(err.to_string(), format!("Error opening palette file {}", fixture("does_not_exist.playpal").display()));
	assert!(err.source().is_some());
}

#[test]
fn palette_write_playpal() {
	let pal = PaletteTable::from_playpal_file(fixture("palette.playpal")).unwrap();

	let mut out = Vec::new();
	pal.write_playpal(&mut out).unwrap();

	// padding comes back as zero, everything else is untouched
	assert_eq!(out, playpal_bytes(0));
}

#[test]
fn builtin_grayscale() {
	let pal = BuiltInPalette::Grayscale.table();
	for i in 0..=255_u8 {
		assert_eq!(pal.get(i), Color::new(i, i, i));
	}
}

#[test]
fn builtin_rgb332() {
	let pal = BuiltInPalette::Rgb332.table();

	assert_eq!(pal.get(0b000_000_00), Color::BLACK);
	assert_eq!(pal.get(0b111_111_11), Color::new(255, 255, 255));
	assert_eq!(pal.get(0b111_000_00), Color::new(255, 0, 0));
	assert_eq!(pal.get(0b000_111_00), Color::new(0, 255, 0));
	assert_eq!(pal.get(0b000_000_11), Color::new(0, 0, 255));
	assert_eq!(pal.get(0b100_010_01).to_string(), "#924955");
}

#[test]
fn color_conversions() {
	let c = Color::from(0x1E3D54_u32);
	assert_eq!(c, Color::from([0x1E, 0x3D, 0x54]));
	assert_eq!(u32::from(c), 0x1E3D54);
	assert_eq!(c.to_bytes(), [0x1E, 0x3D, 0x54]);
	assert_eq!(c.to_string(), "#1E3D54");
}
