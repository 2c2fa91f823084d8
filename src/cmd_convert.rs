use std::fs::File;
use std::io;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use playpal2rgb::{PaletteSource, apply_palette, load_palette};

use crate::commands::ConvertArgs;

pub(crate) fn playpal_convert(args: &ConvertArgs) -> Result<()> {
	let source = args.palette.source()?;
	convert_source(&source, &args.input, &args.output)
}

fn convert_source(source: &PaletteSource, input: &Option<PathBuf>, output: &Option<PathBuf>) -> Result<()> {
	// the palette has to be valid before any input is touched
	let table = load_palette(source)?;
	log::debug!("using palette {source}");

	let input: Box<dyn Read> = match input {
		Some(path) => {
			let f = File::open(path).with_context(|| format!("Couldn't open input file {}", path.display()))?;
			Box::new(BufReader::new(f))
		}
		None => Box::new(io::stdin().lock()),
	};

	let output: Box<dyn Write> = match output {
		Some(path) => {
			let f = File::create(path).with_context(|| format!("Couldn't create output file {}", path.display()))?;
			Box::new(BufWriter::new(f))
		}
		None => Box::new(BufWriter::new(io::stdout().lock())),
	};

	apply_palette(&table, input, output)?;

	Ok(())
}
