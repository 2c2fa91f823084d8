use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

use playpal2rgb::load_palette;

use crate::commands::{DumpArgs, DumpFormat};

pub(crate) fn playpal_dump(args: &DumpArgs) -> Result<()> {
	let source = args.palette.source()?;
	let table = load_palette(&source)?;

	let mut output: Box<dyn Write> = match &args.output {
		Some(path) => {
			let f = File::create(path).with_context(|| format!("Couldn't create output file {}", path.display()))?;
			Box::new(BufWriter::new(f))
		}
		None => Box::new(BufWriter::new(io::stdout().lock())),
	};

	match args.format {
		DumpFormat::Hex => {
			for color in table.colors() {
				writeln!(output, "{color}")?;
			}
		}
		DumpFormat::Json => {
			serde_json::to_writer_pretty(&mut output, &table.colors()[..])?;
			writeln!(output)?;
		}
		DumpFormat::Playpal => table.write_playpal(&mut output)?,
	}

	output.flush()?;

	Ok(())
}
