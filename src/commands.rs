use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use const_format::formatcp;

use playpal2rgb::{BuiltInPalette, PaletteSource};

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Maps a stream of 8-bit palette indices to raw RGB24")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(help = "The palette file. Shorthand for `convert <PALETTE_FILE>`.")]
	pub palette_file: Option<PathBuf>,

	#[arg(long, global = true)]
	pub debug: bool,
}

#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub(crate) struct PaletteArgs {
	#[arg(help = "A palette file consisting of exactly 256 4-byte RGB+padding records.")]
	pub palette_file: Option<PathBuf>,
	#[arg(short = 'P', long, help = "A built-in palette.")]
	pub palette_name: Option<BuiltInPalette>,
}

impl PaletteArgs {
	pub(crate) fn source(&self) -> Result<PaletteSource> {
		if let Some(palette_file) = &self.palette_file {
			return Ok(PaletteSource::File(palette_file.clone()));
		}

		if let Some(palette_name) = self.palette_name {
			return Ok(PaletteSource::BuiltIn(palette_name));
		}

		anyhow::bail!("Expected palette file path")
	}
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ConvertArgs {
	#[command(flatten)]
	pub palette: PaletteArgs,

	#[arg(short, help = "The input file of palette indices. (defaults to stdin)")]
	pub input: Option<PathBuf>,
	#[arg(short, help = "The output file for RGB24 data. (defaults to stdout)")]
	pub output: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Default, Debug, PartialEq)]
pub(crate) enum DumpFormat {
	#[default] Hex, // one #RRGGBB per line
	Json,
	Playpal, // the binary 1024-byte layout
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct DumpArgs {
	#[command(flatten)]
	pub palette: PaletteArgs,

	#[arg(short, long, value_enum, help = "The output format.", default_value_t = DumpFormat::default())]
	pub format: DumpFormat,
	#[arg(short, help = "The output file. (defaults to stdout)")]
	pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Converts palette indices to RGB24")]
	Convert(ConvertArgs),

	#[command(about = "Prints or exports a palette")]
	Dump(DumpArgs),
}
