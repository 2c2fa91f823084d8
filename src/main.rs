use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use humansize::DECIMAL;

use crate::cmd_convert::playpal_convert;
use crate::cmd_dump::playpal_dump;
use crate::commands::{Cli, Commands};

mod cmd_convert;
mod cmd_dump;
mod commands;

fn init_logging(debug: bool) {
	let default_level = if debug { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
		.target(env_logger::Target::Stderr)
		.init();
}

fn main() -> ExitCode {
	let cli = match Cli::try_parse() {
		Ok(cli) => cli,
		Err(e) => {
			let _ = e.print();
			// usage errors share the single failure status
			return match e.kind() {
				ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
				_ => ExitCode::FAILURE,
			};
		}
	};
	init_logging(cli.debug);

	let output: Option<&PathBuf>;

	let result = match &cli.command {
		Some(Commands::Convert(args)) => {
			output = args.output.as_ref();
			playpal_convert(args)
		}
		Some(Commands::Dump(args)) => {
			output = args.output.as_ref();
			playpal_dump(args)
		}
		None => match &cli.palette_file {
			// the original single-argument form, reporting through the status adapter
			Some(palette_file) => {
				return ExitCode::from(playpal2rgb::playpal2rgb(palette_file) as u8);
			}
			None => {
				eprintln!("Expected palette file path");
				return ExitCode::FAILURE;
			}
		},
	};

	match result {
		Ok(_) => {
			// stdout may carry binary data, so this goes to stderr
			if let Some(output) = output {
				match fs::metadata(output) {
					Ok(m) => {
						let size = humansize::format_size(m.len(), DECIMAL);
						eprintln!("Output file size: {size}");
					}
					Err(err) => {
						eprintln!("Can't determine output file size: {err}");
					}
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("{} {e:#}", "execution failed:".red());
			ExitCode::FAILURE
		}
	}
}
