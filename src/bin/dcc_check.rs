//! DCC decode checker.
//!
//! Decodes a DCC file and reports whether it is well-formed.
//!
//! # Usage
//!
//! ```bash
//! dcc-check path/to/file.dcc
//! ```
//!
//! Exits 0 when the file decodes, non-zero with a diagnostic otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dcc_rs::prelude::*;
use log::{error, info};

#[derive(Parser)]
#[command(name = "dcc-check")]
#[command(author = "dcc-rs project")]
#[command(version)]
#[command(about = "Checks that a DCC file decodes cleanly", long_about = None)]
struct Cli {
	/// Input DCC file path
	#[arg(value_name = "DCC_FILE")]
	path: PathBuf,
}

fn main() -> ExitCode {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();

	match DccFile::open(&cli.path) {
		Ok(dcc) => {
			info!("{}", dcc);

			for (index, direction) in dcc.directions().iter().enumerate() {
				info!("  direction {index}: {direction}");
			}

			println!("DCC decode successful");
			ExitCode::SUCCESS
		}
		Err(err) => {
			error!("could not decode {}: {err}", cli.path.display());
			ExitCode::FAILURE
		}
	}
}
