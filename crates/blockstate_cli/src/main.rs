#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;

mod cmd;
mod error;

use cmd::read::{Accessor, ReadArgs};

#[derive(Parser)]
#[command(name = "blockstate", about = "Bedrock block-state inspection tools")]
struct Cli {
	/// Log decode progress to stderr.
	#[arg(long, short, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode every known property of a block state.
	Describe {
		path: PathBuf,
		#[arg(long)]
		json: bool,
		#[arg(long)]
		lenient: bool,
		#[arg(long)]
		skip_unknown: bool,
	},
	/// Run one reader accessor against a block state.
	Read {
		path: PathBuf,
		#[arg(value_enum)]
		accessor: Accessor,
		#[arg(long)]
		name: Option<String>,
		#[arg(long, allow_hyphen_values = true)]
		min: Option<i32>,
		#[arg(long, allow_hyphen_values = true)]
		max: Option<i32>,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	let cli = Cli::parse();
	let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
	let _ = tracing_subscriber::fmt()
		.with_target(false)
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.try_init();

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> error::Result<()> {
	match command {
		Commands::Describe {
			path,
			json,
			lenient,
			skip_unknown,
		} => cmd::describe::run(path, json, lenient, skip_unknown),
		Commands::Read {
			path,
			accessor,
			name,
			min,
			max,
			json,
		} => cmd::read::run(path, accessor, ReadArgs { name, min, max }, json),
	}
}
