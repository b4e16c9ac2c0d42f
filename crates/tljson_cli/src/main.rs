#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "tljson", about = "tonlib_api JSON codec tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Summarize the schema, or describe one constructor or interface.
	Schema(cmd::schema::Args),
	/// Decode a JSON object against a type and print its canonical form.
	Decode(cmd::decode::Args),
	/// Inspect a request envelope.
	Request(cmd::request::Args),
}

fn main() {
	init_tracing();
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> tljson::tl::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Schema(args) => cmd::schema::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Request(args) => cmd::request::run(args),
	}
}

fn init_tracing() {
	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}
