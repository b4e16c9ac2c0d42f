use std::path::PathBuf;

use serde::Serialize;
use tljson::api::decode_request;
use tljson::tl::{CodecOptions, Result, encode};

use crate::cmd::util::{emit_json, read_json};

#[derive(clap::Args)]
pub struct Args {
	/// JSON request file, or `-` for stdin.
	pub input: PathBuf,
	#[arg(long)]
	pub strict: bool,
}

#[derive(Serialize)]
struct RequestJson {
	function: &'static str,
	result_type: &'static str,
	extra: Option<serde_json::Value>,
	request: serde_json::Value,
}

/// Decode a request envelope and report what the response will look like.
pub fn run(args: Args) -> Result<()> {
	let Args { input, strict } = args;
	let opt = if strict { CodecOptions::strict() } else { CodecOptions::default() };

	let node = read_json(&input)?;
	let request = decode_request(&node, &opt)?;
	let payload = RequestJson {
		function: request.function.discriminator(),
		result_type: request.function.result_type(),
		request: encode(&request.function),
		extra: request.extra,
	};
	emit_json(&payload)
}
