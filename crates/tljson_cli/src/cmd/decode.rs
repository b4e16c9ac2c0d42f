use std::path::PathBuf;

use tljson::tl::{CodecOptions, FieldPath, Registry, Result, Target, TlError, decode_object, encode_object};

use crate::cmd::util::{emit_json, read_json};

#[derive(clap::Args)]
pub struct Args {
	/// JSON input file, or `-` for stdin.
	pub input: PathBuf,
	/// Constructor (bare) or interface (boxed) name to decode as.
	#[arg(long = "as")]
	pub type_name: String,
	#[arg(long)]
	pub strict: bool,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	#[arg(long = "path")]
	pub path_expr: Option<String>,
}

/// Decode input against a schema type and print the canonical encoding.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		type_name,
		strict,
		max_depth,
		path_expr,
	} = args;

	let registry = Registry::global();
	let target = Target::from_name(&type_name);
	if !registry.contains(target) {
		return Err(TlError::UnknownType { name: type_name });
	}

	let mut opt = if strict { CodecOptions::strict() } else { CodecOptions::default() };
	if let Some(max_depth) = max_depth {
		opt.max_depth = max_depth;
	}

	let node = read_json(&input)?;
	let value = decode_object(registry, &node, target, &opt)?;
	tracing::debug!(discriminator = value.discriminator(), "decoded input");
	let canonical = encode_object(&value);

	let Some(path_expr) = path_expr else {
		return emit_json(&canonical);
	};
	let path = FieldPath::parse(&path_expr)?;
	let selected = path.select(&canonical).ok_or(TlError::FieldPathNotFound { path: path_expr })?;
	emit_json(selected)
}

#[cfg(test)]
mod tests;
