use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tljson::tl::Result;

/// Read input text from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String> {
	if path.as_os_str() == "-" {
		let mut text = String::new();
		std::io::stdin().read_to_string(&mut text)?;
		return Ok(text);
	}
	Ok(std::fs::read_to_string(path)?)
}

/// Read and parse JSON input.
pub(crate) fn read_json(path: &Path) -> Result<serde_json::Value> {
	let text = read_input(path)?;
	Ok(serde_json::from_str(&text)?)
}

/// Print a payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: Serialize + ?Sized>(payload: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(payload)?);
	Ok(())
}
