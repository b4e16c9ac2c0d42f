//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Workspace root: the directory two levels above this crate's manifest.
pub fn workspace_root() -> PathBuf {
	let crates_dir = Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap_or(Path::new("."));
	crates_dir.parent().unwrap_or(crates_dir).to_path_buf()
}

/// Wire fixture under `<workspace>/fixtures`, which holds flat `*.json` files only.
pub fn fixture_path(name: &str) -> PathBuf {
	assert!(
		!name.contains(['/', '\\']),
		"fixture names are flat, got {name:?}"
	);
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture file as text.
pub fn fixture_text(name: &str) -> String {
	let path = fixture_path(name);
	std::fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} should be readable: {err}", path.display()))
}

/// Read and parse a JSON fixture.
pub fn fixture_json(name: &str) -> serde_json::Value {
	serde_json::from_str(&fixture_text(name)).unwrap_or_else(|err| panic!("fixture {name} should be valid json: {err}"))
}

/// Cargo target directory; a relative `CARGO_TARGET_DIR` is taken from the workspace root.
pub fn target_dir() -> PathBuf {
	match std::env::var_os("CARGO_TARGET_DIR").map(PathBuf::from) {
		Some(dir) if dir.is_absolute() => dir,
		Some(dir) => workspace_root().join(dir),
		None => workspace_root().join("target"),
	}
}
