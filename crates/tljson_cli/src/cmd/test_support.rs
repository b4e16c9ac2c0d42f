use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::OnceLock;

use tljson_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static TLJSON_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> String {
	shared_fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_tljson(args: &[&str]) -> Output {
	spawn_tljson(args, None)
}

pub(crate) fn run_tljson_stdin(args: &[&str], input: &str) -> Output {
	spawn_tljson(args, Some(input))
}

/// Run the binary to completion; stdin is closed empty unless `input` is given.
fn spawn_tljson(args: &[&str], input: Option<&str>) -> Output {
	let mut child = Command::new(tljson_bin())
		.args(args)
		.stdin(if input.is_some() { Stdio::piped() } else { Stdio::null() })
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("tljson command spawns");
	if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
		stdin.write_all(text.as_bytes()).expect("stdin accepts input");
	}
	child.wait_with_output().expect("tljson command completes")
}

pub(crate) fn run_tljson_json(args: &[&str]) -> serde_json::Value {
	parse_success(run_tljson(args))
}

pub(crate) fn parse_success(output: Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"tljson command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

pub(crate) fn stderr_text(output: &Output) -> String {
	String::from_utf8_lossy(&output.stderr).into_owned()
}

fn tljson_bin() -> &'static PathBuf {
	TLJSON_BIN.get_or_init(resolve_tljson_bin)
}

fn resolve_tljson_bin() -> PathBuf {
	if let Some(path) = std::env::var_os("CARGO_BIN_EXE_tljson") {
		return PathBuf::from(path);
	}

	let bin = workspace_target_dir()
		.join("debug")
		.join(format!("tljson{}", std::env::consts::EXE_SUFFIX));
	let status = Command::new(env!("CARGO"))
		.current_dir(env!("CARGO_MANIFEST_DIR"))
		.args(["build", "--quiet", "--package", "tljson_cli", "--bin", "tljson"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "cargo build failed for {}", bin.display());
	bin
}
