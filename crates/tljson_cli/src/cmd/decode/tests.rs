use crate::cmd::test_support::{fixture_path, parse_success, run_tljson, run_tljson_json, run_tljson_stdin, stderr_text};

#[test]
fn decode_prints_canonical_order() {
	let fixture = fixture_path("generic_account_state.json");
	let output = run_tljson(&["decode", &fixture, "--as", "generic.AccountState"]);
	assert!(output.status.success(), "{}", stderr_text(&output));

	let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	let state = json["account_state"].as_object().expect("account_state object");
	let keys: Vec<&str> = state.keys().map(String::as_str).collect();
	assert_eq!(keys, ["@type", "balance", "seqno", "last_transaction_id", "sync_utime"]);
	assert_eq!(json["@type"], "generic.accountStateWallet");
}

#[test]
fn decode_selects_path() {
	let fixture = fixture_path("raw_transactions.json");
	let json = run_tljson_json(&["decode", &fixture, "--as", "raw.transactions", "--path", "transactions[0].in_msg.value"]);
	assert_eq!(json, "9223372036854775807");
}

#[test]
fn decode_reads_stdin() {
	let input = r#"{"@type":"logStreamFile","max_file_size":1024,"path":"a.log"}"#;
	let json = parse_success(run_tljson_stdin(&["decode", "-", "--as", "LogStream"], input));
	assert_eq!(json, serde_json::json!({ "@type": "logStreamFile", "path": "a.log", "max_file_size": 1024 }));
}

#[test]
fn decode_strict_rejects_unknown_keys() {
	let fixture = fixture_path("generic_account_state.json");
	let output = run_tljson(&["decode", &fixture, "--as", "generic.AccountState", "--strict"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr_text(&output).contains("error: decode failed at account_state: unknown field wallet_version"));
}

#[test]
fn decode_reports_error_path() {
	let fixture = fixture_path("bad_int64.json");
	let output = run_tljson(&["decode", &fixture, "--as", "raw.Transactions"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr_text(&output).contains("transactions[0].in_msg.value"));
}

#[test]
fn decode_honors_max_depth() {
	let fixture = fixture_path("raw_transactions.json");
	let output = run_tljson(&["decode", &fixture, "--as", "raw.transactions", "--max-depth", "2"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr_text(&output).contains("object depth exceeded (max=2)"));
}

#[test]
fn decode_rejects_unknown_target() {
	let fixture = fixture_path("raw_transactions.json");
	let output = run_tljson(&["decode", &fixture, "--as", "raw.Nothing"]);

	assert_eq!(output.status.code(), Some(1));
	assert!(stderr_text(&output).contains("error: unknown type name: raw.Nothing"));
}
