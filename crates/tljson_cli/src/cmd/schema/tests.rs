use crate::cmd::test_support::{run_tljson, run_tljson_json, stderr_text};

#[test]
fn schema_summary_counts_constructors() {
	let json = run_tljson_json(&["schema", "--json"]);

	assert_eq!(json["objects"], 36);
	assert_eq!(json["functions"], 43);
	assert_eq!(json["constructors"], 79);

	let interfaces = json["interfaces"].as_array().expect("interfaces array");
	let log_stream = interfaces
		.iter()
		.find(|item| item["name"] == "LogStream")
		.expect("LogStream interface listed");
	assert_eq!(log_stream["variants"], serde_json::json!(["logStreamDefault", "logStreamFile", "logStreamEmpty"]));
}

#[test]
fn schema_describes_constructor_fields() {
	let json = run_tljson_json(&["schema", "--type", "raw.transaction", "--json"]);

	assert_eq!(json["result"], "raw.Transaction");
	assert_eq!(json["function"], false);
	let fields = json["fields"].as_array().expect("fields array");
	let names: Vec<&str> = fields.iter().filter_map(|item| item["name"].as_str()).collect();
	assert_eq!(names, ["utime", "data", "transaction_id", "fee", "in_msg", "out_msgs"]);
	assert_eq!(fields[5]["kind"], "vector<raw.message>");
	assert_eq!(fields[4]["optional"], true);
	assert_eq!(fields[3]["optional"], false);
}

#[test]
fn schema_text_lists_function_result() {
	let output = run_tljson(&["schema", "--type", "generic.sendGrams"]);
	assert!(output.status.success(), "{}", stderr_text(&output));

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("result: SendGramsResult"));
	assert!(stdout.contains("function: true"));
	assert!(stdout.contains("  amount:int64"));
}

#[test]
fn schema_rejects_unknown_names() {
	let output = run_tljson(&["schema", "--type", "raw.nothing"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(stderr_text(&output).contains("error: unknown type name: raw.nothing"));
}
