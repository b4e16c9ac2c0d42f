use serde_json::json;

use super::{FieldPath, PathStep};

#[test]
fn parses_fields_and_indices() {
	let path = FieldPath::parse("transactions[1].out_msgs[0].value").expect("path parses");
	assert_eq!(
		path.steps,
		vec![
			PathStep::Field("transactions".to_owned()),
			PathStep::Index(1),
			PathStep::Field("out_msgs".to_owned()),
			PathStep::Index(0),
			PathStep::Field("value".to_owned()),
		]
	);
}

#[test]
fn consecutive_indices_follow_one_field() {
	let path = FieldPath::parse("grid[2][0]").expect("path parses");
	assert_eq!(
		path.steps,
		vec![PathStep::Field("grid".to_owned()), PathStep::Index(2), PathStep::Index(0)]
	);
}

#[test]
fn display_matches_parse_syntax() {
	let text = "transactions[1].in_msg.source";
	let path = FieldPath::parse(text).expect("path parses");
	assert_eq!(path.to_string(), text);
	assert_eq!(FieldPath::root().to_string(), "<root>");
}

#[test]
fn rejects_malformed_paths() {
	for bad in ["", "a.", ".a", "a[", "a[x]", "a[1", "a..b", "a-b", "a[1]x", "a[]", "[0]", "a[1]]", "a[99999999999999999999999]"] {
		assert!(FieldPath::parse(bad).is_err(), "{bad:?} should be rejected");
	}
}

#[test]
fn select_walks_objects_and_arrays() {
	let tree = json!({
		"@type": "raw.transactions",
		"transactions": [{ "fee": "7" }, { "fee": "9" }],
	});

	let path = FieldPath::parse("transactions[1].fee").expect("path parses");
	assert_eq!(path.select(&tree), Some(&json!("9")));

	let missing = FieldPath::parse("transactions[5].fee").expect("path parses");
	assert_eq!(missing.select(&tree), None);
}
