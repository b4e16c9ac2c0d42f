use pretty_assertions::assert_eq;
use serde_json::json;

use crate::api::{
	AccountAddress, Close, Function, GenericSendGrams, GetLogStream, Init, InputKey, Key, LogStream, LogStreamFile, OnLiteServerQueryError, RawGetTransactions,
	SetLogStream, TonlibError, WalletSendGrams,
};
use crate::tl::{DecodeErrorKind, FieldKind, ObjectValue, Registry, SecureBytes, TlType, Value, decode, encode, encode_object};

fn placeholder(kind: &FieldKind) -> Value<'static> {
	match kind {
		FieldKind::Int32 | FieldKind::Int53 | FieldKind::Int64 => Value::Int(0),
		FieldKind::Double => Value::Double(0.0),
		FieldKind::Bool => Value::Bool(false),
		FieldKind::String => Value::String(String::new()),
		FieldKind::Bytes => Value::Bytes(Vec::new()),
		FieldKind::Bare(_) | FieldKind::Boxed(_) => Value::Object(None),
		FieldKind::Vector(_) => Value::Vector(Vec::new()),
	}
}

#[test]
fn every_schema_function_has_a_typed_variant() {
	let functions: Vec<_> = Registry::global().constructors().iter().filter(|item| item.is_function).collect();
	assert_eq!(functions.len(), 43);

	for item in functions {
		let value = ObjectValue::new(item, item.fields.iter().map(|spec| placeholder(&spec.kind)).collect());
		let typed = Function::from_object(value.clone()).unwrap_or_else(|err| panic!("{} has no typed variant: {err}", item.name));
		assert_eq!(typed.discriminator(), &*item.name);
		assert_eq!(typed.result_type(), &*item.result);
		assert_eq!(encode(&typed), encode_object(&value));
	}
}

#[test]
fn result_types_follow_the_schema() {
	assert_eq!(Function::from(Init::default()).result_type(), "Ok");
	assert_eq!(Function::from(Close {}).result_type(), "Ok");
	assert_eq!(Function::from(RawGetTransactions::default()).result_type(), "raw.Transactions");
	assert_eq!(Function::from(GetLogStream {}).result_type(), "LogStream");
	assert_eq!(Function::from(GenericSendGrams::default()).result_type(), "SendGramsResult");
}

#[test]
fn send_grams_round_trips_with_secrets_and_amounts() {
	let request = Function::from(WalletSendGrams {
		private_key: Some(InputKey {
			key: Some(Key {
				public_key: "PuZ".to_owned(),
				secret: SecureBytes::new(vec![9; 32]),
			}),
			local_password: SecureBytes::new(b"local".to_vec()),
		}),
		destination: Some(AccountAddress {
			account_address: "EQ_dest".to_owned(),
		}),
		seqno: 3,
		valid_until: 1_570_000_060,
		amount: 1_000_000_000_000_000_000,
		message: b"thanks".to_vec(),
	});

	let node = encode(&request);
	assert_eq!(node["@type"], json!("wallet.sendGrams"));
	assert_eq!(node["amount"], json!("1000000000000000000"));
	assert_eq!(node["valid_until"], json!(1_570_000_060));
	assert_eq!(node["private_key"]["local_password"], json!("bG9jYWw="));

	let back: Function = decode(&node).expect("decode wallet.sendGrams");
	assert_eq!(back, request);
}

#[test]
fn nested_interface_fields_keep_their_variant() {
	let request = SetLogStream {
		log_stream: Some(LogStream::File(LogStreamFile {
			path: "tonlib.log".to_owned(),
			max_file_size: 1 << 20,
		})),
	};

	let node = encode(&request);
	assert_eq!(node, json!({
		"@type": "setLogStream",
		"log_stream": { "@type": "logStreamFile", "path": "tonlib.log", "max_file_size": 1_048_576 }
	}));
	assert_eq!(decode::<SetLogStream>(&node).expect("decode setLogStream"), request);
}

#[test]
fn error_payload_inside_function() {
	let node = json!({
		"@type": "onLiteServerQueryError",
		"id": "18446744073709551615",
		"error": { "@type": "error", "code": 500, "message": "timeout" }
	});
	let err = decode::<Function>(&node).expect_err("id does not fit int64");
	assert_eq!(err.decode_path().map(ToString::to_string).as_deref(), Some("id"));

	let node = json!({
		"@type": "onLiteServerQueryError",
		"id": "-1",
		"error": { "@type": "error", "code": 500, "message": "timeout" }
	});
	let Function::OnLiteServerQueryError(OnLiteServerQueryError { id, error }) = decode::<Function>(&node).expect("decode") else {
		panic!("expected onLiteServerQueryError");
	};
	assert_eq!(id, -1);
	assert_eq!(
		error,
		Some(TonlibError {
			code: 500,
			message: "timeout".to_owned()
		})
	);
}

#[test]
fn objects_are_not_functions() {
	let err = decode::<Function>(&json!({ "@type": "ok" })).expect_err("ok is an object");
	assert!(matches!(err.decode_kind(), Some(DecodeErrorKind::UnknownVariant { interface, .. }) if interface == "Function"));
}
