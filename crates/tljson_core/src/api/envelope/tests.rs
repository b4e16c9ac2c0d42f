use pretty_assertions::assert_eq;
use serde_json::json;

use super::{Request, Response, decode_request, decode_response, encode_request, encode_response};
use crate::api::{Close, Function, GetLogTags, LogTags, Object, RawGetAccountState, TonlibError, TonlibOk};
use crate::tl::{CodecOptions, DecodeErrorKind};

#[test]
fn request_extra_is_split_off_and_restored() {
	let node = json!({ "@type": "getLogTags", "@extra": { "seq": 5, "tag": "ui" } });
	let request = decode_request(&node, &CodecOptions::strict()).expect("decode request");

	assert_eq!(request.function, Function::GetLogTags(GetLogTags {}));
	assert_eq!(request.extra, Some(json!({ "seq": 5, "tag": "ui" })));
	assert_eq!(encode_request(&request), node);
}

#[test]
fn request_without_extra() {
	let request = decode_request(&json!({ "@type": "close", "@extra": null }), &CodecOptions::default()).expect("decode request");
	assert_eq!(request.extra, None);
	assert_eq!(
		encode_request(&Request {
			function: request.function,
			extra: None
		}),
		json!({ "@type": "close" })
	);
}

#[test]
fn response_echoes_extra() {
	let tags = Object::from(LogTags {
		tags: vec!["actor".to_owned(), "net".to_owned()],
	});
	let extra = json!("req-42");

	let node = encode_response(&tags, Some(&extra));
	assert_eq!(node, json!({ "@type": "logTags", "tags": ["actor", "net"], "@extra": "req-42" }));
}

#[test]
fn response_decodes_as_declared_result_type() {
	let function = Function::from(GetLogTags {});
	let node = json!({ "@type": "logTags", "tags": ["adnl"], "@extra": 1 });

	let response = decode_response(&node, &function, &CodecOptions::default()).expect("decode response");
	assert_eq!(
		response,
		Response::Ok(Object::LogTags(LogTags {
			tags: vec!["adnl".to_owned()]
		}))
	);

	let ok = decode_response(&json!({ "@type": "ok" }), &Function::from(Close {}), &CodecOptions::default()).expect("ok response");
	assert_eq!(ok, Response::Ok(Object::TonlibOk(TonlibOk {})));
}

#[test]
fn error_response_wins_over_result_type() {
	let function = Function::from(RawGetAccountState::default());
	let node = json!({ "@type": "error", "code": 400, "message": "LITE_SERVER_UNKNOWN" });

	let response = decode_response(&node, &function, &CodecOptions::default()).expect("decode error response");
	assert_eq!(
		response,
		Response::Error(TonlibError {
			code: 400,
			message: "LITE_SERVER_UNKNOWN".to_owned()
		})
	);
}

#[test]
fn response_of_the_wrong_type_is_rejected() {
	let function = Function::from(GetLogTags {});
	let err = decode_response(&json!({ "@type": "logStreamEmpty" }), &function, &CodecOptions::default()).expect_err("wrong result type");
	assert_eq!(
		err.decode_kind(),
		Some(&DecodeErrorKind::UnknownVariant {
			interface: "LogTags".to_owned(),
			discriminator: "logStreamEmpty".to_owned(),
		})
	);
}
