//! JSON client envelope: requests carry an opaque `@extra` value that is echoed on the response.

use serde_json::Value as JsonValue;

use crate::api::{Function, Object, TonlibError};
use crate::tl::{CodecOptions, EXTRA_KEY, Registry, Result, Target, TlType, decode_object, decode_with, encode, extract_discriminator};

/// Decoded request with its correlation value.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
	/// Requested function.
	pub function: Function,
	/// Caller-supplied `@extra`, echoed back verbatim.
	pub extra: Option<JsonValue>,
}

/// Outcome carried by a response object.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
	/// Result of the function's declared type.
	Ok(Object),
	/// The library reported a failure.
	Error(TonlibError),
}

/// Split a request node into its function and `@extra`.
pub fn decode_request(node: &JsonValue, opt: &CodecOptions) -> Result<Request> {
	let function = decode_with::<Function>(node, opt)?;
	let extra = node.get(EXTRA_KEY).filter(|value| !value.is_null()).cloned();
	Ok(Request { function, extra })
}

/// Encode a request, attaching `@extra` when present.
pub fn encode_request(request: &Request) -> JsonValue {
	with_extra(encode(&request.function), request.extra.as_ref())
}

/// Encode a response object, echoing the request's `@extra`.
pub fn encode_response(object: &Object, extra: Option<&JsonValue>) -> JsonValue {
	with_extra(encode(object), extra)
}

/// Decode the response to `function`: an `error` object or a value of its result type.
pub fn decode_response(node: &JsonValue, function: &Function, opt: &CodecOptions) -> Result<Response> {
	let is_error = node
		.as_object()
		.and_then(|map| extract_discriminator(map).ok())
		.is_some_and(|found| found == TonlibError::TYPE);

	if is_error {
		return decode_with::<TonlibError>(node, opt).map(Response::Error);
	}

	let object = decode_object(Registry::global(), node, Target::Boxed(function.result_type()), opt)?;
	Object::from_object(object).map(Response::Ok)
}

fn with_extra(mut node: JsonValue, extra: Option<&JsonValue>) -> JsonValue {
	if let (Some(map), Some(extra)) = (node.as_object_mut(), extra) {
		map.insert(EXTRA_KEY.to_owned(), extra.clone());
	}
	node
}

#[cfg(test)]
mod tests;
