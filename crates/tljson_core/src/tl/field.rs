use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Number, Value as JsonValue};

use crate::tl::codec::{decode_object_map, encode_object_map};
use crate::tl::resolve::json_kind;
use crate::tl::{CodecOptions, DecodeErrorKind, FieldKind, Registry, Result, Target, TlError, Value};

/// Largest magnitude an `int53` field may hold.
pub const INT53_MAX: i64 = (1 << 53) - 1;

/// Encode one field value as a JSON node.
///
/// JSON has no NaN or infinity, so a non-finite double is written as `null`. Decoding that `null`
/// back into a `double` field fails with [`DecodeErrorKind::FieldTypeMismatch`].
///
/// # Panics
///
/// Panics if `value` does not conform to `kind`; [`crate::tl::ObjectValue::new`] rules that out.
pub(crate) fn encode_field(value: &Value<'_>, kind: &FieldKind) -> JsonValue {
	match (value, kind) {
		(Value::Int(value), FieldKind::Int64) => JsonValue::String(value.to_string()),
		(Value::Int(value), _) => JsonValue::from(*value),
		(Value::Double(value), _) => Number::from_f64(*value).map_or(JsonValue::Null, JsonValue::Number),
		(Value::Bool(value), _) => JsonValue::Bool(*value),
		(Value::String(value), _) => JsonValue::String(value.clone()),
		(Value::Bytes(value), _) => JsonValue::String(STANDARD.encode(value)),
		(Value::Object(None), _) => JsonValue::Null,
		(Value::Object(Some(item)), _) => JsonValue::Object(encode_object_map(item)),
		(Value::Vector(items), FieldKind::Vector(inner)) => JsonValue::Array(items.iter().map(|item| encode_field(item, inner)).collect()),
		(Value::Vector(_), kind) => panic!("vector value stored in {kind} field"),
	}
}

/// Decode one field node according to its declared kind.
pub(crate) fn decode_field<'r>(
	registry: &'r Registry,
	node: &JsonValue,
	kind: &FieldKind,
	field: &str,
	nullable: bool,
	opt: &CodecOptions,
	depth: u32,
) -> Result<Value<'r>> {
	match kind {
		FieldKind::Int32 => decode_int(node, kind, field, i64::from(i32::MIN), i64::from(i32::MAX)).map(Value::Int),
		FieldKind::Int53 => decode_int(node, kind, field, -INT53_MAX, INT53_MAX).map(Value::Int),
		FieldKind::Int64 => decode_int(node, kind, field, i64::MIN, i64::MAX).map(Value::Int),
		FieldKind::Double => node.as_f64().map(Value::Double).ok_or_else(|| mismatch(field, kind, node)),
		FieldKind::Bool => node.as_bool().map(Value::Bool).ok_or_else(|| mismatch(field, kind, node)),
		FieldKind::String => node
			.as_str()
			.map(|text| Value::String(text.to_owned()))
			.ok_or_else(|| mismatch(field, kind, node)),
		FieldKind::Bytes => {
			let text = node.as_str().ok_or_else(|| mismatch(field, kind, node))?;
			STANDARD
				.decode(text)
				.map(Value::Bytes)
				.map_err(|_| TlError::decode(DecodeErrorKind::Base64Decode { field: field.to_owned() }))
		}
		FieldKind::Bare(name) => decode_nested(registry, node, Target::Bare(name), kind, field, nullable, opt, depth),
		FieldKind::Boxed(name) => decode_nested(registry, node, Target::Boxed(name), kind, field, nullable, opt, depth),
		FieldKind::Vector(inner) => {
			let items = node.as_array().ok_or_else(|| mismatch(field, kind, node))?;
			if items.len() > opt.max_vector_len {
				return Err(TlError::decode(DecodeErrorKind::VectorTooLong {
					field: field.to_owned(),
					len: items.len(),
					max: opt.max_vector_len,
				}));
			}
			let mut out = Vec::with_capacity(items.len());
			for (idx, item) in items.iter().enumerate() {
				let value = decode_field(registry, item, inner, field, false, opt, depth).map_err(|err| err.at_index(idx))?;
				out.push(value);
			}
			Ok(Value::Vector(out))
		}
	}
}

#[allow(clippy::too_many_arguments)]
fn decode_nested<'r>(
	registry: &'r Registry,
	node: &JsonValue,
	target: Target<'_>,
	kind: &FieldKind,
	field: &str,
	nullable: bool,
	opt: &CodecOptions,
	depth: u32,
) -> Result<Value<'r>> {
	match node {
		JsonValue::Null if nullable => Ok(Value::Object(None)),
		JsonValue::Object(map) => {
			let item = decode_object_map(registry, map, target, opt, depth + 1)?;
			Ok(Value::Object(Some(Box::new(item))))
		}
		other => Err(mismatch(field, kind, other)),
	}
}

/// Decode an integer from a JSON number or strict decimal text, rejecting values outside `min..=max`.
fn decode_int(node: &JsonValue, kind: &FieldKind, field: &str, min: i64, max: i64) -> Result<i64> {
	let parsed = match node {
		JsonValue::Number(number) => number.as_i64(),
		JsonValue::String(text) => text.parse::<i64>().ok(),
		other => return Err(mismatch(field, kind, other)),
	};

	parsed.filter(|value| (min..=max).contains(value)).ok_or_else(|| {
		let text = match node {
			JsonValue::String(text) => text.clone(),
			other => other.to_string(),
		};
		TlError::decode(DecodeErrorKind::NumericParse {
			field: field.to_owned(),
			text,
		})
	})
}

fn mismatch(field: &str, kind: &FieldKind, node: &JsonValue) -> TlError {
	TlError::decode(DecodeErrorKind::FieldTypeMismatch {
		field: field.to_owned(),
		expected: kind.to_string(),
		got: json_kind(node),
	})
}
