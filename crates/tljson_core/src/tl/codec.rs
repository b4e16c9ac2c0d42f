use serde_json::{Map, Value as JsonValue};

use crate::tl::field::{decode_field, encode_field};
use crate::tl::resolve::{EXTRA_KEY, TYPE_KEY, json_kind, resolve_node};
use crate::tl::{DecodeErrorKind, ObjectValue, Registry, Result, Target, TlError, Value};

/// Runtime limits and behavior switches for wire decoding.
#[derive(Debug, Clone)]
pub struct CodecOptions {
	/// Maximum nested object depth.
	pub max_depth: u32,
	/// Maximum allowed vector element count.
	pub max_vector_len: usize,
	/// Fail on keys the variant does not declare instead of skipping them.
	pub deny_unknown_fields: bool,
}

impl Default for CodecOptions {
	fn default() -> Self {
		Self {
			max_depth: 16,
			max_vector_len: 65536,
			deny_unknown_fields: false,
		}
	}
}

impl CodecOptions {
	/// Preset that rejects undeclared keys.
	pub fn strict() -> Self {
		Self {
			deny_unknown_fields: true,
			..Self::default()
		}
	}
}

/// Encode a concrete value as a JSON object node, discriminator first.
pub fn encode_object(object: &ObjectValue<'_>) -> JsonValue {
	JsonValue::Object(encode_object_map(object))
}

pub(crate) fn encode_object_map(object: &ObjectValue<'_>) -> Map<String, JsonValue> {
	let constructor = object.constructor();
	let mut map = Map::with_capacity(constructor.fields.len() + 1);
	map.insert(TYPE_KEY.to_owned(), JsonValue::String(object.discriminator().to_owned()));
	for (spec, value) in constructor.fields.iter().zip(object.fields()) {
		map.insert(spec.name.to_string(), encode_field(value, &spec.kind));
	}
	map
}

/// Decode a JSON object node as `target`.
pub fn decode_object<'r>(registry: &'r Registry, node: &JsonValue, target: Target<'_>, opt: &CodecOptions) -> Result<ObjectValue<'r>> {
	let _span = tracing::trace_span!("decode_object", expected = target.name()).entered();

	let map = node
		.as_object()
		.ok_or_else(|| TlError::decode(DecodeErrorKind::NotAnObject { got: json_kind(node) }))?;
	decode_object_map(registry, map, target, opt, 0).inspect_err(|err| tracing::debug!(expected = target.name(), %err, "decode rejected"))
}

pub(crate) fn decode_object_map<'r>(
	registry: &'r Registry,
	map: &Map<String, JsonValue>,
	target: Target<'_>,
	opt: &CodecOptions,
	depth: u32,
) -> Result<ObjectValue<'r>> {
	if depth >= opt.max_depth {
		return Err(TlError::decode(DecodeErrorKind::DepthLimitExceeded { max_depth: opt.max_depth }));
	}

	let constructor = resolve_node(registry, map, target)?;

	if opt.deny_unknown_fields {
		let unknown = map
			.keys()
			.find(|key| key.as_str() != TYPE_KEY && key.as_str() != EXTRA_KEY && constructor.field(key).is_none());
		if let Some(key) = unknown {
			return Err(TlError::decode(DecodeErrorKind::UnknownField { field: key.clone() }));
		}
	}

	let mut fields = Vec::with_capacity(constructor.fields.len());
	for spec in &constructor.fields {
		let value = match map.get(&*spec.name) {
			Some(node) => decode_field(registry, node, &spec.kind, &spec.name, spec.optional, opt, depth).map_err(|err| err.at_field(&spec.name))?,
			None if spec.optional => Value::Object(None),
			None => {
				return Err(TlError::decode(DecodeErrorKind::MissingField {
					field: spec.name.to_string(),
				}));
			}
		};
		fields.push(value);
	}

	Ok(ObjectValue::new(constructor, fields))
}
