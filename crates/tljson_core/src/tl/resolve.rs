use serde_json::{Map, Value as JsonValue};

use crate::tl::{Constructor, DecodeErrorKind, Registry, Result, TlError};

/// Reserved key carrying the variant discriminator.
pub const TYPE_KEY: &str = "@type";
/// Reserved key carrying opaque request correlation data.
pub const EXTRA_KEY: &str = "@extra";

/// What a JSON object node is expected to decode as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
	/// Exactly this constructor.
	Bare(&'a str),
	/// Any variant of this interface.
	Boxed(&'a str),
}

impl<'a> Target<'a> {
	/// Classify a type name by TL case convention: `raw.message` is bare, `raw.Message` boxed.
	pub fn from_name(name: &'a str) -> Self {
		let last = name.rsplit('.').next().unwrap_or(name);
		if last.starts_with(|c: char| c.is_ascii_uppercase()) {
			Self::Boxed(name)
		} else {
			Self::Bare(name)
		}
	}

	/// Constructor or interface name.
	pub fn name(&self) -> &'a str {
		match self {
			Self::Bare(name) | Self::Boxed(name) => name,
		}
	}
}

/// Read the discriminator of an object node.
pub fn extract_discriminator(node: &Map<String, JsonValue>) -> Result<&str> {
	match node.get(TYPE_KEY) {
		None | Some(JsonValue::Null) => Err(TlError::decode(DecodeErrorKind::MissingDiscriminator)),
		Some(JsonValue::String(text)) => Ok(text),
		Some(other) => Err(TlError::decode(DecodeErrorKind::FieldTypeMismatch {
			field: TYPE_KEY.to_owned(),
			expected: "string".to_owned(),
			got: json_kind(other),
		})),
	}
}

/// Map a discriminator to its variant within `interface`.
pub fn resolve<'r>(registry: &'r Registry, interface: &str, discriminator: &str) -> Result<&'r Constructor> {
	registry.lookup(interface, discriminator).ok_or_else(|| {
		TlError::decode(DecodeErrorKind::UnknownVariant {
			interface: interface.to_owned(),
			discriminator: discriminator.to_owned(),
		})
	})
}

/// Select the variant descriptor an object node decodes as.
///
/// A missing discriminator defaults to the declared constructor for bare targets and to the
/// sole variant for single-constructor interfaces.
pub fn resolve_node<'r>(registry: &'r Registry, node: &Map<String, JsonValue>, target: Target<'_>) -> Result<&'r Constructor> {
	let found = match extract_discriminator(node) {
		Ok(discriminator) => Some(discriminator),
		Err(err) if matches!(err.decode_kind(), Some(DecodeErrorKind::MissingDiscriminator)) => None,
		Err(err) => return Err(err),
	};

	match target {
		Target::Boxed(interface) => match found {
			Some(discriminator) => resolve(registry, interface, discriminator),
			None => registry
				.sole_variant(interface)
				.ok_or_else(|| TlError::decode(DecodeErrorKind::MissingDiscriminator)),
		},
		Target::Bare(name) => {
			let declared = registry.constructor(name).ok_or_else(|| {
				TlError::decode(DecodeErrorKind::UnknownVariant {
					interface: name.to_owned(),
					discriminator: name.to_owned(),
				})
			})?;
			let Some(discriminator) = found else {
				return Ok(declared);
			};
			let item = resolve(registry, declared_interface(declared), discriminator)?;
			if item.name != declared.name {
				return Err(TlError::decode(DecodeErrorKind::UnexpectedVariant {
					expected: declared.name.to_string(),
					found: item.name.to_string(),
				}));
			}
			Ok(item)
		}
	}
}

fn declared_interface(item: &Constructor) -> &str {
	if item.is_function { item.umbrella() } else { &item.result }
}

/// Short label for a JSON node's shape.
pub(crate) fn json_kind(node: &JsonValue) -> &'static str {
	match node {
		JsonValue::Null => "null",
		JsonValue::Bool(_) => "boolean",
		JsonValue::Number(_) => "number",
		JsonValue::String(_) => "string",
		JsonValue::Array(_) => "array",
		JsonValue::Object(_) => "object",
	}
}
