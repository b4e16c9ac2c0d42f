use serde_json::Value as JsonValue;

use crate::tl::{
	CodecOptions, Constructor, DecodeErrorKind, ObjectValue, Registry, Result, SecureBytes, SecureString, Target, TlError, Value, decode_object, encode_object,
};

/// A statically typed schema value: one constructor struct or a closed interface enum.
pub trait TlType: Sized {
	/// How wire objects are resolved when decoding this type.
	const TARGET: Target<'static>;

	/// Lower into a registry-backed concrete value.
	fn to_object(&self) -> ObjectValue<'static>;

	/// Lift a decoded concrete value into the typed model.
	fn from_object(object: ObjectValue<'static>) -> Result<Self>;
}

/// Encode a typed value, concrete or interface-typed, as a JSON object node.
pub fn encode<T: TlType>(value: &T) -> JsonValue {
	encode_object(&value.to_object())
}

/// Encode a typed value as compact JSON text.
pub fn encode_to_string<T: TlType>(value: &T) -> String {
	encode(value).to_string()
}

/// Decode a JSON node into `T` with default options.
pub fn decode<T: TlType>(node: &JsonValue) -> Result<T> {
	decode_with(node, &CodecOptions::default())
}

/// Decode a JSON node into `T`.
pub fn decode_with<T: TlType>(node: &JsonValue, opt: &CodecOptions) -> Result<T> {
	let object = decode_object(Registry::global(), node, T::TARGET, opt)?;
	T::from_object(object)
}

/// Parse JSON text and decode it into `T` with default options.
pub fn decode_str<T: TlType>(text: &str) -> Result<T> {
	let node: JsonValue = serde_json::from_str(text)?;
	decode(&node)
}

/// Conversion between a typed field and a runtime [`Value`].
pub trait FieldType: Sized {
	/// Lower into a runtime value.
	fn to_value(&self) -> Value<'static>;

	/// Lift from a runtime value, `None` on shape mismatch.
	fn from_value(value: Value<'static>) -> Option<Self>;
}

impl FieldType for i32 {
	fn to_value(&self) -> Value<'static> {
		Value::Int(i64::from(*self))
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		match value {
			Value::Int(value) => i32::try_from(value).ok(),
			_ => None,
		}
	}
}

impl FieldType for i64 {
	fn to_value(&self) -> Value<'static> {
		Value::Int(*self)
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		match value {
			Value::Int(value) => Some(value),
			_ => None,
		}
	}
}

impl FieldType for f64 {
	fn to_value(&self) -> Value<'static> {
		Value::Double(*self)
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		match value {
			Value::Double(value) => Some(value),
			_ => None,
		}
	}
}

impl FieldType for bool {
	fn to_value(&self) -> Value<'static> {
		Value::Bool(*self)
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		match value {
			Value::Bool(value) => Some(value),
			_ => None,
		}
	}
}

impl FieldType for String {
	fn to_value(&self) -> Value<'static> {
		Value::String(self.clone())
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		match value {
			Value::String(value) => Some(value),
			_ => None,
		}
	}
}

impl FieldType for Vec<u8> {
	fn to_value(&self) -> Value<'static> {
		Value::Bytes(self.clone())
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		match value {
			Value::Bytes(value) => Some(value),
			_ => None,
		}
	}
}

impl FieldType for SecureString {
	fn to_value(&self) -> Value<'static> {
		Value::String(self.expose().to_owned())
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		String::from_value(value).map(SecureString::new)
	}
}

impl FieldType for SecureBytes {
	fn to_value(&self) -> Value<'static> {
		Value::Bytes(self.expose().to_vec())
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		Vec::<u8>::from_value(value).map(SecureBytes::new)
	}
}

impl<T: FieldType> FieldType for Vec<T> {
	fn to_value(&self) -> Value<'static> {
		Value::Vector(self.iter().map(FieldType::to_value).collect())
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		match value {
			Value::Vector(items) => items.into_iter().map(T::from_value).collect(),
			_ => None,
		}
	}
}

impl<T: TlType> FieldType for Option<T> {
	fn to_value(&self) -> Value<'static> {
		Value::Object(self.as_ref().map(|item| Box::new(item.to_object())))
	}

	fn from_value(value: Value<'static>) -> Option<Self> {
		match value {
			Value::Object(None) => Some(None),
			Value::Object(Some(item)) => T::from_object(*item).ok().map(Some),
			_ => None,
		}
	}
}

/// Lift a non-null nested object.
pub(crate) fn object_from_value<T: TlType>(value: Value<'static>) -> Option<T> {
	match value {
		Value::Object(Some(item)) => T::from_object(*item).ok(),
		_ => None,
	}
}

/// Descriptor for a constructor the typed model declares.
///
/// # Panics
///
/// Panics if the embedded schema lacks `name`; the model and schema are checked against each
/// other by the crate tests.
pub(crate) fn schema_constructor(name: &str) -> &'static Constructor {
	Registry::global()
		.constructor(name)
		.unwrap_or_else(|| panic!("constructor {name} missing from tonlib_api schema"))
}

/// Sequential reader over a decoded object's fields, used by typed `from_object` impls.
pub(crate) struct FieldReader {
	constructor: &'static Constructor,
	values: std::vec::IntoIter<Value<'static>>,
	next: usize,
}

impl FieldReader {
	/// Start reading `object`, which must hold the `expected` constructor.
	pub(crate) fn new(object: ObjectValue<'static>, expected: &str) -> Result<Self> {
		let constructor = object.constructor();
		if &*constructor.name != expected {
			return Err(TlError::decode(DecodeErrorKind::UnexpectedVariant {
				expected: expected.to_owned(),
				found: constructor.name.to_string(),
			}));
		}
		Ok(Self {
			constructor,
			values: object.into_fields().into_iter(),
			next: 0,
		})
	}

	/// Read the next field, which must be declared as `name`.
	pub(crate) fn read<T: FieldType>(&mut self, name: &str) -> Result<T> {
		let spec = self.constructor.fields.get(self.next);
		self.next += 1;
		let value = self.values.next();

		match (spec, value) {
			(Some(spec), Some(value)) if &*spec.name == name => T::from_value(value).ok_or_else(|| self.mismatch(name)),
			_ => Err(self.mismatch(name)),
		}
	}

	fn mismatch(&self, field: &str) -> TlError {
		TlError::decode(DecodeErrorKind::SchemaMismatch {
			type_name: self.constructor.name.to_string(),
			field: field.to_owned(),
		})
		.at_field(field)
	}
}
