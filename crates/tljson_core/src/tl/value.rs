use crate::tl::{Constructor, FUNCTION_INTERFACE, FieldKind, OBJECT_INTERFACE};

/// Runtime field value held by an [`ObjectValue`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'r> {
	/// Integer of any declared width.
	Int(i64),
	/// Double-precision float.
	Double(f64),
	/// Boolean scalar.
	Bool(bool),
	/// UTF-8 text.
	String(String),
	/// Opaque byte payload.
	Bytes(Vec<u8>),
	/// Nested object, `None` when absent or null.
	Object(Option<Box<ObjectValue<'r>>>),
	/// Ordered sequence.
	Vector(Vec<Value<'r>>),
}

impl<'r> Value<'r> {
	/// Whether this value can be stored in a field of `kind`.
	///
	/// Only the shape is checked for `int53` and `double`. The `int53` range is enforced when
	/// decoding, so an out-of-range value encodes as a plain number and fails to decode back.
	pub fn conforms_to(&self, kind: &FieldKind, optional: bool) -> bool {
		match (self, kind) {
			(Self::Int(value), FieldKind::Int32) => i32::try_from(*value).is_ok(),
			(Self::Int(_), FieldKind::Int53 | FieldKind::Int64) => true,
			(Self::Double(_), FieldKind::Double) => true,
			(Self::Bool(_), FieldKind::Bool) => true,
			(Self::String(_), FieldKind::String) => true,
			(Self::Bytes(_), FieldKind::Bytes) => true,
			(Self::Object(None), kind) => optional && kind.is_object(),
			(Self::Object(Some(item)), FieldKind::Bare(name)) => item.constructor.name == *name,
			(Self::Object(Some(item)), FieldKind::Boxed(interface)) => {
				let ctor = item.constructor;
				if ctor.is_function {
					&**interface == FUNCTION_INTERFACE
				} else {
					&**interface == OBJECT_INTERFACE || ctor.result == *interface
				}
			}
			(Self::Vector(items), FieldKind::Vector(inner)) => items.iter().all(|item| item.conforms_to(inner, false)),
			_ => false,
		}
	}

	/// Nested object, if this value holds one.
	pub fn as_object(&self) -> Option<&ObjectValue<'r>> {
		match self {
			Self::Object(Some(item)) => Some(item),
			_ => None,
		}
	}
}

/// Concrete value: a variant descriptor plus field values in descriptor order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue<'r> {
	constructor: &'r Constructor,
	fields: Vec<Value<'r>>,
}

impl<'r> ObjectValue<'r> {
	/// Pair a descriptor with its field values.
	///
	/// # Panics
	///
	/// Panics if `fields` does not match the descriptor's arity and kinds; a mismatched value is a
	/// programming error, not a wire error.
	pub fn new(constructor: &'r Constructor, fields: Vec<Value<'r>>) -> Self {
		assert_eq!(
			fields.len(),
			constructor.fields.len(),
			"{} declares {} fields, got {}",
			constructor.name,
			constructor.fields.len(),
			fields.len()
		);
		for (spec, value) in constructor.fields.iter().zip(&fields) {
			assert!(
				value.conforms_to(&spec.kind, spec.optional),
				"{}.{} cannot hold {value:?} (expected {})",
				constructor.name,
				spec.name,
				spec.kind
			);
		}
		Self { constructor, fields }
	}

	/// Variant descriptor.
	pub fn constructor(&self) -> &'r Constructor {
		self.constructor
	}

	/// Discriminator of the held variant.
	pub fn discriminator(&self) -> &'r str {
		&self.constructor.name
	}

	/// Field values in descriptor order.
	pub fn fields(&self) -> &[Value<'r>] {
		&self.fields
	}

	/// Field value by schema name.
	pub fn get(&self, name: &str) -> Option<&Value<'r>> {
		let idx = self.constructor.fields.iter().position(|item| &*item.name == name)?;
		self.fields.get(idx)
	}

	/// Consume into field values in descriptor order.
	pub fn into_fields(self) -> Vec<Value<'r>> {
		self.fields
	}
}
