use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::tl::decl::{is_field_ident, is_type_ident, parse_field_type};
use crate::tl::{Result, Target, TlError};

/// Umbrella interface grouping every non-function constructor.
pub const OBJECT_INTERFACE: &str = "Object";
/// Umbrella interface grouping every function constructor.
pub const FUNCTION_INTERFACE: &str = "Function";

const TONLIB_API_TL: &str = include_str!("tonlib_api.tl");

static TONLIB_API: OnceLock<Registry> = OnceLock::new();

/// Built-in TL declarations that describe wire primitives, not constructors.
const BUILTINS: &[&str] = &[
	"double",
	"string",
	"int32",
	"int53",
	"int64",
	"bytes",
	"secureString",
	"secureBytes",
	"boolFalse",
	"boolTrue",
	"vector",
];

/// Wire kind of one constructor field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
	/// 32-bit signed integer, JSON number.
	Int32,
	/// 53-bit signed integer, JSON number.
	Int53,
	/// 64-bit signed integer, decimal JSON string.
	Int64,
	/// IEEE double, JSON number.
	Double,
	/// JSON boolean.
	Bool,
	/// UTF-8 text.
	String,
	/// Byte blob, standard base64 JSON string.
	Bytes,
	/// Nested object of one fixed constructor.
	Bare(Box<str>),
	/// Nested object of any variant of an interface.
	Boxed(Box<str>),
	/// Ordered sequence of one element kind.
	Vector(Box<FieldKind>),
}

impl FieldKind {
	/// Whether values of this kind are nested objects.
	pub fn is_object(&self) -> bool {
		matches!(self, Self::Bare(_) | Self::Boxed(_))
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int32 => f.write_str("int32"),
			Self::Int53 => f.write_str("int53"),
			Self::Int64 => f.write_str("int64"),
			Self::Double => f.write_str("double"),
			Self::Bool => f.write_str("Bool"),
			Self::String => f.write_str("string"),
			Self::Bytes => f.write_str("bytes"),
			Self::Bare(name) | Self::Boxed(name) => f.write_str(name),
			Self::Vector(inner) => write!(f, "vector<{inner}>"),
		}
	}
}

/// One declared constructor field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
	/// Schema field name, also the JSON key.
	pub name: Box<str>,
	/// Wire kind.
	pub kind: FieldKind,
	/// Whether the field may be missing or null.
	pub optional: bool,
}

/// Variant descriptor: one constructor and its ordered fields.
#[derive(Debug, PartialEq, Eq)]
pub struct Constructor {
	/// Constructor name, used as the `@type` discriminator.
	pub name: Box<str>,
	/// Interface (result type) the constructor belongs to.
	pub result: Box<str>,
	/// Whether the constructor was declared in the functions section.
	pub is_function: bool,
	/// Field declarations in source order.
	pub fields: Vec<FieldSpec>,
}

impl Constructor {
	/// Discriminator written to `@type`.
	pub fn discriminator(&self) -> &str {
		&self.name
	}

	/// Look up a field declaration by name.
	pub fn field(&self, name: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|item| &*item.name == name)
	}

	/// Interface a decoded value of this constructor is exposed as.
	pub fn umbrella(&self) -> &'static str {
		if self.is_function { FUNCTION_INTERFACE } else { OBJECT_INTERFACE }
	}
}

/// Immutable map from interfaces and discriminators to variant descriptors.
#[derive(Debug)]
pub struct Registry {
	constructors: Vec<Constructor>,
	by_name: HashMap<Box<str>, u32>,
	interfaces: HashMap<Box<str>, Vec<u32>>,
}

impl Registry {
	/// Process-wide registry loaded from the embedded tonlib_api schema.
	///
	/// # Panics
	///
	/// Panics if the embedded schema does not parse, which the crate tests rule out.
	pub fn global() -> &'static Registry {
		TONLIB_API.get_or_init(|| Registry::parse(TONLIB_API_TL).unwrap_or_else(|err| panic!("embedded tonlib_api schema is invalid: {err}")))
	}

	/// Parse TL schema text into an immutable registry.
	pub fn parse(source: &str) -> Result<Self> {
		let mut constructors = Vec::new();
		let mut lines = Vec::new();
		let mut by_name = HashMap::new();
		let mut in_functions = false;

		for (idx, raw) in source.lines().enumerate() {
			let line = idx + 1;
			let text = raw.split_once("//").map_or(raw, |(head, _)| head).trim();
			if text.is_empty() {
				continue;
			}
			match text {
				"---functions---" => {
					in_functions = true;
					continue;
				}
				"---types---" => {
					in_functions = false;
					continue;
				}
				_ => {}
			}

			let body = text.strip_suffix(';').ok_or_else(|| schema_error(line, "missing ';'"))?;
			let (lhs, result) = body.split_once('=').ok_or_else(|| schema_error(line, "missing '='"))?;
			let mut tokens = lhs.split_whitespace();
			let head = tokens.next().ok_or_else(|| schema_error(line, "missing constructor name"))?;
			let name = head.split_once('#').map_or(head, |(name, _)| name);
			if BUILTINS.contains(&name) {
				continue;
			}

			let result = result.trim();
			if !is_type_ident(name) {
				return Err(schema_error(line, format!("invalid constructor name {name:?}")));
			}
			if !is_type_ident(result) {
				return Err(schema_error(line, format!("invalid result type {result:?}")));
			}
			if result == OBJECT_INTERFACE || result == FUNCTION_INTERFACE {
				return Err(schema_error(line, format!("result type {result} is reserved")));
			}

			let mut fields: Vec<FieldSpec> = Vec::new();
			for token in tokens {
				let (field_name, field_type) = token
					.split_once(':')
					.ok_or_else(|| schema_error(line, format!("malformed field {token:?}")))?;
				if !is_field_ident(field_name) {
					return Err(schema_error(line, format!("invalid field name {field_name:?}")));
				}
				if fields.iter().any(|item| &*item.name == field_name) {
					return Err(schema_error(line, format!("duplicate field {field_name}")));
				}
				let kind = parse_field_type(field_type).ok_or_else(|| schema_error(line, format!("unknown field type {field_type:?}")))?;
				fields.push(FieldSpec {
					name: field_name.into(),
					optional: kind.is_object(),
					kind,
				});
			}

			let index = constructors.len() as u32;
			if by_name.insert(Box::<str>::from(name), index).is_some() {
				return Err(schema_error(line, format!("duplicate constructor {name}")));
			}
			constructors.push(Constructor {
				name: name.into(),
				result: result.into(),
				is_function: in_functions,
				fields,
			});
			lines.push(line);
		}

		let mut interfaces: HashMap<Box<str>, Vec<u32>> = HashMap::new();
		for (idx, item) in constructors.iter().enumerate() {
			let umbrella = interfaces.entry(item.umbrella().into()).or_default();
			umbrella.push(idx as u32);
			if !item.is_function {
				interfaces.entry(item.result.clone()).or_default().push(idx as u32);
			}
		}

		let registry = Self {
			constructors,
			by_name,
			interfaces,
		};
		registry.validate(&lines)?;

		tracing::debug!(
			constructors = registry.constructors.len(),
			interfaces = registry.interfaces.len(),
			"loaded tl schema"
		);
		Ok(registry)
	}

	/// All constructors in declaration order.
	pub fn constructors(&self) -> &[Constructor] {
		&self.constructors
	}

	/// Look up a constructor by discriminator regardless of interface.
	pub fn constructor(&self, discriminator: &str) -> Option<&Constructor> {
		self.by_name.get(discriminator).map(|idx| &self.constructors[*idx as usize])
	}

	/// Look up the variant named `discriminator` within `interface`.
	pub fn lookup(&self, interface: &str, discriminator: &str) -> Option<&Constructor> {
		let item = self.constructor(discriminator)?;
		let belongs = if item.is_function {
			interface == FUNCTION_INTERFACE
		} else {
			interface == OBJECT_INTERFACE || *item.result == *interface
		};
		belongs.then_some(item)
	}

	/// Whether `interface` names a known interface or umbrella.
	pub fn has_interface(&self, interface: &str) -> bool {
		self.interfaces.contains_key(interface)
	}

	/// Whether `target` names something a node can be decoded as.
	pub fn contains(&self, target: Target<'_>) -> bool {
		match target {
			Target::Bare(name) => self.constructor(name).is_some(),
			Target::Boxed(name) => self.has_interface(name),
		}
	}

	/// Variants of `interface` in declaration order.
	pub fn variants(&self, interface: &str) -> Vec<&Constructor> {
		self.interfaces
			.get(interface)
			.map(|items| items.iter().map(|idx| &self.constructors[*idx as usize]).collect())
			.unwrap_or_default()
	}

	/// The single variant of a one-constructor interface.
	pub fn sole_variant(&self, interface: &str) -> Option<&Constructor> {
		match self.interfaces.get(interface).map(Vec::as_slice) {
			Some([only]) => Some(&self.constructors[*only as usize]),
			_ => None,
		}
	}

	/// Discriminator of the `ordinal`-th variant of `interface`.
	pub fn discriminator_of(&self, interface: &str, ordinal: usize) -> Option<&str> {
		let idx = self.interfaces.get(interface)?.get(ordinal)?;
		Some(&self.constructors[*idx as usize].name)
	}

	/// Declared result type of a function constructor.
	pub fn result_type_of(&self, function: &str) -> Option<&str> {
		self.constructor(function).filter(|item| item.is_function).map(|item| &*item.result)
	}

	/// Interface names, sorted.
	pub fn interface_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.interfaces.keys().map(|item| &**item).collect();
		names.sort_unstable();
		names
	}

	fn validate(&self, lines: &[usize]) -> Result<()> {
		for (item, line) in self.constructors.iter().zip(lines) {
			for field in &item.fields {
				self.validate_kind(&field.kind, *line)?;
			}
			if item.is_function && !self.has_interface(&item.result) {
				return Err(schema_error(*line, format!("function {} returns unknown type {}", item.name, item.result)));
			}
		}
		Ok(())
	}

	fn validate_kind(&self, kind: &FieldKind, line: usize) -> Result<()> {
		match kind {
			FieldKind::Vector(inner) => self.validate_kind(inner, line),
			FieldKind::Bare(name) => match self.constructor(name) {
				Some(target) if !target.is_function => Ok(()),
				Some(_) => Err(schema_error(line, format!("field type {name} is a function"))),
				None => Err(schema_error(line, format!("unknown constructor {name}"))),
			},
			FieldKind::Boxed(name) if !self.has_interface(name) => Err(schema_error(line, format!("unknown type {name}"))),
			_ => Ok(()),
		}
	}
}

fn schema_error(line: usize, message: impl Into<String>) -> TlError {
	TlError::Schema {
		line,
		message: message.into(),
	}
}
