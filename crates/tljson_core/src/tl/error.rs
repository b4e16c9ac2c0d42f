use thiserror::Error;

use crate::tl::{FieldPath, PathStep};

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, TlError>;

/// Errors produced while loading the schema and decoding wire JSON.
#[derive(Debug, Error)]
pub enum TlError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input text was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// TL schema text could not be loaded into a registry.
	#[error("schema line {line}: {message}")]
	Schema {
		/// One-based line number in the schema source.
		line: usize,
		/// What was wrong with the line.
		message: String,
	},
	/// Wire JSON did not match the schema.
	#[error("decode failed at {path}: {kind}")]
	Decode {
		/// Location of the failing node, outermost step first.
		path: FieldPath,
		/// Failure classification.
		kind: DecodeErrorKind,
	},
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path string.
		path: String,
	},
	/// Path expression did not select a node.
	#[error("field path not found: {path}")]
	FieldPathNotFound {
		/// Original user-provided path string.
		path: String,
	},
	/// Name is neither a constructor nor an interface in the registry.
	#[error("unknown type name: {name}")]
	UnknownType {
		/// Requested name.
		name: String,
	},
}

/// Classification of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
	/// A node that must be an object had another JSON shape.
	#[error("expected object, got {got}")]
	NotAnObject {
		/// JSON shape found instead.
		got: &'static str,
	},
	/// The `@type` key was absent and could not be defaulted.
	#[error("missing \"@type\" discriminator")]
	MissingDiscriminator,
	/// The discriminator does not name a variant of the expected interface.
	#[error("unknown variant {discriminator:?} for {interface}")]
	UnknownVariant {
		/// Interface the node was decoded against.
		interface: String,
		/// Discriminator found on the wire.
		discriminator: String,
	},
	/// A bare-typed field carried a sibling variant's discriminator.
	#[error("expected variant {expected}, got {found}")]
	UnexpectedVariant {
		/// Constructor required by the field type.
		expected: String,
		/// Constructor named on the wire.
		found: String,
	},
	/// A required field was absent.
	#[error("missing field {field}")]
	MissingField {
		/// Schema field name.
		field: String,
	},
	/// Strict decoding found a key the variant does not declare.
	#[error("unknown field {field}")]
	UnknownField {
		/// Key found on the wire.
		field: String,
	},
	/// A field node had the wrong JSON shape for its kind.
	#[error("field {field}: expected {expected}, got {got}")]
	FieldTypeMismatch {
		/// Schema field name.
		field: String,
		/// Schema kind of the field.
		expected: String,
		/// JSON shape found instead.
		got: &'static str,
	},
	/// Integer text or number was malformed or out of range.
	#[error("field {field}: invalid integer {text:?}")]
	NumericParse {
		/// Schema field name.
		field: String,
		/// Offending wire text.
		text: String,
	},
	/// Byte field was not valid standard base64.
	#[error("field {field}: invalid base64")]
	Base64Decode {
		/// Schema field name.
		field: String,
	},
	/// Object nesting exceeded the configured ceiling.
	#[error("object depth exceeded (max={max_depth})")]
	DepthLimitExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// A vector was longer than the configured ceiling.
	#[error("field {field}: vector too long: len={len}, max={max}")]
	VectorTooLong {
		/// Schema field name.
		field: String,
		/// Wire array length.
		len: usize,
		/// Maximum permitted length.
		max: usize,
	},
	/// Typed model and registry disagree about a constructor's layout.
	#[error("typed model does not match schema for {type_name}.{field}")]
	SchemaMismatch {
		/// Constructor name.
		type_name: String,
		/// Field that failed to convert.
		field: String,
	},
}

impl TlError {
	/// Build a decode error located at the current node.
	pub fn decode(kind: DecodeErrorKind) -> Self {
		Self::Decode {
			path: FieldPath::root(),
			kind,
		}
	}

	/// Decode failure kind, if this is a decode error.
	pub fn decode_kind(&self) -> Option<&DecodeErrorKind> {
		match self {
			Self::Decode { kind, .. } => Some(kind),
			_ => None,
		}
	}

	/// Decode failure location, if this is a decode error.
	pub fn decode_path(&self) -> Option<&FieldPath> {
		match self {
			Self::Decode { path, .. } => Some(path),
			_ => None,
		}
	}

	/// Prefix the error location with a field step.
	pub(crate) fn at_field(self, name: &str) -> Self {
		self.at(PathStep::Field(name.to_owned()))
	}

	/// Prefix the error location with a vector index step.
	pub(crate) fn at_index(self, index: usize) -> Self {
		self.at(PathStep::Index(index))
	}

	fn at(self, step: PathStep) -> Self {
		match self {
			Self::Decode { mut path, kind } => {
				path.steps.insert(0, step);
				Self::Decode { path, kind }
			}
			other => other,
		}
	}
}
