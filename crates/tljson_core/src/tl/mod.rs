mod codec;
mod decl;
mod dispatch;
mod error;
mod field;
mod path;
mod registry;
mod resolve;
mod secure;
mod value;

/// Variant codec entry points and options.
pub use codec::{CodecOptions, decode_object, encode_object};
/// Typed dispatch trait and typed entry points.
pub use dispatch::{FieldType, TlType, decode, decode_str, decode_with, encode, encode_to_string};
pub(crate) use dispatch::{FieldReader, object_from_value, schema_constructor};
/// Error and result aliases.
pub use error::{DecodeErrorKind, Result, TlError};
/// Field codec constants.
pub use field::INT53_MAX;
/// Structured field locations.
pub use path::{FieldPath, PathStep};
/// Schema registry and variant descriptors.
pub use registry::{Constructor, FUNCTION_INTERFACE, FieldKind, FieldSpec, OBJECT_INTERFACE, Registry};
/// Discriminator extraction and resolution.
pub use resolve::{EXTRA_KEY, TYPE_KEY, Target, extract_discriminator, resolve, resolve_node};
/// Redacting wrappers for secret fields.
pub use secure::{SecureBytes, SecureString};
/// Runtime value types.
pub use value::{ObjectValue, Value};
