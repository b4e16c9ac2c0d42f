/// Declare constructor structs with their [`TlType`](crate::tl::TlType) glue.
macro_rules! tl_object {
	($(
		$(#[$meta:meta])*
		$name:ident = $tl:literal {
			$($field:ident : $ty:ty),* $(,)?
		}
	)*) => {$(
		$(#[$meta])*
		#[doc = concat!("\n\nWire constructor `", $tl, "`.")]
		#[derive(Debug, Clone, Default, PartialEq)]
		pub struct $name {
			$(
				#[doc = concat!("Wire field `", stringify!($field), "`.")]
				pub $field: $ty,
			)*
		}

		impl $name {
			/// Discriminator written to `@type`.
			pub const TYPE: &'static str = $tl;
		}

		impl $crate::tl::TlType for $name {
			const TARGET: $crate::tl::Target<'static> = $crate::tl::Target::Bare($tl);

			fn to_object(&self) -> $crate::tl::ObjectValue<'static> {
				$crate::tl::ObjectValue::new(
					$crate::tl::schema_constructor($tl),
					vec![$($crate::tl::FieldType::to_value(&self.$field)),*],
				)
			}

			#[allow(unused_mut, unused_variables)]
			fn from_object(object: $crate::tl::ObjectValue<'static>) -> $crate::tl::Result<Self> {
				let mut reader = $crate::tl::FieldReader::new(object, $tl)?;
				Ok(Self {
					$($field: reader.read(stringify!($field))?,)*
				})
			}
		}

		impl $crate::tl::FieldType for $name {
			fn to_value(&self) -> $crate::tl::Value<'static> {
				$crate::tl::Value::Object(Some(Box::new($crate::tl::TlType::to_object(self))))
			}

			fn from_value(value: $crate::tl::Value<'static>) -> Option<Self> {
				$crate::tl::object_from_value(value)
			}
		}
	)*};
}

/// Declare a closed interface enum; encode and decode are exhaustive matches over its variants.
macro_rules! tl_enum {
	(
		$(#[$meta:meta])*
		$name:ident = $interface:expr => {
			$($variant:ident($ty:ty)),* $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, PartialEq)]
		pub enum $name {
			$(
				#[doc = concat!("Holds a [`", stringify!($ty), "`].")]
				$variant($ty),
			)*
		}

		impl $name {
			/// Discriminator of the held variant.
			pub fn discriminator(&self) -> &'static str {
				match self {
					$(Self::$variant(_) => <$ty>::TYPE,)*
				}
			}
		}

		impl $crate::tl::TlType for $name {
			const TARGET: $crate::tl::Target<'static> = $crate::tl::Target::Boxed($interface);

			fn to_object(&self) -> $crate::tl::ObjectValue<'static> {
				match self {
					$(Self::$variant(item) => $crate::tl::TlType::to_object(item),)*
				}
			}

			fn from_object(object: $crate::tl::ObjectValue<'static>) -> $crate::tl::Result<Self> {
				let found = object.discriminator();
				$(
					if found == <$ty>::TYPE {
						return <$ty as $crate::tl::TlType>::from_object(object).map(Self::$variant);
					}
				)*
				Err($crate::tl::TlError::decode($crate::tl::DecodeErrorKind::UnknownVariant {
					interface: ($interface).to_owned(),
					discriminator: found.to_owned(),
				}))
			}
		}

		$(
			impl From<$ty> for $name {
				fn from(item: $ty) -> Self {
					Self::$variant(item)
				}
			}
		)*

		impl $crate::tl::FieldType for $name {
			fn to_value(&self) -> $crate::tl::Value<'static> {
				$crate::tl::Value::Object(Some(Box::new($crate::tl::TlType::to_object(self))))
			}

			fn from_value(value: $crate::tl::Value<'static>) -> Option<Self> {
				$crate::tl::object_from_value(value)
			}
		}
	};
}

pub mod envelope;
mod functions;
mod objects;

/// Request/response envelope helpers.
pub use envelope::{Request, Response, decode_request, decode_response, encode_request, encode_response};
/// Function constructors and the `Function` umbrella.
pub use functions::*;
/// Object constructors, interface enums, and the `Object` umbrella.
pub use objects::*;
