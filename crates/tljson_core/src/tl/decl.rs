use crate::tl::FieldKind;

/// Parse a TL field type expression (`int64`, `vector<raw.message>`, `LogStream`, ...).
pub(crate) fn parse_field_type(raw: &str) -> Option<FieldKind> {
	let trimmed = raw.trim();

	if let Some(inner) = trimmed
		.strip_prefix("vector<")
		.or_else(|| trimmed.strip_prefix("Vector<"))
		.and_then(|rest| rest.strip_suffix('>'))
	{
		return parse_field_type(inner).map(|item| FieldKind::Vector(Box::new(item)));
	}

	let kind = match trimmed {
		"int32" | "Int32" => FieldKind::Int32,
		"int53" | "Int53" => FieldKind::Int53,
		"int64" | "Int64" => FieldKind::Int64,
		"double" | "Double" => FieldKind::Double,
		"Bool" => FieldKind::Bool,
		"string" | "String" | "secureString" | "SecureString" => FieldKind::String,
		"bytes" | "Bytes" | "secureBytes" | "SecureBytes" => FieldKind::Bytes,
		_ => {
			if !is_type_ident(trimmed) {
				return None;
			}
			let last = trimmed.rsplit('.').next().unwrap_or(trimmed);
			if last.starts_with(|c: char| c.is_ascii_uppercase()) {
				FieldKind::Boxed(trimmed.into())
			} else {
				FieldKind::Bare(trimmed.into())
			}
		}
	};

	Some(kind)
}

/// Whether `name` is a dotted TL identifier such as `raw.accountState`.
pub(crate) fn is_type_ident(name: &str) -> bool {
	!name.is_empty()
		&& name.split('.').all(|part| {
			part.starts_with(|c: char| c.is_ascii_alphabetic()) && part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
		})
}

/// Whether `name` is a field name: ASCII letters, digits and underscores.
pub(crate) fn is_field_ident(name: &str) -> bool {
	!name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
