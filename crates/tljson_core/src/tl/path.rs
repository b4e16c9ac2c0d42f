use std::fmt;

use serde_json::Value as JsonValue;

use crate::tl::decl::is_field_ident;
use crate::tl::{Result, TlError};

/// One step in a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a named object field.
	Field(String),
	/// Select a vector element by zero-based index.
	Index(usize),
}

/// Location inside a decoded object tree, outermost step first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Empty path naming the top-level node.
	pub fn root() -> Self {
		Self::default()
	}

	/// Whether the path names the top-level node.
	pub fn is_root(&self) -> bool {
		self.steps.is_empty()
	}

	/// Parse dotted field syntax with optional `[index]` selectors, e.g. `transactions[1].in_msg`.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || TlError::InvalidFieldPath { path: input.to_owned() };
		let mut steps = Vec::new();

		for segment in input.split('.') {
			let (name, mut selectors) = segment.split_at(segment.find('[').unwrap_or(segment.len()));
			if !is_field_ident(name) {
				return Err(invalid());
			}
			steps.push(PathStep::Field(name.to_owned()));

			while let Some(tail) = selectors.strip_prefix('[') {
				let (digits, rest) = tail.split_once(']').ok_or_else(invalid)?;
				if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
					return Err(invalid());
				}
				steps.push(PathStep::Index(digits.parse().map_err(|_| invalid())?));
				selectors = rest;
			}
			if !selectors.is_empty() {
				return Err(invalid());
			}
		}

		Ok(Self { steps })
	}

	/// Follow the path through a JSON tree.
	pub fn select<'a>(&self, root: &'a JsonValue) -> Option<&'a JsonValue> {
		self.steps.iter().try_fold(root, |node, step| match step {
			PathStep::Field(name) => node.as_object()?.get(name),
			PathStep::Index(index) => node.as_array()?.get(*index),
		})
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_root() {
			return f.write_str("<root>");
		}
		for (idx, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Field(name) if idx == 0 => f.write_str(name)?,
				PathStep::Field(name) => write!(f, ".{name}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
