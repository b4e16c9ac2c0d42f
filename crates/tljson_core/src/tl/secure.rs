use std::fmt;

/// Secret text (mnemonic words, PEM keys). `Debug` output is redacted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
	/// Wrap secret text.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Borrow the secret text.
	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for SecureString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecureString(<{} bytes redacted>)", self.0.len())
	}
}

/// Secret bytes (private keys, local passwords). `Debug` output is redacted.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
	/// Wrap secret bytes.
	pub fn new(value: impl Into<Vec<u8>>) -> Self {
		Self(value.into())
	}

	/// Borrow the secret bytes.
	pub fn expose(&self) -> &[u8] {
		&self.0
	}
}

impl fmt::Debug for SecureBytes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SecureBytes(<{} bytes redacted>)", self.0.len())
	}
}

#[cfg(test)]
mod tests {
	use super::{SecureBytes, SecureString};

	#[test]
	fn debug_output_hides_secrets() {
		let words = SecureString::new("abandon ability able");
		let key = SecureBytes::new(vec![1_u8, 2, 3]);

		assert!(!format!("{words:?}").contains("abandon"));
		assert_eq!(format!("{key:?}"), "SecureBytes(<3 bytes redacted>)");
		assert_eq!(words.expose(), "abandon ability able");
	}
}
