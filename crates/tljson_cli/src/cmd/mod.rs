/// Canonical decode command.
pub mod decode;
/// Request envelope inspection command.
pub mod request;
/// Schema registry inspection command.
pub mod schema;
mod util;

#[cfg(test)]
mod test_support;
