//! Redacting wrapper for secret strings
//!
//! Client secrets pass through configuration loading and credential
//! structs that all derive Debug; wrapping them keeps the plaintext out
//! of logs and error chains. The inner buffer is zeroized on drop.

use std::fmt;
use zeroize::Zeroize;

/// A secret string value. Redacted in `Debug` and `Display`, zeroized
/// when dropped. Call [`SecretString::expose`] at the single point the
/// plaintext is actually needed (the form body of the token request).
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The plaintext. Keep the borrow short-lived.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let secret = SecretString::new("hunter2");
        let debug = format!("{:?}", secret);
        assert_eq!(debug, "[REDACTED]");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn display_is_redacted() {
        let secret = SecretString::new("hunter2");
        assert_eq!(secret.to_string(), "[REDACTED]");
    }

    #[test]
    fn expose_returns_plaintext() {
        let secret = SecretString::new("hunter2");
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn clone_preserves_value() {
        let secret = SecretString::new("original");
        let copy = secret.clone();
        drop(secret);
        assert_eq!(copy.expose(), "original");
    }
}
