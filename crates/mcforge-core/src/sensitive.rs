//! Redaction wrapper for credentials
//!
//! The delivery payload carries the listener password. Wrapping it in
//! `Sensitive<T>` keeps it out of Debug output and log lines; only the
//! wire encoder exposes the value, explicitly.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Wrapper that redacts its contents in Debug and Display
///
/// ```
/// use mcforge_core::Sensitive;
///
/// let password = Sensitive::new(String::from("hunter2"));
/// assert_eq!(format!("{password:?}"), "***REDACTED***");
/// assert_eq!(password.expose(), "hunter2");
/// ```
///
/// `Sensitive` deliberately does not implement `Serialize`: encoding the
/// secret onto the wire must go through an explicit `expose()` call.
#[derive(Clone, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value; use only at the point it is consumed
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Default> Default for Sensitive<T> {
    fn default() -> Self {
        Self(T::default())
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sensitive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Sensitive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_and_display_redact() {
        let secret = Sensitive::new("listener-password");
        assert_eq!(format!("{secret:?}"), "***REDACTED***");
        assert_eq!(format!("{secret}"), "***REDACTED***");
    }

    #[test]
    fn test_expose_and_into_inner() {
        let secret = Sensitive::new(String::from("pw"));
        assert_eq!(secret.expose(), "pw");
        assert_eq!(secret.into_inner(), "pw");
    }

    #[test]
    fn test_deserializes_from_plain_value() {
        let secret: Sensitive<String> = serde_json::from_str("\"pw\"").unwrap();
        assert_eq!(secret.expose(), "pw");
    }

    #[test]
    fn test_redacted_inside_struct_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Target {
            world: String,
            password: Sensitive<String>,
        }

        let target = Target {
            world: "world".to_string(),
            password: Sensitive::new("pw".to_string()),
        };
        let debug = format!("{target:?}");
        assert!(debug.contains("world"));
        assert!(!debug.contains("pw\""));
        assert!(debug.contains("***REDACTED***"));
    }
}
