// src/password.rs
//! Secret key material — zeroized on drop, redacted in debug output

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// An encryption password held transiently in memory.
///
/// Never serialized, never logged; the derivation layer reads it as
/// UTF-8 bytes and nothing else.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for Password {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}
