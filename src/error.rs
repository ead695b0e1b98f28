// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Payload is structurally not an OpenSSL salted frame — bad base64
    /// or missing magic marker. Raised before any key derivation runs.
    #[error("payload is not in the OpenSSL salted format")]
    Format,

    /// Padding or UTF-8 validation failed after decryption. The format
    /// carries no authentication tag, so this is the only "wrong key"
    /// signal available.
    #[error("unable to decrypt payload with the supplied key")]
    Decryption,

    /// A required secret was absent from the environment.
    #[error("{0} must be set")]
    MissingKey(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("credential JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
