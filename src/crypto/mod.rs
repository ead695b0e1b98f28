// src/crypto/mod.rs
//! OpenSSL-compatible crypto primitives
//!
//! Two layers: `derive` reproduces EVP_BytesToKey (MD5), `frame` wraps
//! AES-256-CBC in the "Salted__" wire format. Both are pure — no
//! environment access, no shared state.

pub mod derive;
pub mod frame;

pub use derive::{derive_key_iv, KeyIv};
pub use frame::{decrypt_string, encrypt_string};
