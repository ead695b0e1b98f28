// src/lib.rs
//! credential-rekey — migrate encrypted credential files between keys
//!
//! Features:
//! - OpenSSL-compatible "Salted__" frames (EVP_BytesToKey/MD5 + AES-256-CBC)
//! - Idempotent batch re-key of a directory of credential JSON files
//! - Per-file skip/warn bookkeeping; a bad file never aborts the batch

pub mod config;
pub mod consts;
pub mod credentials;
pub mod crypto;
pub mod error;
pub mod migrate;
pub mod password;

// Re-export everything users need at the crate root
pub use config::Config;
pub use credentials::CredentialRecord;
pub use crypto::{decrypt_string, derive_key_iv, encrypt_string, KeyIv};
pub use error::CoreError;
pub use migrate::{rekey_directory, rekey_file, FileOutcome, MigrationSummary};
pub use password::Password;
